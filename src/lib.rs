//! Host-testable library interface for uvbox.
//!
//! This crate exposes the control core of the UV exposure box - debouncing,
//! encoder accumulation, the device state machine and the dimmer output -
//! so it can be tested on the host (no embedded hardware required).
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and builds the same `config` and `control` modules into its own tree.
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

// ═══════════════════════════════════════════════════════════════════════════
// Control Core
// ═══════════════════════════════════════════════════════════════════════════

pub mod config;
pub mod control;

pub use control::{
    Controller, DeviceMode, DutyOutput, DutyRegister, InputLevels, MenuItem, RelativeEncoder,
    Snapshot, Transition,
};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
