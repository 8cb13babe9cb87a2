//! Application-wide constants and compile-time configuration.
//!
//! All setting limits, encoder steps, timing parameters and pin assignments
//! live here so they can be tuned in one place.

// Exposure duration

/// Exposure duration at power-on (ms).
pub const DEFAULT_DURATION_MS: u32 = 60_000;

/// Shortest selectable exposure (ms).
pub const MIN_DURATION_MS: u32 = 0;

/// Longest selectable exposure (ms). 600 000 = 10 minutes.
pub const MAX_DURATION_MS: u32 = 600_000;

/// Duration change per encoder tick while editing (ms).
pub const DURATION_STEP_MS: u32 = 250;

// Optical power

/// PWM counter top. The duty value is a compare value in `0..=MAX_DUTY`.
pub const MAX_DUTY: u16 = 8000;

/// Lowest selectable duty value (0 %).
pub const MIN_DUTY: u16 = 0;

/// Duty value at power-on. 6000 = 75 % = 15 W.
pub const DEFAULT_DUTY: u16 = 6000;

/// Duty change per encoder tick while editing.
pub const DUTY_STEP: u16 = 10;

/// Rated optical power of the source at 100 % duty (W).
pub const MAX_POWER_WATTS: u16 = 20;

/// Duty units per watt, used for the power read-out.
pub const DUTY_PER_WATT: u16 = MAX_DUTY / MAX_POWER_WATTS;

// Timing

/// Minimum spacing between two activations of the same input (ms).
pub const DEBOUNCE_MS: u64 = 50;

/// Display refresh cadence (ms).
pub const DISPLAY_REFRESH_MS: u64 = 100;

/// Control loop period (ms). Must stay well below `DEBOUNCE_MS`.
///
/// This is also the latency budget of one cycle. Nothing on the control
/// path may block for longer: the display is drawn by its own task and
/// flushed asynchronously, so a frame transfer never delays `poll`. A cycle
/// slower than `DEBOUNCE_MS` can miss a short tap entirely.
pub const CONTROL_TICK_MS: u64 = 1;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the actual `embassy_nrf::peripherals::*` are
// bound in `main.rs`.  Adjust for your custom PCB.
//
//   Foot pedal       → P0.11  (active-low, internal pull-up)
//   Push button      → P0.12  (active-low, internal pull-up)
//   UV dimmer PWM    → P0.13
//   Encoder A / B    → P0.28 / P0.29  (QDEC)
//   I²C SDA / SCL    → P0.26 / P0.27  (SSD1306 at 0x3C)

/// PWM carrier frequency: 16 MHz base clock (`Div1`), counter in up-and-down
/// mode with top `MAX_DUTY`, so one period is `2 * MAX_DUTY` clocks.
pub const PWM_CARRIER_HZ: u32 = 16_000_000 / (2 * MAX_DUTY as u32);
