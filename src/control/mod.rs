//! Control core of the exposure box - hardware independent.
//!
//! One non-blocking [`Controller::poll`] per loop iteration drives
//! everything:
//!
//! - **Debounce**: edge-triggered activation of the pedal and button lines
//! - **Accumulator**: encoder ticks → clamped setting adjustments
//! - **Machine**: Idle / Exposing / menu state machine
//! - **Output**: interrupt-safe write of the PWM compare register
//! - **Snapshot**: read-only view handed to the display
//!
//! All waiting is expressed as "not yet" comparisons against the
//! millisecond clock passed in by the caller, so every module here can be
//! driven from host tests with a scripted clock.

pub mod accumulator;
pub mod debounce;
pub mod encoder;
pub mod machine;
pub mod menu;
pub mod output;
pub mod snapshot;

pub use accumulator::SettingRange;
pub use debounce::{Activated, DebounceGate};
pub use encoder::{RelativeEncoder, TickCounter};
pub use machine::{Controller, DeviceMode, InputLevels, Transition};
pub use menu::MenuItem;
pub use output::{CompareRegister, DutyOutput, DutyRegister};
pub use snapshot::{RefreshTimer, Snapshot};

/// Milliseconds on the monotonic clock.
pub type Millis = u64;
