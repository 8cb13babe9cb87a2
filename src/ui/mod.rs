//! User interface subsystem - OLED display + pedal/button inputs.
//!
//! The control loop samples the input lines once per cycle and hands a
//! `Snapshot` to the display at a fixed cadence; neither side holds state of
//! its own.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Inputs**: foot pedal and push button, active-low with pull-up
//! - **Encoder**: handled by `crate::encoder` (QDEC peripheral)

pub mod buttons;
pub mod display;
