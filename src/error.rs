//! Unified error type for the uvbox firmware.
//!
//! The control core has no failure paths; only the presentation side can
//! fail. All variants carry fixed-size data and implement `defmt::Format`.

use defmt::Format;

/// Top-level error type used by the firmware binary.
#[derive(Debug, Clone, Copy, Format)]
pub enum Error {
    // UI / Display
    /// The SSD1306 did not acknowledge during initialisation.
    DisplayInit,

    /// Pushing the frame buffer over I²C failed.
    DisplayFlush,
}
