//! GPIO sampling of the foot pedal and the push button.
//!
//! Both switches are active-low with the internal pull-up enabled. Lines are
//! only sampled here; debouncing happens in `control::debounce` so it can be
//! tested against a scripted clock.

use crate::control::InputLevels;
use embassy_nrf::gpio::{AnyPin, Input, Pull};

/// The two momentary inputs of the box.
pub struct Buttons {
    pedal: Input<'static>,
    button: Input<'static>,
}

impl Buttons {
    pub fn new(pedal: AnyPin, button: AnyPin) -> Self {
        Self {
            pedal: Input::new(pedal, Pull::Up),
            button: Input::new(button, Pull::Up),
        }
    }

    /// Raw levels for this cycle (`true` = high = released).
    pub fn sample(&self) -> InputLevels {
        InputLevels {
            pedal: self.pedal.is_high(),
            button: self.button.is_high(),
        }
    }
}
