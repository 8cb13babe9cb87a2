//! Edge-triggered debouncing of an active-low input line.
//!
//! A gate emits one [`Activated`] per physical press: it fires when the line
//! reads active, the gate is armed and more than [`DEBOUNCE_MS`] passed since
//! the previous fire. It then stays disarmed until the line is seen released,
//! so holding the pedal or button never auto-repeats.

use super::Millis;
use crate::config::DEBOUNCE_MS;

/// One logical press of a debounced input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Activated {
    /// Clock reading at which the press was accepted.
    #[cfg_attr(not(test), allow(dead_code))]
    pub at: Millis,
}

/// Per-input debounce state.
#[derive(Clone, Copy, Debug)]
pub struct DebounceGate {
    ready: bool,
    last_fire: Millis,
}

impl DebounceGate {
    /// Create an armed gate. `now` counts as the previous fire, so nothing
    /// is reported during the first debounce interval after power-on.
    pub const fn new(now: Millis) -> Self {
        Self {
            ready: true,
            last_fire: now,
        }
    }

    /// Advance the gate with the raw line level (`true` = high = released).
    pub fn poll(&mut self, level: bool, now: Millis) -> Option<Activated> {
        let active = !level;

        if !self.ready {
            if !active {
                self.ready = true;
            }
            return None;
        }

        if active && now.saturating_sub(self.last_fire) > DEBOUNCE_MS {
            self.ready = false;
            self.last_fire = now;
            return Some(Activated { at: now });
        }

        None
    }

    /// Whether the next active reading may fire (line was released).
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_armed(&self) -> bool {
        self.ready
    }
}
