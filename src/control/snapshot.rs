//! Read-only view of the controller for the display, plus the text
//! formatting shared by every screen.

use core::fmt::Write;

use heapless::String;

use super::machine::DeviceMode;
use super::menu::MenuItem;
use super::Millis;
use crate::config::DUTY_PER_WATT;

/// Capacity of a formatted status line.
pub const LINE_CAPACITY: usize = 24;

/// State copied out of the controller once per display refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub mode: DeviceMode,
    /// Highlighted entry, only while browsing the menu.
    pub selection: Option<MenuItem>,
    pub duration_ms: u32,
    pub duty: u16,
    /// Time left, only while exposing.
    pub remaining_ms: Option<u32>,
}

impl Snapshot {
    /// Configured power as (whole watts, tenths of a watt), truncated.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn power_watts(&self) -> (u16, u16) {
        watts(self.duty)
    }

    /// Whole seconds left in the running exposure.
    pub fn remaining_secs(&self) -> Option<u32> {
        self.remaining_ms.map(|ms| ms / 1000)
    }
}

fn watts(duty: u16) -> (u16, u16) {
    let whole = duty / DUTY_PER_WATT;
    let tenth = (duty % DUTY_PER_WATT) * 10 / DUTY_PER_WATT;
    (whole, tenth)
}

/// `"Power:    15.0 W"`
pub fn power_line(duty: u16) -> String<LINE_CAPACITY> {
    let (whole, tenth) = watts(duty);
    let mut line = String::new();
    let _ = write!(line, "Power:    {:2}.{} W", whole, tenth);
    line
}

/// `"Exposure:  60 s"`
pub fn duration_line(duration_ms: u32) -> String<LINE_CAPACITY> {
    let mut line = String::new();
    let _ = write!(line, "Exposure: {:3} s", duration_ms / 1000);
    line
}

/// Seconds left, right-aligned to three digits.
pub fn countdown_line(remaining_secs: u32) -> String<8> {
    let mut line = String::new();
    let _ = write!(line, "{:3}", remaining_secs);
    line
}

/// Fixed-cadence gate for display refreshes.
#[derive(Clone, Copy, Debug)]
pub struct RefreshTimer {
    last: Millis,
    interval: Millis,
}

impl RefreshTimer {
    pub const fn new(now: Millis, interval: Millis) -> Self {
        Self {
            last: now,
            interval,
        }
    }

    /// True once per elapsed interval; re-anchors at `now` when it fires.
    pub fn due(&mut self, now: Millis) -> bool {
        if now.saturating_sub(self.last) < self.interval {
            return false;
        }
        self.last = now;
        true
    }
}
