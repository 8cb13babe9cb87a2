//! Device state machine.
//!
//! ```text
//!            pedal                          button (Return)
//!   Exposing <────> Idle ──button──> BrowsingMenu <──────┐
//!     │ timeout      ^                 │ button   │ button│
//!     └──────────────┘                 v          v       │
//!                           EditingDuration  EditingPower ─┘ button
//! ```
//!
//! The pedal only matters in Idle (start) and Exposing (abort); the button
//! only outside Exposing. Both inputs are debounced every cycle regardless,
//! so an ignored press is consumed rather than replayed later.

use super::accumulator::{DURATION_RANGE, POWER_RANGE};
use super::debounce::DebounceGate;
use super::encoder::RelativeEncoder;
use super::menu::MenuItem;
use super::output::DutyRegister;
use super::snapshot::Snapshot;
use super::Millis;
use crate::config::{DEFAULT_DURATION_MS, DEFAULT_DUTY};

/// Top-level device modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceMode {
    /// Source off, waiting for the pedal or the button.
    Idle,
    /// Source on at the configured power until timeout or pedal.
    Exposing,
    /// Encoder scrolls through [`MenuItem`]s.
    BrowsingMenu,
    /// Encoder adjusts the exposure duration.
    EditingDuration,
    /// Encoder adjusts the dimmer duty.
    EditingPower,
}

impl DeviceMode {
    /// Modes entered through the button and left through the menu.
    pub fn is_menu(&self) -> bool {
        matches!(
            self,
            DeviceMode::BrowsingMenu | DeviceMode::EditingDuration | DeviceMode::EditingPower
        )
    }
}

/// Raw input line levels for one cycle. `true` = high = released.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputLevels {
    pub pedal: bool,
    pub button: bool,
}

impl InputLevels {
    /// Both lines pulled up, nothing pressed.
    #[cfg_attr(not(test), allow(dead_code))]
    pub const RELEASED: Self = Self {
        pedal: true,
        button: true,
    };
}

/// A mode change reported by [`Controller::poll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub from: DeviceMode,
    pub to: DeviceMode,
}

/// Start of the running exposure. Only exists while [`DeviceMode::Exposing`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ExposureTimer {
    started_at: Millis,
}

impl ExposureTimer {
    fn elapsed(&self, now: Millis) -> Millis {
        now.saturating_sub(self.started_at)
    }

    fn expired(&self, now: Millis, duration_ms: u32) -> bool {
        self.elapsed(now) >= Millis::from(duration_ms)
    }

    fn remaining(&self, now: Millis, duration_ms: u32) -> u32 {
        Millis::from(duration_ms).saturating_sub(self.elapsed(now)) as u32
    }
}

/// Process-wide device context: mode, settings and both debounce gates.
///
/// Created once at power-on and advanced by [`poll`](Self::poll) every
/// cycle. Hardware is passed in per call, so tests drive it with a scripted
/// clock, encoder and register.
pub struct Controller {
    mode: DeviceMode,
    selection: MenuItem,
    duration_ms: u32,
    duty: u16,
    timer: Option<ExposureTimer>,
    pedal: DebounceGate,
    button: DebounceGate,
}

impl Controller {
    /// Power-on defaults: Idle, 60 s, 75 % duty.
    pub fn new(now: Millis) -> Self {
        Self::with_settings(now, DEFAULT_DURATION_MS, DEFAULT_DUTY)
    }

    /// Start Idle with explicit settings, clamped into their ranges.
    pub fn with_settings(now: Millis, duration_ms: u32, duty: u16) -> Self {
        Self {
            mode: DeviceMode::Idle,
            selection: MenuItem::Return,
            duration_ms: DURATION_RANGE.clamp(duration_ms),
            duty: POWER_RANGE.clamp(u32::from(duty)) as u16,
            timer: None,
            pedal: DebounceGate::new(now),
            button: DebounceGate::new(now),
        }
    }

    /// Run one control cycle.
    ///
    /// Returns the mode change, if this cycle caused one.
    pub fn poll<E, D>(
        &mut self,
        levels: InputLevels,
        now: Millis,
        encoder: &mut E,
        output: &mut D,
    ) -> Option<Transition>
    where
        E: RelativeEncoder,
        D: DutyRegister,
    {
        let pedal = self.pedal.poll(levels.pedal, now).is_some();
        let button = self.button.poll(levels.button, now).is_some();
        let from = self.mode;

        match self.mode {
            DeviceMode::Idle => {
                if pedal {
                    self.start_exposure(now, output);
                } else if button {
                    self.open_menu(encoder);
                }
            }

            DeviceMode::Exposing => {
                // No timer means nothing left to time: fail towards "off".
                let expired = self
                    .timer
                    .map_or(true, |timer| timer.expired(now, self.duration_ms));
                if pedal || expired {
                    self.stop_exposure(output);
                }
            }

            DeviceMode::BrowsingMenu => {
                self.selection = MenuItem::from_ticks(encoder.position());
                if button {
                    match self.selection {
                        MenuItem::Duration => {
                            encoder.reset_to(0);
                            self.mode = DeviceMode::EditingDuration;
                        }
                        MenuItem::Power => {
                            encoder.reset_to(0);
                            self.mode = DeviceMode::EditingPower;
                        }
                        MenuItem::Return => self.mode = DeviceMode::Idle,
                    }
                }
            }

            DeviceMode::EditingDuration => {
                let delta = encoder.take_delta();
                self.duration_ms = DURATION_RANGE.apply(self.duration_ms, delta);
                if button {
                    self.open_menu(encoder);
                }
            }

            DeviceMode::EditingPower => {
                let delta = encoder.take_delta();
                self.duty = POWER_RANGE.apply(u32::from(self.duty), delta) as u16;
                if button {
                    self.open_menu(encoder);
                }
            }
        }

        (self.mode != from).then_some(Transition {
            from,
            to: self.mode,
        })
    }

    fn start_exposure<D: DutyRegister>(&mut self, now: Millis, output: &mut D) {
        self.timer = Some(ExposureTimer { started_at: now });
        output.set_duty(self.duty);
        self.mode = DeviceMode::Exposing;
    }

    fn stop_exposure<D: DutyRegister>(&mut self, output: &mut D) {
        output.set_duty(0);
        self.timer = None;
        self.mode = DeviceMode::Idle;
    }

    fn open_menu<E: RelativeEncoder>(&mut self, encoder: &mut E) {
        encoder.reset_to(0);
        self.selection = MenuItem::Return;
        self.mode = DeviceMode::BrowsingMenu;
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn mode(&self) -> DeviceMode {
        self.mode
    }

    /// Highlighted menu entry; `None` outside [`DeviceMode::BrowsingMenu`].
    pub fn selection(&self) -> Option<MenuItem> {
        (self.mode == DeviceMode::BrowsingMenu).then_some(self.selection)
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Configured dimmer duty. Only reaches the output when an exposure starts.
    pub fn power_duty(&self) -> u16 {
        self.duty
    }

    /// Time left in the running exposure, `None` when not exposing.
    pub fn remaining_ms(&self, now: Millis) -> Option<u32> {
        match (self.mode, self.timer) {
            (DeviceMode::Exposing, Some(timer)) => Some(timer.remaining(now, self.duration_ms)),
            _ => None,
        }
    }

    /// Read-only view for the display.
    pub fn snapshot(&self, now: Millis) -> Snapshot {
        Snapshot {
            mode: self.mode,
            selection: self.selection(),
            duration_ms: self.duration_ms,
            duty: self.duty,
            remaining_ms: self.remaining_ms(now),
        }
    }
}
