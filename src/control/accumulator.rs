//! Relative encoder ticks → bounded setting values.

use crate::config::{
    DURATION_STEP_MS, DUTY_STEP, MAX_DURATION_MS, MAX_DUTY, MIN_DURATION_MS, MIN_DUTY,
};

/// Apply `delta` ticks of `step` units to `current`, saturating at `lo..=hi`.
///
/// Computed in 64 bits so no delta/step combination can wrap before the
/// clamp.
pub fn apply(delta: i32, step: u32, current: u32, lo: u32, hi: u32) -> u32 {
    let target = i64::from(current) + i64::from(delta) * i64::from(step);
    target.clamp(i64::from(lo), i64::from(hi)) as u32
}

/// Step size and clamp range of one adjustable setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingRange {
    pub step: u32,
    pub min: u32,
    pub max: u32,
}

/// Exposure duration: 250 ms per tick, 0 to 10 minutes.
pub const DURATION_RANGE: SettingRange = SettingRange {
    step: DURATION_STEP_MS,
    min: MIN_DURATION_MS,
    max: MAX_DURATION_MS,
};

/// Dimmer duty: 10 units per tick, 0 to 100 %.
pub const POWER_RANGE: SettingRange = SettingRange {
    step: DUTY_STEP as u32,
    min: MIN_DUTY as u32,
    max: MAX_DUTY as u32,
};

impl SettingRange {
    /// Adjust `current` by `delta` encoder ticks.
    pub fn apply(&self, current: u32, delta: i32) -> u32 {
        apply(delta, self.step, current, self.min, self.max)
    }

    /// Clamp an externally supplied value into range.
    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}
