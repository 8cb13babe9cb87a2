/// Entries of the settings menu, in encoder order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    /// Leave the menu.
    Return,
    /// Edit the dimmer duty.
    Power,
    /// Edit the exposure duration.
    Duration,
}

impl MenuItem {
    /// Selection under the encoder after `ticks` of rotation.
    ///
    /// Floor modulo, so turning back past zero wraps to `Duration`.
    pub fn from_ticks(ticks: i32) -> Self {
        match ticks.rem_euclid(3) {
            0 => MenuItem::Return,
            1 => MenuItem::Power,
            _ => MenuItem::Duration,
        }
    }
}
