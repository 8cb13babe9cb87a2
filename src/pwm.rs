//! UV dimmer output on the nRF52840 PWM0 peripheral.
//!
//! `SimplePwm` always programs the counter to count up only. The dimmer
//! switches PWM0 to up-and-down counting (centre-aligned, the nRF equivalent
//! of phase-and-frequency-correct mode), which doubles the period. With a
//! 16 MHz base clock and a counter top of `MAX_DUTY` the carrier runs at
//! `PWM_CARRIER_HZ`.

use crate::config::{MAX_DUTY, PWM_CARRIER_HZ};
use crate::control::CompareRegister;
use defmt::info;
use embassy_nrf::gpio::Pin;
use embassy_nrf::pac::pwm::vals::Updown;
use embassy_nrf::peripherals::PWM0;
use embassy_nrf::pwm::{Prescaler, SimplePwm};
use embassy_nrf::{pac, Peripheral};

/// Channel 0 of PWM0, exposed as the raw compare register.
pub struct Dimmer<'d> {
    pwm: SimplePwm<'d, PWM0>,
}

impl<'d> Dimmer<'d> {
    /// Configure the peripheral once; it free-runs from here on.
    pub fn new(
        pwm: impl Peripheral<P = PWM0> + 'd,
        pin: impl Peripheral<P = impl Pin> + 'd,
    ) -> Self {
        let mut pwm = SimplePwm::new_1ch(pwm, pin);
        pwm.set_prescaler(Prescaler::Div1);
        pwm.set_max_duty(MAX_DUTY);
        pac::PWM0.mode().write(|w| w.set_updown(Updown::UP_AND_DOWN));
        pwm.set_duty(0, 0);
        info!("PWM: top={} up-and-down carrier={} Hz", MAX_DUTY, PWM_CARRIER_HZ);
        Self { pwm }
    }
}

impl CompareRegister for Dimmer<'_> {
    fn store(&mut self, value: u16) {
        self.pwm.set_duty(0, value);
    }
}
