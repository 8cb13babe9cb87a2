//! Dimmer output - the PWM compare register driving the UV source.
//!
//! The timer peripheral reads the compare value on its own clock. On parts
//! where the register is wider than one bus transfer a write can be observed
//! half-done, so every write goes through a critical section.

use crate::config::MAX_DUTY;

/// Raw access to the compare register. Not required to be atomic.
pub trait CompareRegister {
    fn store(&mut self, value: u16);
}

/// Indivisible duty-cycle write, the only way the controller touches the
/// output.
pub trait DutyRegister {
    /// Set the duty value (`0..=MAX_DUTY`).
    fn set_duty(&mut self, value: u16);

    /// Last value written.
    #[cfg_attr(not(test), allow(dead_code))]
    fn duty(&self) -> u16;
}

/// [`DutyRegister`] that masks interrupts around each raw store.
pub struct DutyOutput<R> {
    register: R,
    duty: u16,
}

impl<R: CompareRegister> DutyOutput<R> {
    /// Take ownership of the register and drive it to 0 (source off).
    pub fn new(register: R) -> Self {
        let mut output = Self { register, duty: 0 };
        output.set_duty(0);
        output
    }

    /// Access the underlying register (used by tests to inspect writes).
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn register(&self) -> &R {
        &self.register
    }
}

impl<R: CompareRegister> DutyRegister for DutyOutput<R> {
    fn set_duty(&mut self, value: u16) {
        let value = value.min(MAX_DUTY);
        let register = &mut self.register;
        critical_section::with(|_| register.store(value));
        self.duty = value;
    }

    fn duty(&self) -> u16 {
        self.duty
    }
}
