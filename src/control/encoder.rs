//! Relative rotary encoder access.
//!
//! The hardware decoder runs in its own task and only ever adds ticks; the
//! control loop reads, consumes or rewinds them. [`TickCounter`] is the
//! shared store between the two, guarded by a critical section.

use core::cell::Cell;
use critical_section::Mutex;

/// Encoder as seen by the control loop.
pub trait RelativeEncoder {
    /// Ticks accumulated since the last call (or reset), then zero the count.
    fn take_delta(&mut self) -> i32;

    /// Ticks accumulated since the last reset, without consuming them.
    fn position(&self) -> i32;

    /// Overwrite the accumulated count.
    fn reset_to(&mut self, value: i32);
}

/// Interrupt-safe tick accumulator.
pub struct TickCounter {
    ticks: Mutex<Cell<i32>>,
}

impl TickCounter {
    pub const fn new() -> Self {
        Self {
            ticks: Mutex::new(Cell::new(0)),
        }
    }

    /// Add decoder output. Saturates rather than wrapping on runaway input.
    pub fn add(&self, delta: i32) {
        critical_section::with(|cs| {
            let cell = self.ticks.borrow(cs);
            cell.set(cell.get().saturating_add(delta));
        });
    }

    /// Read and zero in one critical section.
    pub fn take(&self) -> i32 {
        critical_section::with(|cs| self.ticks.borrow(cs).replace(0))
    }

    pub fn get(&self) -> i32 {
        critical_section::with(|cs| self.ticks.borrow(cs).get())
    }

    pub fn set(&self, value: i32) {
        critical_section::with(|cs| self.ticks.borrow(cs).set(value));
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl RelativeEncoder for &TickCounter {
    fn take_delta(&mut self) -> i32 {
        self.take()
    }

    fn position(&self) -> i32 {
        self.get()
    }

    fn reset_to(&mut self, value: i32) {
        self.set(value);
    }
}
