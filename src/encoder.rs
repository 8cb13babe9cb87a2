//! Rotary encoder via the QDEC peripheral.
//!
//! The decoder task awaits QDEC reports and adds them to [`ENCODER_TICKS`];
//! the control loop consumes the counter through `RelativeEncoder`.

use crate::control::TickCounter;
use defmt::debug;
use embassy_nrf::peripherals::QDEC;
use embassy_nrf::qdec::Qdec;

/// Ticks decoded since the control loop last consumed or reset them.
pub static ENCODER_TICKS: TickCounter = TickCounter::new();

/// Forward every QDEC report into the shared tick counter.
#[embassy_executor::task]
pub async fn encoder_task(mut qdec: Qdec<'static, QDEC>) -> ! {
    loop {
        let delta = qdec.read().await;
        if delta != 0 {
            debug!("Encoder: {} ticks", delta);
            ENCODER_TICKS.add(i32::from(delta));
        }
    }
}
