//! uvbox - UV exposure box controller for nRF52840.
//!
//! A foot pedal starts an exposure at the configured optical power and
//! stops it again (or the timer does). A push button and rotary encoder
//! edit exposure duration and power through a small menu on the OLED.
//!
//! The control loop never blocks: every millisecond it samples the inputs
//! and runs one `Controller::poll`. Every 100 ms it hands a snapshot to the
//! display task, which draws and flushes the frame on its own.

#![no_std]
#![no_main]

mod config;
mod control;
mod encoder;
mod error;
mod pwm;
mod ui;

use control::{Controller, DutyOutput, RefreshTimer};
use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin as _;
use embassy_nrf::{bind_interrupts, peripherals, qdec, twim};
use embassy_time::{Duration, Instant, Ticker};
use encoder::{encoder_task, ENCODER_TICKS};
use pwm::Dimmer;
use ui::buttons::Buttons;
use ui::display::{display_task, FRAME};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    QDEC => qdec::InterruptHandler<peripherals::QDEC>;
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("uvbox starting");

    // Dimmer first, so the source is dark before anything else runs.
    let mut dimmer = DutyOutput::new(Dimmer::new(p.PWM0, p.P0_13));

    let buttons = Buttons::new(p.P0_11.degrade(), p.P0_12.degrade());

    let qdec = qdec::Qdec::new(p.QDEC, Irqs, p.P0_28, p.P0_29, qdec::Config::default());
    spawner.must_spawn(encoder_task(qdec));

    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = twim::Frequency::K400;
    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, i2c_config);
    match ui::display::init(i2c).await {
        Ok(display) => spawner.must_spawn(display_task(display)),
        Err(e) => error!("Display: init failed ({}), running headless", e),
    }

    let now = Instant::now().as_millis();
    let mut controller = Controller::new(now);
    let mut refresh = RefreshTimer::new(now, config::DISPLAY_REFRESH_MS);
    let mut encoder = &ENCODER_TICKS;
    info!(
        "Ready: duration={} ms duty={}",
        controller.duration_ms(),
        controller.power_duty()
    );

    let mut ticker = Ticker::every(Duration::from_millis(config::CONTROL_TICK_MS));
    loop {
        let now = Instant::now().as_millis();

        if let Some(t) = controller.poll(buttons.sample(), now, &mut encoder, &mut dimmer) {
            info!("Mode: {:?} -> {:?}", t.from, t.to);
        }

        if refresh.due(now) {
            FRAME.signal(controller.snapshot(now));
        }

        ticker.next().await;
    }
}
