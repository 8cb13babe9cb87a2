//! SSD1306 OLED display wrapper.
//!
//! The display runs in its own task. The control loop publishes a `Snapshot`
//! through [`FRAME`] and never waits on the bus; the task redraws the screen
//! from scratch for the latest snapshot and flushes it asynchronously.

use crate::control::snapshot::{countdown_line, duration_line, power_line};
use crate::control::{DeviceMode, MenuItem, Snapshot};
use crate::error::Error;
use defmt::debug;
use embassy_nrf::peripherals::TWISPI0;
use embassy_nrf::twim::Twim;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsModeAsync;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306Async;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> = Ssd1306Async<
    I2CInterface<I2C>,
    DisplaySize128x64,
    BufferedGraphicsModeAsync<DisplaySize128x64>,
>;

/// Latest state to draw. Older, undrawn snapshots are overwritten.
pub static FRAME: Signal<CriticalSectionRawMutex, Snapshot> = Signal::new();

/// Baseline of the large title text.
const TITLE_Y: i32 = 18;
/// Baseline of the power line.
const POWER_Y: i32 = 42;
/// Baseline of the exposure duration line.
const DURATION_Y: i32 = 54;
/// Baseline of the countdown while exposing.
const COUNTDOWN_Y: i32 = 50;
/// Left edge of the setting lines; the marker column sits in front of it.
const TEXT_X: i32 = 10;

/// Initialise the SSD1306 display and clear the screen.
pub async fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306Async::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().await.map_err(|_| Error::DisplayInit)?;
    display.clear_buffer();
    display.flush().await.map_err(|_| Error::DisplayFlush)?;
    Ok(display)
}

/// Draw every snapshot published to [`FRAME`].
#[embassy_executor::task]
pub async fn display_task(mut display: Display<Twim<'static, TWISPI0>>) -> ! {
    loop {
        let snap = FRAME.wait().await;
        if let Err(e) = render(&mut display, &snap).await {
            debug!("Display: {}", e);
        }
    }
}

fn small() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

fn large() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_10X20)
        .text_color(BinaryColor::On)
        .build()
}

fn draw<I2C>(
    display: &mut Display<I2C>,
    text: &str,
    at: Point,
    style: MonoTextStyle<'static, BinaryColor>,
) where
    I2C: embedded_hal_async::i2c::I2c,
{
    let _ = Text::new(text, at, style).draw(display);
}

/// Render one frame for the given controller state and push it out.
pub async fn render<I2C>(display: &mut Display<I2C>, snap: &Snapshot) -> Result<(), Error>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    display.clear_buffer();

    if snap.mode == DeviceMode::Exposing {
        let secs = snap.remaining_secs().unwrap_or(0);
        let countdown = countdown_line(secs);
        draw(display, "UV ON", Point::new(TEXT_X + 24, TITLE_Y), large());
        draw(display, &countdown, Point::new(TEXT_X + 24, COUNTDOWN_Y), large());
        draw(display, "s", Point::new(TEXT_X + 58, COUNTDOWN_Y), small());
    } else {
        let title = if snap.mode.is_menu() { "Edit" } else { "Idle" };
        let power = power_line(snap.duty);
        let duration = duration_line(snap.duration_ms);
        draw(display, title, Point::new(TEXT_X + 24, TITLE_Y), large());
        draw(display, &power, Point::new(TEXT_X, POWER_Y), small());
        draw(display, &duration, Point::new(TEXT_X, DURATION_Y), small());

        match (snap.mode, snap.selection) {
            (DeviceMode::BrowsingMenu, Some(MenuItem::Return)) => {
                draw(display, "<", Point::new(0, TITLE_Y), large());
            }
            (DeviceMode::BrowsingMenu, Some(MenuItem::Power)) => {
                draw(display, ">", Point::new(0, POWER_Y), small());
            }
            (DeviceMode::BrowsingMenu, Some(MenuItem::Duration)) => {
                draw(display, ">", Point::new(0, DURATION_Y), small());
            }
            (DeviceMode::EditingPower, _) => draw(display, "*", Point::new(0, POWER_Y), small()),
            (DeviceMode::EditingDuration, _) => {
                draw(display, "*", Point::new(0, DURATION_Y), small());
            }
            _ => {}
        }
    }

    display.flush().await.map_err(|_| Error::DisplayFlush)
}
