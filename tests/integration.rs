//! Integration tests for uvbox host-testable logic.
//!
//! These drive the controller through whole exposure cycles with a scripted
//! clock, the real interrupt-safe tick counter and a recording register.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::thread;

use uvbox::control::{CompareRegister, TickCounter};
use uvbox::{Controller, DeviceMode, DutyOutput, DutyRegister, InputLevels, MenuItem};

const UP: InputLevels = InputLevels::RELEASED;
const PEDAL: InputLevels = InputLevels {
    pedal: false,
    button: true,
};
const BUTTON: InputLevels = InputLevels {
    pedal: true,
    button: false,
};

#[derive(Default)]
struct Register {
    writes: Vec<u16>,
}

impl CompareRegister for Register {
    fn store(&mut self, value: u16) {
        self.writes.push(value);
    }
}

/// Run one cycle per millisecond from `from` to `to` (exclusive) with the
/// given levels, returning the mode seen after each cycle.
fn run(
    ctl: &mut Controller,
    enc: &TickCounter,
    out: &mut DutyOutput<Register>,
    levels: InputLevels,
    from: u64,
    to: u64,
) -> Vec<(u64, DeviceMode, u16)> {
    let mut encoder = enc;
    (from..to)
        .map(|now| {
            ctl.poll(levels, now, &mut encoder, out);
            (now, ctl.mode(), out.duty())
        })
        .collect()
}

#[test]
fn exposure_lifecycle_two_seconds() {
    // Start at t0 = 1000 so the power-on debounce window is long gone.
    let t0 = 1_000;
    let enc = TickCounter::new();
    let mut out = DutyOutput::new(Register::default());
    let mut ctl = Controller::with_settings(0, 2_000, 4_000);

    run(&mut ctl, &enc, &mut out, UP, 0, t0);
    let start = run(&mut ctl, &enc, &mut out, PEDAL, t0, t0 + 1);
    assert_eq!(start, vec![(t0, DeviceMode::Exposing, 4_000)]);

    for (now, mode, duty) in run(&mut ctl, &enc, &mut out, UP, t0 + 1, t0 + 2_000) {
        assert_eq!(mode, DeviceMode::Exposing, "at t0+{}", now - t0);
        assert_eq!(duty, 4_000);
    }
    for (_, mode, duty) in run(&mut ctl, &enc, &mut out, UP, t0 + 2_000, t0 + 4_000) {
        assert_eq!(mode, DeviceMode::Idle);
        assert_eq!(duty, 0);
    }
    assert_eq!(out.register().writes, vec![0, 4_000, 0]);
}

#[test]
fn pedal_abort_cancels_pending_timeout() {
    let t0 = 1_000;
    let enc = TickCounter::new();
    let mut out = DutyOutput::new(Register::default());
    let mut ctl = Controller::with_settings(0, 2_000, 4_000);

    run(&mut ctl, &enc, &mut out, PEDAL, t0, t0 + 1);
    run(&mut ctl, &enc, &mut out, UP, t0 + 1, t0 + 500);
    let abort = run(&mut ctl, &enc, &mut out, PEDAL, t0 + 500, t0 + 501);
    assert_eq!(abort, vec![(t0 + 500, DeviceMode::Idle, 0)]);

    for (_, mode, _) in run(&mut ctl, &enc, &mut out, UP, t0 + 501, t0 + 3_000) {
        assert_eq!(mode, DeviceMode::Idle);
    }
    // Exactly one "on" and one "off" after the power-on write.
    assert_eq!(out.register().writes, vec![0, 4_000, 0]);
}

#[test]
fn full_menu_session_with_tick_counter() {
    let enc = TickCounter::new();
    let mut out = DutyOutput::new(Register::default());
    let mut ctl = Controller::new(0);

    // Rotation while idle is discarded when the menu opens.
    enc.add(5);
    run(&mut ctl, &enc, &mut out, BUTTON, 100, 101);
    run(&mut ctl, &enc, &mut out, UP, 101, 110);
    assert_eq!(ctl.mode(), DeviceMode::BrowsingMenu);
    assert_eq!(ctl.selection(), Some(MenuItem::Return));

    // Scroll backwards one detent: Duration.
    enc.add(-1);
    run(&mut ctl, &enc, &mut out, UP, 110, 120);
    assert_eq!(ctl.selection(), Some(MenuItem::Duration));

    run(&mut ctl, &enc, &mut out, BUTTON, 200, 201);
    run(&mut ctl, &enc, &mut out, UP, 201, 210);
    assert_eq!(ctl.mode(), DeviceMode::EditingDuration);

    // Ticks arriving between cycles are consumed exactly once.
    enc.add(-40);
    run(&mut ctl, &enc, &mut out, UP, 210, 220);
    enc.add(-400);
    run(&mut ctl, &enc, &mut out, UP, 220, 230);
    assert_eq!(ctl.duration_ms(), 0);
    enc.add(4);
    run(&mut ctl, &enc, &mut out, UP, 230, 240);
    assert_eq!(ctl.duration_ms(), 1_000);
    assert_eq!(enc.get(), 0);

    // Back to the menu, over to Power.
    run(&mut ctl, &enc, &mut out, BUTTON, 300, 301);
    run(&mut ctl, &enc, &mut out, UP, 301, 310);
    enc.add(1);
    run(&mut ctl, &enc, &mut out, UP, 310, 320);
    assert_eq!(ctl.selection(), Some(MenuItem::Power));
    run(&mut ctl, &enc, &mut out, BUTTON, 400, 401);
    run(&mut ctl, &enc, &mut out, UP, 401, 410);
    assert_eq!(ctl.mode(), DeviceMode::EditingPower);

    enc.add(1_000);
    run(&mut ctl, &enc, &mut out, UP, 410, 420);
    assert_eq!(ctl.power_duty(), 8_000);

    // Out through Return, then expose at the new settings.
    run(&mut ctl, &enc, &mut out, BUTTON, 500, 501);
    run(&mut ctl, &enc, &mut out, UP, 501, 510);
    run(&mut ctl, &enc, &mut out, BUTTON, 600, 601);
    run(&mut ctl, &enc, &mut out, UP, 601, 610);
    assert_eq!(ctl.mode(), DeviceMode::Idle);

    run(&mut ctl, &enc, &mut out, PEDAL, 700, 701);
    assert_eq!(out.duty(), 8_000);
    let snap = ctl.snapshot(1_200);
    assert_eq!(snap.remaining_secs(), Some(0));
    assert_eq!(snap.power_watts(), (20, 0));
    run(&mut ctl, &enc, &mut out, UP, 701, 1_701);
    assert_eq!(ctl.mode(), DeviceMode::Idle);
    assert_eq!(out.duty(), 0);
}

#[test]
fn zero_duration_exposure_ends_next_cycle() {
    let enc = TickCounter::new();
    let mut out = DutyOutput::new(Register::default());
    let mut ctl = Controller::with_settings(0, 0, 100);

    let trace = run(&mut ctl, &enc, &mut out, PEDAL, 100, 102);
    assert_eq!(
        trace,
        vec![(100, DeviceMode::Exposing, 100), (101, DeviceMode::Idle, 0)]
    );
}

/// Compare register modelled as two byte lanes written one after the other,
/// the way an 8-bit bus updates a 16-bit timer register.
struct SplitRegister {
    low: Arc<AtomicU8>,
    high: Arc<AtomicU8>,
}

impl CompareRegister for SplitRegister {
    fn store(&mut self, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.low.store(low, Ordering::SeqCst);
        thread::yield_now();
        self.high.store(high, Ordering::SeqCst);
    }
}

#[test]
fn duty_writes_are_never_observed_torn() {
    let low = Arc::new(AtomicU8::new(0));
    let high = Arc::new(AtomicU8::new(0));
    let done = Arc::new(AtomicBool::new(false));

    // The "timer peripheral": samples the register under the same lock the
    // writer uses to mask interrupts.
    let observer = {
        let (low, high, done) = (low.clone(), high.clone(), done.clone());
        thread::spawn(move || {
            let mut seen = Vec::new();
            while !done.load(Ordering::SeqCst) {
                let value = critical_section::with(|_| {
                    u16::from_le_bytes([low.load(Ordering::SeqCst), high.load(Ordering::SeqCst)])
                });
                seen.push(value);
            }
            seen
        })
    };

    let mut out = DutyOutput::new(SplitRegister {
        low: low.clone(),
        high: high.clone(),
    });
    for i in 0..20_000 {
        out.set_duty(if i % 2 == 0 { 0x1F00 } else { 0x00FF });
    }
    done.store(true, Ordering::SeqCst);

    let seen = observer.join().expect("observer thread panicked");
    for value in seen {
        assert!(
            matches!(value, 0 | 0x00FF | 0x1F00),
            "observed torn duty value {value:#06x}"
        );
    }
}
