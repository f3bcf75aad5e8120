//! Integration tests for the start-up → loop pipeline on a simulated board.
//!
//! The display and accelerometer share one fake I²C bus through
//! `RefCellDevice`, exactly as they do on the board.

use devboard::app::events::AppEvent;
use devboard::config::DemoConfig;
use devboard::drivers::inputs::ButtonLevels;
use devboard::drivers::mma8451q::{AccelRange, Odr, reg};
use devboard::error::{AccelError, BusError, Error};

use crate::mock_hw::{Bench, CountingDelay, RecordingSink};

const MS: u64 = 1_000_000;

fn started(bench: &Bench, config: DemoConfig) -> (crate::mock_hw::BenchDemo<'_>, RecordingSink) {
    let mut demo = bench.demo(config);
    let mut sink = RecordingSink::default();
    demo.start(&mut CountingDelay::default(), &mut sink)
        .expect("bring-up should succeed on a healthy bench");
    (demo, sink)
}

// ── Start-up ──────────────────────────────────────────────────

#[test]
fn bring_up_programs_both_chips_on_the_shared_bus() {
    let bench = Bench::new();
    let (demo, sink) = started(&bench, DemoConfig::default());

    let bus = bench.bus.borrow();
    assert_eq!(&bus.display_commands[..3], &[0x21, 0xA0, 0x81]);
    assert_eq!(bus.digits(), [0xFF; 4], "self-test pattern on every digit");
    assert_eq!(&bus.display_commands[3..], &[0xEF, 0x81], "brightness 15, no blink");

    assert_eq!(bus.accel_reg(reg::XYZ_DATA_CFG), 0x00, "±2 g");
    assert_eq!(bus.accel_reg(reg::CTRL_REG1), 0x19, "100 Hz, ACTIVE");

    assert!(demo.display_ok());
    assert_eq!(sink.events, vec![AppEvent::Started]);

    // Control lines parked: latch low, outputs enabled, reset released.
    assert!(!bench.latch.level());
    assert!(!bench.output_enable.level());
    assert!(bench.reset.level());
}

#[test]
fn configured_range_and_rate_reach_the_accelerometer() {
    let bench = Bench::new();
    let config = DemoConfig {
        accel_range: AccelRange::G8,
        accel_odr: Odr::Hz50,
        ..DemoConfig::default()
    };
    let (mut demo, mut sink) = started(&bench, config);
    assert_eq!(bench.bus.borrow().accel_reg(reg::XYZ_DATA_CFG), 0x02);
    assert_eq!(bench.bus.borrow().accel_reg(reg::CTRL_REG1), (0b100 << 3) | 1);

    // 1024 counts per g at ±8 g.
    bench.bus.borrow_mut().set_sample(0, 0, -1024);
    let report = demo.tick(&mut sink).unwrap();
    let g = report.acceleration.unwrap();
    assert!((g.z + 1.0).abs() < 1e-6, "z = {}", g.z);
}

#[test]
fn boot_animation_sleeps_through_every_sequence() {
    let bench = Bench::new();
    let config = DemoConfig {
        boot_animation: true,
        ..DemoConfig::default()
    };
    let mut demo = bench.demo(config);
    let mut delay = CountingDelay::default();
    demo.start(&mut delay, &mut RecordingSink::default()).unwrap();

    // standby settle 10 + snake 20×100 + propeller 8×875 + fade 30×30 + words 8×500
    assert_eq!(delay.total_ns, 13_910 * MS);
    assert_eq!(bench.bus.borrow().digits(), [0xFF; 4]);
    assert_eq!(bench.bus.borrow().last_display_command(), Some(0x81));
}

#[test]
fn missing_display_does_not_stop_the_demo() {
    let bench = Bench::new();
    bench.bus.borrow_mut().display_present = false;
    let (mut demo, mut sink) = started(&bench, DemoConfig::default());

    assert!(!demo.display_ok());
    assert!(matches!(
        sink.events[0],
        AppEvent::DisplayInitFailed(Error::Bus(BusError::I2cWrite { addr: 0x70, .. }))
    ));

    bench.bus.borrow_mut().set_sample(0, 0, 4096);
    let report = demo.tick(&mut sink).unwrap();
    assert!(report.acceleration.is_some());
}

#[test]
fn wrong_accelerometer_halts_and_parks_the_display() {
    let bench = Bench::new();
    // The datasheet identity, which these boards do not report.
    bench.bus.borrow_mut().accel_regs[reg::WHO_AM_I as usize] = 0x1A;

    let mut demo = bench.demo(DemoConfig::default());
    let mut sink = RecordingSink::default();
    let err = demo
        .start(&mut CountingDelay::default(), &mut sink)
        .unwrap_err();
    assert_eq!(
        err,
        Error::Accel(AccelError::WhoAmIMismatch {
            expected: 0x2A,
            got: 0x1A
        })
    );

    demo.halt(err, &mut sink);
    assert_eq!(sink.events, vec![AppEvent::Halted(err)]);
    assert_eq!(bench.bus.borrow().last_display_command(), Some(0x20));
    assert_eq!(bench.bus.borrow().accel_reg(reg::CTRL_REG1), 0, "never activated");
}

#[test]
fn identity_byte_is_configurable() {
    let bench = Bench::new();
    bench.bus.borrow_mut().accel_regs[reg::WHO_AM_I as usize] = 0x1A;
    let config = DemoConfig {
        accel_who_am_i: 0x1A,
        ..DemoConfig::default()
    };
    let (demo, _) = started(&bench, config);
    assert!(demo.display_ok());
}

// ── Loop ──────────────────────────────────────────────────────

#[test]
fn switches_are_mirrored_into_every_shift_register() {
    let bench = Bench::new();
    let (mut demo, mut sink) = started(&bench, DemoConfig::default());
    bench.latch.clear_history();

    bench.set_switch(1, true);
    bench.set_switch(4, true);
    bench.set_switch(8, true);
    let report = demo.tick(&mut sink).unwrap();

    assert_eq!(report.switches, 0b1000_1001);
    assert_eq!(bench.spi.bytes(), vec![0x89; 3]);
    assert_eq!(bench.spi.flushes(), 1);
    assert_eq!(bench.latch.history(), vec![true, false], "one latch pulse");

    bench.spi.clear();
    bench.set_switch(1, false);
    bench.set_switch(4, false);
    bench.set_switch(8, false);
    demo.tick(&mut sink).unwrap();
    assert_eq!(bench.spi.bytes(), vec![0x00; 3]);
}

#[test]
fn shorter_chain_shifts_fewer_bytes() {
    let bench = Bench::new();
    let config = DemoConfig {
        shift_register_count: 2,
        ..DemoConfig::default()
    };
    let (mut demo, mut sink) = started(&bench, config);
    bench.set_switch(2, true);
    demo.tick(&mut sink).unwrap();
    assert_eq!(bench.spi.bytes(), vec![0x02; 2]);
}

#[test]
fn buttons_drive_the_status_leds() {
    let bench = Bench::new();
    let (mut demo, mut sink) = started(&bench, DemoConfig::default());

    // All released: inputs read HIGH, red and yellow light.
    let report = demo.tick(&mut sink).unwrap();
    assert_eq!(report.buttons, ButtonLevels([1, 1, 1, 1]));
    assert!(bench.red.level() && bench.yellow.level());
    assert!(!bench.green.level());

    // Holding one button still leaves three HIGH.
    bench.set_button(2, true);
    demo.tick(&mut sink).unwrap();
    assert!(bench.red.level() && bench.yellow.level());

    // Only all four held turns everything off.
    for n in 1..=4 {
        bench.set_button(n, true);
    }
    let report = demo.tick(&mut sink).unwrap();
    assert_eq!(report.buttons, ButtonLevels([0, 0, 0, 0]));
    assert!(!bench.red.level() && !bench.yellow.level() && !bench.green.level());
}

#[test]
fn tick_reports_in_console_order() {
    let bench = Bench::new();
    let (mut demo, mut sink) = started(&bench, DemoConfig::default());
    sink.events.clear();

    bench.bus.borrow_mut().set_sample(2048, -2048, 4096);
    demo.tick(&mut sink).unwrap();

    assert_eq!(sink.events.len(), 3);
    assert_eq!(sink.events[0], AppEvent::ButtonsSampled(ButtonLevels([1; 4])));
    assert_eq!(sink.events[1], AppEvent::SwitchesSampled(0));
    let AppEvent::Acceleration(a) = sink.events[2] else {
        panic!("expected a sample, got {:?}", sink.events[2]);
    };
    assert!((a.x - 0.5).abs() < 1e-6);
    assert!((a.y + 0.5).abs() < 1e-6);
    assert!((a.z - 1.0).abs() < 1e-6);
}

#[test]
fn accelerometer_dropout_is_survivable() {
    let bench = Bench::new();
    let (mut demo, mut sink) = started(&bench, DemoConfig::default());
    sink.events.clear();

    bench.bus.borrow_mut().accel_read_fault = true;
    let report = demo.tick(&mut sink).unwrap();
    assert!(report.acceleration.is_none());
    assert!(matches!(
        sink.events.last(),
        Some(AppEvent::AccelReadFailed(Error::Bus(BusError::I2cRead {
            addr: 0x1C,
            reg: 0x01,
            ..
        })))
    ));

    // The rest of the loop still ran.
    assert_eq!(bench.spi.bytes().len(), 3);

    bench.bus.borrow_mut().accel_read_fault = false;
    let report = demo.tick(&mut sink).unwrap();
    assert!(report.acceleration.is_some());
    assert_eq!(demo.tick_count(), 2);
}
