//! Dev-board demo firmware: main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Board (embassy-rp, blocking)              │
//! │  I2C0 ──┬── RefCellDevice ──▶ Ht16k33                        │
//! │         └── RefCellDevice ──▶ Mma8451q                       │
//! │  SPI0 + ST_CP/OE/MR ────────▶ ShiftRegister                  │
//! │  BTN1-4, SW1-8 ─────────────▶ Inputs                         │
//! │  LED R/Y/G ─────────────────▶ StatusLeds                     │
//! │                                                              │
//! │  ──────────────────────── Demo ───────────────────────       │
//! │  start() once, then tick() every loop_interval_ms            │
//! │  events ──▶ LogEventSink ──▶ log ──▶ defmt ──▶ RTT           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![no_std]
#![no_main]
#![deny(unused_must_use)]

use core::cell::RefCell;

use cortex_m_rt::entry;
use embassy_rp::block::ImageDef;
use embassy_time::Delay;
use embedded_hal::delay::DelayNs;
use embedded_hal_bus::i2c::RefCellDevice;
use log::{LevelFilter, error, info};
use {defmt_rtt as _, panic_probe as _};

use devboard::adapters::defmt_log;
use devboard::adapters::log_sink::LogEventSink;
use devboard::app::demo::Demo;
use devboard::config::DemoConfig;
use devboard::drivers::ht16k33::Ht16k33;
use devboard::drivers::hw_init::{self, Board};
use devboard::drivers::inputs::Inputs;
use devboard::drivers::mma8451q::Mma8451q;
use devboard::drivers::shift_register::ShiftRegister;
use devboard::drivers::status_led::StatusLeds;
use devboard::pins;

#[unsafe(link_section = ".start_block")]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"devboard-demo"),
    embassy_rp::binary_info::rp_program_description!(
        c"HT16K33 display, MMA8451Q accelerometer and 74HC595 chain bring-up"
    ),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[entry]
fn main() -> ! {
    // ── 1. Bootstrap ──────────────────────────────────────────
    defmt_log::init(LevelFilter::Info);
    info!("devboard-demo v{}", env!("CARGO_PKG_VERSION"));

    let config = DemoConfig::default();
    let loop_interval_ms = config.loop_interval_ms;
    let halt_poll_ms = config.halt_poll_ms;

    // ── 2. Peripherals ────────────────────────────────────────
    let p = embassy_rp::init(Default::default());
    let Board {
        i2c,
        spi,
        spi_cs: _spi_cs,
        sr_latch,
        sr_output_enable,
        sr_reset,
        buttons,
        switches,
        led_red,
        led_yellow,
        led_green,
    } = hw_init::init_board(p, &config);

    // One I²C bus, two devices.
    let i2c_bus = RefCell::new(i2c);
    let display = Ht16k33::new(RefCellDevice::new(&i2c_bus), pins::HT16K33_ADDRESS);
    let accel = Mma8451q::new(RefCellDevice::new(&i2c_bus), pins::MMA8451Q_ADDRESS);

    let shift = ShiftRegister::new(spi, sr_latch, sr_output_enable, sr_reset);
    let inputs = Inputs::new(buttons, switches);
    let leds = StatusLeds::new(led_red, led_yellow, led_green);

    // ── 3. Start ──────────────────────────────────────────────
    let mut demo = Demo::new(config, display, accel, shift, inputs, leds);
    let mut delay = Delay;
    let mut sink = LogEventSink::new();

    if let Err(e) = demo.start(&mut delay, &mut sink) {
        demo.halt(e, &mut sink);
        loop {
            delay.delay_ms(halt_poll_ms);
        }
    }

    // ── 4. Main loop ──────────────────────────────────────────
    loop {
        if let Err(e) = demo.tick(&mut sink) {
            error!("loop iteration failed: {}", e);
        }
        delay.delay_ms(loop_interval_ms);
    }
}
