//! One-shot board bring-up on the RP2350B.
//!
//! Claims every peripheral the demo uses and hands back ready-to-use
//! blocking drivers. Called once from `main()` before the loop starts.
//! embassy-rp binds pins by type, so the numbers in [`pins`] are checked
//! against the claimed peripherals at compile time.

use embassy_rp::Peripherals;
use embassy_rp::gpio::{Flex, Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C0, SPI0};
use embassy_rp::spi::{self, Blocking, Spi};
use log::info;

use crate::config::DemoConfig;
use crate::pins;

const _: () = {
    assert!(pins::I2C_SDA_GPIO == 20 && pins::I2C_SCL_GPIO == 21);
    assert!(pins::SPI_MISO_GPIO == 4 && pins::SPI_CS_GPIO == 5);
    assert!(pins::SR_SHCP_GPIO == 34 && pins::SR_DS_GPIO == 35);
    assert!(pins::SR_STCP_GPIO == 36 && pins::SR_OE_GPIO == 37 && pins::SR_MR_GPIO == 38);
    assert!(pins::BUTTON_GPIOS[0] == 30 && pins::BUTTON_GPIOS[3] == 33);
    assert!(pins::SWITCH_GPIOS[0] == 22 && pins::SWITCH_GPIOS[7] == 29);
    assert!(pins::LED_RED_GPIO == 17 && pins::LED_YELLOW_GPIO == 16 && pins::LED_GREEN_GPIO == 15);
};

/// Everything the demo drives, configured and idle.
pub struct Board {
    pub i2c: I2c<'static, I2C0, i2c::Blocking>,
    pub spi: Spi<'static, SPI0, Blocking>,
    /// Plain SIO, never toggled. The 74HC595s latch on ST_CP instead.
    pub spi_cs: Flex<'static>,
    pub sr_latch: Output<'static>,
    pub sr_output_enable: Output<'static>,
    pub sr_reset: Output<'static>,
    pub buttons: [Input<'static>; 4],
    pub switches: [Input<'static>; 8],
    pub led_red: Output<'static>,
    pub led_yellow: Output<'static>,
    pub led_green: Output<'static>,
}

pub fn init_board(p: Peripherals, config: &DemoConfig) -> Board {
    // ── I²C0: HT16K33 + MMA8451Q ──────────────────────────────
    let mut i2c_cfg = i2c::Config::default();
    i2c_cfg.frequency = config.i2c_frequency_hz;
    i2c_cfg.sda_pullup = true;
    i2c_cfg.scl_pullup = true;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_21, p.PIN_20, i2c_cfg);
    info!("hw_init: I2C0 at {} Hz", config.i2c_frequency_hz);

    // ── SPI0: 74HC595 chain ───────────────────────────────────
    let mut spi_cfg = spi::Config::default();
    spi_cfg.frequency = config.spi_frequency_hz;
    let spi = Spi::new_blocking(p.SPI0, p.PIN_34, p.PIN_35, p.PIN_4, spi_cfg);
    let spi_cs = Flex::new(p.PIN_5);

    let sr_latch = Output::new(p.PIN_36, Level::Low);
    let sr_output_enable = Output::new(p.PIN_37, Level::Low);
    let sr_reset = Output::new(p.PIN_38, Level::High);
    info!("hw_init: SPI0 at {} Hz", config.spi_frequency_hz);

    // ── Inputs (pull-up, active low) ──────────────────────────
    let buttons = [
        Input::new(p.PIN_30, Pull::Up),
        Input::new(p.PIN_31, Pull::Up),
        Input::new(p.PIN_32, Pull::Up),
        Input::new(p.PIN_33, Pull::Up),
    ];
    let switches = [
        Input::new(p.PIN_22, Pull::Up),
        Input::new(p.PIN_23, Pull::Up),
        Input::new(p.PIN_24, Pull::Up),
        Input::new(p.PIN_25, Pull::Up),
        Input::new(p.PIN_26, Pull::Up),
        Input::new(p.PIN_27, Pull::Up),
        Input::new(p.PIN_28, Pull::Up),
        Input::new(p.PIN_29, Pull::Up),
    ];

    // ── Status LEDs ───────────────────────────────────────────
    let led_red = Output::new(p.PIN_17, Level::Low);
    let led_yellow = Output::new(p.PIN_16, Level::Low);
    let led_green = Output::new(p.PIN_15, Level::Low);

    info!("hw_init: all peripherals configured");
    Board {
        i2c,
        spi,
        spi_cs,
        sr_latch,
        sr_output_enable,
        sr_reset,
        buttons,
        switches,
        led_red,
        led_yellow,
        led_green,
    }
}
