//! The board bring-up demo.
//!
//! ```text
//!  buttons ──▶ ┌──────────────────────┐ ──▶ status LEDs
//!  switches ─▶ │         Demo         │ ──▶ 74HC595 chain
//!  MMA8451Q ─▶ │  start() · tick()    │ ──▶ EventSink
//!              └──────────────────────┘
//! ```
//!
//! [`Demo::start`] brings the peripherals up and [`Demo::tick`] runs one
//! pass of the polling loop. Neither sleeps between iterations; the
//! caller owns the loop and its timing.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiBus;
use log::{error, info, warn};

use crate::config::DemoConfig;
use crate::drivers::display_patterns::{self, FADE_STEP_MS, PROPELLER_ROUNDS};
use crate::drivers::ht16k33::Ht16k33;
use crate::drivers::inputs::{ButtonLevels, Inputs};
use crate::drivers::mma8451q::{Acceleration, Mma8451q};
use crate::drivers::shift_register::ShiftRegister;
use crate::drivers::status_led::StatusLeds;
use crate::error::{Error, Result};
use crate::pins;

use super::events::AppEvent;
use super::ports::EventSink;

/// How long each boot word stays on the panel.
const WORD_HOLD_MS: u32 = 500;

/// What one loop iteration observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub buttons: ButtonLevels,
    pub switches: u8,
    /// `None` when the accelerometer read failed.
    pub acceleration: Option<Acceleration>,
}

pub struct Demo<DI, AI, SPI, OUT, IN> {
    config: DemoConfig,
    display: Ht16k33<DI>,
    accel: Mma8451q<AI>,
    shift: ShiftRegister<SPI, OUT>,
    inputs: Inputs<IN>,
    leds: StatusLeds<OUT>,
    display_ok: bool,
    tick_count: u64,
}

impl<DI, AI, SPI, OUT, IN> Demo<DI, AI, SPI, OUT, IN>
where
    DI: I2c,
    AI: I2c,
    SPI: SpiBus,
    OUT: OutputPin,
    IN: InputPin,
{
    pub fn new(
        config: DemoConfig,
        display: Ht16k33<DI>,
        accel: Mma8451q<AI>,
        shift: ShiftRegister<SPI, OUT>,
        inputs: Inputs<IN>,
        leds: StatusLeds<OUT>,
    ) -> Self {
        Self {
            config,
            display,
            accel,
            shift,
            inputs,
            leds,
            display_ok: false,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Bring up the peripherals.
    ///
    /// A display failure, during init or the self-test pattern, is reported
    /// and the display is left alone from then on. An accelerometer failure
    /// is returned; the caller is expected to [`halt`](Self::halt).
    pub fn start<D: DelayNs>(&mut self, delay: &mut D, sink: &mut impl EventSink) -> Result<()> {
        self.config.validate()?;
        self.shift.init()?;

        match self.display.init() {
            Ok(()) => self.display_ok = true,
            Err(e) => {
                error!("HT16K33 init failed: {}", e);
                sink.emit(&AppEvent::DisplayInitFailed(e));
            }
        }

        let settings = self.config.accel_settings();
        if let Err(e) = self.accel.init(&settings, delay) {
            error!("Failed to initialize MMA8451Q. Program will not read data.");
            return Err(e);
        }

        if self.display_ok {
            if let Err(e) = self.show_self_test(delay) {
                warn!("display self-test failed, continuing without it: {}", e);
                sink.emit(&AppEvent::DisplayInitFailed(e));
                self.display_ok = false;
            }
        }

        sink.emit(&AppEvent::Started);
        info!("Demo started");
        Ok(())
    }

    fn show_self_test<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        if self.config.boot_animation {
            self.boot_animation(delay)?;
        }
        display_patterns::all_segments_on(&mut self.display)?;
        self.display.set_brightness(self.config.display_brightness)?;
        self.display.set_blink(self.config.display_blink)
    }

    fn boot_animation<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        let display = &mut self.display;
        display_patterns::snake(display, delay, self.config.snake_step_ms)?;
        display_patterns::propeller(display, delay, PROPELLER_ROUNDS)?;
        display_patterns::fade(display, delay, 1, FADE_STEP_MS)?;

        let words: heapless::Vec<&str, 8> =
            self.config.boot_words.iter().map(|w| w.as_str()).collect();
        display_patterns::show_words(display, delay, &words, WORD_HOLD_MS)?;
        display.clear_all()
    }

    /// Report the fatal error and park the display. Bus errors while
    /// parking are logged; there is nothing left to fall back to.
    pub fn halt(&mut self, cause: Error, sink: &mut impl EventSink) {
        error!("Halted: {}", cause);
        sink.emit(&AppEvent::Halted(cause));
        if self.display_ok {
            if let Err(e) = self.display.standby() {
                warn!("display standby failed: {}", e);
            }
        }
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// One pass: buttons → switches → LEDs → shift chain → accelerometer.
    ///
    /// An accelerometer read failure is reported and does not fail the
    /// tick. GPIO and SPI failures do.
    pub fn tick(&mut self, sink: &mut impl EventSink) -> Result<TickReport> {
        self.tick_count += 1;

        // 1. Buttons
        let buttons = self.inputs.read_buttons()?;
        sink.emit(&AppEvent::ButtonsSampled(buttons));

        // 2. Switches
        let switches = self.inputs.switch_byte()?;

        // 3. Status LEDs
        self.leds.reflect_buttons(&buttons)?;

        // 4. Shift-register chain, same byte in every register
        let frame = [switches; pins::SHIFT_REGISTER_CHAIN_LEN];
        let count = self.config.shift_register_count.min(frame.len());
        self.shift.write_chain(&frame[..count])?;
        sink.emit(&AppEvent::SwitchesSampled(switches));

        // 5. Accelerometer
        let acceleration = match self.accel.read_g() {
            Ok(a) => {
                sink.emit(&AppEvent::Acceleration(a));
                Some(a)
            }
            Err(e) => {
                sink.emit(&AppEvent::AccelReadFailed(e));
                None
            }
        };

        Ok(TickReport {
            buttons,
            switches,
            acceleration,
        })
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn display_ok(&self) -> bool {
        self.display_ok
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn display(&self) -> &Ht16k33<DI> {
        &self.display
    }

    pub fn leds(&self) -> &StatusLeds<OUT> {
        &self.leds
    }

    pub fn shift_register(&self) -> &ShiftRegister<SPI, OUT> {
        &self.shift
    }
}
