//! Demo configuration parameters
//!
//! Every tunable of the bring-up demo in one place. The defaults reproduce
//! the board's factory test: display at full brightness, accelerometer at
//! ±2 g / 100 Hz, a 100 ms poll loop.

use heapless::{String, Vec};
use serde::{Deserialize, Serialize};

use crate::drivers::display_patterns::DEFAULT_WORDS;
use crate::drivers::ht16k33::{Blink, MAX_BRIGHTNESS};
use crate::drivers::mma8451q::{AccelRange, AccelSettings, Odr, WHO_AM_I_VALUE};
use crate::error::{Error, Result};
use crate::pins;

/// Four display characters.
pub type Word = String<4>;

/// Core demo configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    // --- Buses ---
    /// I²C0 clock (Hz)
    pub i2c_frequency_hz: u32,
    /// SPI0 clock (Hz)
    pub spi_frequency_hz: u32,

    // --- Timing ---
    /// Sleep between loop iterations (milliseconds)
    pub loop_interval_ms: u32,
    /// Sleep per pass of the halt loop after a fatal init error (milliseconds)
    pub halt_poll_ms: u32,

    // --- Accelerometer ---
    pub accel_range: AccelRange,
    pub accel_odr: Odr,
    /// Identification byte expected in WHO_AM_I
    pub accel_who_am_i: u8,

    // --- Display ---
    /// PWM dimming step after the self-test pattern (0-15)
    pub display_brightness: u8,
    pub display_blink: Blink,
    /// Snake animation frame time (milliseconds)
    pub snake_step_ms: u32,
    /// Run the animation self-test before entering the loop
    pub boot_animation: bool,
    /// Words flashed during the boot animation
    pub boot_words: Vec<Word, 8>,

    // --- Shift register ---
    /// 74HC595s in the chain
    pub shift_register_count: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            // Buses
            i2c_frequency_hz: 100_000,
            spi_frequency_hz: 400_000,

            // Timing
            loop_interval_ms: 100,
            halt_poll_ms: 1000,

            // Accelerometer
            accel_range: AccelRange::G2,
            accel_odr: Odr::Hz100,
            accel_who_am_i: WHO_AM_I_VALUE,

            // Display
            display_brightness: MAX_BRIGHTNESS,
            display_blink: Blink::Off,
            snake_step_ms: 100,
            boot_animation: false,
            boot_words: DEFAULT_WORDS
                .iter()
                .filter_map(|w| Word::try_from(*w).ok())
                .collect(),

            // Shift register
            shift_register_count: pins::SHIFT_REGISTER_CHAIN_LEN,
        }
    }
}

impl DemoConfig {
    pub fn validate(&self) -> Result<()> {
        if self.display_brightness > MAX_BRIGHTNESS {
            return Err(Error::Config("display_brightness above 15"));
        }
        if self.loop_interval_ms == 0 {
            return Err(Error::Config("loop_interval_ms must be non-zero"));
        }
        if self.halt_poll_ms == 0 {
            return Err(Error::Config("halt_poll_ms must be non-zero"));
        }
        if !(1..=pins::SHIFT_REGISTER_CHAIN_LEN).contains(&self.shift_register_count) {
            return Err(Error::Config("shift_register_count outside 1..=3"));
        }
        if self.i2c_frequency_hz == 0 || self.spi_frequency_hz == 0 {
            return Err(Error::Config("bus frequency must be non-zero"));
        }
        Ok(())
    }

    pub fn accel_settings(&self) -> AccelSettings {
        AccelSettings {
            who_am_i: self.accel_who_am_i,
            range: self.accel_range,
            odr: self.accel_odr,
        }
    }
}
