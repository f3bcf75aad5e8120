//! HT16K33 driver for a 4-digit 14-segment LED backpack.
//!
//! Every command is a single-byte I²C write; display RAM is written two
//! bytes (one 16-bit digit word, little-endian) at a time, addressed by
//! `position * 2`.
//!
//! The driver keeps a mirror of the four digit words it last wrote so the
//! demo loop and tests can inspect what the panel should be showing
//! without reading display RAM back.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::drivers::segments::char_to_pattern;
use crate::error::{BusError, DisplayError, Result};

/// Digits on the panel.
pub const NUM_DIGITS: usize = 4;

// ── Commands ──────────────────────────────────────────────────

pub const SYSTEM_STANDBY: u8 = 0x20;
pub const SYSTEM_RUN: u8 = 0x21;
pub const SET_ROW_INT: u8 = 0xA0;
pub const BRIGHTNESS: u8 = 0xE0;
pub const DISPLAY_SETUP: u8 = 0x80;

// OR'd into DISPLAY_SETUP.
pub const DISPLAY_OFF: u8 = 0x0;
pub const DISPLAY_ON: u8 = 0x1;
pub const BLINK_2HZ: u8 = 0x2;
pub const BLINK_1HZ: u8 = 0x4;
pub const BLINK_0P5HZ: u8 = 0x6;

/// Highest dimming step accepted by the BRIGHTNESS command.
pub const MAX_BRIGHTNESS: u8 = 15;

/// Hardware blink rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Blink {
    #[default]
    Off,
    Hz2,
    Hz1,
    HalfHz,
}

impl Blink {
    /// Numeric selector: 0 = off, 1 = 2 Hz, 2 = 1 Hz, 3 = 0.5 Hz.
    /// Anything else means off.
    pub fn from_index(n: u8) -> Self {
        match n {
            1 => Self::Hz2,
            2 => Self::Hz1,
            3 => Self::HalfHz,
            _ => Self::Off,
        }
    }

    pub const fn bits(self) -> u8 {
        match self {
            Self::Off => DISPLAY_OFF,
            Self::Hz2 => BLINK_2HZ,
            Self::Hz1 => BLINK_1HZ,
            Self::HalfHz => BLINK_0P5HZ,
        }
    }
}

pub struct Ht16k33<I2C> {
    i2c: I2C,
    address: u8,
    digits: [u16; NUM_DIGITS],
}

impl<I2C: I2c> Ht16k33<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            digits: [0; NUM_DIGITS],
        }
    }

    /// Start the oscillator, select ROW output, switch the display on
    /// (no blink) and blank every digit.
    pub fn init(&mut self) -> Result<()> {
        self.command(SYSTEM_RUN)?;
        self.command(SET_ROW_INT)?;
        self.command(DISPLAY_SETUP | DISPLAY_ON)?;
        self.clear_all()
    }

    /// Write the raw segment word `bits` to digit `position`.
    pub fn display_set(&mut self, position: usize, bits: u16) -> Result<()> {
        if position >= NUM_DIGITS {
            return Err(DisplayError::PositionOutOfRange(position as u8).into());
        }
        let [lo, hi] = bits.to_le_bytes();
        let buf = [(position * 2) as u8, lo, hi];
        self.i2c
            .write(self.address, &buf)
            .map_err(|e| BusError::i2c_write(self.address, &e))?;
        self.digits[position] = bits;
        Ok(())
    }

    pub fn display_char(&mut self, position: usize, ch: char) -> Result<()> {
        self.display_set(position, char_to_pattern(ch))
    }

    /// Show the leading characters of `s`, one per digit from the left.
    /// Digits past the end of a short string keep their previous content.
    pub fn display_string(&mut self, s: &str) -> Result<()> {
        for (position, ch) in s.chars().take(NUM_DIGITS).enumerate() {
            self.display_char(position, ch)?;
        }
        Ok(())
    }

    /// Scroll `s` right-to-left one character per `interval_ms`. Strings
    /// that fit the panel are shown once without delay.
    pub fn scroll_string<D: DelayNs>(
        &mut self,
        s: &str,
        interval_ms: u32,
        delay: &mut D,
    ) -> Result<()> {
        let len = s.chars().count();
        if len <= NUM_DIGITS {
            return self.display_string(s);
        }
        for (start, _) in s.char_indices().take(len - NUM_DIGITS + 1) {
            self.display_string(&s[start..])?;
            delay.delay_ms(interval_ms);
        }
        Ok(())
    }

    /// Set the PWM dimming level; values above 15 clamp to 15.
    pub fn set_brightness(&mut self, level: u8) -> Result<()> {
        self.command(BRIGHTNESS | level.min(MAX_BRIGHTNESS))
    }

    pub fn set_blink(&mut self, blink: Blink) -> Result<()> {
        self.command(DISPLAY_SETUP | DISPLAY_ON | blink.bits())
    }

    pub fn clear_all(&mut self) -> Result<()> {
        for position in 0..NUM_DIGITS {
            self.display_set(position, 0)?;
        }
        Ok(())
    }

    /// Stop the oscillator. Display RAM is retained; `init` wakes it again.
    pub fn standby(&mut self) -> Result<()> {
        self.command(SYSTEM_STANDBY)
    }

    /// Digit words as last written.
    pub fn digits(&self) -> &[u16; NUM_DIGITS] {
        &self.digits
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn command(&mut self, cmd: u8) -> Result<()> {
        self.i2c
            .write(self.address, &[cmd])
            .map_err(|e| BusError::i2c_write(self.address, &e).into())
    }
}
