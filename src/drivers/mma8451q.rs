//! MMA8451Q 3-axis accelerometer over I²C.
//!
//! ## Register protocol
//!
//! - Write: one transaction `[reg, value]`.
//! - Read: write `[reg]`, repeated start, read N bytes. The part
//!   auto-increments the register pointer, so a 6-byte read from
//!   `OUT_X_MSB` returns X, Y and Z in one burst.
//!
//! ## Sample format
//!
//! Each axis is 14-bit two's complement, left-justified in a big-endian
//! 16-bit pair (MSB register first). Shift right by two, then sign-extend
//! from bit 13.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{AccelError, BusError, Result};

/// Identification byte the demo boards actually return. The datasheet
/// value is `0x1A`.
pub const WHO_AM_I_VALUE: u8 = 0x2A;

/// Significant bits per axis sample.
pub const SAMPLE_BITS: u8 = 14;

/// Settling time after leaving ACTIVE mode.
const STANDBY_SETTLE_MS: u32 = 10;

// ── Register map ──────────────────────────────────────────────

pub mod reg {
    pub const F_STATUS: u8 = 0x00;
    pub const OUT_X_MSB: u8 = 0x01;
    pub const OUT_X_LSB: u8 = 0x02;
    pub const OUT_Y_MSB: u8 = 0x03;
    pub const OUT_Y_LSB: u8 = 0x04;
    pub const OUT_Z_MSB: u8 = 0x05;
    pub const OUT_Z_LSB: u8 = 0x06;
    pub const F_SETUP: u8 = 0x09;
    pub const TRIG_CFG: u8 = 0x0A;
    pub const SYSMOD: u8 = 0x0B;
    pub const INT_SOURCE: u8 = 0x0C;
    pub const WHO_AM_I: u8 = 0x0D;
    pub const XYZ_DATA_CFG: u8 = 0x0E;
    pub const HP_FILTER_CUTOFF: u8 = 0x0F;
    pub const PL_STATUS: u8 = 0x10;
    pub const PL_CFG: u8 = 0x11;
    pub const PL_COUNT: u8 = 0x12;
    pub const PL_BF_ZCOMP: u8 = 0x13;
    pub const P_L_THS_REG: u8 = 0x14;
    pub const FF_MT_CFG: u8 = 0x15;
    pub const FF_MT_SRC: u8 = 0x16;
    pub const FF_MT_THS: u8 = 0x17;
    pub const FF_MT_COUNT: u8 = 0x18;
    pub const TRANSIENT_CFG: u8 = 0x1D;
    pub const TRANSIENT_SRC: u8 = 0x1E;
    pub const TRANSIENT_THS: u8 = 0x1F;
    pub const TRANSIENT_COUNT: u8 = 0x20;
    pub const PULSE_CFG: u8 = 0x21;
    pub const PULSE_SRC: u8 = 0x22;
    pub const PULSE_THSX: u8 = 0x23;
    pub const PULSE_THSY: u8 = 0x24;
    pub const PULSE_THSZ: u8 = 0x25;
    pub const PULSE_TMLT: u8 = 0x26;
    pub const PULSE_LTCY: u8 = 0x27;
    pub const PULSE_WIND: u8 = 0x28;
    pub const ALSP_COUNT: u8 = 0x29;
    pub const CTRL_REG1: u8 = 0x2A;
    pub const CTRL_REG2: u8 = 0x2B;
    pub const CTRL_REG3: u8 = 0x2C;
    pub const CTRL_REG4: u8 = 0x2D;
    pub const CTRL_REG5: u8 = 0x2E;
    pub const OFF_X: u8 = 0x2F;
    pub const OFF_Y: u8 = 0x30;
    pub const OFF_Z: u8 = 0x31;
}

/// CTRL_REG1 bit 0.
const CTRL1_ACTIVE: u8 = 0x01;
/// CTRL_REG1 DR[2:0] sits at bits 5..=3.
const CTRL1_DR_SHIFT: u8 = 3;
const CTRL1_DR_MASK: u8 = 0x07 << CTRL1_DR_SHIFT;
/// XYZ_DATA_CFG FS[1:0].
const XYZ_FS_MASK: u8 = 0x03;

// ── Configuration enums ───────────────────────────────────────

/// Full-scale range (XYZ_DATA_CFG FS bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccelRange {
    #[default]
    G2,
    G4,
    G8,
}

impl AccelRange {
    pub const fn bits(self) -> u8 {
        match self {
            Self::G2 => 0b00,
            Self::G4 => 0b01,
            Self::G8 => 0b10,
        }
    }

    /// Counts per g used by [`convert_to_g`].
    pub const fn sensitivity(self) -> f32 {
        match self {
            Self::G2 => 4096.0,
            Self::G4 => 2048.0,
            Self::G8 => 1024.0,
        }
    }

    /// Full-scale value in g (2, 4 or 8).
    pub const fn full_scale_g(self) -> u8 {
        1 << (self.bits() + 1)
    }
}

/// Output data rate (CTRL_REG1 DR bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Odr {
    Hz800,
    Hz400,
    Hz200,
    #[default]
    Hz100,
    Hz50,
    Hz12_5,
    Hz6_25,
    Hz1_56,
}

impl Odr {
    pub const fn bits(self) -> u8 {
        match self {
            Self::Hz800 => 0b000,
            Self::Hz400 => 0b001,
            Self::Hz200 => 0b010,
            Self::Hz100 => 0b011,
            Self::Hz50 => 0b100,
            Self::Hz12_5 => 0b101,
            Self::Hz6_25 => 0b110,
            Self::Hz1_56 => 0b111,
        }
    }

    /// Sample period in milliseconds, rounded up.
    pub const fn period_ms(self) -> u32 {
        match self {
            Self::Hz800 => 2,
            Self::Hz400 => 3,
            Self::Hz200 => 5,
            Self::Hz100 => 10,
            Self::Hz50 => 20,
            Self::Hz12_5 => 80,
            Self::Hz6_25 => 160,
            Self::Hz1_56 => 640,
        }
    }
}

/// Settings applied by [`Mma8451q::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccelSettings {
    pub who_am_i: u8,
    pub range: AccelRange,
    pub odr: Odr,
}

impl Default for AccelSettings {
    fn default() -> Self {
        Self {
            who_am_i: WHO_AM_I_VALUE,
            range: AccelRange::G2,
            odr: Odr::Hz100,
        }
    }
}

// ── Samples ───────────────────────────────────────────────────

/// Sign-extended 14-bit counts per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

/// Acceleration in g.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Acceleration {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Sign-extend the low `bits` bits of `val` to an `i16`.
///
/// `bits` is meaningful in `1..=16`; values outside are clamped to it.
/// Bits of `val` above `bits` are ignored.
pub fn twos_comp_to_i16(val: u16, bits: u8) -> i16 {
    debug_assert!((1..=16).contains(&bits), "width {bits} outside 1..=16");
    let shift = 16 - u32::from(bits.clamp(1, 16));
    ((val << shift) as i16) >> shift
}

/// Decode a 6-byte `OUT_X_MSB..OUT_Z_LSB` burst.
pub fn decode_sample(data: &[u8; 6]) -> RawSample {
    let axis = |msb: u8, lsb: u8| twos_comp_to_i16(u16::from_be_bytes([msb, lsb]) >> 2, SAMPLE_BITS);
    RawSample {
        x: axis(data[0], data[1]),
        y: axis(data[2], data[3]),
        z: axis(data[4], data[5]),
    }
}

pub fn convert_to_g(raw: i16, range: AccelRange) -> f32 {
    raw as f32 / range.sensitivity()
}

// ── Driver ────────────────────────────────────────────────────

pub struct Mma8451q<I2C> {
    i2c: I2C,
    address: u8,
    range: AccelRange,
}

impl<I2C: I2c> Mma8451q<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            range: AccelRange::default(),
        }
    }

    pub fn write_register(&mut self, reg: u8, value: u8) -> Result<()> {
        self.i2c
            .write(self.address, &[reg, value])
            .map_err(|e| BusError::i2c_write(self.address, &e).into())
    }

    pub fn read_register(&mut self, reg: u8, buf: &mut [u8]) -> Result<()> {
        self.i2c
            .write_read(self.address, &[reg], buf)
            .map_err(|e| BusError::i2c_read(self.address, reg, &e).into())
    }

    fn read_u8(&mut self, reg: u8) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.read_register(reg, &mut buf)?;
        Ok(buf[0])
    }

    /// Probe, drop to standby, program range and data rate, then go ACTIVE.
    ///
    /// Range and ODR can only change in standby, hence the
    /// read-modify-write dance on CTRL_REG1.
    pub fn init<D: DelayNs>(&mut self, settings: &AccelSettings, delay: &mut D) -> Result<()> {
        info!("Initializing MMA8451Q...");

        let id = self.read_u8(reg::WHO_AM_I)?;
        if id != settings.who_am_i {
            return Err(AccelError::WhoAmIMismatch {
                expected: settings.who_am_i,
                got: id,
            }
            .into());
        }
        info!("MMA8451Q found! WHO_AM_I: 0x{:02X}", id);

        let ctrl1 = self.read_u8(reg::CTRL_REG1)?;
        self.write_register(reg::CTRL_REG1, ctrl1 & !CTRL1_ACTIVE)?;
        delay.delay_ms(STANDBY_SETTLE_MS);

        let xyz = self.read_u8(reg::XYZ_DATA_CFG)?;
        self.write_register(reg::XYZ_DATA_CFG, (xyz & !XYZ_FS_MASK) | settings.range.bits())?;
        self.range = settings.range;
        info!("Set accelerometer range to {}g", settings.range.full_scale_g());

        let ctrl1 = self.read_u8(reg::CTRL_REG1)?;
        self.write_register(
            reg::CTRL_REG1,
            (ctrl1 & !CTRL1_DR_MASK) | (settings.odr.bits() << CTRL1_DR_SHIFT) | CTRL1_ACTIVE,
        )?;
        info!("MMA8451Q activated.");
        Ok(())
    }

    /// Burst-read all three axes.
    pub fn read_raw(&mut self) -> Result<RawSample> {
        let mut data = [0u8; 6];
        self.read_register(reg::OUT_X_MSB, &mut data)?;
        Ok(decode_sample(&data))
    }

    /// Read all three axes scaled by the configured range.
    pub fn read_g(&mut self) -> Result<Acceleration> {
        let raw = self.read_raw()?;
        Ok(Acceleration {
            x: convert_to_g(raw.x, self.range),
            y: convert_to_g(raw.y, self.range),
            z: convert_to_g(raw.z, self.range),
        })
    }

    pub fn range(&self) -> AccelRange {
        self.range
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}
