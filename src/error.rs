//! Unified error types for the dev-board demo.
//!
//! A single `Error` enum that every driver converts into, keeping the
//! demo loop's error handling uniform. All variants are `Copy` so they
//! can ride along inside [`AppEvent`](crate::app::events::AppEvent)s
//! without allocation.
//!
//! HAL-specific bus errors are reduced to the portable `embedded-hal`
//! [`ErrorKind`](embedded_hal::i2c::ErrorKind)s at the driver boundary.

use core::fmt;

use embedded_hal::{digital, i2c, spi};

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the demo funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An I²C, SPI or GPIO transfer failed.
    Bus(BusError),
    /// The accelerometer answered, but not the way we expected.
    Accel(AccelError),
    /// A display operation was given bad arguments.
    Display(DisplayError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "bus: {e}"),
            Self::Accel(e) => write!(f, "accelerometer: {e}"),
            Self::Display(e) => write!(f, "display: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Bus errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// Plain write to `addr` failed.
    I2cWrite { addr: u8, kind: i2c::ErrorKind },
    /// Register-address write or data read from `addr` failed.
    I2cRead {
        addr: u8,
        reg: u8,
        kind: i2c::ErrorKind,
    },
    Spi(spi::ErrorKind),
    Gpio(digital::ErrorKind),
}

impl BusError {
    pub fn i2c_write<E: i2c::Error>(addr: u8, e: &E) -> Self {
        Self::I2cWrite {
            addr,
            kind: e.kind(),
        }
    }

    pub fn i2c_read<E: i2c::Error>(addr: u8, reg: u8, e: &E) -> Self {
        Self::I2cRead {
            addr,
            reg,
            kind: e.kind(),
        }
    }

    pub fn spi<E: spi::Error>(e: &E) -> Self {
        Self::Spi(e.kind())
    }

    pub fn gpio<E: digital::Error>(e: &E) -> Self {
        Self::Gpio(e.kind())
    }
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I2cWrite { addr, kind } => {
                write!(f, "I2C write to 0x{addr:02X} failed ({kind})")
            }
            Self::I2cRead { addr, reg, kind } => {
                write!(f, "I2C read of 0x{addr:02X}[0x{reg:02X}] failed ({kind})")
            }
            Self::Spi(kind) => write!(f, "SPI transfer failed ({kind})"),
            Self::Gpio(kind) => write!(f, "GPIO access failed ({kind:?})"),
        }
    }
}

impl From<BusError> for Error {
    fn from(e: BusError) -> Self {
        Self::Bus(e)
    }
}

// ---------------------------------------------------------------------------
// Accelerometer errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccelError {
    /// WHO_AM_I returned an unexpected identification byte.
    WhoAmIMismatch { expected: u8, got: u8 },
}

impl fmt::Display for AccelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WhoAmIMismatch { expected, got } => write!(
                f,
                "not found or WHO_AM_I mismatch (expected 0x{expected:02X}, got 0x{got:02X})"
            ),
        }
    }
}

impl From<AccelError> for Error {
    fn from(e: AccelError) -> Self {
        Self::Accel(e)
    }
}

// ---------------------------------------------------------------------------
// Display errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// Digit position past the last digit of the panel.
    PositionOutOfRange(u8),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionOutOfRange(p) => write!(f, "digit position {p} out of range"),
        }
    }
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Self::Display(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
