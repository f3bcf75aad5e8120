//! GPIO / peripheral pin assignments for the RP2350B dev board.
//!
//! Single source of truth. `drivers::hw_init` checks the peripherals it
//! claims against these numbers at compile time, and the bus addresses
//! are used directly by the firmware.
//!
//! ```text
//!   GPIO 20 ── SDA ─┬─ HT16K33 (0x70)   4-digit 14-segment backpack
//!   GPIO 21 ── SCL ─┴─ MMA8451Q (0x1C)  accelerometer
//!
//!   GPIO 34 ── SH_CP ─┐
//!   GPIO 35 ── DS ────┼─ 74HC595 x3 (switch mirror LEDs)
//!   GPIO 36 ── ST_CP ─┤
//!   GPIO 37 ── /OE ───┤
//!   GPIO 38 ── /MR ───┘
//! ```
//!
//! The display panel must accept 3.3 V logic on its I²C side; the RP2350
//! GPIO bank is not 5 V tolerant.

// ---------------------------------------------------------------------------
// I²C bus (HT16K33 display + MMA8451Q accelerometer)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: u8 = 20;
pub const I2C_SCL_GPIO: u8 = 21;

/// HT16K33 default address. Solder jumpers on the backpack select
/// `0x70..=0x77`.
pub const HT16K33_ADDRESS: u8 = 0x70;
/// MMA8451Q address with SA0 tied low.
pub const MMA8451Q_ADDRESS: u8 = 0x1C;

// ---------------------------------------------------------------------------
// SPI0 → 74HC595 shift-register chain
// ---------------------------------------------------------------------------

/// SPI0 RX. The 74HC595 has no serial output wired back, but the SPI block
/// still owns the pin.
pub const SPI_MISO_GPIO: u8 = 4;
/// Plain SIO pin; not toggled by transfers.
pub const SPI_CS_GPIO: u8 = 5;
/// Shift clock (SPI0 SCK).
pub const SR_SHCP_GPIO: u8 = 34;
/// Serial data in (SPI0 TX).
pub const SR_DS_GPIO: u8 = 35;
/// Storage-register clock (latch). Idle low, pulsed after each frame.
pub const SR_STCP_GPIO: u8 = 36;
/// Output enable, active low.
pub const SR_OE_GPIO: u8 = 37;
/// Master reset, active low.
pub const SR_MR_GPIO: u8 = 38;

/// Number of 74HC595s daisy-chained on the board.
pub const SHIFT_REGISTER_CHAIN_LEN: usize = 3;

// ---------------------------------------------------------------------------
// Push-buttons (internal pull-up; released = HIGH)
// ---------------------------------------------------------------------------

pub const BUTTON_GPIOS: [u8; 4] = [30, 31, 32, 33];

// ---------------------------------------------------------------------------
// Slide switches (internal pull-up; ON = LOW)
// ---------------------------------------------------------------------------

/// SW1 first; SW1 lands in bit 0 of the switch byte.
pub const SWITCH_GPIOS: [u8; 8] = [22, 23, 24, 25, 26, 27, 28, 29];

// ---------------------------------------------------------------------------
// Traffic-light status LEDs
// ---------------------------------------------------------------------------

pub const LED_RED_GPIO: u8 = 17;
pub const LED_YELLOW_GPIO: u8 = 16;
pub const LED_GREEN_GPIO: u8 = 15;
