//! Peripheral drivers and board bring-up.
//!
//! Everything except `hw_init` is generic over `embedded-hal` 1.0 and runs
//! on the host under test.

pub mod display_patterns;
pub mod ht16k33;
#[cfg(feature = "rp2350")]
pub mod hw_init;
pub mod inputs;
pub mod mma8451q;
pub mod segments;
pub mod shift_register;
pub mod status_led;
