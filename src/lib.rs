//! Dev-board bring-up demo library.
//!
//! Drivers for the board's HT16K33 display, MMA8451Q accelerometer,
//! 74HC595 chain, buttons and LEDs, plus the demo loop that ties them
//! together. Everything is `no_std` and generic over `embedded-hal`, so
//! the whole crate is exercised on the host. Board bring-up lives behind
//! the `rp2350` feature.

#![cfg_attr(not(test), no_std)]
#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;

pub use error::{Error, Result};
