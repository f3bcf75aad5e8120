//! Fuzz target: `Ht16k33::scroll_string`
//!
//! Drives arbitrary UTF-8 through the scroll path (multi-byte characters
//! included) against a bus that accepts every write, asserting it never
//! panics on a char boundary and never addresses a fifth digit.
//!
//! cargo fuzz run fuzz_display_text

#![no_main]

use core::convert::Infallible;

use devboard::drivers::ht16k33::Ht16k33;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorType, I2c, Operation};
use libfuzzer_sys::fuzz_target;

struct SinkBus;

impl ErrorType for SinkBus {
    type Error = Infallible;
}

impl I2c for SinkBus {
    fn transaction(&mut self, _addr: u8, ops: &mut [Operation<'_>]) -> Result<(), Infallible> {
        for op in ops {
            if let Operation::Write([ptr, _, _]) = op {
                assert!(*ptr < 8, "digit pointer {ptr} past the fourth digit");
            }
        }
        Ok(())
    }
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

fuzz_target!(|text: &str| {
    let mut display = Ht16k33::new(SinkBus, 0x70);
    let _ = display.scroll_string(text, 1, &mut NoDelay);
    let _ = display.display_string(text);
});
