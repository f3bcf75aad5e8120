//! Canned display animations used for the boot self-test.
//!
//! | Animation  | What it exercises                        | Default timing       |
//! |------------|------------------------------------------|----------------------|
//! | Snake      | every outer segment, digit addressing    | 100 ms / frame       |
//! | Propeller  | the eight centre/diagonal segments       | 155 ms → 20 ms       |
//! | Fade       | the 16 PWM dimming steps                 | 30 ms / step         |
//! | Words      | the character table                      | 500 ms / word        |
//!
//! Frames are plain data so the sequences can be checked without a panel.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::drivers::ht16k33::{Ht16k33, MAX_BRIGHTNESS, NUM_DIGITS};
use crate::drivers::segments::{INNER_SWEEP, SEG_A, SEG_B, SEG_C, SEG_D, SEG_E, SEG_F, SEG_G, SELF_TEST};
use crate::error::Result;

/// One animation frame: digit writes applied in order, then one delay.
pub type Frame = &'static [(usize, u16)];

/// A single lit segment chasing around the four digits: along the top,
/// down the right, back along the middle, down the left, along the bottom,
/// up the right, back along the middle, up the left.
pub const SNAKE: [Frame; 20] = [
    &[(0, SEG_A)],
    &[(1, SEG_A), (0, 0)],
    &[(2, SEG_A), (1, 0)],
    &[(3, SEG_A), (2, 0)],
    &[(3, SEG_B)],
    &[(3, SEG_G)],
    &[(2, SEG_G), (3, 0)],
    &[(1, SEG_G), (2, 0)],
    &[(0, SEG_G), (1, 0)],
    &[(0, SEG_E)],
    &[(0, SEG_D)],
    &[(1, SEG_D), (0, 0)],
    &[(2, SEG_D), (1, 0)],
    &[(3, SEG_D), (2, 0)],
    &[(3, SEG_C)],
    &[(3, SEG_G)],
    &[(2, SEG_G), (3, 0)],
    &[(1, SEG_G), (2, 0)],
    &[(0, SEG_G), (1, 0)],
    &[(0, SEG_F)],
];

/// First propeller round frame time; each round is 15 ms quicker.
pub const PROPELLER_START_MS: u32 = 155;
pub const PROPELLER_STEP_MS: u32 = 15;
pub const PROPELLER_ROUNDS: u32 = 10;

pub const FADE_STEP_MS: u32 = 30;

pub const DEFAULT_WORDS: [&str; 8] = ["Help", "I am", "in a", "Pico", "and ", "Cant", "get ", "out "];

pub fn snake<I2C: I2c, D: DelayNs>(
    display: &mut Ht16k33<I2C>,
    delay: &mut D,
    step_ms: u32,
) -> Result<()> {
    display.clear_all()?;
    for frame in SNAKE {
        for &(position, bits) in frame {
            display.display_set(position, bits)?;
        }
        delay.delay_ms(step_ms);
    }
    display.clear_all()
}

/// Frame time for propeller round `round`, floored at zero.
pub fn propeller_frame_ms(round: u32) -> u32 {
    PROPELLER_START_MS.saturating_sub(round * PROPELLER_STEP_MS)
}

/// Spin the centre segments on every digit, speeding up each round.
pub fn propeller<I2C: I2c, D: DelayNs>(
    display: &mut Ht16k33<I2C>,
    delay: &mut D,
    rounds: u32,
) -> Result<()> {
    for round in 0..rounds {
        for bits in INNER_SWEEP {
            for position in 0..NUM_DIGITS {
                display.display_set(position, bits)?;
            }
            delay.delay_ms(propeller_frame_ms(round));
        }
    }
    Ok(())
}

/// Ramp brightness up 0→14 and back down to 0, `cycles` times.
pub fn fade<I2C: I2c, D: DelayNs>(
    display: &mut Ht16k33<I2C>,
    delay: &mut D,
    cycles: u32,
    step_ms: u32,
) -> Result<()> {
    for _ in 0..cycles {
        for level in 0..MAX_BRIGHTNESS {
            display.set_brightness(level)?;
            delay.delay_ms(step_ms);
        }
        for level in (0..MAX_BRIGHTNESS).rev() {
            display.set_brightness(level)?;
            delay.delay_ms(step_ms);
        }
    }
    Ok(())
}

pub fn show_words<I2C: I2c, D: DelayNs>(
    display: &mut Ht16k33<I2C>,
    delay: &mut D,
    words: &[&str],
    hold_ms: u32,
) -> Result<()> {
    for word in words {
        display.display_string(word)?;
        delay.delay_ms(hold_ms);
    }
    Ok(())
}

/// Light the outer ring and middle bar of every digit.
pub fn all_segments_on<I2C: I2c>(display: &mut Ht16k33<I2C>) -> Result<()> {
    for position in 0..NUM_DIGITS {
        display.display_set(position, SELF_TEST)?;
    }
    Ok(())
}
