//! 14-segment character encoding.
//!
//! Bit layout of one digit word as wired on the backpack:
//!
//! ```text
//!      ---a---
//!     |\  |  /|
//!     f h j k b        a..f  bits 0..=5
//!     |  \|/  |        g1,g2 bits 6, 7
//!      -g1 g2-         h..n  bits 8..=13
//!     |  /|\  |
//!     e n m l c
//!     |/  |  \|
//!      ---d---
//! ```
//!
//! Digit glyphs only use bits 0..=6, so they render as plain 7-segment
//! shapes with the left half of the middle bar.

/// Outer ring and the two halves of the middle bar.
pub const SEG_A: u16 = 1;
pub const SEG_B: u16 = 2;
pub const SEG_C: u16 = 4;
pub const SEG_D: u16 = 8;
pub const SEG_E: u16 = 16;
pub const SEG_F: u16 = 32;
pub const SEG_G: u16 = 64;
pub const SEG_G2: u16 = 128;

/// Centre/diagonal segments in rotation order, one full sweep of a
/// propeller around the digit centre.
pub const INNER_SWEEP: [u16; 8] = [0x40, 0x0100, 0x0200, 0x0400, 0x80, 0x2000, 0x1000, 0x0800];

/// Boot self-test word: outer ring and middle bar lit.
pub const SELF_TEST: u16 = 0xFF;

const ALPHA: [u16; 26] = [
    0xF7, 0x128F, 0x39, 0x120F, 0xF9, 0xF1, 0xBD, 0xF6, 0x1209, 0x1E, 0x2470, 0x38, 0x536, 0x2136,
    0x3F, 0xF3, 0x203F, 0x20F3, 0x18D, 0x1201, 0x3E, 0xC30, 0x2836, 0x2D00, 0x1500, 0xC09,
];

const NUM: [u16; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

/// Segment pattern for `ch`. Letters are case-insensitive; anything that
/// is not an ASCII letter or digit renders blank.
pub fn char_to_pattern(ch: char) -> u16 {
    if ch.is_ascii_alphabetic() {
        return ALPHA[(ch.to_ascii_uppercase() as u8 - b'A') as usize];
    }
    if ch.is_ascii_digit() {
        return NUM[(ch as u8 - b'0') as usize];
    }
    0
}
