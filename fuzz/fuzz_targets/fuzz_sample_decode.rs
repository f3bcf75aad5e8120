//! Fuzz target: accelerometer sample decoding
//!
//! Feeds arbitrary 6-byte bursts through `decode_sample` and the g
//! conversion, asserting every axis stays inside 14 signed bits and
//! inside the selected full scale.
//!
//! cargo fuzz run fuzz_sample_decode

#![no_main]

use devboard::drivers::mma8451q::{AccelRange, convert_to_g, decode_sample};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(burst) = <[u8; 6]>::try_from(rest.get(..6).unwrap_or_default()) else {
        return;
    };

    let range = match selector % 3 {
        0 => AccelRange::G2,
        1 => AccelRange::G4,
        _ => AccelRange::G8,
    };

    let s = decode_sample(&burst);
    for raw in [s.x, s.y, s.z] {
        assert!((-8192..=8191).contains(&raw), "sample {raw} wider than 14 bits");
        let g = convert_to_g(raw, range);
        let fs = f32::from(range.full_scale_g());
        assert!(g >= -fs && g < fs, "{g} g outside ±{fs} g");
    }
});
