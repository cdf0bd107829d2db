//! Bitrate and sample-rate lookup tables
//!
//! Static tables from the MPEG audio specification resolving the 4-bit
//! bitrate index and the 2-bit sample-rate index to real values. MPEG-2
//! and MPEG-2.5 share one bitrate table; sample rates differ across all
//! three versions.

use crate::types::{AudioVersion, Bitrate, Layer, SampleRate};

/// Table sentinel: index 0, free-format bitrate
pub const BITRATE_FREE: i32 = 0;
/// Table sentinel: illegal bitrate index
pub const BITRATE_INVALID: i32 = -1;
/// Table sentinel: reserved sample-rate index
pub const SAMPLE_RATE_RESERVED: i32 = -1;

/// Bitrate in bits per second, keyed by `[version_class][layer][index]`
/// where class 0 is MPEG-1 and class 1 covers MPEG-2 and MPEG-2.5
pub const BITRATE_BPS: [[[i32; 16]; 3]; 2] = [
    // MPEG-1
    [
        // Layer I
        [
            BITRATE_FREE, 32_000, 64_000, 96_000, 128_000, 160_000, 192_000, 224_000,
            256_000, 288_000, 320_000, 352_000, 384_000, 416_000, 448_000, BITRATE_INVALID,
        ],
        // Layer II
        [
            BITRATE_FREE, 32_000, 48_000, 56_000, 64_000, 80_000, 96_000, 112_000,
            128_000, 160_000, 192_000, 224_000, 256_000, 320_000, 384_000, BITRATE_INVALID,
        ],
        // Layer III
        [
            BITRATE_FREE, 32_000, 40_000, 48_000, 56_000, 64_000, 80_000, 96_000,
            112_000, 128_000, 160_000, 192_000, 224_000, 256_000, 320_000, BITRATE_INVALID,
        ],
    ],
    // MPEG-2 / MPEG-2.5
    [
        // Layer I
        [
            BITRATE_FREE, 32_000, 48_000, 56_000, 64_000, 80_000, 96_000, 112_000,
            128_000, 144_000, 160_000, 176_000, 192_000, 224_000, 256_000, BITRATE_INVALID,
        ],
        // Layer II
        [
            BITRATE_FREE, 8_000, 16_000, 24_000, 32_000, 40_000, 48_000, 56_000,
            64_000, 80_000, 96_000, 112_000, 128_000, 144_000, 160_000, BITRATE_INVALID,
        ],
        // Layer III
        [
            BITRATE_FREE, 8_000, 16_000, 24_000, 32_000, 40_000, 48_000, 56_000,
            64_000, 80_000, 96_000, 112_000, 128_000, 144_000, 160_000, BITRATE_INVALID,
        ],
    ],
];

/// Sample rate in Hz, keyed by `[version][index]`
pub const SAMPLE_RATE_HZ: [[i32; 4]; 3] = [
    // MPEG-1
    [44_100, 48_000, 32_000, SAMPLE_RATE_RESERVED],
    // MPEG-2
    [22_050, 24_000, 16_000, SAMPLE_RATE_RESERVED],
    // MPEG-2.5
    [11_025, 12_000, 8_000, SAMPLE_RATE_RESERVED],
];

/// Resolve a raw 4-bit bitrate index against the tables
///
/// Resolution is total: a reserved version or layer still selects a table
/// row (the non-MPEG-1 class / Layer III column, matching the fallthrough
/// indexing the tables were designed around). Callers reject reserved
/// versions and layers before the resolved bitrate matters.
pub fn resolve_bitrate(version: AudioVersion, layer: Layer, index: u8) -> Bitrate {
    let class = match version {
        AudioVersion::Mpeg1 => 0,
        _ => 1,
    };
    let row = match layer {
        Layer::Layer1 => 0,
        Layer::Layer2 => 1,
        _ => 2,
    };
    match BITRATE_BPS[class][row][(index & 0x0F) as usize] {
        BITRATE_INVALID => Bitrate::Invalid,
        BITRATE_FREE => Bitrate::FreeFormat,
        bps => Bitrate::Bps(bps as u32),
    }
}

/// Resolve a raw 2-bit sample-rate index against the tables
///
/// A reserved version has no sample-rate row; it resolves to the reserved
/// sentinel.
pub fn resolve_sample_rate(version: AudioVersion, index: u8) -> SampleRate {
    let row = match version {
        AudioVersion::Mpeg1 => 0,
        AudioVersion::Mpeg2 => 1,
        AudioVersion::Mpeg25 => 2,
        AudioVersion::Invalid => return SampleRate::Reserved,
    };
    match SAMPLE_RATE_HZ[row][(index & 0b11) as usize] {
        SAMPLE_RATE_RESERVED => SampleRate::Reserved,
        hz => SampleRate::Hz(hz as u32),
    }
}
