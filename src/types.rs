//! Typed values for MPEG audio frame header fields
//!
//! Each multi-bit header field decodes to one of the enums below. Raw code
//! points follow the MPEG audio header layout:
//!
//! ```text
//! AAAAAAAA AAABBCCD EEEEFFGH IIJJKLMM
//! A = frame sync (11 bits)     E = bitrate index (4 bits)
//! B = version (2 bits)         F = sample rate index (2 bits)
//! C = layer (2 bits)           I = channel mode (2 bits)
//! D = protection bit           M = emphasis (2 bits)
//! ```

use std::fmt;

/// MPEG standard version (header bits `B`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioVersion {
    /// `0b00`
    Mpeg25,
    /// `0b01`, reserved code point
    Invalid,
    /// `0b10`
    Mpeg2,
    /// `0b11`
    Mpeg1,
}

impl AudioVersion {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => AudioVersion::Mpeg25,
            0b01 => AudioVersion::Invalid,
            0b10 => AudioVersion::Mpeg2,
            _ => AudioVersion::Mpeg1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AudioVersion::Mpeg1 => "1",
            AudioVersion::Mpeg2 => "2",
            AudioVersion::Mpeg25 => "2.5",
            AudioVersion::Invalid => "INVALID",
        }
    }
}

/// MPEG audio compression layer (header bits `C`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// `0b00`, reserved code point
    Invalid,
    /// `0b01`
    Layer3,
    /// `0b10`
    Layer2,
    /// `0b11`
    Layer1,
}

impl Layer {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Layer::Invalid,
            0b01 => Layer::Layer3,
            0b10 => Layer::Layer2,
            _ => Layer::Layer1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Layer1 => "1",
            Layer::Layer2 => "2",
            Layer::Layer3 => "3",
            Layer::Invalid => "INVALID",
        }
    }
}

/// Channel mode (header bits `I`); all four code points are legal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMode {
    /// `0b00`
    Stereo,
    /// `0b01`, joint stereo
    Joint,
    /// `0b10`, two independent mono channels
    Dual,
    /// `0b11`, mono
    Single,
}

impl ChannelMode {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => ChannelMode::Stereo,
            0b01 => ChannelMode::Joint,
            0b10 => ChannelMode::Dual,
            _ => ChannelMode::Single,
        }
    }
}

/// De-emphasis instruction to the decoder (header bits `M`)
///
/// `0b10` is the reserved code point; `0b11` (CCITT J.17) is legal but
/// rarely seen in the wild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// `0b00`
    None,
    /// `0b01`, 50/15 microseconds
    Ms5015,
    /// `0b10`, reserved code point
    Invalid,
    /// `0b11`
    CcittJ17,
}

impl Emphasis {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Emphasis::None,
            0b01 => Emphasis::Ms5015,
            0b10 => Emphasis::Invalid,
            _ => Emphasis::CcittJ17,
        }
    }
}

/// Resolved bitrate for a (version, layer, index) triple
///
/// Index 0 is "free format": the encoder chose a bitrate outside the
/// standard table, which is unusual but not illegal. Only index `0b1111`
/// is invalid everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bitrate {
    /// Standard table bitrate in bits per second
    Bps(u32),
    /// Index 0, bitrate determined out of band
    FreeFormat,
    /// Index `0b1111`, always illegal
    Invalid,
}

impl fmt::Display for Bitrate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bitrate::Bps(bps) => write!(f, "{} kbps", bps / 1000),
            Bitrate::FreeFormat => write!(f, "free format"),
            Bitrate::Invalid => write!(f, "INVALID"),
        }
    }
}

/// Resolved sample rate for a (version, index) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleRate {
    /// Sample rate in Hz
    Hz(u32),
    /// Index `0b11`, reserved for every version
    Reserved,
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleRate::Hz(hz) => write!(f, "{} Hz", hz),
            SampleRate::Reserved => write!(f, "RESERVED"),
        }
    }
}
