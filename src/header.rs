//! Frame header decoding
//!
//! An MPEG audio frame header is exactly 4 bytes. Fields are unpacked with
//! explicit shifts and masks against the raw bytes, most significant bit
//! first, per the layout:
//!
//! ```text
//! byte 0: AAAAAAAA   sync byte, all bits set
//! byte 1: AAABBCCD   3 sync bits, version, layer, protection
//! byte 2: EEEEFFGH   bitrate index, sample-rate index, padding, private
//! byte 3: IIJJKLMM   channel mode, mode extension, copyright, original,
//!                    emphasis
//! ```
//!
//! Bit-field structs are deliberately not used here; their in-memory
//! ordering is compiler-specific.

use std::io::Read;

use crate::error::ScanResult;
use crate::reader::ByteReader;
use crate::tables::{resolve_bitrate, resolve_sample_rate};
use crate::types::{AudioVersion, Bitrate, ChannelMode, Emphasis, Layer, SampleRate};

/// Serialized size of a frame header in bytes
pub const HEADER_SIZE: usize = 4;

/// A decoded MPEG audio frame header
///
/// Ephemeral: decoded from a 4-byte window, reported, and discarded. The
/// sync bits themselves are not re-checked here; the scanner already
/// matched them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub version: AudioVersion,
    pub layer: Layer,
    /// Set means no 16-bit CRC follows the header
    pub protection: bool,
    /// Raw 4-bit index, resolve with [`FrameHeader::bitrate`]
    pub bitrate_index: u8,
    /// Raw 2-bit index, resolve with [`FrameHeader::sample_rate`]
    pub sample_rate_index: u8,
    /// Frame carries one extra padding slot
    pub padding: bool,
    /// Informational only
    pub private: bool,
    pub channel_mode: ChannelMode,
    /// Raw 2 bits, meaningful only for joint stereo and then
    /// layer-dependent; carried opaquely
    pub mode_extension: u8,
    pub copyright: bool,
    /// Frame is on its original medium rather than a copy
    pub original: bool,
    pub emphasis: Emphasis,
}

impl FrameHeader {
    /// Decode a full 4-byte header window
    pub fn from_bytes(bytes: [u8; HEADER_SIZE]) -> Self {
        Self::from_tail([bytes[1], bytes[2], bytes[3]])
    }

    /// Decode the 3 header bytes that follow an already-consumed sync byte
    pub fn from_tail(tail: [u8; HEADER_SIZE - 1]) -> Self {
        let [b1, b2, b3] = tail;
        Self {
            version: AudioVersion::from_bits(b1 >> 3),
            layer: Layer::from_bits(b1 >> 1),
            protection: b1 & 0b0000_0001 != 0,
            bitrate_index: b2 >> 4,
            sample_rate_index: (b2 >> 2) & 0b11,
            padding: b2 & 0b0000_0010 != 0,
            private: b2 & 0b0000_0001 != 0,
            channel_mode: ChannelMode::from_bits(b3 >> 6),
            mode_extension: (b3 >> 4) & 0b11,
            copyright: b3 & 0b0000_1000 != 0,
            original: b3 & 0b0000_0100 != 0,
            emphasis: Emphasis::from_bits(b3),
        }
    }

    /// Read the remainder of a header after a consuming sync match
    ///
    /// Returns `Ok(None)` when fewer than 3 bytes remain: a truncated
    /// header ends the scan rather than being reported as invalid.
    pub fn read_after_sync<R: Read>(reader: &mut ByteReader<R>) -> ScanResult<Option<Self>> {
        let mut tail = [0u8; HEADER_SIZE - 1];
        let filled = reader.read_into(&mut tail)?;
        if filled < tail.len() {
            log::debug!(
                "header truncated, {} of {} bytes available",
                filled,
                tail.len()
            );
            return Ok(None);
        }
        Ok(Some(Self::from_tail(tail)))
    }

    /// Read a full 4-byte header, for use after a non-consuming sync match
    pub fn read_from<R: Read>(reader: &mut ByteReader<R>) -> ScanResult<Option<Self>> {
        let mut bytes = [0u8; HEADER_SIZE];
        let filled = reader.read_into(&mut bytes)?;
        if filled < bytes.len() {
            return Ok(None);
        }
        Ok(Some(Self::from_bytes(bytes)))
    }

    /// Bitrate resolved against the version/layer tables
    pub fn bitrate(&self) -> Bitrate {
        resolve_bitrate(self.version, self.layer, self.bitrate_index)
    }

    /// Sample rate resolved against the version tables
    pub fn sample_rate(&self) -> SampleRate {
        resolve_sample_rate(self.version, self.sample_rate_index)
    }

    /// True when a 16-bit CRC follows the header (not verified here)
    pub fn has_crc(&self) -> bool {
        !self.protection
    }

    pub fn version_str(&self) -> &'static str {
        self.version.as_str()
    }

    pub fn layer_str(&self) -> &'static str {
        self.layer.as_str()
    }

    /// Human-readable bitrate, e.g. `"128 kbps"` or `"free format"`
    pub fn bitrate_str(&self) -> String {
        self.bitrate().to_string()
    }

    /// Human-readable sample rate, e.g. `"44100 Hz"`
    pub fn sample_rate_str(&self) -> String {
        self.sample_rate().to_string()
    }
}
