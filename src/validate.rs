//! Frame header legality checks
//!
//! A decoded header either passes every check or yields exactly one
//! invalidation reason, the first to match in a fixed order. Validation
//! outcomes are results the scan reports and moves past, not errors.

use std::fmt;

use crate::header::FrameHeader;
use crate::types::{AudioVersion, Bitrate, ChannelMode, Emphasis, Layer, SampleRate};

/// Why a decoded frame header failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameInvalidationReason {
    /// Version field holds the reserved code point
    InvalidMpegVersion,
    /// Layer field holds the reserved code point
    InvalidLayer,
    /// Bitrate index `0b1111`, illegal for every version and layer
    InvalidBitrateForVersion,
    /// Sample-rate index `0b11`, reserved for every version
    InvalidSampleRateForVersion,
    /// Layer II combination of bitrate and channel mode the spec forbids
    InvalidLayerIiBitrateAndMode,
    /// Emphasis field holds the reserved code point
    InvalidEmphasis,
}

impl fmt::Display for FrameInvalidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FrameInvalidationReason::InvalidMpegVersion => "reserved MPEG version",
            FrameInvalidationReason::InvalidLayer => "reserved layer",
            FrameInvalidationReason::InvalidBitrateForVersion => "illegal bitrate index",
            FrameInvalidationReason::InvalidSampleRateForVersion => "reserved sample-rate index",
            FrameInvalidationReason::InvalidLayerIiBitrateAndMode => {
                "forbidden Layer II bitrate/mode combination"
            }
            FrameInvalidationReason::InvalidEmphasis => "reserved emphasis",
        };
        f.write_str(text)
    }
}

/// Check a decoded header against the MPEG header legality rules
///
/// Returns `None` for a spec-valid header, or the single highest-priority
/// reason it is invalid. Checks short-circuit in order: version, layer,
/// bitrate, sample rate, Layer II exclusions, emphasis.
pub fn validate_frame_header(header: &FrameHeader) -> Option<FrameInvalidationReason> {
    if header.version == AudioVersion::Invalid {
        return Some(FrameInvalidationReason::InvalidMpegVersion);
    }

    if header.layer == Layer::Invalid {
        return Some(FrameInvalidationReason::InvalidLayer);
    }

    if header.bitrate() == Bitrate::Invalid {
        return Some(FrameInvalidationReason::InvalidBitrateForVersion);
    }

    if header.sample_rate() == SampleRate::Reserved {
        return Some(FrameInvalidationReason::InvalidSampleRateForVersion);
    }

    // Layer II forbids some bitrate/mode pairings. A free-format bitrate
    // has no table value and cannot trigger them.
    if header.layer == Layer::Layer2 {
        if let Bitrate::Bps(bps) = header.bitrate() {
            if header.channel_mode == ChannelMode::Single {
                if bps >= 224_000 {
                    return Some(FrameInvalidationReason::InvalidLayerIiBitrateAndMode);
                }
            } else if (32_000..=56_000).contains(&bps) || bps == 80_000 {
                return Some(FrameInvalidationReason::InvalidLayerIiBitrateAndMode);
            }
        }
    }

    if header.emphasis == Emphasis::Invalid {
        return Some(FrameInvalidationReason::InvalidEmphasis);
    }

    None
}
