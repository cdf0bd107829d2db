//! # framescan
//!
//! A diagnostic scanner for MPEG audio elementary streams (MP3). The
//! library walks a byte stream looking for the 11-set-bit frame sync
//! marker, decodes each candidate 32-bit frame header into typed fields,
//! and classifies it as valid or invalid per the MPEG-1/2/2.5
//! Layer I/II/III header rules.
//!
//! This is an auditing tool, not a decoder: a header that passes every
//! check is "spec-valid", which is a heuristic signal only. Random binary
//! data can incidentally satisfy all checks.

pub mod error;
pub mod header;
pub mod reader;
pub mod sync;
pub mod tables;
pub mod types;
pub mod validate;

pub use error::{ScanError, ScanResult};
pub use header::FrameHeader;
pub use reader::ByteReader;
pub use sync::{find_frame_sync, SyncPlacement};
pub use types::{AudioVersion, Bitrate, ChannelMode, Emphasis, Layer, SampleRate};
pub use validate::{validate_frame_header, FrameInvalidationReason};
