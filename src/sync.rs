//! Frame-sync search
//!
//! Every MPEG audio frame header begins with 11 consecutive set bits: a
//! fully-set byte followed by a byte whose 3 most significant bits are
//! set. The scanner advances the cursor byte by byte until it confirms
//! such a pair, or the input runs out.

use std::io::Read;

use crate::error::ScanResult;
use crate::reader::ByteReader;

/// A byte with all 8 bits set, the first byte of every frame sync
pub const SYNC_BYTE: u8 = 0xFF;
/// Mask for the 3 sync-continuation bits in the second header byte
pub const SYNC_CONTINUATION_MASK: u8 = 0b1110_0000;

/// Where to leave the cursor after a confirmed sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPlacement {
    /// Cursor just past the fully-set byte; decoding continues with the
    /// 3 remaining header bytes
    AfterSyncByte,
    /// Cursor restored onto the fully-set byte itself
    OnSyncByte,
}

/// Advance the cursor to the next frame-sync marker
///
/// Returns `Ok(true)` on a confirmed sync, with the cursor placed per
/// `placement`, or `Ok(false)` when the input is exhausted first. A
/// trailing `0xFF` with nothing after it cannot be confirmed and is not
/// reported as a match.
pub fn find_frame_sync<R: Read>(
    reader: &mut ByteReader<R>,
    placement: SyncPlacement,
) -> ScanResult<bool> {
    while let Some(byte) = reader.read_byte()? {
        if byte != SYNC_BYTE {
            continue;
        }

        let next = match reader.peek_byte()? {
            Some(next) => next,
            // candidate at end of input, cannot be confirmed
            None => return Ok(false),
        };

        if next & SYNC_CONTINUATION_MASK != SYNC_CONTINUATION_MASK {
            // Not a continuation, and a byte without its top 3 bits set
            // cannot start a sync either, so consume it. The byte after
            // it may still continue a later candidate, so nothing more
            // is skipped.
            reader.read_byte()?;
            continue;
        }

        log::trace!(
            "frame sync confirmed, continuation byte 0x{:02X} at offset 0x{:X}",
            next,
            reader.position()
        );

        if placement == SyncPlacement::OnSyncByte {
            reader.push_back(SYNC_BYTE);
        }
        return Ok(true);
    }

    Ok(false)
}
