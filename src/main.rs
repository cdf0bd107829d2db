//! MP3 frame-sync audit command line tool
//!
//! Scans an MP3 file for frame-sync markers, decodes each candidate
//! header, and reports it as valid or invalid with its stream offset.
//! The scan is byte-granular: after each header it resumes searching
//! immediately, rather than jumping ahead by computed frame length, so
//! misaligned or corrupt regions still get inspected.

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process;

use colored::Colorize;

use framescan::{
    find_frame_sync, validate_frame_header, ByteReader, FrameHeader, ScanResult, SyncPlacement,
};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        println!("Usage: {} <file.mp3>", args[0]);
        process::exit(1);
    }

    match scan_file(Path::new(&args[1])) {
        Ok(valid_frames) => {
            println!("Valid frame syncs: {}", valid_frames);
        }
        Err(e) => {
            eprintln!("framescan: {}", e);
            process::exit(1);
        }
    }
}

/// Scan one file end to end, printing a report line per candidate frame
///
/// Returns the number of headers that passed validation.
fn scan_file(path: &Path) -> ScanResult<usize> {
    let file = File::open(path)?;
    let mut reader = ByteReader::new(BufReader::new(file));
    let mut valid_frames = 0usize;

    while find_frame_sync(&mut reader, SyncPlacement::AfterSyncByte)? {
        let header = match FrameHeader::read_after_sync(&mut reader)? {
            Some(header) => header,
            // sync confirmed but the stream ended mid-header
            None => break,
        };

        // offset just past the header bytes, matching what a hex dump of
        // the following audio data would show
        let offset = reader.position();
        let detail = format!(
            "0x{:08X} (version: {}) (layer: {}) (bitrate: {}) (frequency: {})",
            offset,
            header.version_str(),
            header.layer_str(),
            header.bitrate_str(),
            header.sample_rate_str()
        );

        match validate_frame_header(&header) {
            None => {
                valid_frames += 1;
                println!("{}", format!("Valid frame sync found at: {}", detail).green());
            }
            Some(reason) => {
                log::debug!("frame at 0x{:X} rejected: {}", offset, reason);
                println!("{}", format!("Invalid frame sync found at: {}", detail).red());
            }
        }
    }

    Ok(valid_frames)
}
