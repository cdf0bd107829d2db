//! Unit tests for frame header decoding and table resolution

use std::io::Cursor;

use framescan::tables::{resolve_bitrate, resolve_sample_rate};
use framescan::{
    AudioVersion, Bitrate, ByteReader, ChannelMode, Emphasis, FrameHeader, Layer, SampleRate,
};

#[test]
fn test_decode_known_mpeg1_layer3_header() {
    // 0xFF 0xFB 0x90 0x64: a typical 128 kbps 44.1 kHz MPEG-1 Layer III
    // header as produced by common encoders
    let header = FrameHeader::from_bytes([0xFF, 0xFB, 0x90, 0x64]);

    assert_eq!(header.version, AudioVersion::Mpeg1);
    assert_eq!(header.layer, Layer::Layer3);
    assert!(header.protection, "protection bit set means no CRC follows");
    assert!(!header.has_crc());
    assert_eq!(header.bitrate_index, 0b1001);
    assert_eq!(header.bitrate(), Bitrate::Bps(128_000));
    assert_eq!(header.sample_rate_index, 0b00);
    assert_eq!(header.sample_rate(), SampleRate::Hz(44_100));
    assert!(!header.padding);
    assert!(!header.private);
    assert_eq!(header.channel_mode, ChannelMode::Joint);
    assert_eq!(header.mode_extension, 0b10);
    assert!(!header.copyright);
    assert!(header.original);
    assert_eq!(header.emphasis, Emphasis::None);
}

#[test]
fn test_tail_decode_matches_full_window_decode() {
    let full = FrameHeader::from_bytes([0xFF, 0xFB, 0x90, 0x64]);
    let tail = FrameHeader::from_tail([0xFB, 0x90, 0x64]);
    assert_eq!(full, tail);
}

#[test]
fn test_read_after_sync_consumes_three_bytes() {
    let mut reader = ByteReader::new(Cursor::new(vec![0xFBu8, 0x90, 0x64, 0xAA]));
    let header = FrameHeader::read_after_sync(&mut reader).unwrap().unwrap();

    assert_eq!(header.version, AudioVersion::Mpeg1);
    assert_eq!(reader.position(), 3);
    assert_eq!(reader.read_byte().unwrap(), Some(0xAA));
}

#[test]
fn test_non_consuming_sync_then_full_window_decode() {
    use framescan::{find_frame_sync, SyncPlacement};

    let data = vec![0x00u8, 0xFF, 0xFB, 0x90, 0x64];
    let mut reader = ByteReader::new(Cursor::new(data));

    assert!(find_frame_sync(&mut reader, SyncPlacement::OnSyncByte).unwrap());
    assert_eq!(reader.position(), 1, "cursor restored onto the sync byte");

    let header = FrameHeader::read_from(&mut reader).unwrap().unwrap();
    assert_eq!(header, FrameHeader::from_bytes([0xFF, 0xFB, 0x90, 0x64]));
    assert_eq!(reader.position(), 5);
}

#[test]
fn test_truncated_header_is_not_decoded() {
    // only 2 of the 3 post-sync bytes are available
    let mut reader = ByteReader::new(Cursor::new(vec![0xFBu8, 0x90]));
    assert_eq!(FrameHeader::read_after_sync(&mut reader).unwrap(), None);

    // full-window variant, 3 of 4 bytes available
    let mut reader = ByteReader::new(Cursor::new(vec![0xFFu8, 0xFB, 0x90]));
    assert_eq!(FrameHeader::read_from(&mut reader).unwrap(), None);
}

#[test]
fn test_bitrate_index_15_is_invalid_everywhere() {
    let versions = [AudioVersion::Mpeg1, AudioVersion::Mpeg2, AudioVersion::Mpeg25];
    let layers = [Layer::Layer1, Layer::Layer2, Layer::Layer3];

    for version in versions {
        for layer in layers {
            assert_eq!(
                resolve_bitrate(version, layer, 0b1111),
                Bitrate::Invalid,
                "index 15 must be invalid for {:?} {:?}",
                version,
                layer
            );
        }
    }
}

#[test]
fn test_bitrate_index_0_is_free_format_everywhere() {
    let versions = [AudioVersion::Mpeg1, AudioVersion::Mpeg2, AudioVersion::Mpeg25];
    let layers = [Layer::Layer1, Layer::Layer2, Layer::Layer3];

    for version in versions {
        for layer in layers {
            assert_eq!(resolve_bitrate(version, layer, 0), Bitrate::FreeFormat);
        }
    }
}

#[test]
fn test_bitrate_table_spot_values() {
    assert_eq!(
        resolve_bitrate(AudioVersion::Mpeg1, Layer::Layer1, 14),
        Bitrate::Bps(448_000)
    );
    assert_eq!(
        resolve_bitrate(AudioVersion::Mpeg1, Layer::Layer2, 11),
        Bitrate::Bps(224_000)
    );
    assert_eq!(
        resolve_bitrate(AudioVersion::Mpeg2, Layer::Layer3, 1),
        Bitrate::Bps(8_000)
    );
    // MPEG-2.5 shares the MPEG-2 table
    assert_eq!(
        resolve_bitrate(AudioVersion::Mpeg25, Layer::Layer3, 1),
        Bitrate::Bps(8_000)
    );
}

#[test]
fn test_sample_rate_rows_per_version() {
    assert_eq!(
        resolve_sample_rate(AudioVersion::Mpeg1, 0),
        SampleRate::Hz(44_100)
    );
    assert_eq!(
        resolve_sample_rate(AudioVersion::Mpeg1, 1),
        SampleRate::Hz(48_000)
    );
    assert_eq!(
        resolve_sample_rate(AudioVersion::Mpeg2, 0),
        SampleRate::Hz(22_050)
    );
    assert_eq!(
        resolve_sample_rate(AudioVersion::Mpeg25, 2),
        SampleRate::Hz(8_000)
    );
}

#[test]
fn test_sample_rate_index_3_is_reserved_everywhere() {
    for version in [AudioVersion::Mpeg1, AudioVersion::Mpeg2, AudioVersion::Mpeg25] {
        assert_eq!(resolve_sample_rate(version, 0b11), SampleRate::Reserved);
    }
    // a reserved version has no sample-rate row at all
    assert_eq!(
        resolve_sample_rate(AudioVersion::Invalid, 0),
        SampleRate::Reserved
    );
}

#[test]
fn test_reserved_code_points_decode_as_invalid() {
    // version bits 01, layer bits 00, emphasis bits 10
    let header = FrameHeader::from_bytes([0xFF, 0xE8, 0x00, 0x02]);
    assert_eq!(header.version, AudioVersion::Invalid);
    assert_eq!(header.layer, Layer::Invalid);
    assert_eq!(header.emphasis, Emphasis::Invalid);
}

#[test]
fn test_display_strings() {
    let header = FrameHeader::from_bytes([0xFF, 0xFB, 0x90, 0x64]);
    assert_eq!(header.version_str(), "1");
    assert_eq!(header.layer_str(), "3");
    assert_eq!(header.bitrate_str(), "128 kbps");
    assert_eq!(header.sample_rate_str(), "44100 Hz");

    let free = FrameHeader::from_bytes([0xFF, 0xFB, 0x00, 0x64]);
    assert_eq!(free.bitrate_str(), "free format");

    let bad = FrameHeader::from_bytes([0xFF, 0xEB, 0xFC, 0x64]);
    assert_eq!(bad.version_str(), "INVALID");
    assert_eq!(bad.bitrate_str(), "INVALID");
    assert_eq!(bad.sample_rate_str(), "RESERVED");
}
