//! Positioned byte cursor over an input stream
//!
//! The scan loop needs three things an ordinary `Read` does not give it:
//! the absolute stream offset for reporting, a one-byte peek to confirm a
//! sync candidate, and a pushback so the non-consuming scan variant can
//! restore the cursor onto the sync byte. `ByteReader` wraps any `Read`
//! and provides all three.

use std::io::Read;

use crate::error::ScanResult;

/// Pushback capacity: a peeked continuation byte plus a restored sync byte
const PUSHBACK_CAPACITY: usize = 2;

/// Byte-oriented cursor with position tracking and a small pushback stack
#[derive(Debug)]
pub struct ByteReader<R> {
    inner: R,
    /// Pushed-back bytes, consumed in LIFO order
    pushback: [u8; PUSHBACK_CAPACITY],
    pushback_len: usize,
    /// Offset of the next byte `read_byte` will return
    position: u64,
}

impl<R: Read> ByteReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pushback: [0; PUSHBACK_CAPACITY],
            pushback_len: 0,
            position: 0,
        }
    }

    /// Offset of the next byte to be read, accounting for pushback
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Read one byte, `Ok(None)` at end of input
    pub fn read_byte(&mut self) -> ScanResult<Option<u8>> {
        if self.pushback_len > 0 {
            self.pushback_len -= 1;
            self.position += 1;
            return Ok(Some(self.pushback[self.pushback_len]));
        }

        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.position += 1;
                    return Ok(Some(buf[0]));
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Look at the next byte without consuming it
    pub fn peek_byte(&mut self) -> ScanResult<Option<u8>> {
        if self.pushback_len > 0 {
            return Ok(Some(self.pushback[self.pushback_len - 1]));
        }
        match self.read_byte()? {
            Some(byte) => {
                self.push_back(byte);
                Ok(Some(byte))
            }
            None => Ok(None),
        }
    }

    /// Return a byte to the stream; the next `read_byte` yields it again
    ///
    /// # Panics
    ///
    /// Panics if more than `PUSHBACK_CAPACITY` bytes are pushed back
    /// without intervening reads.
    pub fn push_back(&mut self, byte: u8) {
        assert!(
            self.pushback_len < PUSHBACK_CAPACITY,
            "pushback capacity exceeded"
        );
        self.pushback[self.pushback_len] = byte;
        self.pushback_len += 1;
        self.position -= 1;
    }

    /// Fill `buf` from the stream, stopping early at end of input
    ///
    /// Returns the number of bytes written, which is less than
    /// `buf.len()` only when the input ran out.
    pub fn read_into(&mut self, buf: &mut [u8]) -> ScanResult<usize> {
        for (filled, slot) in buf.iter_mut().enumerate() {
            match self.read_byte()? {
                Some(byte) => *slot = byte,
                None => return Ok(filled),
            }
        }
        Ok(buf.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_position_tracks_reads() {
        let mut reader = ByteReader::new(Cursor::new(vec![1u8, 2, 3]));
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_byte().unwrap(), Some(1));
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.read_byte().unwrap(), Some(2));
        assert_eq!(reader.read_byte().unwrap(), Some(3));
        assert_eq!(reader.position(), 3);
        assert_eq!(reader.read_byte().unwrap(), None);
        assert_eq!(reader.position(), 3, "EOF should not advance position");
    }

    #[test]
    fn test_push_back_rewinds_position() {
        let mut reader = ByteReader::new(Cursor::new(vec![0xFFu8, 0xFB]));
        let byte = reader.read_byte().unwrap().unwrap();
        assert_eq!(reader.position(), 1);
        reader.push_back(byte);
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_byte().unwrap(), Some(0xFF));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut reader = ByteReader::new(Cursor::new(vec![0xABu8]));
        assert_eq!(reader.peek_byte().unwrap(), Some(0xAB));
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_byte().unwrap(), Some(0xAB));
        assert_eq!(reader.peek_byte().unwrap(), None);
    }

    #[test]
    fn test_read_into_reports_short_fill() {
        let mut reader = ByteReader::new(Cursor::new(vec![9u8, 8]));
        let mut buf = [0u8; 3];
        assert_eq!(reader.read_into(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], &[9, 8]);
    }
}
