//! Error types for the frame scanner
//!
//! The only hard failure the scanner can hit is an I/O error on the input
//! stream. Everything else the scan can observe -- no further sync marker,
//! a header truncated by end-of-input, or a header that fails validation --
//! is an ordinary outcome communicated through result values, not an error.

use thiserror::Error;

/// Main error type for the frame scanner
#[derive(Debug, Error)]
pub enum ScanError {
    /// Underlying stream read failure
    #[error("I/O error while scanning: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the scanner
pub type ScanResult<T> = std::result::Result<T, ScanError>;
