//! Error types for threp operations.
//!
//! This module provides the error type shared by the decryption and
//! decompression primitives, covering format validation failures,
//! out-of-range indexing during block decryption, and I/O errors from
//! the surrounding tooling.

use std::io;
use thiserror::Error;

/// The main error type for threp operations.
#[derive(Debug, Error)]
pub enum ThrepError {
    /// I/O error from surrounding file plumbing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The LZSS stream terminated without consuming the input exactly.
    ///
    /// Either the compressed data is corrupt or the decode parameters do
    /// not match the stream's format generation.
    #[error(
        "LZSS data is invalid or the LZSS parameters are wrong: \
         consumed {consumed} of {total} input bits"
    )]
    MalformedStream {
        /// Bits consumed when the terminator was reached.
        consumed: u64,
        /// Total bits in the input (8 x byte length).
        total: u64,
    },

    /// An index computed during block decryption fell outside the buffer.
    ///
    /// This indicates an inconsistent `block_size` rather than bad
    /// ciphertext.
    #[error("block decrypt index {index} out of range for buffer of {len} bytes")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Buffer length.
        len: usize,
    },

    /// A zero block size was passed to block decryption.
    #[error("block size must be greater than zero")]
    InvalidBlockSize,
}

/// Result type alias for threp operations.
pub type Result<T> = std::result::Result<T, ThrepError>;

impl ThrepError {
    /// Create a malformed-stream error.
    pub fn malformed_stream(consumed: u64, total: u64) -> Self {
        Self::MalformedStream { consumed, total }
    }

    /// Create an index-out-of-range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ThrepError::malformed_stream(100, 128);
        assert!(err.to_string().contains("LZSS"));
        assert!(err.to_string().contains("100"));

        let err = ThrepError::index_out_of_range(40, 32);
        assert!(err.to_string().contains("out of range"));

        let err = ThrepError::InvalidBlockSize;
        assert!(err.to_string().contains("block size"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: ThrepError = io_err.into();
        assert!(matches!(err, ThrepError::Io(_)));
    }
}
