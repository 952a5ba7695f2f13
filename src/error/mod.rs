//! Error types for speakchunk.

use thiserror::Error;

/// Errors that can occur while chunking.
///
/// The chunking engine itself never fails. Errors come from the input side
/// (reading or decoding the byte stream) or from configuration validation.
#[derive(Debug, Error)]
pub enum ChunkError {
    /// An I/O error occurred while reading input data.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The byte stream is not valid UTF-8.
    #[error("invalid utf-8 at byte {offset}")]
    InvalidUtf8 {
        /// Byte offset of the first invalid byte.
        offset: u64,
    },

    /// The byte stream ended in the middle of a multi-byte sequence.
    #[error("truncated utf-8 sequence at byte {offset}")]
    IncompleteUtf8 {
        /// Byte offset where the truncated sequence starts.
        offset: u64,
    },

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}
