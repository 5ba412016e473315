//! Error types for the PKT codec.

use thiserror::Error;

/// Failure kinds for encode/decode operations.
///
/// I/O errors have no variant here on purpose: the core only ever sees
/// in-memory buffers, file handling lives with the caller.
#[derive(Debug, Error)]
pub enum PktError {
    /// Malformed container: short buffer, broken compression stream, or a
    /// length prefix that does not match the decompressed data.
    #[error("format error: {0}")]
    Format(String),

    /// EAX tag verification failed. The input is not a valid PKT artifact
    /// (tampered, corrupted, or produced with different key material).
    #[error("authentication failed: tag mismatch")]
    Authentication,
}

/// Result type alias using PktError.
pub type Result<T> = std::result::Result<T, PktError>;
