//! Error types for Chanmap Core.

use thiserror::Error;

/// Core errors that can occur while decoding inputs.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("malformed order list: {0}")]
    MalformedOrderList(#[from] serde_json::Error),

    #[error("invalid swapped checksum {input:?}: {source}")]
    InvalidChecksumHex {
        input: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("swapped checksum {0:?} must decode to exactly two bytes")]
    ChecksumLength(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
