//! Error types for the store module.

use chanmap_core::{ChannelId, Rank};
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A single rank update failed; the whole batch was rolled back.
    #[error("failed to set rank {rank} on channel {id}: {source}")]
    Update {
        id: ChannelId,
        rank: Rank,
        #[source]
        source: rusqlite::Error,
    },

    /// Closing the connection failed, so the file may not be flushed.
    #[error("failed to close database: {0}")]
    Close(#[source] rusqlite::Error),

    /// Invalid data in storage.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
