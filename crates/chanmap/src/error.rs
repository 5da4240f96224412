//! Error types for the reorder pipeline.

use std::path::PathBuf;

use chanmap_core::CoreError;
use chanmap_store::StoreError;
use thiserror::Error;

/// Errors that can occur during a run. All of them end the run.
#[derive(Debug, Error)]
pub enum ChanmapError {
    /// Reading or writing one of the input files failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input could not be decoded.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Setting a file's timestamps failed.
    #[error("failed to set timestamps on {}: {source}", .path.display())]
    Timestamp {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walking the channel list directory failed.
    #[error("failed to walk channel list directory: {0}")]
    Walk(#[from] walkdir::Error),
}

impl ChanmapError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, ChanmapError>;
