//! # Chanmap
//!
//! Reorder the satellite channels of a set-top-box channel list and keep
//! the list's binary sidecar consistent with the edited database.
//!
//! ## Overview
//!
//! A channel list export is a directory holding `tv.db`, a SQLite database
//! with a `channels` table, and `chanLst.bin`, an opaque blob that embeds a
//! CRC-16 of `tv.db`. Editing the database without updating that fingerprint
//! makes the tuner reject the import. [`run`] edits the ranks, rewrites the
//! fingerprint and restamps the files so the tuner accepts the result.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chanmap::{run, ReorderConfig};
//!
//! let config = ReorderConfig::new("/media/usb/ChannelMap_45/ChannelList", "list.json");
//! let report = run(&config).unwrap();
//! println!("{} -> {}", report.checksums.before, report.checksums.after);
//! ```
//!
//! ## Re-exports
//!
//! - `chanmap::core` - Pure primitives (resolver, checksum, sidecar patch)
//! - `chanmap::store` - Channel database access

pub mod config;
pub mod error;
pub mod pipeline;
pub mod touch;

// Re-export component crates
pub use chanmap_core as core;
pub use chanmap_store as store;

pub use config::ReorderConfig;
pub use error::{ChanmapError, Result};
pub use pipeline::{
    checksum_file, load_desired_order, patch_sidecar_file, reorder_store, run, ReorderSummary,
    RunReport,
};
