//! # Chanmap Store
//!
//! Access to the tuner's channel database. Provides a trait-based interface
//! for reading the channel list and writing back resolved ranks, with SQLite
//! and in-memory implementations.
//!
//! ## Key Types
//!
//! - [`ChannelStore`] - Read channels, apply a rank assignment, close
//! - [`SqliteStore`] - The `tv.db` file, via rusqlite
//! - [`MemoryStore`] - In-memory channel list for tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chanmap_core::{resolve, DesiredOrder, FallbackBases};
//! use chanmap_store::{ChannelStore, SqliteStore};
//!
//! let mut store = SqliteStore::open("ChannelList/tv.db").unwrap();
//! let channels = store.channels("TYPE_DVB_S2").unwrap();
//! let assignment = resolve(&channels, &DesiredOrder::new(), FallbackBases::default());
//! store.apply(&assignment).unwrap();
//! store.close().unwrap();
//! ```
//!
//! ## Design Notes
//!
//! - **One batch**: all rank updates of a run are committed together or not at all
//! - **Closed by value**: [`ChannelStore::close`] consumes the handle, so nothing
//!   can touch the database after the file has been flushed and released

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::ChannelStore;
