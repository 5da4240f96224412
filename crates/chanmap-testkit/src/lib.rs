//! # Chanmap Testkit
//!
//! Testing utilities for chanmap.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known CRC-16 inputs with the fingerprint the tuner expects
//! - **Generators**: Proptest strategies for channel lists and desired orders
//! - **Fixtures**: On-disk channel list directories (`tv.db`, `chanLst.bin`, `list.json`)
//!
//! ## Golden Vectors
//!
//! ```rust
//! use chanmap_testkit::vectors::verify_all_vectors;
//!
//! verify_all_vectors().unwrap();
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use chanmap_testkit::fixtures::{satellite, ChannelListFixture};
//!
//! let fixture = ChannelListFixture::builder()
//!     .channel(satellite(1, "BBC", "5"))
//!     .order("BBC", 1)
//!     .build();
//! assert!(fixture.database_path().exists());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{radio, satellite, ChannelListFixture, ChannelListFixtureBuilder};
pub use generators::{channel_list, order_entries, Scenario};
pub use vectors::{all_vectors, verify_all_vectors, ChecksumVector};
