//! # Chanmap Core
//!
//! Pure primitives for chanmap: channels, desired orders, rank assignments,
//! the CRC-16 fingerprint and the sidecar byte patch.
//!
//! This crate contains no I/O, no storage, no file handling. It is pure
//! computation over in-memory channel lists and byte buffers.
//!
//! ## Key Types
//!
//! - [`Channel`] - One row of the tuner's `channels` table
//! - [`DesiredOrder`] - Channel name to wanted rank, decoded from JSON
//! - [`RankAssignment`] - Final rank to channel mapping produced by [`resolve`]
//! - [`Checksum`] - CRC-16 of the channel database file
//!
//! ## Sidecar Fingerprint
//!
//! The sidecar file embeds the database checksum in little-endian byte order.
//! [`Checksum::to_swapped_hex`] renders it the way it appears in the file and
//! [`sidecar::patch`] swaps the old fingerprint for the new one.

pub mod checksum;
pub mod error;
pub mod resolver;
pub mod sidecar;
pub mod types;

pub use checksum::{decode_swapped_hex, Checksum, ChecksumPair};
pub use error::{CoreError, Result};
pub use resolver::{resolve, FallbackBases};
pub use sidecar::Patched;
pub use types::{Channel, ChannelId, DesiredOrder, OrderEntry, Rank, RankAssignment, ServiceType};
