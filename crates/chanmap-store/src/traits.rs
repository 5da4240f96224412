//! ChannelStore trait: the abstract interface over the channel database.
//!
//! The pipeline only needs three things from storage: the current channel
//! list in display order, a way to write a full rank assignment, and a way
//! to release the database before its bytes are fingerprinted again.

use chanmap_core::{Channel, RankAssignment};

use crate::error::Result;

/// Channel database access.
///
/// # Design Notes
///
/// - **Ordering**: [`channels`](ChannelStore::channels) returns rows sorted by
///   ascending stored `display_number` (compared as text, the column type),
///   ties broken by id. The resolver depends on this order.
/// - **Atomic apply**: either every update of an assignment lands or none does.
/// - **Close consumes**: the handle is gone once closed.
pub trait ChannelStore {
    /// All channels of one tuner type, in ascending current display order.
    fn channels(&self, tuner_type: &str) -> Result<Vec<Channel>>;

    /// Write every rank of `assignment` to its channel in one batch.
    ///
    /// Returns the number of rows changed. An id with no row is not an error.
    fn apply(&mut self, assignment: &RankAssignment) -> Result<usize>;

    /// Flush and release the store.
    fn close(self) -> Result<()>
    where
        Self: Sized;
}
