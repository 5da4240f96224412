//! In-memory implementation of the ChannelStore trait.
//!
//! This is primarily for testing. It has the same ordering and batch
//! semantics as SQLite but keeps the channel list in memory. Clones share
//! the same data, so a test can hand one clone to the pipeline and inspect
//! the result through another after the first was closed.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chanmap_core::{Channel, ChannelId, RankAssignment};

use crate::error::{Result, StoreError};
use crate::traits::ChannelStore;

/// In-memory channel store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<MemoryStoreInner>>,
}

#[derive(Default)]
struct MemoryStoreInner {
    channels: Vec<Channel>,
    /// Updates to this id fail, to exercise the abort path.
    reject: Option<ChannelId>,
    closed: bool,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `channels`.
    pub fn with_channels(channels: impl IntoIterator<Item = Channel>) -> Self {
        let store = Self::new();
        store.write().channels.extend(channels);
        store
    }

    /// Make every update of `id` fail.
    pub fn reject_updates_to(self, id: ChannelId) -> Self {
        self.write().reject = Some(id);
        self
    }

    /// All channels, in insertion order.
    pub fn snapshot(&self) -> Vec<Channel> {
        self.read().channels.clone()
    }

    /// Whether some clone of this store has been closed.
    pub fn is_closed(&self) -> bool {
        self.read().closed
    }

    fn read(&self) -> RwLockReadGuard<'_, MemoryStoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryStoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ChannelStore for MemoryStore {
    fn channels(&self, tuner_type: &str) -> Result<Vec<Channel>> {
        let inner = self.read();
        if inner.closed {
            return Err(StoreError::InvalidData("store is closed".into()));
        }
        let mut channels: Vec<Channel> = inner
            .channels
            .iter()
            .filter(|c| c.tuner_type == tuner_type)
            .cloned()
            .collect();
        // Byte-wise text order, as SQLite's default collation.
        channels.sort_by(|a, b| {
            a.display_number
                .cmp(&b.display_number)
                .then(a.id.cmp(&b.id))
        });
        Ok(channels)
    }

    fn apply(&mut self, assignment: &RankAssignment) -> Result<usize> {
        let mut inner = self.write();
        if inner.closed {
            return Err(StoreError::InvalidData("store is closed".into()));
        }

        // Stage on a copy so a failure leaves nothing behind.
        let mut staged = inner.channels.clone();
        let mut changed = 0;
        for (rank, id) in assignment.iter() {
            if inner.reject == Some(id) {
                return Err(StoreError::Update {
                    id,
                    rank,
                    source: rusqlite::Error::SqliteFailure(
                        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CONSTRAINT),
                        Some(format!("update of channel {} rejected", id)),
                    ),
                });
            }
            for channel in staged.iter_mut().filter(|c| c.id == id) {
                channel.display_number = rank.to_string();
                changed += 1;
            }
        }

        inner.channels = staged;
        Ok(changed)
    }

    fn close(self) -> Result<()> {
        self.write().closed = true;
        Ok(())
    }
}
