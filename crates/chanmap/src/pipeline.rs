//! The reorder pipeline.
//!
//! A run goes through these steps, strictly in order:
//!
//! 1. fingerprint `tv.db`
//! 2. load the desired order
//! 3. read channels, resolve ranks, write them, close the database
//! 4. fingerprint `tv.db` again
//! 5. swap the old fingerprint for the new one in `chanLst.bin`
//! 6. stamp the directory, sidecar last
//!
//! Any error stops the run where it happened. Nothing is rolled back.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use tracing::{debug, info};

use chanmap_core::sidecar::patch_checksum;
use chanmap_core::{resolve, Checksum, ChecksumPair, DesiredOrder};
use chanmap_store::{ChannelStore, SqliteStore};

use crate::config::ReorderConfig;
use crate::error::{ChanmapError, Result};
use crate::touch;

/// What a store pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderSummary {
    /// Channels read from the store.
    pub channels: usize,
    /// Rows the updates changed.
    pub rows_updated: usize,
}

/// What a full run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub checksums: ChecksumPair,
    pub summary: ReorderSummary,
    /// Occurrences of the old fingerprint replaced in the sidecar.
    pub replacements: usize,
    /// Directory entries whose timestamps were set.
    pub files_touched: usize,
}

/// Fingerprint the full content of a file.
pub fn checksum_file(path: &Path) -> Result<Checksum> {
    let data = fs::read(path).map_err(ChanmapError::io(path))?;
    Ok(Checksum::compute(&data))
}

/// Read and decode the desired-order JSON file.
pub fn load_desired_order(path: &Path) -> Result<DesiredOrder> {
    let json = fs::read(path).map_err(ChanmapError::io(path))?;
    let order = DesiredOrder::from_json(&json)?;
    debug!(path = %path.display(), names = order.len(), "loaded desired order");
    Ok(order)
}

/// Resolve and write ranks, then close the store.
///
/// The store is closed on success only; on error it is dropped, which
/// releases it without reporting close errors.
pub fn reorder_store<S: ChannelStore>(
    mut store: S,
    desired: &DesiredOrder,
    config: &ReorderConfig,
) -> Result<ReorderSummary> {
    let channels = store.channels(&config.tuner_type)?;
    let assignment = resolve(&channels, desired, config.fallback);
    let rows_updated = store.apply(&assignment)?;
    store.close()?;

    info!(
        channels = channels.len(),
        ranks = assignment.len(),
        rows_updated,
        "channel ranks written"
    );
    Ok(ReorderSummary {
        channels: channels.len(),
        rows_updated,
    })
}

/// Replace the `before` fingerprint with the `after` one in the sidecar file.
///
/// Returns the number of replacements made. Zero is not an error.
pub fn patch_sidecar_file(path: &Path, checksums: &ChecksumPair) -> Result<usize> {
    let content = fs::read(path).map_err(ChanmapError::io(path))?;
    let patched = patch_checksum(&content, checksums);
    fs::write(path, &patched.content).map_err(ChanmapError::io(path))?;
    debug!(
        path = %path.display(),
        replacements = patched.replacements,
        "patched sidecar"
    );
    Ok(patched.replacements)
}

/// Run the whole pipeline against the files named by `config`.
pub fn run(config: &ReorderConfig) -> Result<RunReport> {
    let database = config.database_path();
    let sidecar = config.sidecar_path();

    let before = checksum_file(&database)?;
    let desired = load_desired_order(config.order_path())?;

    let store = SqliteStore::open(&database)?;
    let summary = reorder_store(store, &desired, config)?;

    let after = checksum_file(&database)?;
    let checksums = ChecksumPair::new(before, after);
    info!(
        old = %checksums.before,
        new = %checksums.after,
        "database checksum"
    );

    let replacements = patch_sidecar_file(&sidecar, &checksums)?;
    let files_touched = touch::synchronize(&config.channel_list_dir, &sidecar, SystemTime::now())?;

    info!(replacements, files_touched, "channels updated");
    Ok(RunReport {
        checksums,
        summary,
        replacements,
        files_touched,
    })
}
