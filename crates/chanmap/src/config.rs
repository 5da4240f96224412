//! Run configuration.

use std::path::{Path, PathBuf};

use chanmap_core::FallbackBases;

/// Default channel list directory, relative to the working directory.
pub const DEFAULT_CHANNEL_LIST_DIR: &str = "ChannelMap_45/ChannelList";

/// Default desired-order file.
pub const DEFAULT_ORDER_FILE: &str = "list.json";

/// Configuration for a reorder run.
#[derive(Debug, Clone)]
pub struct ReorderConfig {
    /// Directory holding the database and the sidecar.
    pub channel_list_dir: PathBuf,
    /// JSON file with the desired order.
    pub order_file: PathBuf,
    /// Database file name inside `channel_list_dir`.
    pub database_file: String,
    /// Sidecar file name inside `channel_list_dir`.
    pub sidecar_file: String,
    /// Only channels of this tuner type are reordered.
    pub tuner_type: String,
    /// Fallback band starts.
    pub fallback: FallbackBases,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            channel_list_dir: PathBuf::from(DEFAULT_CHANNEL_LIST_DIR),
            order_file: PathBuf::from(DEFAULT_ORDER_FILE),
            database_file: "tv.db".to_string(),
            sidecar_file: "chanLst.bin".to_string(),
            tuner_type: "TYPE_DVB_S2".to_string(),
            fallback: FallbackBases::default(),
        }
    }
}

impl ReorderConfig {
    /// Default configuration for a given directory and order file.
    pub fn new(channel_list_dir: impl Into<PathBuf>, order_file: impl Into<PathBuf>) -> Self {
        Self {
            channel_list_dir: channel_list_dir.into(),
            order_file: order_file.into(),
            ..Self::default()
        }
    }

    pub fn database_path(&self) -> PathBuf {
        self.channel_list_dir.join(&self.database_file)
    }

    pub fn sidecar_path(&self) -> PathBuf {
        self.channel_list_dir.join(&self.sidecar_file)
    }

    pub fn order_path(&self) -> &Path {
        &self.order_file
    }
}
