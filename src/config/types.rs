//! Configuration types for the vacation tracker.
//!
//! These structures are deserialized from the YAML configuration file.

use std::path::PathBuf;

use serde::Deserialize;

use crate::store::DEFAULT_STORAGE_KEY;

/// Top-level configuration file structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackerConfig {
    /// Where the vacation collection is persisted.
    pub storage: StorageConfig,
}

/// Location of the persisted vacation collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the storage entry.
    pub data_dir: PathBuf,
    /// Entry name; the file is `<data_dir>/<key>.json`.
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}
