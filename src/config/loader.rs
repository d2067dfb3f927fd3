//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tracker
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::store::JsonFileRepository;

use super::types::{StorageConfig, TrackerConfig};

/// Loads and provides access to the tracker configuration.
///
/// # File Format
///
/// ```text
/// storage:
///   data_dir: ./data
///   key: vacation-management-vacations   # optional
/// ```
///
/// # Example
///
/// ```no_run
/// use vacation_tracker::config::ConfigLoader;
/// use vacation_tracker::store::VacationStore;
///
/// let loader = ConfigLoader::load("./config/tracker.yaml")?;
/// let store = VacationStore::open(loader.repository())?;
/// println!("{} vacations stored", store.len());
/// # Ok::<(), vacation_tracker::error::TrackerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TrackerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file cannot be read, or `ConfigParseError`
    /// if it is not valid YAML or lacks a required field.
    pub fn load<P: AsRef<Path>>(path: P) -> TrackerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TrackerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::from_yaml(&content).map_err(|message| {
            TrackerError::ConfigParseError {
                path: path_str.clone(),
                message,
            }
        })?;

        debug!(
            path = %path_str,
            data_dir = %config.storage().data_dir.display(),
            "Loaded configuration"
        );
        Ok(config)
    }

    fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml::from_str::<TrackerConfig>(content)
            .map(|config| Self { config })
            .map_err(|e| e.to_string())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Returns the storage section.
    pub fn storage(&self) -> &StorageConfig {
        &self.config.storage
    }

    /// Builds the JSON file repository the configuration points at.
    pub fn repository(&self) -> JsonFileRepository {
        let storage = self.storage();
        JsonFileRepository::new(&storage.data_dir, &storage.key)
    }
}
