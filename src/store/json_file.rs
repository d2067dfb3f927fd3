//! JSON file persistence.
//!
//! The collection lives in a single named entry, `<data_dir>/<key>.json`, holding a
//! JSON array of records. Every save rewrites the whole file through a temporary
//! sibling that is renamed over the target.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::VacationRecord;

use super::repository::VacationRepository;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "vacation-management-vacations";

/// Repository backed by one JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Repository for the entry `key` inside `data_dir`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::path::Path;
    /// use vacation_tracker::store::JsonFileRepository;
    ///
    /// let repo = JsonFileRepository::new("/var/lib/vacations", "vacation-management-vacations");
    /// assert_eq!(
    ///     repo.path(),
    ///     Path::new("/var/lib/vacations/vacation-management-vacations.json")
    /// );
    /// ```
    pub fn new<P: AsRef<Path>>(data_dir: P, key: &str) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{key}.json")),
        }
    }

    /// Repository for an explicit file path.
    pub fn at<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_string(&self) -> String {
        self.path.display().to_string()
    }

    fn write_error(&self, err: impl std::fmt::Display) -> TrackerError {
        TrackerError::StorageWrite {
            path: self.path_string(),
            message: err.to_string(),
        }
    }
}

impl VacationRepository for JsonFileRepository {
    fn load(&self) -> TrackerResult<Vec<VacationRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No stored vacations yet");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(TrackerError::StorageRead {
                    path: self.path_string(),
                    message: err.to_string(),
                });
            }
        };

        let records: Vec<VacationRecord> =
            serde_json::from_str(&content).map_err(|err| TrackerError::CorruptData {
                path: self.path_string(),
                message: err.to_string(),
            })?;

        debug!(path = %self.path.display(), count = records.len(), "Loaded vacations");
        Ok(records)
    }

    fn save(&self, records: &[VacationRecord]) -> TrackerResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| self.write_error(err))?;
        }

        let json = serde_json::to_string_pretty(records).map_err(|err| self.write_error(err))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|err| self.write_error(err))?;
        fs::rename(&tmp_path, &self.path).map_err(|err| self.write_error(err))?;

        debug!(path = %self.path.display(), count = records.len(), "Saved vacations");
        Ok(())
    }
}
