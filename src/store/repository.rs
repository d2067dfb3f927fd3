//! Persistence seam for the vacation collection.

use std::sync::Mutex;

use crate::error::{TrackerError, TrackerResult};
use crate::models::VacationRecord;

/// Storage backend for the whole vacation collection.
///
/// The collection is always read and written in full; there is no per-record
/// operation.
pub trait VacationRepository: Send {
    /// Loads the persisted collection. A backend with nothing stored yet returns
    /// an empty vector.
    fn load(&self) -> TrackerResult<Vec<VacationRecord>>;

    /// Replaces the persisted collection with `records`.
    fn save(&self, records: &[VacationRecord]) -> TrackerResult<()>;
}

/// In-process repository. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    records: Mutex<Vec<VacationRecord>>,
}

impl MemoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository that already holds `records`.
    pub fn with_records(records: Vec<VacationRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Copy of the currently saved collection.
    pub fn snapshot(&self) -> TrackerResult<Vec<VacationRecord>> {
        self.load()
    }
}

impl VacationRepository for MemoryRepository {
    fn load(&self) -> TrackerResult<Vec<VacationRecord>> {
        let records = self
            .records
            .lock()
            .map_err(|_| TrackerError::StoreUnavailable)?;
        Ok(records.clone())
    }

    fn save(&self, records: &[VacationRecord]) -> TrackerResult<()> {
        let mut stored = self
            .records
            .lock()
            .map_err(|_| TrackerError::StoreUnavailable)?;
        *stored = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> VacationRecord {
        VacationRecord::try_from_fields(&[
            "عادية",
            id,
            "Ahmed",
            "1445/07/01",
            "02/01/2024",
            "1445/07/02",
            "02/02/2024",
        ])
        .unwrap()
    }

    #[test]
    fn test_new_repository_is_empty() {
        assert!(MemoryRepository::new().load().unwrap().is_empty());
    }

    #[test]
    fn test_save_replaces_collection() {
        let repo = MemoryRepository::with_records(vec![record("1")]);
        repo.save(&[record("2"), record("3")]).unwrap();

        let ids: Vec<String> = repo
            .snapshot()
            .unwrap()
            .iter()
            .map(|r| r.employee_id().to_string())
            .collect();
        assert_eq!(ids, vec!["2", "3"]);
    }
}
