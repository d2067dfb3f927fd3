//! Thread-safe handle over a [`VacationStore`].

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{AddOutcome, VacationRecord};

use super::repository::VacationRepository;
use super::vacation_store::VacationStore;

/// Cloneable handle that serializes access to one store.
///
/// The lock is held for the whole add, from duplicate filtering through the save,
/// so concurrent batches never interleave.
#[derive(Debug)]
pub struct SharedVacationStore<R: VacationRepository> {
    inner: Arc<Mutex<VacationStore<R>>>,
}

impl<R: VacationRepository> Clone for SharedVacationStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: VacationRepository> SharedVacationStore<R> {
    /// Wraps an opened store.
    pub fn new(store: VacationStore<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Opens a store over `repository` and wraps it.
    ///
    /// # Errors
    ///
    /// Same as [`VacationStore::open`].
    pub fn open(repository: R) -> TrackerResult<Self> {
        VacationStore::open(repository).map(Self::new)
    }

    fn lock(&self) -> TrackerResult<MutexGuard<'_, VacationStore<R>>> {
        self.inner.lock().map_err(|_| TrackerError::StoreUnavailable)
    }

    /// See [`VacationStore::add_vacations`].
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if another holder panicked while adding, or the
    /// repository error when saving fails.
    pub fn add_vacations(&self, records: Vec<VacationRecord>) -> TrackerResult<AddOutcome> {
        self.lock()?.add_vacations(records)
    }

    /// Copy of the whole collection.
    pub fn all(&self) -> TrackerResult<Vec<VacationRecord>> {
        Ok(self.lock()?.all().to_vec())
    }

    /// Copies of the vacations intersecting `[start, end]`.
    pub fn vacations_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> TrackerResult<Vec<VacationRecord>> {
        let store = self.lock()?;
        Ok(store
            .vacations_by_date_range(start, end)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Number of stored vacations.
    pub fn len(&self) -> TrackerResult<usize> {
        Ok(self.lock()?.len())
    }

    /// Returns true when nothing is stored.
    pub fn is_empty(&self) -> TrackerResult<bool> {
        Ok(self.lock()?.is_empty())
    }
}
