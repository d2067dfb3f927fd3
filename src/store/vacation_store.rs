//! The record store and its queries.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::calculation::DateRange;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{AddOutcome, VacationRecord};

use super::repository::VacationRepository;

/// The validated vacation collection, kept in insertion order and mirrored to a
/// repository after every successful mutation.
///
/// # Example
///
/// ```
/// use vacation_tracker::parsing::parse_input;
/// use vacation_tracker::store::{MemoryRepository, VacationStore};
///
/// let mut store = VacationStore::open(MemoryRepository::new()).unwrap();
/// let records = parse_input("عادية,1001,Ahmed,1445/06/01,01/10/2024,1445/06/03,01/12/2024").data;
///
/// let first = store.add_vacations(records.clone()).unwrap();
/// assert!(first.success);
/// assert_eq!(first.message, "تمت إضافة 1 إجازة جديدة");
///
/// let again = store.add_vacations(records).unwrap();
/// assert!(!again.success);
/// assert_eq!(again.duplicates_skipped, 1);
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug)]
pub struct VacationStore<R: VacationRepository> {
    repository: R,
    vacations: Vec<VacationRecord>,
}

impl<R: VacationRepository> VacationStore<R> {
    /// Opens the store over `repository`, loading whatever it holds.
    ///
    /// Corrupt persisted data is logged and replaced by an empty collection; the
    /// next successful add overwrites it.
    ///
    /// # Errors
    ///
    /// Returns any repository failure other than `CorruptData`.
    pub fn open(repository: R) -> TrackerResult<Self> {
        let vacations = match repository.load() {
            Ok(vacations) => vacations,
            Err(TrackerError::CorruptData { path, message }) => {
                warn!(%path, %message, "Stored vacations are corrupt, starting empty");
                Vec::new()
            }
            Err(err) => return Err(err),
        };

        info!(count = vacations.len(), "Vacation store opened");
        Ok(Self {
            repository,
            vacations,
        })
    }

    /// Appends every submitted record whose dedup key is not already stored.
    ///
    /// Submitted records are only compared with the existing collection, not with
    /// each other. The new collection is saved before it replaces the in-memory
    /// one, so a failed save leaves the store as it was.
    ///
    /// # Errors
    ///
    /// Returns the repository error when saving fails.
    pub fn add_vacations(&mut self, records: Vec<VacationRecord>) -> TrackerResult<AddOutcome> {
        let submitted = records.len();
        let unique: Vec<VacationRecord> = records
            .into_iter()
            .filter(|candidate| {
                !self
                    .vacations
                    .iter()
                    .any(|existing| existing.same_key_as(candidate))
            })
            .collect();

        if unique.is_empty() {
            debug!(submitted, "All submitted vacations already exist");
            return Ok(AddOutcome::all_duplicates(submitted));
        }

        let added = unique.len();
        let mut updated = Vec::with_capacity(self.vacations.len() + added);
        updated.extend_from_slice(&self.vacations);
        updated.extend(unique);

        self.repository.save(&updated)?;
        self.vacations = updated;

        info!(
            added,
            duplicates_skipped = submitted - added,
            total = self.vacations.len(),
            "Vacations added"
        );
        Ok(AddOutcome::added(added, submitted - added))
    }

    /// Every stored vacation whose Gregorian range intersects `[start, end]`.
    ///
    /// Bounds are inclusive, so a vacation touching either end matches. Records
    /// whose stored dates do not parse never match.
    pub fn vacations_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<&VacationRecord> {
        let query = DateRange::new(start, end);
        self.vacations
            .iter()
            .filter(|record| match record.date_range() {
                Ok(range) => range.overlaps(&query),
                Err(err) => {
                    warn!(
                        employee_id = %record.employee_id(),
                        error = %err,
                        "Vacation with unparseable dates ignored by range query"
                    );
                    false
                }
            })
            .collect()
    }

    /// The whole collection in insertion order.
    pub fn all(&self) -> &[VacationRecord] {
        &self.vacations
    }

    /// Number of stored vacations.
    pub fn len(&self) -> usize {
        self.vacations.len()
    }

    /// Returns true when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.vacations.is_empty()
    }

    /// The backing repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }
}
