//! Result of adding a batch of records to the store.

use serde::{Deserialize, Serialize};

/// Outcome of [`VacationStore::add_vacations`](crate::store::VacationStore::add_vacations).
///
/// An all-duplicate batch is reported here with `success == false` rather than as
/// an error; the caller decides how to present it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOutcome {
    /// Whether at least one new record was appended.
    pub success: bool,
    /// User-facing summary message.
    pub message: String,
    /// Number of submitted records that already existed.
    pub duplicates_skipped: usize,
}

impl AddOutcome {
    /// Outcome for a batch where `added` records were appended.
    pub fn added(added: usize, duplicates_skipped: usize) -> Self {
        Self {
            success: true,
            message: format!("تمت إضافة {} إجازة جديدة", added),
            duplicates_skipped,
        }
    }

    /// Outcome for a batch where every record already existed.
    pub fn all_duplicates(submitted: usize) -> Self {
        Self {
            success: false,
            message: "جميع الإجازات موجودة مسبقاً".to_string(),
            duplicates_skipped: submitted,
        }
    }
}
