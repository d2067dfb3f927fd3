//! Vacation record model.
//!
//! This module defines [`VacationRecord`], the immutable value object produced by the
//! input validator and held by the store.

use serde::{Deserialize, Serialize};

use crate::calculation::{DateRange, parse_gregorian};
use crate::error::TrackerResult;
use crate::parsing::{FIELD_COUNT, FieldError, normalize_gregorian, validate_fields};

use super::VacationType;

/// A single validated vacation entry.
///
/// Records are never mutated after construction. Field order everywhere (input,
/// CSV output) is `type, employeeId, name, hijriStart, gregStart, hijriEnd, gregEnd`.
///
/// # Example
///
/// ```
/// use vacation_tracker::models::{VacationRecord, VacationType};
///
/// let record = VacationRecord::try_from_fields(&[
///     "مرافقة", "1001", " Ahmed ", "1445/01/01", "2024/01/01", "1445/01/05", "2024/01/05",
/// ])
/// .unwrap();
///
/// assert_eq!(record.vacation_type(), &VacationType::Sick);
/// assert_eq!(record.name(), "Ahmed");
/// assert_eq!(record.greg_start_date(), "01/01/2024");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationRecord {
    #[serde(rename = "type")]
    vacation_type: VacationType,
    employee_id: String,
    name: String,
    hijri_start_date: String,
    greg_start_date: String,
    hijri_end_date: String,
    greg_end_date: String,
}

impl VacationRecord {
    /// Validates raw fields and builds a record from them.
    ///
    /// Fields are trimmed, the type synonym is normalized, and `YYYY/MM/DD`
    /// Gregorian dates are rewritten to `MM/DD/YYYY`.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`FieldError`] in the order field count, type,
    /// employee number, Hijri dates, Gregorian dates.
    pub fn try_from_fields(fields: &[&str]) -> Result<Self, FieldError> {
        validate_fields(fields)?;

        let trimmed: Vec<&str> = fields.iter().map(|f| f.trim()).collect();
        let raw_type = trimmed[0];
        let vacation_type = VacationType::from_synonym(raw_type)
            .unwrap_or_else(|| VacationType::Other(raw_type.to_string()));

        Ok(Self {
            vacation_type,
            employee_id: trimmed[1].to_string(),
            name: trimmed[2].to_string(),
            hijri_start_date: trimmed[3].to_string(),
            greg_start_date: normalize_gregorian(trimmed[4]),
            hijri_end_date: trimmed[5].to_string(),
            greg_end_date: normalize_gregorian(trimmed[6]),
        })
    }

    /// The canonical vacation type.
    pub fn vacation_type(&self) -> &VacationType {
        &self.vacation_type
    }

    /// The employee number (ASCII digits).
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// The employee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hijri start date, stored verbatim.
    pub fn hijri_start_date(&self) -> &str {
        &self.hijri_start_date
    }

    /// Gregorian start date.
    pub fn greg_start_date(&self) -> &str {
        &self.greg_start_date
    }

    /// Hijri end date, stored verbatim.
    pub fn hijri_end_date(&self) -> &str {
        &self.hijri_end_date
    }

    /// Gregorian end date.
    pub fn greg_end_date(&self) -> &str {
        &self.greg_end_date
    }

    /// Returns true if both records share the dedup key
    /// `(employee_id, greg_start_date, greg_end_date, type)`.
    ///
    /// Name and Hijri dates do not take part, and overlapping but different
    /// ranges are distinct records.
    pub fn same_key_as(&self, other: &VacationRecord) -> bool {
        self.employee_id == other.employee_id
            && self.greg_start_date == other.greg_start_date
            && self.greg_end_date == other.greg_end_date
            && self.vacation_type == other.vacation_type
    }

    /// Parses the Gregorian start and end into an inclusive date range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDate` if either stored date is not a real calendar date.
    /// Validation only checks the shape, so `02/30/2024` is storable but fails here.
    pub fn date_range(&self) -> TrackerResult<DateRange> {
        let start = parse_gregorian(&self.greg_start_date)?;
        let end = parse_gregorian(&self.greg_end_date)?;
        Ok(DateRange::new(start, end))
    }

    /// Returns the seven fields in input order.
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            self.vacation_type.label(),
            &self.employee_id,
            &self.name,
            &self.hijri_start_date,
            &self.greg_start_date,
            &self.hijri_end_date,
            &self.greg_end_date,
        ]
    }

    /// Serializes the record back to a single CSV input line.
    pub fn to_csv_line(&self) -> String {
        self.fields().join(",")
    }
}
