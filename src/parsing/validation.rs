//! Per-record field validation.

use thiserror::Error;

use crate::models::VacationType;

use super::patterns::{is_employee_id, is_gregorian_date, is_hijri_date};

/// Number of fields in one vacation record.
pub const FIELD_COUNT: usize = 7;

/// The first rule a candidate record failed.
///
/// Messages are the user-facing Arabic texts shown next to the offending line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The record does not have exactly seven fields.
    #[error("عدد الحقول غير صحيح")]
    FieldCount,

    /// The type is not one of the accepted synonyms.
    #[error("نوع الإجازة غير صحيح")]
    InvalidType,

    /// The employee number is not all ASCII digits.
    #[error("رقم الموظف غير صحيح")]
    InvalidEmployeeId,

    /// A Hijri date does not match `144Y/MM/DD`.
    #[error("صيغة التاريخ الهجري غير صحيحة")]
    InvalidHijriDate,

    /// A Gregorian date matches neither `YYYY/MM/DD` nor `M/D/YYYY`.
    #[error("صيغة لتاريخ الميلادي غير صحيحة")]
    InvalidGregorianDate,
}

/// Validates the raw fields of one candidate record.
///
/// Rules run in a fixed order and stop at the first failure: field count, type,
/// employee number, both Hijri dates, both Gregorian dates. Each field is trimmed
/// before its check. The name is free text and only has to be non-empty; a blank
/// name is reported as a field count error after every other rule has passed.
///
/// # Example
///
/// ```
/// use vacation_tracker::parsing::{FieldError, validate_fields};
///
/// let fields = ["عادية", "10O1", "Ahmed", "bad", "bad", "bad", "bad"];
/// assert_eq!(validate_fields(&fields), Err(FieldError::InvalidEmployeeId));
/// ```
pub fn validate_fields(fields: &[&str]) -> Result<(), FieldError> {
    if fields.len() != FIELD_COUNT {
        return Err(FieldError::FieldCount);
    }

    let [vacation_type, employee_id, name, hijri_start, greg_start, hijri_end, greg_end] =
        [0usize, 1, 2, 3, 4, 5, 6].map(|i| fields[i].trim());

    if !VacationType::is_accepted(vacation_type) {
        return Err(FieldError::InvalidType);
    }

    if !is_employee_id(employee_id) {
        return Err(FieldError::InvalidEmployeeId);
    }

    if !is_hijri_date(hijri_start) || !is_hijri_date(hijri_end) {
        return Err(FieldError::InvalidHijriDate);
    }

    if !is_gregorian_date(greg_start) || !is_gregorian_date(greg_end) {
        return Err(FieldError::InvalidGregorianDate);
    }

    // An empty name counts as a missing field.
    if name.is_empty() {
        return Err(FieldError::FieldCount);
    }

    Ok(())
}
