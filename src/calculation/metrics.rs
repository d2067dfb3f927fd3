//! Derived hour metrics for a single vacation.
//!
//! All functions are pure. The figures assume an 8-hour working day and a fixed
//! monthly budget of 192 working hours.

use serde::Serialize;

use crate::error::TrackerResult;
use crate::models::VacationRecord;

use super::date_range::parse_gregorian;

/// Working hours charged per vacation day.
pub const HOURS_PER_VACATION_DAY: i64 = 8;

/// Monthly working-hour budget.
pub const MONTHLY_WORKING_HOURS: i64 = 192;

/// Compensation hours owed per vacation day.
pub const OVERDUE_HOURS_PER_DAY: i64 = 2;

/// Overdue hours at or above this value are highlighted in reports.
pub const OVERDUE_HIGHLIGHT_THRESHOLD: i64 = 6;

/// Inclusive day count between two stored Gregorian dates.
///
/// # Errors
///
/// Returns `InvalidDate` if either string does not parse.
///
/// # Example
///
/// ```
/// use vacation_tracker::calculation::duration;
///
/// assert_eq!(duration("01/01/2024", "01/01/2024").unwrap(), 1);
/// assert_eq!(duration("02/27/2024", "03/01/2024").unwrap(), 4);
/// ```
pub fn duration(start: &str, end: &str) -> TrackerResult<i64> {
    let start = parse_gregorian(start)?;
    let end = parse_gregorian(end)?;
    Ok((end - start).num_days() + 1)
}

/// Working hours covered by `days` of vacation.
pub fn vacation_hours(days: i64) -> i64 {
    days * HOURS_PER_VACATION_DAY
}

/// Hours left of the monthly budget. Not clamped; long vacations go negative.
pub fn remaining_hours(vacation_hours: i64) -> i64 {
    MONTHLY_WORKING_HOURS - vacation_hours
}

/// Compensation hours owed for `days` of vacation.
pub fn overdue_hours(days: i64) -> i64 {
    days * OVERDUE_HOURS_PER_DAY
}

/// All derived metrics for one vacation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VacationMetrics {
    /// Inclusive day count.
    pub duration_days: i64,
    /// Working hours covered.
    pub vacation_hours: i64,
    /// Monthly budget minus vacation hours.
    pub remaining_hours: i64,
    /// Compensation hours owed.
    pub overdue_hours: i64,
}

impl VacationMetrics {
    /// Derives every metric from a day count.
    pub fn from_days(days: i64) -> Self {
        let hours = vacation_hours(days);
        Self {
            duration_days: days,
            vacation_hours: hours,
            remaining_hours: remaining_hours(hours),
            overdue_hours: overdue_hours(days),
        }
    }

    /// Derives every metric from a record's Gregorian dates.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDate` if either stored date does not parse.
    pub fn for_record(record: &VacationRecord) -> TrackerResult<Self> {
        let days = duration(record.greg_start_date(), record.greg_end_date())?;
        Ok(Self::from_days(days))
    }

    /// Returns true when the overdue hours reach the highlight threshold.
    pub fn is_overdue_flagged(&self) -> bool {
        self.overdue_hours >= OVERDUE_HIGHLIGHT_THRESHOLD
    }
}
