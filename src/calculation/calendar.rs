//! Month calendar model.
//!
//! Builds the per-employee month grid: one column per day of the month, one row
//! per employee with at least one vacation touching the month, and in each cell the
//! type of the vacation covering that day.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use tracing::warn;

use crate::error::TrackerResult;
use crate::models::{VacationRecord, VacationType};

use super::date_range::DateRange;

const MONTH_LABELS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Returns the Arabic name of a month (1-12).
pub fn month_label(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_LABELS.get(index).copied()
}

/// Friday and Saturday form the weekend.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Fri | Weekday::Sat)
}

/// One column of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// Whether the day falls on the weekend.
    pub is_weekend: bool,
}

/// One employee's row of the calendar grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeRow {
    /// The employee number.
    pub employee_id: String,
    /// Name from the employee's first vacation in the month.
    pub name: String,
    /// One entry per day of the month; `Some` when a vacation covers the day.
    pub cells: Vec<Option<VacationType>>,
}

/// The calendar grid for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCalendar {
    /// The displayed year.
    pub year: i32,
    /// The displayed month (1-12).
    pub month: u32,
    /// Every day of the month in order.
    pub days: Vec<CalendarDay>,
    /// Employees with a vacation touching the month, ordered by employee number.
    pub rows: Vec<EmployeeRow>,
}

impl MonthCalendar {
    /// Builds the grid for `year`/`month` from the full record collection.
    ///
    /// Records whose Gregorian dates do not parse are skipped. When two vacations
    /// of one employee cover the same day, the earlier record in the collection wins.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` if the year/month pair is not a real month.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_tracker::calculation::MonthCalendar;
    /// use vacation_tracker::models::VacationType;
    /// use vacation_tracker::parsing::parse_input;
    ///
    /// let records = parse_input("مرضية,1001,Ahmed,1445/07/20,02/01/2024,1445/07/21,02/02/2024").data;
    /// let calendar = MonthCalendar::build(&records, 2024, 2).unwrap();
    ///
    /// assert_eq!(calendar.days.len(), 29);
    /// assert_eq!(calendar.rows[0].cells[0], Some(VacationType::Sick));
    /// assert_eq!(calendar.rows[0].cells[2], None);
    /// ```
    pub fn build(records: &[VacationRecord], year: i32, month: u32) -> TrackerResult<Self> {
        let month_range = DateRange::month(year, month)?;
        let days: Vec<CalendarDay> = month_range
            .days()
            .map(|date| CalendarDay {
                date,
                is_weekend: is_weekend(date),
            })
            .collect();

        let mut rows: Vec<EmployeeRow> = Vec::new();
        let mut row_index: HashMap<&str, usize> = HashMap::new();

        for record in records {
            let range = match record.date_range() {
                Ok(range) => range,
                Err(err) => {
                    warn!(
                        employee_id = %record.employee_id(),
                        error = %err,
                        "Skipping vacation with unparseable dates"
                    );
                    continue;
                }
            };
            if !range.overlaps(&month_range) {
                continue;
            }

            let index = *row_index.entry(record.employee_id()).or_insert_with(|| {
                rows.push(EmployeeRow {
                    employee_id: record.employee_id().to_string(),
                    name: record.name().to_string(),
                    cells: vec![None; days.len()],
                });
                rows.len() - 1
            });

            for (cell, day) in rows[index].cells.iter_mut().zip(&days) {
                if cell.is_none() && range.contains(day.date) {
                    *cell = Some(record.vacation_type().clone());
                }
            }
        }

        rows.sort_by(|a, b| compare_employee_ids(&a.employee_id, &b.employee_id));

        Ok(Self {
            year,
            month,
            days,
            rows,
        })
    }

    /// The Arabic name of the displayed month.
    pub fn label(&self) -> &'static str {
        month_label(self.month).unwrap_or_default()
    }
}

/// Orders digit strings by numeric value without parsing them.
fn compare_employee_ids(a: &str, b: &str) -> Ordering {
    let a_digits = a.trim_start_matches('0');
    let b_digits = b.trim_start_matches('0');
    a_digits
        .len()
        .cmp(&b_digits.len())
        .then_with(|| a_digits.cmp(b_digits))
        .then_with(|| a.cmp(b))
}
