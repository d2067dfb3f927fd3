//! Calculation logic for the Vacation Tracking Engine.
//!
//! This module holds everything derived from stored records: Gregorian date
//! parsing and the shared overlap rule, per-vacation hour metrics, the month
//! calendar grid, and the filtered report with its per-type statistics.

mod calendar;
mod date_range;
mod metrics;
mod report;

pub use calendar::{CalendarDay, EmployeeRow, MonthCalendar, is_weekend, month_label};
pub use date_range::{DateRange, parse_gregorian};
pub use metrics::{
    HOURS_PER_VACATION_DAY, MONTHLY_WORKING_HOURS, OVERDUE_HIGHLIGHT_THRESHOLD,
    OVERDUE_HOURS_PER_DAY, VacationMetrics, duration, overdue_hours, remaining_hours,
    vacation_hours,
};
pub use report::{
    Report, ReportFilter, ReportRow, ReportStats, SortDirection, SortKey, available_years,
    sort_rows,
};
