//! Vacation report model.
//!
//! Filters the collection by year, month and type, counts the matches per type,
//! and attaches the derived hour metrics to every matching record.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use chrono::Datelike;
use serde::Serialize;
use tracing::warn;

use crate::error::TrackerResult;
use crate::models::{VacationRecord, VacationType};

use super::date_range::DateRange;
use super::metrics::VacationMetrics;

/// Report selection. `None` means "all" for month and type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFilter {
    /// Calendar year the vacation must touch.
    pub year: i32,
    /// Month (1-12) the vacation must touch.
    pub month: Option<u32>,
    /// Required vacation type.
    pub vacation_type: Option<VacationType>,
}

impl ReportFilter {
    /// Every vacation touching `year`.
    pub fn for_year(year: i32) -> Self {
        Self {
            year,
            month: None,
            vacation_type: None,
        }
    }

    /// Restricts the filter to one month of the year.
    pub fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    /// Restricts the filter to one vacation type.
    pub fn with_type(mut self, vacation_type: VacationType) -> Self {
        self.vacation_type = Some(vacation_type);
        self
    }
}

/// Counts of matching vacations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportStats {
    /// Number of matching vacations.
    pub total: usize,
    /// Matching vacations per type.
    pub by_type: HashMap<VacationType, usize>,
}

impl ReportStats {
    /// Count for one type, zero when absent.
    pub fn count(&self, vacation_type: &VacationType) -> usize {
        self.by_type.get(vacation_type).copied().unwrap_or(0)
    }
}

/// A matching vacation with its parsed range and metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow<'a> {
    /// The underlying record.
    pub record: &'a VacationRecord,
    /// Parsed Gregorian range.
    pub range: DateRange,
    /// Derived hour metrics.
    pub metrics: VacationMetrics,
}

/// Column a report can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Employee name.
    Name,
    /// Type label.
    Type,
    /// Gregorian start date.
    StartDate,
    /// Gregorian end date.
    EndDate,
    /// Inclusive day count.
    Duration,
    /// Vacation hours.
    VacationHours,
    /// Remaining monthly hours.
    RemainingHours,
    /// Overdue compensation hours.
    OverdueHours,
}

/// Sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The opposite direction; used when a column is selected twice.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The filtered report: statistics plus one row per matching vacation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report<'a> {
    /// Per-type counts.
    pub stats: ReportStats,
    /// Matching vacations in collection order.
    pub rows: Vec<ReportRow<'a>>,
}

impl<'a> Report<'a> {
    /// Builds the report for `filter` over the full collection.
    ///
    /// A vacation matches when it overlaps the selected year, overlaps the
    /// selected month (if any), and has the selected type (if any). Records whose
    /// dates do not parse never match.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` for an impossible year or month selection.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_tracker::calculation::{Report, ReportFilter};
    /// use vacation_tracker::models::VacationType;
    /// use vacation_tracker::parsing::parse_input;
    ///
    /// let records = parse_input("مرضية,1001,Ahmed,1445/07/20,02/01/2024,1445/07/21,02/02/2024").data;
    /// let report = Report::build(&records, &ReportFilter::for_year(2024).with_month(2)).unwrap();
    ///
    /// assert_eq!(report.stats.total, 1);
    /// assert_eq!(report.stats.count(&VacationType::Sick), 1);
    /// assert_eq!(report.rows[0].metrics.vacation_hours, 16);
    /// ```
    pub fn build(records: &'a [VacationRecord], filter: &ReportFilter) -> TrackerResult<Self> {
        let year_range = DateRange::year(filter.year)?;
        let month_range = filter
            .month
            .map(|month| DateRange::month(filter.year, month))
            .transpose()?;

        let mut stats = ReportStats::default();
        let mut rows = Vec::new();

        for record in records {
            let type_matches = filter
                .vacation_type
                .as_ref()
                .is_none_or(|wanted| record.vacation_type() == wanted);
            if !type_matches {
                continue;
            }

            let range = match record.date_range() {
                Ok(range) => range,
                Err(err) => {
                    warn!(
                        employee_id = %record.employee_id(),
                        error = %err,
                        "Leaving vacation with unparseable dates out of report"
                    );
                    continue;
                }
            };

            let in_year = range.overlaps(&year_range);
            let in_month = month_range.is_none_or(|month| range.overlaps(&month));
            if !(in_year && in_month) {
                continue;
            }

            stats.total += 1;
            *stats
                .by_type
                .entry(record.vacation_type().clone())
                .or_insert(0) += 1;

            rows.push(ReportRow {
                record,
                range,
                metrics: VacationMetrics::from_days(range.len_days()),
            });
        }

        Ok(Self { stats, rows })
    }

    /// Sorts the rows in place. Ties keep their collection order.
    pub fn sort(&mut self, key: SortKey, direction: SortDirection) {
        sort_rows(&mut self.rows, key, direction);
    }
}

/// Sorts report rows by one column. The sort is stable.
///
/// Dates compare as calendar dates, not as their stored strings.
pub fn sort_rows(rows: &mut [ReportRow<'_>], key: SortKey, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = compare_rows(a, b, key);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare_rows(a: &ReportRow<'_>, b: &ReportRow<'_>, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.record.name().cmp(b.record.name()),
        SortKey::Type => a
            .record
            .vacation_type()
            .label()
            .cmp(b.record.vacation_type().label()),
        SortKey::StartDate => a.range.start().cmp(&b.range.start()),
        SortKey::EndDate => a.range.end().cmp(&b.range.end()),
        SortKey::Duration => a.metrics.duration_days.cmp(&b.metrics.duration_days),
        SortKey::VacationHours => a.metrics.vacation_hours.cmp(&b.metrics.vacation_hours),
        SortKey::RemainingHours => a.metrics.remaining_hours.cmp(&b.metrics.remaining_hours),
        SortKey::OverdueHours => a.metrics.overdue_hours.cmp(&b.metrics.overdue_hours),
    }
}

/// Years in which at least one vacation starts, ascending.
pub fn available_years(records: &[VacationRecord]) -> Vec<i32> {
    records
        .iter()
        .filter_map(|record| record.date_range().ok())
        .map(|range| range.start().year())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_input;

    fn sample() -> Vec<VacationRecord> {
        let input = [
            "عادية,1001,Ahmed,1445/06/15,12/28/2023,1445/06/22,01/03/2024",
            "مرضية,1002,Sara,1445/07/20,02/01/2024,1445/07/21,02/02/2024",
            "تعويضية,1003,Omar,1445/08/01,02/10/2024,1445/08/05,02/14/2024",
            "عادية,1004,Laila,1445/09/01,2024/03/05,1445/09/01,2024/03/05",
            "مرضية,1005,Huda,1446/01/01,01/10/2025,1446/01/01,01/11/2025",
        ]
        .join("\n");
        let outcome = parse_input(&input);
        assert!(outcome.errors.is_empty(), "{:?}", outcome.error_messages());
        outcome.data
    }

    fn names<'a>(report: &'a Report<'_>) -> Vec<&'a str> {
        report.rows.iter().map(|row| row.record.name()).collect()
    }

    #[test]
    fn test_year_filter_includes_spill_over() {
        let records = sample();
        let report = Report::build(&records, &ReportFilter::for_year(2024)).unwrap();

        assert_eq!(names(&report), vec!["Ahmed", "Sara", "Omar", "Laila"]);
        assert_eq!(report.stats.total, 4);
        assert_eq!(report.stats.count(&VacationType::Regular), 2);
        assert_eq!(report.stats.count(&VacationType::Sick), 1);
        assert_eq!(report.stats.count(&VacationType::Compensatory), 1);
    }

    #[test]
    fn test_earlier_year_sees_december_start() {
        let records = sample();
        let report = Report::build(&records, &ReportFilter::for_year(2023)).unwrap();
        assert_eq!(names(&report), vec!["Ahmed"]);
    }

    #[test]
    fn test_month_filter() {
        let records = sample();
        let report =
            Report::build(&records, &ReportFilter::for_year(2024).with_month(2)).unwrap();
        assert_eq!(names(&report), vec!["Sara", "Omar"]);
    }

    #[test]
    fn test_type_filter() {
        let records = sample();
        let filter = ReportFilter::for_year(2024).with_type(VacationType::Regular);
        let report = Report::build(&records, &filter).unwrap();

        assert_eq!(names(&report), vec!["Ahmed", "Laila"]);
        assert_eq!(report.stats.count(&VacationType::Sick), 0);
    }

    #[test]
    fn test_rows_carry_metrics() {
        let records = sample();
        let filter = ReportFilter::for_year(2024).with_month(2);
        let report = Report::build(&records, &filter).unwrap();
        let omar = &report.rows[1];

        assert_eq!(omar.metrics.duration_days, 5);
        assert_eq!(omar.metrics.vacation_hours, 40);
        assert_eq!(omar.metrics.remaining_hours, 152);
        assert_eq!(omar.metrics.overdue_hours, 10);
        assert!(omar.metrics.is_overdue_flagged());
    }

    #[test]
    fn test_invalid_month_selection() {
        let records = sample();
        let filter = ReportFilter::for_year(2024).with_month(0);
        assert!(Report::build(&records, &filter).is_err());
    }

    #[test]
    fn test_sort_by_duration_descending() {
        let records = sample();
        let mut report = Report::build(&records, &ReportFilter::for_year(2024)).unwrap();
        report.sort(SortKey::Duration, SortDirection::Descending);

        assert_eq!(names(&report), vec!["Ahmed", "Omar", "Sara", "Laila"]);
    }

    #[test]
    fn test_sort_by_start_date_uses_calendar_order() {
        let records = sample();
        let mut report = Report::build(&records, &ReportFilter::for_year(2024)).unwrap();
        report.sort(SortKey::StartDate, SortDirection::Descending);

        // "12/28/2023" sorts after "03/05/2024" as a string but is the earliest date.
        assert_eq!(names(&report), vec!["Laila", "Omar", "Sara", "Ahmed"]);
    }

    #[test]
    fn test_sort_by_type_is_stable_on_ties() {
        let records = sample();
        let mut report = Report::build(&records, &ReportFilter::for_year(2024)).unwrap();
        report.sort(SortKey::Type, SortDirection::Ascending);

        let types: Vec<&str> = report
            .rows
            .iter()
            .map(|row| row.record.vacation_type().label())
            .collect();
        let mut sorted = types.clone();
        sorted.sort();
        assert_eq!(types, sorted);

        let regular: Vec<&str> = report
            .rows
            .iter()
            .filter(|row| row.record.vacation_type() == &VacationType::Regular)
            .map(|row| row.record.name())
            .collect();
        assert_eq!(regular, vec!["Ahmed", "Laila"]);
    }

    #[test]
    fn test_toggle_direction() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
    }

    #[test]
    fn test_available_years() {
        assert_eq!(available_years(&sample()), vec![2023, 2024, 2025]);
    }
}
