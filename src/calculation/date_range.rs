//! Gregorian date parsing and inclusive date ranges.
//!
//! Stored Gregorian dates are strings. This module is the only place that turns
//! them into [`NaiveDate`]s, and [`DateRange::overlaps`] is the single overlap
//! rule shared by the store, the calendar and the report.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Parses a stored Gregorian date.
///
/// Accepts month-first `MM/DD/YYYY` (one or two digit month and day) and
/// year-first `YYYY/MM/DD`.
///
/// # Errors
///
/// Returns `InvalidDate` when the string is not a real calendar date, including
/// shape-valid values such as `02/30/2024`.
///
/// # Example
///
/// ```
/// use vacation_tracker::calculation::parse_gregorian;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// assert_eq!(parse_gregorian("01/05/2024").unwrap(), expected);
/// assert_eq!(parse_gregorian("1/5/2024").unwrap(), expected);
/// assert_eq!(parse_gregorian("2024/01/05").unwrap(), expected);
/// assert!(parse_gregorian("01/32/2024").is_err());
/// ```
pub fn parse_gregorian(value: &str) -> TrackerResult<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y/%m/%d"))
        .map_err(|_| TrackerError::InvalidDate {
            value: value.to_string(),
        })
}

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range from `start` to `end`, both inclusive.
    ///
    /// The bounds are kept as given, so a record whose end precedes its start
    /// produces an inverted range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The range covering every day of a calendar month.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` if `month` is outside 1-12 or the year is out of range.
    pub fn month(year: i32, month: u32) -> TrackerResult<Self> {
        let invalid = || TrackerError::InvalidMonth { year, month };
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(invalid)?;
        Ok(Self::new(first, last))
    }

    /// The range covering a whole calendar year.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` if the year is outside chrono's supported range.
    pub fn year(year: i32) -> TrackerResult<Self> {
        let first = NaiveDate::from_ymd_opt(year, 1, 1);
        let last = NaiveDate::from_ymd_opt(year, 12, 31);
        match (first, last) {
            (Some(first), Some(last)) => Ok(Self::new(first, last)),
            _ => Err(TrackerError::InvalidMonth { year, month: 1 }),
        }
    }

    /// First day of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Checks if a date falls within the range, inclusive of both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Checks if this range intersects `other`.
    ///
    /// True when this range starts inside `other`, ends inside `other`, or spans
    /// all of it. Ranges that only touch at a boundary day overlap.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_tracker::calculation::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
    /// let january_first_week = DateRange::new(d(1), d(7));
    ///
    /// assert!(DateRange::new(d(7), d(9)).overlaps(&january_first_week));
    /// assert!(!DateRange::new(d(8), d(9)).overlaps(&january_first_week));
    /// ```
    pub fn overlaps(&self, other: &DateRange) -> bool {
        other.contains(self.start)
            || other.contains(self.end)
            || (self.start <= other.start && self.end >= other.end)
    }

    /// Number of days in the range, counting both ends.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterates every day in the range in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn range(start: (u32, u32), end: (u32, u32)) -> DateRange {
        DateRange::new(date(2024, start.0, start.1), date(2024, end.0, end.1))
    }

    #[test]
    fn test_parse_month_first_and_year_first() {
        assert_eq!(parse_gregorian("12/31/2024").unwrap(), date(2024, 12, 31));
        assert_eq!(parse_gregorian("2/9/2024").unwrap(), date(2024, 2, 9));
        assert_eq!(parse_gregorian("2024/02/09").unwrap(), date(2024, 2, 9));
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(parse_gregorian("02/30/2024").is_err());
        assert!(parse_gregorian("13/01/2024").is_err());
        assert!(parse_gregorian("").is_err());
    }

    #[test]
    fn test_parse_error_carries_value() {
        match parse_gregorian("01/32/2024") {
            Err(TrackerError::InvalidDate { value }) => assert_eq!(value, "01/32/2024"),
            other => panic!("Expected InvalidDate error, got {:?}", other),
        }
    }

    #[test]
    fn test_month_range_handles_leap_february() {
        let february = DateRange::month(2024, 2).unwrap();
        assert_eq!(february.start(), date(2024, 2, 1));
        assert_eq!(february.end(), date(2024, 2, 29));
        assert_eq!(february.len_days(), 29);
    }

    #[test]
    fn test_month_range_december() {
        let december = DateRange::month(2023, 12).unwrap();
        assert_eq!(december.end(), date(2023, 12, 31));
    }

    #[test]
    fn test_invalid_month() {
        assert!(matches!(
            DateRange::month(2024, 13),
            Err(TrackerError::InvalidMonth { year: 2024, month: 13 })
        ));
        assert!(DateRange::month(2024, 0).is_err());
    }

    #[test]
    fn test_year_range() {
        let year = DateRange::year(2024).unwrap();
        assert_eq!(year.len_days(), 366);
    }

    #[test]
    fn test_overlap_start_inside() {
        assert!(range((1, 5), (1, 20)).overlaps(&range((1, 1), (1, 10))));
    }

    #[test]
    fn test_overlap_end_inside() {
        let spills_in = DateRange::new(date(2023, 12, 28), date(2024, 1, 3));
        assert!(spills_in.overlaps(&range((1, 1), (1, 31))));
    }

    #[test]
    fn test_overlap_spanning() {
        assert!(range((1, 1), (3, 31)).overlaps(&range((2, 1), (2, 29))));
    }

    #[test]
    fn test_overlap_contained() {
        assert!(range((2, 10), (2, 12)).overlaps(&range((2, 1), (2, 29))));
    }

    #[test]
    fn test_boundary_touch_overlaps() {
        let query = range((2, 1), (2, 29));
        assert!(range((1, 20), (2, 1)).overlaps(&query));
        assert!(range((2, 29), (3, 5)).overlaps(&query));
    }

    #[test]
    fn test_disjoint_ranges_do_not_overlap() {
        let query = range((2, 1), (2, 29));
        assert!(!range((1, 1), (1, 31)).overlaps(&query));
        assert!(!range((3, 1), (3, 2)).overlaps(&query));
    }

    #[test]
    fn test_days_iterates_inclusive() {
        let days: Vec<NaiveDate> = range((2, 28), (3, 1)).days().collect();
        assert_eq!(days, vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]);
    }
}
