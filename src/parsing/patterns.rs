//! Field shape patterns.
//!
//! Dates are validated by shape only. Digit classes are spelled `[0-9]` because the
//! `regex` crate's `\d` also matches non-ASCII digits.

use std::sync::OnceLock;

use regex::Regex;

fn employee_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+$").expect("invalid employee id regex"))
}

fn hijri_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^144[0-9]/[0-9]{2}/[0-9]{2}$").expect("invalid hijri regex"))
}

fn gregorian_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([0-9]{4}/[0-9]{2}/[0-9]{2}|[0-9]{1,2}/[0-9]{1,2}/[0-9]{4})$")
            .expect("invalid gregorian regex")
    })
}

fn year_first_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([0-9]{4})/([0-9]{2})/([0-9]{2})$").expect("invalid year-first regex")
    })
}

/// Returns true for a non-empty string of ASCII digits.
pub fn is_employee_id(value: &str) -> bool {
    employee_id_re().is_match(value)
}

/// Returns true for `144Y/MM/DD` shaped Hijri dates.
pub fn is_hijri_date(value: &str) -> bool {
    hijri_date_re().is_match(value)
}

/// Returns true for `YYYY/MM/DD` or `M/D/YYYY` shaped Gregorian dates.
///
/// Calendar correctness is not checked: `01/32/2024` passes.
pub fn is_gregorian_date(value: &str) -> bool {
    gregorian_date_re().is_match(value)
}

/// Rewrites `YYYY/MM/DD` to `MM/DD/YYYY`; any other value is returned unchanged.
///
/// # Example
///
/// ```
/// use vacation_tracker::parsing::normalize_gregorian;
///
/// assert_eq!(normalize_gregorian("2024/01/05"), "01/05/2024");
/// assert_eq!(normalize_gregorian("1/5/2024"), "1/5/2024");
/// ```
pub fn normalize_gregorian(value: &str) -> String {
    match year_first_re().captures(value) {
        Some(caps) => format!("{}/{}/{}", &caps[2], &caps[3], &caps[1]),
        None => value.to_string(),
    }
}
