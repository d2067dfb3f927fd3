//! Input parsing and validation for the Vacation Tracking Engine.
//!
//! This module turns loosely structured pasted text into validated vacation
//! records: format detection, field shape checks, synonym normalization, and
//! per-record issue reporting.

mod input;
mod patterns;
mod validation;

pub use input::{InputFormat, ParseIssue, ParseOutcome, detect_format, parse_input};
pub use patterns::{is_employee_id, is_gregorian_date, is_hijri_date, normalize_gregorian};
pub use validation::{FIELD_COUNT, FieldError, validate_fields};
