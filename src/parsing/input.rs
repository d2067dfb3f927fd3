//! Pasted-text parsing.
//!
//! Turns raw pasted text into validated [`VacationRecord`]s plus one labelled issue
//! per rejected record. Two layouts are accepted:
//!
//! - CSV: one record per line, seven comma-separated fields.
//! - Block: seven consecutive lines per record, one field per line.
//!
//! A single comma anywhere in the input switches the whole input to CSV.

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::VacationRecord;

use super::validation::{FIELD_COUNT, FieldError};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// The layout detected for a pasted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// One comma-separated record per line.
    Csv,
    /// Seven lines per record.
    Block,
}

/// A problem found while parsing, labelled with its position in the input.
///
/// Line and group numbers are 1-based and count only non-blank lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIssue {
    /// A CSV line failed validation.
    #[error("سطر {line}: {error}")]
    Line {
        /// 1-based line number.
        line: usize,
        /// The first rule the line failed.
        error: FieldError,
    },

    /// A 7-line group failed validation.
    #[error("مجموعة البيانات رقم {group}: {error}")]
    Group {
        /// 1-based group number.
        group: usize,
        /// The first rule the group failed.
        error: FieldError,
    },

    /// Fewer than seven lines remained at the start of a group.
    #[error("بيانات غير مكتملة عند السطر {line}")]
    IncompleteGroup {
        /// 1-based line number where the incomplete group starts.
        line: usize,
    },
}

/// The result of parsing a pasted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// The detected layout.
    pub format: InputFormat,
    /// Issues in input order, at most one per candidate record.
    pub errors: Vec<ParseIssue>,
    /// Valid records in input order.
    pub data: Vec<VacationRecord>,
}

impl ParseOutcome {
    /// Returns the issues rendered as user-facing messages.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Returns true if no issue was reported.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parses pasted vacation text.
///
/// Never fails: malformed records are reported in [`ParseOutcome::errors`] and
/// left out of [`ParseOutcome::data`].
///
/// # Example
///
/// ```
/// use vacation_tracker::models::VacationType;
/// use vacation_tracker::parsing::{InputFormat, parse_input};
///
/// let outcome = parse_input("عادية,1001,Ahmed,1445/01/01,01/01/2024,1445/01/05,01/05/2024");
///
/// assert_eq!(outcome.format, InputFormat::Csv);
/// assert!(outcome.is_clean());
/// assert_eq!(outcome.data[0].vacation_type(), &VacationType::Regular);
/// ```
pub fn parse_input(raw: &str) -> ParseOutcome {
    let text = raw.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw).trim();
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    let format = detect_format(&lines);

    debug!(lines = lines.len(), format = ?format, "Parsing vacation input");

    let mut outcome = ParseOutcome {
        format,
        errors: Vec::new(),
        data: Vec::new(),
    };

    match format {
        InputFormat::Csv => parse_csv(&lines, &mut outcome),
        InputFormat::Block => parse_blocks(&lines, &mut outcome),
    }

    if !outcome.errors.is_empty() {
        warn!(
            rejected = outcome.errors.len(),
            accepted = outcome.data.len(),
            "Vacation input contained invalid records"
        );
    }

    outcome
}

/// Picks CSV when any line contains a comma, block layout otherwise.
pub fn detect_format(lines: &[&str]) -> InputFormat {
    if lines.iter().any(|line| line.contains(',')) {
        InputFormat::Csv
    } else {
        InputFormat::Block
    }
}

fn parse_csv(lines: &[&str], outcome: &mut ParseOutcome) {
    for (index, line) in lines.iter().enumerate() {
        let fields: Vec<&str> = line.split(',').collect();
        match VacationRecord::try_from_fields(&fields) {
            Ok(record) => outcome.data.push(record),
            Err(error) => outcome.errors.push(ParseIssue::Line {
                line: index + 1,
                error,
            }),
        }
    }
}

fn parse_blocks(lines: &[&str], outcome: &mut ParseOutcome) {
    for (group_index, start) in (0..lines.len()).step_by(FIELD_COUNT).enumerate() {
        let Some(fields) = lines.get(start..start + FIELD_COUNT) else {
            outcome
                .errors
                .push(ParseIssue::IncompleteGroup { line: start + 1 });
            break;
        };

        match VacationRecord::try_from_fields(fields) {
            Ok(record) => outcome.data.push(record),
            Err(error) => outcome.errors.push(ParseIssue::Group {
                group: group_index + 1,
                error,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VacationType;

    const CSV_LINE: &str = "عادية,1001,Ahmed,1445/01/01,01/01/2024,1445/01/05,01/05/2024";

    fn block(vacation_type: &str, employee_id: &str, name: &str) -> String {
        [
            vacation_type,
            employee_id,
            name,
            "1445/01/01",
            "2024/01/01",
            "1445/01/05",
            "2024/01/05",
        ]
        .join("\n")
    }

    #[test]
    fn test_single_csv_line() {
        let outcome = parse_input(CSV_LINE);

        assert_eq!(outcome.format, InputFormat::Csv);
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.data.len(), 1);
        assert_eq!(outcome.data[0].vacation_type(), &VacationType::Regular);
        assert_eq!(outcome.data[0].name(), "Ahmed");
    }

    #[test]
    fn test_bom_and_surrounding_whitespace_are_ignored() {
        let outcome = parse_input(&format!("\u{feff}\n\n  {}  \n\n", CSV_LINE));
        assert!(outcome.is_clean());
        assert_eq!(outcome.data.len(), 1);
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let input = format!("{}\r\n\r\n   \r\n{}\r\n", CSV_LINE, CSV_LINE);
        let outcome = parse_input(&input);

        assert!(outcome.is_clean());
        assert_eq!(outcome.data.len(), 2);
        assert_eq!(outcome.data[1].hijri_end_date(), "1445/01/05");
    }

    #[test]
    fn test_csv_errors_are_labelled_by_line() {
        let input = format!(
            "{}\nمرضية,12x,Sara,1445/01/01,01/01/2024,1445/01/05,01/05/2024\n{}",
            CSV_LINE, CSV_LINE
        );
        let outcome = parse_input(&input);

        assert_eq!(outcome.data.len(), 2);
        assert_eq!(outcome.error_messages(), vec!["سطر 2: رقم الموظف غير صحيح"]);
    }

    #[test]
    fn test_csv_line_with_too_few_fields() {
        let outcome = parse_input("عادية,1001,Ahmed");
        assert_eq!(
            outcome.errors,
            vec![ParseIssue::Line {
                line: 1,
                error: FieldError::FieldCount
            }]
        );
        assert!(outcome.data.is_empty());
    }

    #[test]
    fn test_one_comma_makes_everything_csv() {
        // Would be a perfectly valid block without the comma on the name line.
        let input = block("عادية", "1001", "Ahmed, Ali");
        let outcome = parse_input(&input);

        assert_eq!(outcome.format, InputFormat::Csv);
        assert!(outcome.data.is_empty());
        assert_eq!(outcome.errors.len(), 7);
        let all_field_count = outcome.errors.iter().all(|e| {
            matches!(
                e,
                ParseIssue::Line {
                    error: FieldError::FieldCount,
                    ..
                }
            )
        });
        assert!(all_field_count);
    }

    #[test]
    fn test_single_block() {
        let outcome = parse_input(&block("مرافق", "1001", "Ahmed"));

        assert_eq!(outcome.format, InputFormat::Block);
        assert!(outcome.is_clean());
        assert_eq!(outcome.data[0].vacation_type(), &VacationType::Sick);
        assert_eq!(outcome.data[0].greg_start_date(), "01/01/2024");
        assert_eq!(outcome.data[0].greg_end_date(), "01/05/2024");
    }

    #[test]
    fn test_block_errors_are_labelled_by_group() {
        let input = format!(
            "{}\n{}",
            block("عادية", "1001", "Ahmed"),
            block("عادية", "10A2", "Sara")
        );
        let outcome = parse_input(&input);

        assert_eq!(outcome.data.len(), 1);
        assert_eq!(outcome.data[0].employee_id(), "1001");
        assert_eq!(
            outcome.error_messages(),
            vec!["مجموعة البيانات رقم 2: رقم الموظف غير صحيح"]
        );
    }

    #[test]
    fn test_incomplete_trailing_group_keeps_earlier_records() {
        let input = format!(
            "{}\n{}\nعادية\n1003\nOmar",
            block("عادية", "1001", "Ahmed"),
            block("تعويضية", "1002", "Sara")
        );
        let outcome = parse_input(&input);

        assert_eq!(outcome.data.len(), 2);
        assert_eq!(
            outcome.errors,
            vec![ParseIssue::IncompleteGroup { line: 15 }]
        );
        assert_eq!(outcome.error_messages(), vec!["بيانات غير مكتملة عند السطر 15"]);
    }

    #[test]
    fn test_incomplete_group_stops_after_invalid_group() {
        let input = format!("{}\nعادية", block("سنوية", "1001", "Ahmed"));
        let outcome = parse_input(&input);

        assert!(outcome.data.is_empty());
        assert_eq!(
            outcome.error_messages(),
            vec![
                "مجموعة البيانات رقم 1: نوع الإجازة غير صحيح",
                "بيانات غير مكتملة عند السطر 8",
            ]
        );
    }

    #[test]
    fn test_short_block_input() {
        let outcome = parse_input("عادية\n1001");
        assert_eq!(outcome.format, InputFormat::Block);
        assert_eq!(outcome.errors, vec![ParseIssue::IncompleteGroup { line: 1 }]);
    }

    #[test]
    fn test_empty_input() {
        let outcome = parse_input("\u{feff}  \n \n");
        assert!(outcome.is_clean());
        assert!(outcome.data.is_empty());
        assert_eq!(outcome.format, InputFormat::Block);
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format(&["a", "b,c"]), InputFormat::Csv);
        assert_eq!(detect_format(&["a", "b"]), InputFormat::Block);
        assert_eq!(detect_format(&[]), InputFormat::Block);
    }
}
