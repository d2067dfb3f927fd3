//! Vacation type model and its display table.
//!
//! [`VacationType`] is the single canonical enumeration of leave categories. Every
//! consumer that needs a colour, letter or label for a type goes through
//! [`VacationType::style`] rather than keeping its own lookup table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical label for regular leave.
pub const REGULAR_LABEL: &str = "عادية";
/// Canonical label for sick leave.
pub const SICK_LABEL: &str = "مرضية";
/// Canonical label for compensatory leave.
pub const COMPENSATORY_LABEL: &str = "تعويضية";

/// Accepted input spellings and the canonical type each one maps to.
///
/// Companion leave (`مرافق`, `مرافقة`) is booked as sick leave.
const SYNONYMS: [(&str, VacationType); 6] = [
    ("عادية", VacationType::Regular),
    ("عادية عن ايام غياب", VacationType::Regular),
    ("مرضية", VacationType::Sick),
    ("مرافقة", VacationType::Sick),
    ("مرافق", VacationType::Sick),
    ("تعويضية", VacationType::Compensatory),
];

/// The category of a vacation record.
///
/// Serialized as its Arabic label so the persisted collection stays readable and
/// compatible with previously stored data.
///
/// # Example
///
/// ```
/// use vacation_tracker::models::VacationType;
///
/// assert_eq!(VacationType::from_synonym("مرافق"), Some(VacationType::Sick));
/// assert_eq!(VacationType::from_synonym("سنوية"), None);
/// assert_eq!(VacationType::Regular.label(), "عادية");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VacationType {
    /// Regular annual leave (`عادية`).
    Regular,
    /// Sick leave, including companion leave (`مرضية`).
    Sick,
    /// Compensatory leave (`تعويضية`).
    Compensatory,
    /// A label outside the canonical set, only reachable through persisted data.
    Other(String),
}

/// Display attributes for a vacation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeStyle<'a> {
    /// Human-readable label.
    pub label: &'a str,
    /// Colour family used for badges and calendar cells.
    pub color: &'static str,
    /// Latin letter used in report badges.
    pub letter: char,
    /// Arabic letter used in calendar cells.
    pub calendar_letter: char,
}

impl VacationType {
    /// The canonical types, in display order.
    pub const CANONICAL: [VacationType; 3] = [
        VacationType::Regular,
        VacationType::Sick,
        VacationType::Compensatory,
    ];

    /// Maps an accepted input spelling to its canonical type.
    ///
    /// Returns `None` for values outside the accepted synonym set. The input is
    /// matched exactly; callers trim beforehand.
    pub fn from_synonym(raw: &str) -> Option<Self> {
        SYNONYMS
            .iter()
            .find(|(synonym, _)| *synonym == raw)
            .map(|(_, vacation_type)| vacation_type.clone())
    }

    /// Returns true if the value is one of the accepted input spellings.
    pub fn is_accepted(raw: &str) -> bool {
        SYNONYMS.iter().any(|(synonym, _)| *synonym == raw)
    }

    /// Returns the stored label for this type.
    pub fn label(&self) -> &str {
        match self {
            VacationType::Regular => REGULAR_LABEL,
            VacationType::Sick => SICK_LABEL,
            VacationType::Compensatory => COMPENSATORY_LABEL,
            VacationType::Other(label) => label,
        }
    }

    /// Returns the display attributes for this type.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_tracker::models::VacationType;
    ///
    /// let style = VacationType::Sick.style();
    /// assert_eq!(style.color, "red");
    /// assert_eq!(style.letter, 'S');
    /// assert_eq!(style.calendar_letter, 'م');
    /// ```
    pub fn style(&self) -> TypeStyle<'_> {
        let (color, letter, calendar_letter) = match self {
            VacationType::Regular => ("blue", 'R', 'ع'),
            VacationType::Sick => ("red", 'S', 'م'),
            VacationType::Compensatory => ("green", 'C', 'ت'),
            VacationType::Other(_) => ("gray", '?', '?'),
        };
        TypeStyle {
            label: self.label(),
            color,
            letter,
            calendar_letter,
        }
    }
}

impl fmt::Display for VacationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for VacationType {
    fn from(label: String) -> Self {
        match label.as_str() {
            REGULAR_LABEL => VacationType::Regular,
            SICK_LABEL => VacationType::Sick,
            COMPENSATORY_LABEL => VacationType::Compensatory,
            _ => VacationType::Other(label),
        }
    }
}

impl From<VacationType> for String {
    fn from(vacation_type: VacationType) -> Self {
        match vacation_type {
            VacationType::Other(label) => label,
            canonical => canonical.label().to_string(),
        }
    }
}
