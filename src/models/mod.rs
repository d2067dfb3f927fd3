//! Core data models for the Vacation Tracking Engine.
//!
//! This module contains the domain models used throughout the engine.

mod add_outcome;
mod vacation;
mod vacation_type;

pub use add_outcome::AddOutcome;
pub use vacation::VacationRecord;
pub use vacation_type::{
    COMPENSATORY_LABEL, REGULAR_LABEL, SICK_LABEL, TypeStyle, VacationType,
};
