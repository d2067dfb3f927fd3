//! Error types for the Vacation Tracking Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate for the
//! failures that sit outside normal malformed input: configuration, storage, and
//! date arithmetic. Malformed pasted text is never an error here; the parser reports
//! it as data (see [`crate::parsing::ParseIssue`]).

use thiserror::Error;

/// The main error type for the Vacation Tracking Engine.
///
/// # Example
///
/// ```
/// use vacation_tracker::error::TrackerError;
///
/// let error = TrackerError::InvalidDate {
///     value: "13/45/2024".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid Gregorian date: 13/45/2024");
/// ```
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The persisted vacation collection could not be read.
    #[error("Failed to read vacation storage '{path}': {message}")]
    StorageRead {
        /// The storage location.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// The vacation collection could not be written.
    #[error("Failed to write vacation storage '{path}': {message}")]
    StorageWrite {
        /// The storage location.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// The persisted vacation collection exists but does not deserialize.
    #[error("Corrupt vacation data in '{path}': {message}")]
    CorruptData {
        /// The storage location.
        path: String,
        /// A description of the deserialization failure.
        message: String,
    },

    /// A stored Gregorian date string does not name a real calendar date.
    #[error("Invalid Gregorian date: {value}")]
    InvalidDate {
        /// The offending date string.
        value: String,
    },

    /// A year/month pair does not name a real month.
    #[error("Invalid month {month} for year {year}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month (1-12).
        month: u32,
    },

    /// The shared store lock was poisoned by a panicking writer.
    #[error("Vacation store is unavailable")]
    StoreUnavailable,
}

/// A type alias for Results that return TrackerError.
pub type TrackerResult<T> = Result<T, TrackerError>;
