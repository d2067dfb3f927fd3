//! Vacation Tracking Engine
//!
//! This crate turns pasted vacation records (CSV lines or fixed 7-line blocks) into
//! validated records, stores them with duplicate detection, and answers the calendar
//! and report queries built on top of the stored collection.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod store;
