//! Configuration loading for the Vacation Tracking Engine.
//!
//! The configuration names where the vacation collection is persisted.
//!
//! # Example
//!
//! ```no_run
//! use vacation_tracker::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/tracker.yaml").unwrap();
//! println!("Storing vacations in {}", config.repository().path().display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{StorageConfig, TrackerConfig};
