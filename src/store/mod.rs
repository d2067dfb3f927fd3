//! Record storage for the Vacation Tracking Engine.
//!
//! [`VacationStore`] owns the validated collection, rejects exact duplicates and
//! answers date-range queries. Persistence goes through the [`VacationRepository`]
//! trait, with a JSON file backend for real use and an in-memory one for tests.
//!
//! # Example
//!
//! ```no_run
//! use vacation_tracker::store::{JsonFileRepository, VacationStore};
//!
//! let repo = JsonFileRepository::new("./data", "vacation-management-vacations");
//! let store = VacationStore::open(repo).unwrap();
//! println!("{} vacations stored", store.len());
//! ```

mod json_file;
mod repository;
mod shared;
mod vacation_store;

pub use json_file::{DEFAULT_STORAGE_KEY, JsonFileRepository};
pub use repository::{MemoryRepository, VacationRepository};
pub use shared::SharedVacationStore;
pub use vacation_store::VacationStore;
