//! Results storage module
//!
//! Provides persistent storage and export for test runs.

mod storage;

pub use storage::{ExportFormat, ResultsStorage, StoredRun};
