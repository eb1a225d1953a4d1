//! Test execution engine
//!
//! Provides the sequential suite runner.

mod runner;

pub use runner::SuiteRunner;
