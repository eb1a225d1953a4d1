//! Data models for API testing
//!
//! This module contains all data structures used throughout the application.

mod outcome;
mod role;
mod scenario;

pub use outcome::{ResultSet, TestOutcome};
pub use role::{Role, RoleProfiles};
pub use scenario::Scenario;
