//! Server readiness checks
//!
//! Provides the startup wait that gates every test run.

mod poller;

pub use poller::ReadinessPoller;
