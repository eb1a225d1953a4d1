//! Configuration module
//!
//! Handles loading and managing configuration. Settings are layered:
//! built-in defaults, then a config file, then `FLEETX_APITEST_*`
//! environment variables, then command-line flags.

mod env;
mod file;

pub use env::{print_env_help, EnvConfig};
pub use file::ConfigFile;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::http::DEFAULT_TIMEOUT_SECS;
use crate::models::RoleProfiles;

/// Application configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server root, e.g. `http://localhost:5000`
    pub base_url: String,

    /// Path prefix of the REST API
    pub api_prefix: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Startup wait settings
    pub readiness: ReadinessConfig,

    /// Login credentials per role
    pub users: RoleProfiles,

    /// Where `run --save` stores results (defaults to the user data dir)
    pub results_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            api_prefix: "/api".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            readiness: ReadinessConfig::default(),
            users: RoleProfiles::default(),
            results_dir: None,
        }
    }
}

impl AppConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://: {}", self.base_url);
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }
        if self.readiness.max_attempts == 0 {
            anyhow::bail!("readiness.max_attempts must be at least 1");
        }
        if self.readiness.probe_timeout_secs == 0 {
            anyhow::bail!("readiness.probe_timeout_secs must be greater than zero");
        }
        Ok(())
    }
}

/// Readiness poll configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadinessConfig {
    /// Liveness endpoint, relative to `base_url`
    pub health_path: String,

    /// Attempts before giving up
    pub max_attempts: u32,

    /// Fixed delay between attempts in seconds
    pub delay_secs: u64,

    /// Timeout for a single probe in seconds
    pub probe_timeout_secs: u64,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            health_path: "/health".to_string(),
            max_attempts: 30,
            delay_secs: 2,
            probe_timeout_secs: 5,
        }
    }
}

impl ReadinessConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }
}
