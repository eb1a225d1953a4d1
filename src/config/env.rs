//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

use super::AppConfig;

/// Environment variable prefix
const ENV_PREFIX: &str = "FLEETX_APITEST";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Server root from FLEETX_APITEST_BASE_URL
    pub base_url: Option<String>,
    /// Request timeout from FLEETX_APITEST_TIMEOUT
    pub timeout: Option<u64>,
    /// Readiness attempts from FLEETX_APITEST_MAX_ATTEMPTS
    pub max_attempts: Option<u32>,
    /// Readiness delay from FLEETX_APITEST_DELAY
    pub delay: Option<u64>,
    /// Config file from FLEETX_APITEST_CONFIG
    pub config_file: Option<String>,
    /// Output format from FLEETX_APITEST_FORMAT
    pub format: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            base_url: get_env("BASE_URL"),
            timeout: get_env_parse("TIMEOUT"),
            max_attempts: get_env_parse("MAX_ATTEMPTS"),
            delay: get_env_parse("DELAY"),
            config_file: get_env("CONFIG"),
            format: get_env("FORMAT"),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.base_url.is_some()
            || self.timeout.is_some()
            || self.max_attempts.is_some()
            || self.delay.is_some()
            || self.config_file.is_some()
            || self.format.is_some()
    }

    /// Overlay the set variables onto `config`
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(max_attempts) = self.max_attempts {
            config.readiness.max_attempts = max_attempts;
        }
        if let Some(delay) = self.delay {
            config.readiness.delay_secs = delay;
        }
    }

    /// Print current environment configuration
    pub fn print_summary(&self) {
        println!("Environment Configuration:");
        println!("  {}_BASE_URL:     {:?}", ENV_PREFIX, self.base_url);
        println!("  {}_TIMEOUT:      {:?}", ENV_PREFIX, self.timeout);
        println!("  {}_MAX_ATTEMPTS: {:?}", ENV_PREFIX, self.max_attempts);
        println!("  {}_DELAY:        {:?}", ENV_PREFIX, self.delay);
        println!("  {}_CONFIG:       {:?}", ENV_PREFIX, self.config_file);
        println!("  {}_FORMAT:       {:?}", ENV_PREFIX, self.format);
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get environment variable and parse to type
fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    get_env(name).and_then(|v| v.parse().ok())
}

/// Print all FLEETX_APITEST environment variables
pub fn print_env_help() {
    println!("Environment Variables:");
    println!();
    println!("  {ENV_PREFIX}_BASE_URL       Server root URL");
    println!("  {ENV_PREFIX}_TIMEOUT        Request timeout in seconds");
    println!("  {ENV_PREFIX}_MAX_ATTEMPTS   Readiness poll attempts");
    println!("  {ENV_PREFIX}_DELAY          Seconds between readiness attempts");
    println!("  {ENV_PREFIX}_CONFIG         Path to configuration file");
    println!("  {ENV_PREFIX}_FORMAT         Output format (table, json, json-pretty, summary)");
    println!();
    println!("Example:");
    println!("  export {ENV_PREFIX}_BASE_URL=http://staging.internal:5000");
    println!("  fleetx-apitest run");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_config_default() {
        let config = EnvConfig::default();
        assert!(config.base_url.is_none());
        assert!(!config.has_any());
    }

    #[test]
    fn test_apply_overrides() {
        let env_config = EnvConfig {
            base_url: Some("http://10.0.0.5:5000".to_string()),
            max_attempts: Some(5),
            delay: Some(1),
            ..Default::default()
        };
        assert!(env_config.has_any());

        let mut config = AppConfig::default();
        env_config.apply(&mut config);

        assert_eq!(config.base_url, "http://10.0.0.5:5000");
        assert_eq!(config.readiness.max_attempts, 5);
        assert_eq!(config.readiness.delay_secs, 1);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_load_reads_prefixed_vars() {
        env::set_var("FLEETX_APITEST_MAX_ATTEMPTS", "7");
        let config = EnvConfig::load();
        env::remove_var("FLEETX_APITEST_MAX_ATTEMPTS");

        assert_eq!(config.max_attempts, Some(7));
    }
}
