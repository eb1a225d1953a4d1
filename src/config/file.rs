//! Configuration file management
//!
//! Handles finding, loading, and validating configuration files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::AppConfig;

/// Supported config file version
const CONFIG_VERSION: &str = "1.0";

/// Configuration file locations (in order of precedence)
const CONFIG_LOCATIONS: &[&str] = &[
    "./fleetx-apitest.yaml",
    "./fleetx-apitest.yml",
    "./.fleetx-apitest.yaml",
    "~/.config/fleetx-apitest/config.yaml",
];

/// On-disk syntax, chosen by file extension
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Syntax {
    Yaml,
    Json,
}

impl Syntax {
    /// `.yaml`/`.yml` are YAML; anything else is read as JSON
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Syntax::Yaml,
            _ => Syntax::Json,
        }
    }

    fn parse(self, content: &str) -> Result<ConfigFile> {
        match self {
            Syntax::Yaml => serde_yaml::from_str(content).context("Invalid YAML config"),
            Syntax::Json => serde_json::from_str(content).context("Invalid JSON config"),
        }
    }

    fn render(self, config: &ConfigFile) -> Result<String> {
        let content = match self {
            Syntax::Yaml => serde_yaml::to_string(config)?,
            Syntax::Json => serde_json::to_string_pretty(config)?,
        };
        Ok(content)
    }
}

/// Full configuration file structure
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Version of config file format
    #[serde(default = "default_version")]
    pub version: String,

    /// Application settings
    #[serde(default)]
    pub app: AppConfig,
}

fn default_version() -> String {
    CONFIG_VERSION.to_string()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            version: default_version(),
            app: AppConfig::default(),
        }
    }
}

impl ConfigFile {
    /// First existing file among the standard locations
    pub fn find() -> Option<PathBuf> {
        CONFIG_LOCATIONS
            .iter()
            .map(|location| expand_home(location))
            .find(|path| path.is_file())
    }

    /// Load the first file found, or built-in defaults if there is none
    pub fn load_default() -> Result<Self> {
        match Self::find() {
            Some(path) => {
                tracing::debug!("Using config file {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Load `explicit` if given (from `--config` or `FLEETX_APITEST_CONFIG`),
    /// otherwise fall back to the standard locations
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::load_default(),
        }
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Syntax::of(path)
            .parse(&content)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config, creating parent directories as needed
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = Syntax::of(path).render(self)?;

        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            _ => {}
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            anyhow::bail!(
                "Unsupported config version: {} (expected {})",
                self.version,
                CONFIG_VERSION
            );
        }
        self.app.validate()
    }

    /// Config written by `config init`
    pub fn example() -> Self {
        let mut config = Self::default();
        config.app.results_dir = Some("./apitest-results".to_string());
        config
    }
}

/// Resolve a leading `~/` against the user's home directory
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
