//! Results storage and retrieval
//!
//! Provides persistent storage for test runs in JSON format.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::models::{ResultSet, TestOutcome};

/// Stored test run containing all outcomes
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredRun {
    /// Unique run ID
    pub id: String,

    /// Server the run targeted
    pub base_url: String,

    /// Timestamp when the run started
    pub started_at: DateTime<Utc>,

    /// Timestamp when the run completed
    pub completed_at: DateTime<Utc>,

    pub passed: usize,
    pub failed: usize,
    pub total: usize,

    /// Outcomes in report order
    pub outcomes: Vec<TestOutcome>,
}

impl StoredRun {
    pub fn new(
        base_url: impl Into<String>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        results: &ResultSet,
    ) -> Self {
        Self {
            id: generate_run_id(started_at),
            base_url: base_url.into(),
            started_at,
            completed_at,
            passed: results.passed,
            failed: results.failed,
            total: results.total,
            outcomes: results.outcomes().to_vec(),
        }
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    /// Rebuild the result set for re-rendering
    pub fn to_result_set(&self) -> ResultSet {
        let mut results = ResultSet::new();
        for outcome in &self.outcomes {
            results.add_outcome(outcome.clone());
        }
        results
    }
}

/// Export formats for stored runs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }
}

/// Generate unique run ID
fn generate_run_id(started_at: DateTime<Utc>) -> String {
    let timestamp = started_at.format("%Y%m%d_%H%M%S");
    let random: u32 = rand::random::<u32>() % 10000;
    format!("{timestamp}_{random:04}")
}

/// Whether `id` has the `YYYYmmdd_HHMMSS_NNNN` shape of a generated run id
fn is_run_id(id: &str) -> bool {
    let lengths: Vec<usize> = id.split('_').map(str::len).collect();
    lengths == [8, 6, 4] && id.bytes().all(|b| b == b'_' || b.is_ascii_digit())
}

/// Results storage manager
pub struct ResultsStorage {
    /// Base directory for results
    base_dir: PathBuf,
}

impl ResultsStorage {
    /// Create a new results storage
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Create with default directory
    pub fn default_dir() -> Self {
        let base_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fleetx-apitest")
            .join("results");
        Self::new(base_dir)
    }

    /// Storage at `dir` if given, else the default directory
    pub fn from_option(dir: Option<&str>) -> Self {
        match dir {
            Some(dir) => Self::new(dir),
            None => Self::default_dir(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of a stored run; ids that could escape `base_dir` are rejected
    fn run_path(&self, run_id: &str) -> Result<PathBuf> {
        if !is_run_id(run_id) {
            anyhow::bail!("Invalid run id: {run_id} (expected YYYYmmdd_HHMMSS_NNNN)");
        }
        Ok(self.base_dir.join(format!("{run_id}.json")))
    }

    /// Save a test run
    pub fn save(&self, run: &StoredRun) -> Result<PathBuf> {
        fs::create_dir_all(&self.base_dir).with_context(|| {
            format!("Failed to create results dir: {}", self.base_dir.display())
        })?;

        let path = self.run_path(&run.id)?;
        let file = File::create(&path).context("Failed to create results file")?;
        let writer = BufWriter::new(file);

        serde_json::to_writer_pretty(writer, run).context("Failed to write results")?;

        info!("Saved test results to {}", path.display());
        Ok(path)
    }

    /// Load a test run
    pub fn load(&self, run_id: &str) -> Result<StoredRun> {
        let path = self.run_path(run_id)?;
        let run = self
            .load_from_path(&path)
            .with_context(|| format!("No stored run with id {run_id}"))?;
        debug!("Loaded test results from {}", path.display());
        Ok(run)
    }

    /// Load from a specific path
    pub fn load_from_path(&self, path: &Path) -> Result<StoredRun> {
        let file = File::open(path).context("Failed to open results file")?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).context("Failed to parse results")
    }

    /// All stored runs, newest first
    pub fn list_runs(&self) -> Result<Vec<StoredRun>> {
        if !self.base_dir.exists() {
            return Ok(Vec::new());
        }

        let mut runs = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();

            if path.extension().map(|e| e == "json").unwrap_or(false) {
                match self.load_from_path(&path) {
                    Ok(run) => runs.push(run),
                    Err(e) => {
                        debug!("Failed to load {}: {}", path.display(), e);
                    }
                }
            }
        }

        runs.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        Ok(runs)
    }

    /// Get the most recent run
    pub fn latest(&self) -> Result<Option<StoredRun>> {
        Ok(self.list_runs()?.into_iter().next())
    }

    /// Delete a run; an id with no stored file is an error
    pub fn delete(&self, run_id: &str) -> Result<()> {
        let path = self.run_path(run_id)?;
        if !path.is_file() {
            anyhow::bail!("No stored run with id {run_id}");
        }
        fs::remove_file(&path)
            .with_context(|| format!("Failed to delete {}", path.display()))?;
        info!("Deleted results: {}", path.display());
        Ok(())
    }

    /// Export run to a file
    pub fn export(&self, run: &StoredRun, path: &Path, format: ExportFormat) -> Result<()> {
        match format {
            ExportFormat::Json => {
                let file = File::create(path)?;
                let writer = BufWriter::new(file);
                serde_json::to_writer_pretty(writer, run)?;
            }
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_path(path)?;
                writer.write_record(["run_id", "name", "passed", "duration_ms", "message"])?;

                for outcome in &run.outcomes {
                    writer.write_record([
                        run.id.clone(),
                        outcome.name.clone(),
                        outcome.passed.to_string(),
                        outcome.duration_ms.to_string(),
                        outcome.message.clone(),
                    ])?;
                }
                writer.flush()?;
            }
        }

        info!("Exported results to {}", path.display());
        Ok(())
    }
}
