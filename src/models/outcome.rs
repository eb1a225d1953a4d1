//! Test outcome models
//!
//! Defines the per-scenario outcome and the ordered result set that
//! aggregates them for the final report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single named check
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub name: String,
    pub passed: bool,
    pub message: String,
    #[serde(default)]
    pub duration_ms: u64,
}

impl TestOutcome {
    pub fn new(name: impl Into<String>, passed: bool, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            message: message.into(),
            duration_ms: 0,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn symbol(&self) -> &'static str {
        if self.passed {
            "✓"
        } else {
            "✗"
        }
    }

    pub fn status(&self) -> &'static str {
        if self.passed {
            "PASS"
        } else {
            "FAIL"
        }
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.symbol(), self.name, self.status())?;
        if !self.message.is_empty() {
            write!(f, "\n     {}", self.message)?;
        }
        Ok(())
    }
}

/// Ordered collection of outcomes with running tallies.
///
/// Outcomes are keyed by name. Re-adding a name replaces the stored outcome
/// in place but still counts towards the tallies, so `passed + failed` always
/// equals `total`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ResultSet {
    outcomes: Vec<TestOutcome>,
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome by name
    pub fn add_result(&mut self, name: impl Into<String>, passed: bool, message: impl Into<String>) {
        self.add_outcome(TestOutcome::new(name, passed, message));
    }

    /// Record a fully built outcome
    pub fn add_outcome(&mut self, outcome: TestOutcome) {
        if outcome.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.total += 1;

        match self.outcomes.iter_mut().find(|o| o.name == outcome.name) {
            Some(existing) => *existing = outcome,
            None => self.outcomes.push(outcome),
        }
    }

    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&TestOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn is_all_passed(&self) -> bool {
        self.passed == self.total
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    pub fn total_duration_ms(&self) -> u64 {
        self.outcomes.iter().map(|o| o.duration_ms).sum()
    }

    /// Print the human readable report to stdout
    pub fn print_summary(&self) {
        println!("{self}");
    }
}

impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(f, "FleetXchange API Test Results")?;
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        for outcome in &self.outcomes {
            writeln!(f, "  {outcome}")?;
        }
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(
            f,
            "Overall Score: {}/{} tests passed ({:.1}%)",
            self.passed,
            self.total,
            self.pass_rate()
        )?;
        if self.is_all_passed() {
            writeln!(f, "ALL TESTS PASSED")?;
        } else {
            writeln!(f, "{} tests failed. Check the errors above.", self.failed)?;
        }
        write!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")
    }
}
