//! Test run orchestration
//!
//! Waits for the server, then runs the selected scenarios one after another,
//! recording exactly one outcome per scenario.

use anyhow::Result;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::AppConfig;
use crate::models::{ResultSet, Scenario, TestOutcome};
use crate::readiness::ReadinessPoller;
use crate::scenarios::{self, ScenarioContext};
use crate::utils::timer::timed;

/// Outcome name for the readiness wait
pub const STARTUP_CHECK: &str = "Server Startup";

/// Sequential test runner for the marketplace API
pub struct SuiteRunner {
    config: AppConfig,
    ctx: ScenarioContext,
    scenarios: Vec<Scenario>,
    wait_for_server: bool,
    readiness_delay: Option<Duration>,
}

impl SuiteRunner {
    /// Create a runner for every scenario
    pub fn new(config: AppConfig) -> Result<Self> {
        let ctx = ScenarioContext::from_config(&config)?;
        Ok(Self {
            config,
            ctx,
            scenarios: Scenario::all(),
            wait_for_server: true,
            readiness_delay: None,
        })
    }

    /// Restrict the run to `scenarios`, kept in catalogue order
    pub fn with_scenarios(mut self, mut scenarios: Vec<Scenario>) -> Self {
        scenarios.sort_by_key(|s| s.number());
        scenarios.dedup();
        self.scenarios = scenarios;
        self
    }

    /// Skip the readiness wait
    pub fn no_wait(mut self) -> Self {
        self.wait_for_server = false;
        self
    }

    /// Override the delay between readiness attempts
    #[cfg(test)]
    pub fn readiness_delay(mut self, delay: Duration) -> Self {
        self.readiness_delay = Some(delay);
        self
    }

    #[cfg(test)]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Run one scenario and convert its result into an outcome
    pub async fn run_scenario(&self, scenario: Scenario) -> TestOutcome {
        info!("Running {}", scenario);
        let (result, duration_ms) =
            timed(scenario.name(), scenarios::run_scenario(scenario, &self.ctx)).await;

        let (passed, message) = match result {
            Ok(message) => (true, message),
            Err(e) => {
                match e.status_code() {
                    Some(status) => error!("{} failed with HTTP {}: {}", scenario, status, e),
                    None => error!("{} failed: {}", scenario, e),
                }
                (false, e.to_string())
            }
        };

        TestOutcome::new(scenario.name(), passed, message).with_duration(duration_ms)
    }

    async fn server_ready(&self) -> Result<bool> {
        let mut poller = ReadinessPoller::new(&self.config.base_url, &self.config.readiness)?;
        if let Some(delay) = self.readiness_delay {
            poller = poller.delay(delay);
        }
        let report = poller.wait().await;
        debug!(
            "Readiness wait: ready={} after {} attempt(s) in {}ms",
            report.ready,
            report.attempts,
            report.elapsed.as_millis()
        );
        Ok(report.ready)
    }

    /// Run the full suite.
    ///
    /// If the server never becomes ready, the result set holds only the
    /// startup failure.
    pub async fn run_all(&self) -> Result<ResultSet> {
        info!(
            "Starting FleetXchange API tests against {} ({} scenarios)",
            self.config.base_url,
            self.scenarios.len()
        );

        let mut results = ResultSet::new();

        if self.wait_for_server {
            if !self.server_ready().await? {
                results.add_result(STARTUP_CHECK, false, "Server failed to start");
                return Ok(results);
            }
            results.add_result(STARTUP_CHECK, true, "Server started successfully");
        }

        for &scenario in &self.scenarios {
            let outcome = self.run_scenario(scenario).await;
            info!("  {} {}", outcome.symbol(), outcome.name);
            results.add_outcome(outcome);
        }

        info!(
            "Test run completed - Pass: {}/{} ({:.1}%)",
            results.passed,
            results.total,
            results.pass_rate()
        );

        Ok(results)
    }
}
