//! fleetx-apitest - FleetXchange API Integration Test Harness
//!
//! A CLI tool that waits for a FleetXchange marketplace server to come up
//! and then walks it through its main user journeys: health, login for each
//! role, loads, bids, user administration, documents and messages.
//!
//! ## Features
//!
//! - 9 scenarios covering health, authentication and marketplace operations
//! - Readiness polling before the suite starts
//! - One outcome per scenario with a final pass/fail report
//! - Multiple output formats (Table, JSON, Summary)
//! - Stored runs with JSON/CSV export
//!
//! ## Usage
//!
//! ```bash
//! # Run the whole suite against a local server
//! fleetx-apitest run --base-url http://localhost:5000
//!
//! # Run one scenario without waiting for readiness
//! fleetx-apitest run --scenario 5 --no-wait
//!
//! # Skip scenarios and keep the results
//! fleetx-apitest run --skip 5,6 --save
//!
//! # List available scenarios
//! fleetx-apitest list --detailed
//!
//! # Inspect stored runs
//! fleetx-apitest results list
//! fleetx-apitest results show latest
//! ```

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing::{debug, info};

mod auth;
mod cli;
mod config;
mod executor;
mod http;
mod models;
mod output;
mod readiness;
mod results;
mod scenarios;
mod utils;

use cli::Args;
use config::{AppConfig, ConfigFile, EnvConfig};
use executor::SuiteRunner;
use models::Scenario;
use output::{OutputFormat, ResultFormatter};
use results::{ExportFormat, ResultsStorage, StoredRun};
use utils::logger::{init_logger, LogLevel};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(LogLevel::resolve(args.verbose, args.log_level));

    match args.command {
        cli::Command::Run(run_args) => {
            run_tests(run_args).await?;
        }
        cli::Command::List(list_args) => {
            list_scenarios(list_args);
        }
        cli::Command::Results(results_args) => {
            show_results(results_args)?;
        }
        cli::Command::Config(config_args) => {
            manage_config(config_args)?;
        }
    }

    Ok(())
}

/// Build the effective configuration: file, then environment, then flags
fn load_config(args: &cli::RunArgs, env: &EnvConfig) -> Result<AppConfig> {
    let file = ConfigFile::resolve(args.config.as_deref().or(env.config_file.as_deref()))?;

    let mut config = file.app;
    env.apply(&mut config);

    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(max_attempts) = args.max_attempts {
        config.readiness.max_attempts = max_attempts;
    }
    if let Some(delay) = args.delay {
        config.readiness.delay_secs = delay;
    }
    if let Some(dir) = &args.results_dir {
        config.results_dir = Some(dir.clone());
    }

    config.validate()?;
    Ok(config)
}

async fn run_tests(args: cli::RunArgs) -> Result<()> {
    let env = EnvConfig::load();
    if env.has_any() {
        debug!("Applying FLEETX_APITEST_* environment overrides");
    }
    let config = load_config(&args, &env)?;

    let skip = match &args.skip {
        Some(list) => cli::parse_number_list(list)?,
        None => Vec::new(),
    };
    let selected = Scenario::select(args.scenario, &skip).ok_or_else(|| {
        anyhow::anyhow!("Invalid scenario number: {}", args.scenario.unwrap_or(0))
    })?;

    let format_name = args.format.as_ref().or(env.format.as_ref());
    let format = match format_name {
        Some(name) => OutputFormat::from_str(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown output format: {name}"))?,
        None => OutputFormat::Table,
    };
    let formatter = ResultFormatter::new(format);

    info!(
        "Testing FleetXchange API at {} ({} scenarios)",
        config.base_url,
        selected.len()
    );

    let base_url = config.base_url.clone();
    let results_dir = config.results_dir.clone();

    let mut runner = SuiteRunner::new(config)?.with_scenarios(selected);
    if args.no_wait {
        runner = runner.no_wait();
    }

    let started_at = Utc::now();
    let results = runner.run_all().await?;
    let completed_at = Utc::now();

    formatter.print(&results);

    if args.save {
        let storage = ResultsStorage::from_option(results_dir.as_deref());
        let run = StoredRun::new(base_url, started_at, completed_at, &results);
        let path = storage.save(&run)?;
        println!("\n✓ Results saved: {} ({})", run.id, path.display());
    }

    if results.failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn list_scenarios(args: cli::ListArgs) {
    let scenarios = Scenario::all();
    println!("\nFleetXchange API Scenarios ({} total)\n", scenarios.len());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut current_category = "";

    for scenario in scenarios {
        let category = scenario.category();
        if category != current_category {
            println!("\n{category}:");
            println!("──────────────────────────────────────────────────────────────────────");
            current_category = category;
        }

        if args.detailed {
            let role = scenario.role().map(|r| r.name()).unwrap_or("-");
            println!(
                "  {}. {:28} [role: {}]",
                scenario.number(),
                scenario.name(),
                role
            );
        } else {
            println!("  {}. {}", scenario.number(), scenario.name());
        }
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
}

/// Resolve a run id, accepting "latest"
fn find_run(storage: &ResultsStorage, id: &str) -> Result<StoredRun> {
    if id == "latest" {
        storage
            .latest()?
            .ok_or_else(|| anyhow::anyhow!("No stored runs in {}", storage.base_dir().display()))
    } else {
        storage.load(id)
    }
}

fn show_results(args: cli::ResultsArgs) -> Result<()> {
    use std::path::Path;

    let results_dir = match args.dir {
        Some(dir) => Some(dir),
        None => {
            let env = EnvConfig::load();
            ConfigFile::resolve(env.config_file.as_deref())?.app.results_dir
        }
    };
    let storage = ResultsStorage::from_option(results_dir.as_deref());

    match args.action {
        cli::ResultsAction::List => {
            let runs = storage.list_runs()?;

            if runs.is_empty() {
                println!("\n📭 No stored results found.");
                println!("   Run tests with: fleetx-apitest run --save");
                return Ok(());
            }

            println!("\n┌─────────────────────────────────────────────────────────────────────┐");
            println!("│ Stored Test Runs                                                    │");
            println!("├──────────────────────┬─────────────────────────┬────────┬───────────┤");
            println!("│ Run ID               │ Started (UTC)           │ Passed │ Rate      │");
            println!("├──────────────────────┼─────────────────────────┼────────┼───────────┤");

            for run in &runs {
                println!(
                    "│ {:20} │ {:23} │ {:>2}/{:<3} │ {:>8.1}% │",
                    run.id,
                    run.started_at.format("%Y-%m-%d %H:%M:%S"),
                    run.passed,
                    run.total,
                    run.pass_rate()
                );
            }

            println!("└──────────────────────┴─────────────────────────┴────────┴───────────┘");
            println!("\nUse `results show <id>` to view a run.\n");
        }

        cli::ResultsAction::Show { id, format } => {
            let run = find_run(&storage, &id)?;
            let format = OutputFormat::from_str(&format)
                .ok_or_else(|| anyhow::anyhow!("Unknown output format: {format}"))?;

            println!("Run {} against {}", run.id, run.base_url);
            println!(
                "Started {} / completed {}",
                run.started_at.to_rfc3339(),
                run.completed_at.to_rfc3339()
            );
            ResultFormatter::new(format).print(&run.to_result_set());
        }

        cli::ResultsAction::Export { id, output } => {
            let run = find_run(&storage, &id)?;
            let path = Path::new(&output);
            let format =
                ExportFormat::from_str(path.extension().and_then(|e| e.to_str()).unwrap_or("json"))
                    .unwrap_or(ExportFormat::Json);

            storage.export(&run, path, format)?;
            println!("✓ Run {} exported to: {}", run.id, path.display());
        }

        cli::ResultsAction::Delete { id } => {
            storage.delete(&id)?;
            println!("✓ Deleted run: {id}");
        }
    }

    Ok(())
}

fn manage_config(args: cli::ConfigArgs) -> Result<()> {
    use std::path::Path;

    match args.action {
        cli::ConfigAction::Init { output, force } => {
            let path = Path::new(&output);
            if path.exists() && !force {
                anyhow::bail!(
                    "Configuration file already exists: {output}. Use --force to overwrite."
                );
            }

            let config = ConfigFile::example();
            config.save(path)?;
            println!("✓ Configuration file created: {output}");
            println!("\nEdit the file to customize your settings.");
        }

        cli::ConfigAction::Show { env, format } => {
            let env_config = EnvConfig::load();
            if env {
                env_config.print_summary();
            } else {
                let mut config = ConfigFile::resolve(env_config.config_file.as_deref())?;
                env_config.apply(&mut config.app);
                let output = if format == "json" {
                    serde_json::to_string_pretty(&config)?
                } else {
                    serde_yaml::to_string(&config)?
                };
                println!("{output}");
            }
        }

        cli::ConfigAction::Validate { file } => {
            let path = file.unwrap_or_else(|| {
                ConfigFile::find()
                    .map(|p| p.to_string_lossy().to_string())
                    .unwrap_or_else(|| "./fleetx-apitest.yaml".to_string())
            });

            match ConfigFile::load(&path) {
                Ok(_) => {
                    println!("✓ Configuration file is valid: {path}");
                }
                Err(e) => {
                    println!("✗ Configuration file is invalid: {path}");
                    println!("  Error: {e}");
                    return Err(e);
                }
            }
        }

        cli::ConfigAction::Env => {
            config::print_env_help();
        }
    }

    Ok(())
}
