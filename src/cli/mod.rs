//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::utils::logger::LogLevel;

/// FleetXchange API integration test harness
#[derive(Parser, Debug)]
#[command(name = "fleetx-apitest")]
#[command(version = "0.1.0")]
#[command(about = "Run end-to-end checks against a FleetXchange API server")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the API test suite
    Run(RunArgs),

    /// List available scenarios
    List(ListArgs),

    /// View stored test runs
    Results(ResultsArgs),

    /// Manage configuration files
    Config(ConfigArgs),
}

/// Arguments for run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Server root URL (e.g. http://localhost:5000)
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Configuration file (YAML or JSON)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Readiness attempts before giving up
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Seconds between readiness attempts
    #[arg(long)]
    pub delay: Option<u64>,

    /// Specific scenario number to run (1-9)
    #[arg(short, long)]
    pub scenario: Option<u8>,

    /// Skip specific scenarios (comma-separated numbers)
    #[arg(long)]
    pub skip: Option<String>,

    /// Do not wait for the server to become ready
    #[arg(long)]
    pub no_wait: bool,

    /// Output format (table, json, json-pretty, summary)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Save the run to the results directory
    #[arg(long)]
    pub save: bool,

    /// Results directory (overrides config)
    #[arg(long)]
    pub results_dir: Option<String>,
}

/// Arguments for list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show role and category for each scenario
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for results command
#[derive(Parser, Debug)]
pub struct ResultsArgs {
    #[command(subcommand)]
    pub action: ResultsAction,

    /// Results directory (defaults to the user data dir)
    #[arg(long, global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ResultsAction {
    /// List stored runs, newest first
    List,

    /// Show one stored run
    Show {
        /// Run ID (or "latest")
        id: String,

        /// Output format (table, json, json-pretty, summary)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Export a stored run to JSON or CSV
    Export {
        /// Run ID (or "latest")
        id: String,

        /// Output path; format follows the extension
        #[arg(short, long)]
        output: String,
    },

    /// Delete a stored run
    Delete {
        /// Run ID
        id: String,
    },
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write an example configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "./fleetx-apitest.yaml")]
        output: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show {
        /// Show environment variable overrides instead
        #[arg(long)]
        env: bool,

        /// Output format (yaml, json)
        #[arg(short, long, default_value = "yaml")]
        format: String,
    },

    /// Validate a configuration file
    Validate {
        /// File to validate (defaults to the first one found)
        file: Option<String>,
    },

    /// Describe supported environment variables
    Env,
}

/// Parse a comma-separated list of scenario numbers such as `5,6`
pub fn parse_number_list(list: &str) -> Result<Vec<u8>> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<u8>()
                .with_context(|| format!("Invalid scenario number: {item}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["fleetx-apitest", "list", "--detailed"]);
        match args.command {
            Command::List(list_args) => {
                assert!(list_args.detailed);
            }
            _ => panic!("Expected List command"),
        }
        assert!(!args.verbose);
        assert_eq!(args.log_level, LogLevel::Info);
    }

    #[test]
    fn test_run_args() {
        let args = Args::parse_from([
            "fleetx-apitest",
            "run",
            "--base-url",
            "http://api.test:5000",
            "--skip",
            "5,6",
            "--no-wait",
            "--save",
            "-v",
            "--log-level",
            "warn",
        ]);
        assert_eq!(args.log_level, LogLevel::Warn);
        assert!(args.verbose);
        match args.command {
            Command::Run(run_args) => {
                assert_eq!(run_args.base_url.as_deref(), Some("http://api.test:5000"));
                assert_eq!(run_args.skip.as_deref(), Some("5,6"));
                assert!(run_args.no_wait);
                assert!(run_args.save);
                assert!(run_args.scenario.is_none());
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_parse_number_list() {
        assert_eq!(parse_number_list("5,6").unwrap(), vec![5, 6]);
        assert_eq!(parse_number_list(" 1 , 9,").unwrap(), vec![1, 9]);
        assert!(parse_number_list("").unwrap().is_empty());
        assert!(parse_number_list("5,x").is_err());
    }

    #[test]
    fn test_results_show() {
        let args = Args::parse_from(["fleetx-apitest", "results", "show", "latest"]);
        match args.command {
            Command::Results(ResultsArgs {
                action: ResultsAction::Show { id, format },
                dir,
            }) => {
                assert_eq!(id, "latest");
                assert_eq!(format, "table");
                assert!(dir.is_none());
            }
            _ => panic!("Expected results show"),
        }
    }
}
