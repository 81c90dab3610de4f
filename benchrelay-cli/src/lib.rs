#![warn(missing_docs)]
//! Benchrelay CLI
//!
//! Wires the pipeline together: load configuration, collect statistics from
//! the results directory, then either print the result table or build and
//! transmit the upload batch.

mod config;
mod env;

pub use config::RelayConfig;
pub use env::{ENV_CI, ENV_CI_COMMIT, ENV_TOKEN, ENV_URL, EnvSettings};

use anyhow::Context;
use benchrelay_report::format_table;
use benchrelay_results::{ResultsDir, collect_statistics};
use benchrelay_upload::{BatchOptions, ResultSink, SpeedCenterClient, SpeedRecord, build_batch};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Benchrelay CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "benchrelay")]
#[command(
    author,
    version,
    about = "Aggregate criterion benchmark results and relay them to a speed dashboard"
)]
pub struct Cli {
    /// Optional subcommand; defaults to Table.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Criterion results directory
    #[arg(long, default_value = "target/criterion")]
    pub results_dir: PathBuf,

    /// Configuration file (default: discover relay.toml upwards)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the aggregated result table (default)
    Table,
    /// Build the result batch and send it to the collector
    Upload {
        /// Print the batch as JSON instead of sending it
        #[arg(long)]
        dry_run: bool,

        /// Lockfile consulted for lock-package commit sources
        #[arg(long, default_value = "Cargo.lock")]
        lockfile: PathBuf,
    },
    /// Print a default relay.toml
    Init,
}

/// Run the benchrelay CLI. Main entry point for the binary.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(Cli::parse())
}

/// Run the benchrelay CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    let filter = if cli.verbose {
        "benchrelay=debug"
    } else {
        "benchrelay=info"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = load_config(&cli)?;

    match cli.command {
        None | Some(Commands::Table) => cmd_table(&cli, &config),
        Some(Commands::Upload {
            dry_run,
            ref lockfile,
        }) => cmd_upload(&cli, &config, &EnvSettings::from_env(), dry_run, lockfile),
        Some(Commands::Init) => {
            print!("{}", RelayConfig::default_toml());
            Ok(())
        }
    }
}

/// Explicit `--config` wins; otherwise discover relay.toml or fall back to
/// the built-in suite.
fn load_config(cli: &Cli) -> anyhow::Result<RelayConfig> {
    match &cli.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            RelayConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))
        }
        None => Ok(RelayConfig::discover().unwrap_or_else(|| {
            tracing::debug!("no relay.toml found, using built-in suite");
            RelayConfig::default()
        })),
    }
}

fn cmd_table(cli: &Cli, config: &RelayConfig) -> anyhow::Result<()> {
    let dir = ResultsDir::new(&cli.results_dir);
    let results = collect_statistics(&config.suite, &dir)?;
    print!("{}", format_table(&config.suite, &results));
    Ok(())
}

fn cmd_upload(
    cli: &Cli,
    config: &RelayConfig,
    env: &EnvSettings,
    dry_run: bool,
    lockfile: &Path,
) -> anyhow::Result<()> {
    if dry_run {
        let batch = build_upload_batch(cli, config, env, lockfile)?;
        println!("{}", serde_json::to_string_pretty(&batch)?);
        return Ok(());
    }

    // Credentials are validated before any results file is touched.
    let url = env
        .collector_url
        .clone()
        .with_context(|| format!("{ENV_URL} is not set; required to upload results"))?;
    let token = env
        .api_token
        .clone()
        .with_context(|| format!("{ENV_TOKEN} is not set; required to upload results"))?;
    let client = SpeedCenterClient::new(url, token)?;

    upload_with_sink(cli, config, env, lockfile, &client)
}

/// Build the batch and submit it through `sink`. Split out so tests can
/// substitute an in-memory sink for the HTTP client.
pub fn upload_with_sink(
    cli: &Cli,
    config: &RelayConfig,
    env: &EnvSettings,
    lockfile: &Path,
    sink: &dyn ResultSink,
) -> anyhow::Result<()> {
    let batch = build_upload_batch(cli, config, env, lockfile)?;
    if batch.is_empty() {
        println!("No results to upload.");
        return Ok(());
    }

    println!("Sending {} result(s) to the collector...", batch.len());
    sink.submit(&batch)?;
    println!("Done.");
    Ok(())
}

fn build_upload_batch(
    cli: &Cli,
    config: &RelayConfig,
    env: &EnvSettings,
    lockfile: &Path,
) -> anyhow::Result<Vec<SpeedRecord>> {
    let dir = ResultsDir::new(&cli.results_dir);
    let results = collect_statistics(&config.suite, &dir)?;

    let options = BatchOptions {
        environment: &env.environment,
        ci_commit: env.ci_commit.as_deref(),
        lockfile,
    };
    let batch = build_batch(&config.suite, &config.projects, &results, &options)?;
    Ok(batch)
}
