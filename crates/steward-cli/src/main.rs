//! Steward CLI - Command-line interface for the governance pipeline

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::prelude::*;

use steward_core::{
    EvolutionProposal, RequestLimiter, RiskLevel, Scenario, StewardConfig, SystemBrain,
    SystemDecision, SystemSignal, SystemStore,
};

/// Window the CLI's request limiter counts over.
const LIMITER_WINDOW: Duration = Duration::from_secs(60);

#[derive(Parser)]
#[command(name = "steward")]
#[command(about = "Steward - Rule-based governance for HR administrative actions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Evaluate a single signal and print the decision
    Evaluate {
        /// Originating subsystem
        #[arg(short, long)]
        source: String,
        /// Event description
        #[arg(short, long)]
        message: String,
        /// Risk level (low, medium, high, critical)
        #[arg(short, long, default_value = "low")]
        risk: RiskLevel,
    },
    /// Run a canned scenario through a fresh store
    Simulate {
        /// Scenario name; unknown names run the baseline
        scenario: String,
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Check configuration validity
    Check {
        /// Configuration file path
        #[arg(short, long, default_value = "config/steward.toml")]
        config: PathBuf,
    },
    /// Ingest JSON signals from stdin, one per line
    Watch {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Milliseconds between re-cycles of the history
        #[arg(long, default_value_t = 5000, value_parser = clap::value_parser!(u64).range(1..))]
        interval_ms: u64,
    },
}

#[derive(Serialize)]
struct SimulationReport<'a> {
    scenario: Scenario,
    decisions: Vec<SystemDecision>,
    proposals: &'a [EvolutionProposal],
    pressure: RiskLevel,
    roadmap: &'static str,
    applied_limit: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Some(Commands::Evaluate {
            source,
            message,
            risk,
        }) => {
            let decision = SystemBrain::new().ingest(&SystemSignal::new(source, message, risk));
            println!("{}", serde_json::to_string_pretty(&decision)?);
        }
        Some(Commands::Simulate { scenario, config }) => {
            let config = load_config(config.as_deref())?;
            simulate(&config, Scenario::from_name(&scenario))?;
        }
        Some(Commands::Check { config }) => {
            let loaded = StewardConfig::load(&config)
                .with_context(|| format!("invalid config {}", config.display()))?;
            println!("Config OK: {}", config.display());
            println!(
                "  history {} / decisions {} / build {}",
                loaded.governance.history_capacity,
                loaded.governance.decision_capacity,
                loaded.build_mode()
            );
        }
        Some(Commands::Watch {
            config,
            interval_ms,
        }) => {
            let config = load_config(config.as_deref())?;
            watch(&config, Duration::from_millis(interval_ms)).await?;
        }
        None => {
            println!("Steward v{} - Use --help for commands", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<StewardConfig> {
    match path {
        Some(path) => StewardConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(StewardConfig::default()),
    }
}

fn limited_store(config: &StewardConfig) -> anyhow::Result<SystemStore> {
    let limiter = Arc::new(RequestLimiter::new(config.limits.low, LIMITER_WINDOW));
    Ok(SystemStore::new(config)?.with_limiter(limiter))
}

fn simulate(config: &StewardConfig, scenario: Scenario) -> anyhow::Result<()> {
    let mut store = limited_store(config)?;
    let decisions = store.run_scenario(scenario);

    let report = SimulationReport {
        scenario,
        decisions,
        proposals: store.proposals(),
        pressure: store.pressure(),
        roadmap: store.roadmap(),
        applied_limit: store.applied_limit(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn watch(config: &StewardConfig, period: Duration) -> anyhow::Result<()> {
    let mut store = limited_store(config)?;
    info!("watching stdin for signals (tick every {:?})", period);
    watch_lines(&mut store, BufReader::new(tokio::io::stdin()), period).await
}

/// Ingests one JSON signal per line until EOF, re-cycling on every tick.
async fn watch_lines<R>(
    store: &mut SystemStore,
    reader: R,
    period: Duration,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut ticker = tokio::time::interval(period);
    // The first tick completes immediately.
    ticker.tick().await;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read signal stream")? else {
                    break;
                };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match serde_json::from_str::<SystemSignal>(line) {
                    Ok(signal) => {
                        let decision = store.ingest_signal(signal);
                        println!("{}", serde_json::to_string(&decision)?);
                    }
                    Err(e) => warn!("skipping malformed signal: {}", e),
                }
            }
            _ = ticker.tick() => {
                let pressure = store.cycle();
                info!(
                    signals = store.signal_count(),
                    proposals = store.proposals().len(),
                    "tick: pressure {}",
                    pressure
                );
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                break;
            }
        }
    }

    info!(
        "watch finished with {} signals, {} open decisions, pressure {}",
        store.signal_count(),
        store.decision_count(),
        store.pressure()
    );
    Ok(())
}
