//! Ani-Harvest main entry point
//!
//! This is the command-line interface for the Ani-Harvest catalog harvester.

use ani_harvest::config::{load_config_with_hash, Config};
use ani_harvest::harvester::{harvest, pacing_interval, HarvestOutcome};
use ani_harvest::output::results_file_name;
use clap::Parser;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Ani-Harvest: a paced catalog harvester
///
/// Ani-Harvest walks a paginated GraphQL catalog page by page, staying under
/// the API's rate limit, and appends every record to a single timestamped
/// results file. Press Ctrl+C to stop; the current page finishes first.
#[derive(Parser, Debug)]
#[command(name = "ani-harvest")]
#[command(version = "1.0.0")]
#[command(about = "A paced catalog harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be harvested without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        Ok(())
    } else {
        handle_harvest(config).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("ani_harvest=info,warn"),
            1 => EnvFilter::new("ani_harvest=debug,info"),
            2 => EnvFilter::new("ani_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would run
fn handle_dry_run(config: &Config) {
    let interval = pacing_interval(config.harvester.requests_per_minute);

    println!("=== Ani-Harvest Dry Run ===\n");

    println!("Harvester Configuration:");
    println!(
        "  Requests per minute: {}",
        config.harvester.requests_per_minute
    );
    println!("  Pacing interval: {:?}", interval);
    println!("  Records per page: {}", config.harvester.per_page);

    println!("\nAPI:");
    println!("  Endpoint: {}", config.api.url);

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory);
    println!(
        "  Results file: {}",
        results_file_name(&config.output.tool_label, "<timestamp>")
    );

    println!("\n✓ Configuration is valid");
    println!("✓ Would harvest until the first empty page, one request per interval");
}

/// Handles the main harvest operation
async fn handle_harvest(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let cancel = Arc::new(AtomicBool::new(false));

    // The signal handler only raises the flag; the loop observes it at the
    // next iteration boundary and finishes the in-flight page first.
    let flag = Arc::clone(&cancel);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Shutdown signal received, finishing current page");
                flag.store(true, Ordering::Relaxed);
            }
            Err(e) => tracing::warn!("Failed to listen for shutdown signal: {}", e),
        }
    });

    tracing::info!("Harvest running, press Ctrl+C to stop");

    let summary = harvest(config, cancel).await?;
    tracing::info!(
        "Total series harvested: {} (results: {})",
        summary.total_fetched,
        summary.output_path.display()
    );

    match summary.outcome {
        HarvestOutcome::Exhausted | HarvestOutcome::Interrupted => Ok(()),
        HarvestOutcome::Failed(e) => Err(e.into()),
    }
}
