//! Harvester module for paged catalog fetching
//!
//! This module contains the core harvesting logic, including:
//! - The GraphQL page fetcher
//! - Pacing derived from the requests-per-minute budget
//! - The crawl loop coordinating fetch, format, write, and advance

mod coordinator;
mod fetcher;
mod pacing;

pub use coordinator::{Coordinator, HarvestOutcome, HarvestSummary};
pub use fetcher::{build_http_client, fetch_page};
pub use pacing::pacing_interval;

use crate::config::Config;
use crate::HarvestError;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Runs a complete harvest
///
/// This is the main entry point. It builds the HTTP client, fixes the run's
/// output file from a timestamp captured now, and drives the loop until the
/// catalog is exhausted, an error occurs, or `cancel` is raised.
///
/// # Arguments
///
/// * `config` - The harvester configuration
/// * `cancel` - Shared shutdown flag observed at iteration boundaries
///
/// # Returns
///
/// * `Ok(HarvestSummary)` - The run's final report (including a failed outcome)
/// * `Err(HarvestError)` - Setup failed before the loop could start
pub async fn harvest(
    config: Config,
    cancel: Arc<AtomicBool>,
) -> Result<HarvestSummary, HarvestError> {
    let coordinator = Coordinator::new(config, cancel)?;
    Ok(coordinator.run().await)
}
