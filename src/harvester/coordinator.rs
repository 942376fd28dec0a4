//! Harvest coordinator - the main crawl loop
//!
//! This module owns the run's state machine:
//! - fetch the current page
//! - format and append its records
//! - advance the counters and pace the next request
//! - stop on the first empty page, the first error, or an operator signal
//!
//! Cancellation is observed once per iteration, at the top of the loop. The
//! pacing sleep is never interrupted early, so worst-case shutdown latency is
//! one pacing interval plus one in-flight request.

use crate::config::Config;
use crate::harvester::fetcher::{build_http_client, fetch_page};
use crate::harvester::pacing::pacing_interval;
use crate::output::{media_block, run_timestamp, BatchWriter};
use crate::state::{CrawlState, HarvestPhase};
use crate::HarvestError;
use chrono::Local;
use reqwest::Client;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Why the run ended
#[derive(Debug)]
pub enum HarvestOutcome {
    /// The API returned an empty page; everything available was harvested
    Exhausted,

    /// The operator requested shutdown; the in-flight iteration completed
    Interrupted,

    /// A transport or output error stopped the run
    Failed(HarvestError),
}

/// Final report for one run
#[derive(Debug)]
pub struct HarvestSummary {
    pub total_fetched: u64,
    pub pages_harvested: u32,
    pub output_path: PathBuf,
    pub outcome: HarvestOutcome,
}

/// What one loop iteration produced
enum PageOutcome {
    /// Records were written; the count feeds the progress log
    Fetched(usize),

    /// The API returned an empty page
    Exhausted,
}

/// Main harvest coordinator structure
///
/// Owns the HTTP client, the output writer, and the `CrawlState` counters for
/// exactly one run.
pub struct Coordinator {
    config: Config,
    client: Client,
    writer: BatchWriter,
    cancel: Arc<AtomicBool>,
    state: CrawlState,
}

impl Coordinator {
    /// Creates a coordinator for a fresh run
    ///
    /// Captures the run timestamp here, once; every page of the run is
    /// appended to the same results file.
    ///
    /// # Arguments
    ///
    /// * `config` - The harvester configuration
    /// * `cancel` - Shared shutdown flag, raised by the signal handler
    pub fn new(config: Config, cancel: Arc<AtomicBool>) -> Result<Self, HarvestError> {
        let client = build_http_client()?;
        let timestamp = run_timestamp(Local::now());
        let writer = BatchWriter::new(&config.output, &timestamp);

        Ok(Self {
            config,
            client,
            writer,
            cancel,
            state: CrawlState::new(),
        })
    }

    /// Runs the harvest loop to completion
    ///
    /// Always returns a summary; fetch and write failures end the run and
    /// travel inside `HarvestOutcome::Failed` rather than short-circuiting,
    /// so the terminal reporting path is identical for every ending.
    pub async fn run(mut self) -> HarvestSummary {
        let interval = pacing_interval(self.config.harvester.requests_per_minute);

        tracing::info!(
            "Harvest started: {} requests/min (one every {:?}), writing to {}",
            self.config.harvester.requests_per_minute,
            interval,
            self.writer.path().display()
        );

        let mut phase = HarvestPhase::Running;
        let mut failure: Option<HarvestError> = None;

        while phase.is_running() {
            if self.cancel.load(Ordering::Relaxed) {
                phase = HarvestPhase::StoppingSignal;
                continue;
            }

            phase = match self.harvest_page().await {
                Ok(PageOutcome::Fetched(count)) => {
                    tracing::info!(
                        "Harvested {} series so far ({} this page)",
                        self.state.total_fetched(),
                        count
                    );
                    tracing::debug!("Waiting {:?} before next request", interval);
                    tokio::time::sleep(interval).await;
                    HarvestPhase::Running
                }
                Ok(PageOutcome::Exhausted) => HarvestPhase::StoppingEmpty,
                Err(e) => {
                    failure = Some(e);
                    HarvestPhase::StoppingError
                }
            };
        }

        match phase {
            HarvestPhase::StoppingEmpty => tracing::info!("No more series found, stopping"),
            HarvestPhase::StoppingSignal => {
                tracing::info!("Stop requested, halting before the next fetch")
            }
            HarvestPhase::StoppingError => {
                if let Some(e) = &failure {
                    tracing::error!("Harvest failed: {}", e);
                }
            }
            _ => {}
        }

        let outcome = match (phase, failure) {
            (_, Some(e)) => HarvestOutcome::Failed(e),
            (HarvestPhase::StoppingSignal, None) => HarvestOutcome::Interrupted,
            (_, None) => HarvestOutcome::Exhausted,
        };

        // Every stopping state drains into Stopped before the summary
        phase = HarvestPhase::Stopped;
        tracing::info!(
            "Harvester {}: {} series across {} pages",
            phase,
            self.state.total_fetched(),
            self.state.pages_harvested()
        );

        HarvestSummary {
            total_fetched: self.state.total_fetched(),
            pages_harvested: self.state.pages_harvested(),
            output_path: self.writer.path().to_path_buf(),
            outcome,
        }
    }

    /// One fetch-format-write iteration
    ///
    /// On a non-empty page the records are formatted, joined with blank
    /// lines, appended as a single write, and the counters advance. The page
    /// number is only incremented after a successful write, so a failed page
    /// is never counted.
    async fn harvest_page(&mut self) -> Result<PageOutcome, HarvestError> {
        let page_number = self.state.current_page();
        tracing::info!("Fetching page {}", page_number);

        let page = fetch_page(
            &self.client,
            &self.config.api,
            self.config.harvester.per_page,
            page_number,
        )
        .await?;

        if page.is_empty() {
            return Ok(PageOutcome::Exhausted);
        }

        let blocks = page.iter().map(media_block).collect::<Vec<_>>().join("\n\n");
        self.writer.append(&blocks)?;
        self.state.record_page(page.len());

        Ok(PageOutcome::Fetched(page.len()))
    }
}
