//! Ani-Harvest: a paced catalog harvester
//!
//! This crate walks a paginated GraphQL catalog page by page, formats every
//! record into a text block, and appends the blocks to a single run-scoped
//! results file, throttling itself to stay under the API's rate limit.

pub mod config;
pub mod harvester;
pub mod media;
pub mod output;
pub mod state;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Failures while talking to the GraphQL endpoint
///
/// All of these are fatal to the run: the loop stops on the first one and
/// never retries a page.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request for page {page} failed: {source}")]
    Request {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("Page {page} returned HTTP {status}")]
    Status { page: u32, status: u16 },

    #[error("Malformed payload for page {page}: {reason}")]
    Shape { page: u32, reason: String },
}

/// Filesystem failures while writing the results file
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to append to {}: {source}", path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use harvester::{harvest, Coordinator, HarvestOutcome, HarvestSummary};
pub use media::{Media, MediaTitle};
pub use state::{CrawlState, HarvestPhase};
