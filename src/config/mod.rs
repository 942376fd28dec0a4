//! Configuration module for Ani-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every field has a built-in default, so the harvester also runs without any
//! config file at all.
//!
//! # Example
//!
//! ```no_run
//! use ani_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Pacing: {} requests/min", config.harvester.requests_per_minute);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    ApiConfig, Config, HarvesterConfig, OutputConfig, MAX_PER_PAGE, MAX_REQUESTS_PER_MINUTE,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
