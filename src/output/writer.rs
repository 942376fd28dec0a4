//! Append-only writer for the run's results file

use crate::config::OutputConfig;
use crate::OutputError;
use chrono::{DateTime, Local};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Formats the run timestamp embedded in the results file name
///
/// Fixed field order: two-digit year, month, day, hour, minute, second,
/// zero-padded and underscore separated. Captured once per run so every page
/// lands in the same file.
pub fn run_timestamp(now: DateTime<Local>) -> String {
    now.format("%y_%m_%d_%H_%M_%S").to_string()
}

/// Builds the results file name for a run
pub fn results_file_name(tool_label: &str, timestamp: &str) -> String {
    format!("{}-results-{}.txt", tool_label, timestamp)
}

/// Append-only handle on one run's output file
///
/// The path is fixed at construction. Writes never truncate; each append adds
/// the page's text followed by a blank-line separator.
pub struct BatchWriter {
    path: PathBuf,
}

impl BatchWriter {
    /// Creates a writer for a run started at `timestamp`
    ///
    /// Nothing touches the filesystem until the first append, so a run that
    /// harvests zero pages leaves no file behind.
    pub fn new(output: &OutputConfig, timestamp: &str) -> Self {
        let path =
            Path::new(&output.directory).join(results_file_name(&output.tool_label, timestamp));
        Self { path }
    }

    /// The file every append of this run goes to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `text` plus a blank-line separator
    ///
    /// Creates the containing directory if absent (idempotent). Filesystem
    /// refusal is fatal to the caller; there is no retry.
    pub fn append(&self, text: &str) -> Result<(), OutputError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| OutputError::Append {
                path: self.path.clone(),
                source,
            })?;

        file.write_all(text.as_bytes())
            .and_then(|_| file.write_all(b"\n\n"))
            .map_err(|source| OutputError::Append {
                path: self.path.clone(),
                source,
            })
    }
}
