//! Request pacing derived from the configured rate budget

use std::time::Duration;

/// Delay slept between successive page fetches
///
/// One fetch per interval keeps the run at or under the requests-per-minute
/// budget. Validation guarantees a nonzero rate; the `max(1)` only guards the
/// division.
pub fn pacing_interval(requests_per_minute: u32) -> Duration {
    Duration::from_millis(60_000 / u64::from(requests_per_minute.max(1)))
}
