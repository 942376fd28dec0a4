/// Pagination and record counters for one harvest run
///
/// A single value owned by the loop coordinator and discarded at process
/// exit; nothing is persisted between runs. Only the coordinator mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlState {
    current_page: u32,
    total_fetched: u64,
}

impl CrawlState {
    /// Creates the state for a fresh run, pointed at the first page
    pub fn new() -> Self {
        Self {
            current_page: 1,
            total_fetched: 0,
        }
    }

    /// The page number the next fetch should request
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Records harvested so far across all pages
    pub fn total_fetched(&self) -> u64 {
        self.total_fetched
    }

    /// Pages successfully harvested so far
    pub fn pages_harvested(&self) -> u32 {
        self.current_page - 1
    }

    /// Records a successfully written page and advances to the next one
    pub fn record_page(&mut self, record_count: usize) {
        self.total_fetched += record_count as u64;
        self.current_page += 1;
    }
}

impl Default for CrawlState {
    fn default() -> Self {
        Self::new()
    }
}
