//! Crawl state and state-machine phases
//!
//! The crawl's counters live in one explicit value threaded through the
//! state machine, never in globals. State mutates only at page-boundary
//! transitions and is discarded when the crawl ends.

/// Phases of the pagination state machine.
///
/// `Loading → Extracting → CheckNext → {NavigatingNext → Loading | Done}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlPhase {
    /// Waiting for the results container after navigation
    Loading,
    /// Sanitizing and extracting the current page
    Extracting,
    /// Deciding whether another page should be visited
    CheckNext,
    /// Clicking the next-page control and waiting for navigation
    NavigatingNext,
    /// Terminal: the accumulated results are final
    Done,
}

/// Mutable crawl counters, owned exclusively by the crawler.
#[derive(Debug, Clone)]
pub struct CrawlState {
    /// 1-based index of the page currently being processed
    pub current_page: u32,
    /// Hard cap on pages visited, regardless of how many exist
    pub max_pages: u32,
    /// Whether a next-page control was seen on the current page
    pub has_next: bool,
}

impl CrawlState {
    /// Fresh state positioned on the first page
    pub fn new(max_pages: u32) -> Self {
        Self {
            current_page: 1,
            max_pages,
            has_next: false,
        }
    }

    /// Whether the page cap still allows advancing.
    ///
    /// The cap is a deliberate cost/wall-clock ceiling, not a bug: with
    /// `max_pages = K`, at most K pages are ever visited.
    pub fn can_advance(&self) -> bool {
        self.current_page < self.max_pages
    }

    /// Move to the next page. Called only after navigation completes.
    pub fn advance(&mut self) {
        self.current_page += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_page() {
        let state = CrawlState::new(5);
        assert_eq!(state.current_page, 1);
        assert!(!state.has_next);
    }

    #[test]
    fn test_cap_blocks_advancing_past_max() {
        let mut state = CrawlState::new(3);
        assert!(state.can_advance());
        state.advance();
        assert!(state.can_advance());
        state.advance();
        assert_eq!(state.current_page, 3);
        assert!(!state.can_advance());
    }

    #[test]
    fn test_cap_of_one_never_advances() {
        let state = CrawlState::new(1);
        assert!(!state.can_advance());
    }
}
