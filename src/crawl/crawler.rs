//! The pagination state machine
//!
//! Drives one browser page across a paginated listing: wait for the
//! results container, sanitize and extract the page, decide whether to
//! advance, click through, repeat. Strictly sequential — page N's
//! extraction always completes before page N+1 starts loading.

use crate::browser::PageDriver;
use crate::crawl::aggregate::ResultAggregator;
use crate::crawl::state::{CrawlPhase, CrawlState};
use crate::error::{CrawlError, Result};
use crate::extraction::{ProductRecord, RecordExtractor};
use crate::sanitize::MarkupSanitizer;
use tracing::{debug, error, info, instrument, warn};

/// Configuration for one crawl
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Selector for the results container whose presence marks a valid
    /// listing page
    pub container_selector: String,
    /// Selector for the next-page control
    pub next_selector: String,
    /// Hard cap on pages visited (default: 5)
    pub max_pages: u32,
    /// How long to wait for the results container after navigation
    pub selector_timeout_ms: u64,
    /// How long to wait for a pagination navigation to settle
    pub navigation_timeout_ms: u64,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            container_selector: ".srp-results.srp-grid.clearfix".to_string(),
            next_selector: ".pagination__next.icon-link".to_string(),
            max_pages: 5,
            selector_timeout_ms: 30000,
            navigation_timeout_ms: 30000,
        }
    }
}

/// Crawls a paginated listing, one page at a time.
///
/// Failure policy: container lookup and navigation failures abort the
/// crawl and [`run`](Self::run) returns `Err` (accumulated records are
/// dropped with it). Extraction failures are logged and contribute zero
/// records for their page; a next-page control that goes stale between
/// detection and click ends the crawl normally.
pub struct PaginationCrawler<'a, D, E> {
    driver: &'a D,
    extractor: &'a E,
    sanitizer: MarkupSanitizer,
    config: CrawlConfig,
    state: CrawlState,
    results: ResultAggregator,
}

impl<'a, D, E> PaginationCrawler<'a, D, E>
where
    D: PageDriver,
    E: RecordExtractor,
{
    /// Create a crawler over an already-open page driver.
    pub fn new(driver: &'a D, extractor: &'a E, config: CrawlConfig) -> Result<Self> {
        let sanitizer = MarkupSanitizer::new(&config.container_selector)?;
        let state = CrawlState::new(config.max_pages);

        Ok(Self {
            driver,
            extractor,
            sanitizer,
            config,
            state,
            results: ResultAggregator::new(),
        })
    }

    /// Run the crawl from a listing URL and return the final ResultSet.
    #[instrument(skip(self))]
    pub async fn run(mut self, url: &str) -> Result<Vec<ProductRecord>> {
        info!("Starting crawl: {}", url);
        self.driver.goto(url).await?;

        let mut phase = CrawlPhase::Loading;
        loop {
            phase = match phase {
                CrawlPhase::Loading => self.load().await?,
                CrawlPhase::Extracting => self.extract_page().await?,
                CrawlPhase::CheckNext => self.check_next().await,
                CrawlPhase::NavigatingNext => self.navigate_next().await?,
                CrawlPhase::Done => break,
            };
        }

        info!(
            "Crawl done: {} records across {} page(s)",
            self.results.len(),
            self.state.current_page
        );
        Ok(self.results.into_records())
    }

    /// Wait for the results container to appear after navigation.
    ///
    /// The container never appearing means the page structure itself is
    /// unusable, on any page of the crawl, so this is fatal.
    async fn load(&self) -> Result<CrawlPhase> {
        if let Err(e) = self
            .driver
            .wait_for_selector(&self.config.container_selector, self.config.selector_timeout_ms)
            .await
        {
            error!(
                page = self.state.current_page,
                "Results container never appeared: {}", e
            );
            return Err(CrawlError::ContainerNotFound(self.config.container_selector.clone()).into());
        }
        Ok(CrawlPhase::Extracting)
    }

    /// Sanitize the current page and run extraction on it.
    ///
    /// Extraction failure contributes zero records and the crawl moves
    /// on; a missing container is fatal even here.
    async fn extract_page(&mut self) -> Result<CrawlPhase> {
        let html = self.driver.content().await?;
        let markup = self.sanitizer.sanitize(&html)?;

        match self.extractor.extract(&markup).await {
            Ok(records) => {
                info!(
                    page = self.state.current_page,
                    count = records.len(),
                    "Extracted records"
                );
                self.results.append(records);
            }
            Err(e) => {
                warn!(
                    page = self.state.current_page,
                    "Extraction failed, continuing with zero records: {}", e
                );
            }
        }

        Ok(CrawlPhase::CheckNext)
    }

    /// Decide whether another page should be visited.
    async fn check_next(&mut self) -> CrawlPhase {
        let present = self
            .driver
            .has_selector(&self.config.next_selector)
            .await
            .unwrap_or(false);
        self.state.has_next = present;

        if present && self.state.can_advance() {
            CrawlPhase::NavigatingNext
        } else {
            debug!(
                page = self.state.current_page,
                has_next = present,
                "Pagination finished"
            );
            CrawlPhase::Done
        }
    }

    /// Click the next-page control and wait out the navigation.
    ///
    /// A control that vanished between detection and click ends the
    /// crawl normally; transient DOM staleness must not discard
    /// already-collected results.
    async fn navigate_next(&mut self) -> Result<CrawlPhase> {
        let clicked = self
            .driver
            .click(&self.config.next_selector)
            .await
            .unwrap_or(false);

        if !clicked {
            debug!("Next-page control vanished before click, ending pagination");
            return Ok(CrawlPhase::Done);
        }

        self.driver
            .wait_for_navigation(self.config.navigation_timeout_ms)
            .await?;
        self.state.advance();
        debug!(page = self.state.current_page, "Advanced to next page");
        Ok(CrawlPhase::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crawl_config_defaults() {
        let config = CrawlConfig::default();
        assert_eq!(config.max_pages, 5);
        assert_eq!(config.container_selector, ".srp-results.srp-grid.clearfix");
        assert_eq!(config.next_selector, ".pagination__next.icon-link");
        assert_eq!(config.selector_timeout_ms, 30000);
    }
}
