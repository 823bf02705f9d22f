//! Pagination crawl orchestration
//!
//! The state machine driving page navigation, the record aggregator,
//! and the crawl entry point that scopes the browser session.

pub mod aggregate;
pub mod crawler;
pub mod state;

pub use aggregate::ResultAggregator;
pub use crawler::{CrawlConfig, PaginationCrawler};
pub use state::{CrawlPhase, CrawlState};

use crate::browser::{enable_resource_filtering, BrowserConfig, BrowserController, CdpDriver};
use crate::error::Result;
use crate::extraction::{ProductRecord, RecordExtractor};
use tracing::{instrument, warn};

/// Crawl one listing URL end to end.
///
/// Launches a browser, opens a single page with resource filtering
/// enabled, runs the pagination crawler, and closes the browser
/// unconditionally — fatal error paths included — before returning.
#[instrument(skip(browser_config, crawl_config, extractor))]
pub async fn scrape_listing(
    browser_config: BrowserConfig,
    crawl_config: CrawlConfig,
    extractor: &impl RecordExtractor,
    url: &str,
) -> Result<Vec<ProductRecord>> {
    let controller = BrowserController::with_config(browser_config).await?;

    let outcome = async {
        let page = controller.new_page().await?;
        enable_resource_filtering(page.inner()).await?;

        let driver = CdpDriver::new(page);
        let crawler = PaginationCrawler::new(&driver, extractor, crawl_config)?;
        crawler.run(url).await
    }
    .await;

    // The OS-level browser process must not outlive the crawl.
    if let Err(e) = controller.close().await {
        warn!("Failed to close browser cleanly: {}", e);
    }

    outcome
}
