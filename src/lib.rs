//! Listing Miner - LLM-Assisted Product Listing Crawler
//!
//! This crate automates browsing a paginated product-listing site,
//! reduces each listing page to minimal structural markup, and asks a
//! language model to convert that markup into structured product
//! records.
//!
//! # Architecture
//!
//! ```text
//! Listing URL ──▶ PaginationCrawler ──▶ Page Driver (CDP)
//!                       │
//!                       ▼
//!                ┌───────────────┐    ┌──────────────────┐
//!                │ MarkupSanitizer│──▶│ ExtractionClient │
//!                └───────────────┘    └────────┬─────────┘
//!                                              │
//!                                              ▼
//!                                       ResultAggregator
//!                                       (ordered records)
//! ```
//!
//! The pipeline guarantees structural validity (parseable records, the
//! `"-"` sentinel in any undeterminable field) and robustness (per-page
//! extraction failures never abort a crawl), not extraction accuracy.
//! Fatal errors — the results container never appearing, or a
//! navigation timing out — make the crawl return `Err`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use listing_miner::browser::BrowserConfig;
//! use listing_miner::crawl::{self, CrawlConfig};
//! use listing_miner::extraction::{ExtractionClient, ExtractionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let extractor = ExtractionClient::new(ExtractionConfig {
//!         api_key: std::env::var("DEEPSEEK_API_KEY")?,
//!         ..Default::default()
//!     });
//!
//!     let records = crawl::scrape_listing(
//!         BrowserConfig::default(),
//!         CrawlConfig::default(),
//!         &extractor,
//!         "https://www.ebay.com/sch/i.html?_nkw=nike&_pgn=1",
//!     )
//!     .await?;
//!
//!     println!("{}", serde_json::to_string_pretty(&records)?);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod browser;
pub mod crawl;
pub mod error;
pub mod extraction;
pub mod sanitize;

// Re-exports for convenience
pub use browser::{BrowserConfig, BrowserController, CdpDriver, PageDriver};
pub use crawl::{CrawlConfig, PaginationCrawler, ResultAggregator};
pub use error::{Error, Result};
pub use extraction::{ExtractionClient, ExtractionConfig, ProductRecord, RecordExtractor};
pub use sanitize::{MarkupSanitizer, SanitizedMarkup};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
