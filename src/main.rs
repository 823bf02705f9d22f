//! Listing Miner CLI
//!
//! Crawls a paginated listing URL and prints the extracted product
//! records as JSON.

use clap::Parser;
use listing_miner::browser::BrowserConfig;
use listing_miner::crawl::{self, CrawlConfig};
use listing_miner::extraction::{ExtractionClient, ExtractionConfig};

/// LLM-assisted product listing crawler
#[derive(Parser, Debug)]
#[command(name = "listing-miner")]
#[command(version)]
#[command(about = "Crawl a paginated listing site and extract structured product records")]
struct Args {
    /// Listing URL to crawl (search/query parameters included)
    url: String,

    /// Maximum number of result pages to visit
    #[arg(long, default_value = "5")]
    max_pages: u32,

    /// Chat-completion service base URL
    #[arg(long, default_value = "https://api.deepseek.com")]
    base_url: String,

    /// API key for the chat-completion service
    #[arg(long, env = "DEEPSEEK_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Model identifier
    #[arg(long, default_value = "deepseek-chat")]
    model: String,

    /// Path to Chrome/Chromium executable
    #[arg(long)]
    chrome_path: Option<String>,

    /// Run the browser headful (visible window)
    #[arg(long)]
    headful: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut browser_builder = BrowserConfig::builder().headless(!args.headful);
    if let Some(path) = args.chrome_path {
        browser_builder = browser_builder.chrome_path(path);
    }

    let crawl_config = CrawlConfig {
        max_pages: args.max_pages,
        ..Default::default()
    };

    let extractor = ExtractionClient::new(ExtractionConfig {
        base_url: args.base_url,
        api_key: args.api_key,
        model: args.model,
    });

    let records =
        crawl::scrape_listing(browser_builder.build(), crawl_config, &extractor, &args.url)
            .await?;

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
