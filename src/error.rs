//! Error types for the crawl-and-extract pipeline
//!
//! This module provides the error hierarchy using `thiserror`. The split
//! matters for control flow: crawl and navigation errors abort a crawl,
//! extraction errors are recovered per page.

use thiserror::Error;

/// The main error type for listing-miner operations
#[derive(Error, Debug)]
pub enum Error {
    /// Browser lifecycle errors
    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),

    /// Navigation errors (fatal to the crawl)
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Crawl-level errors (fatal to the crawl)
    #[error("Crawl error: {0}")]
    Crawl(#[from] CrawlError),

    /// Model extraction errors (recovered per page)
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// ChromiumOxide errors
    #[error("CDP error: {0}")]
    Cdp(String),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Browser lifecycle and control errors
#[derive(Error, Debug)]
pub enum BrowserError {
    /// Failed to launch browser
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Browser configuration error
    #[error("Invalid browser configuration: {0}")]
    ConfigError(String),

    /// Failed to create new page/tab
    #[error("Failed to create page: {0}")]
    PageCreationFailed(String),

    /// Timeout waiting for browser
    #[error("Browser operation timed out after {0}ms")]
    Timeout(u64),
}

/// Navigation errors
///
/// All of these are fatal: a page that cannot be loaded or navigated
/// within its window aborts the crawl, it is never retried.
#[derive(Error, Debug)]
pub enum NavigationError {
    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Navigation timeout
    #[error("Navigation timed out after {0}ms")]
    Timeout(u64),

    /// Page load failed
    #[error("Page load failed: {0}")]
    LoadFailed(String),
}

/// Crawl-level errors
#[derive(Error, Debug)]
pub enum CrawlError {
    /// The results container never appeared or vanished mid-crawl.
    /// Its presence is the precondition for being on a valid listing
    /// page at all, so this aborts the crawl on any page.
    #[error("Results container not found: {0}")]
    ContainerNotFound(String),

    /// A configured CSS selector failed to parse
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

/// Model extraction errors
///
/// A page whose extraction fails contributes zero records; the crawl
/// continues to the pagination check. None of these abort the crawl.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The completion text did not parse as a JSON array
    #[error("Model response is not valid JSON: {0}")]
    InvalidJson(String),

    /// The chat-completion call itself failed
    #[error("Extraction service call failed: {0}")]
    ServiceFailed(String),

    /// The service answered with a non-success status
    #[error("Extraction service returned HTTP {0}")]
    HttpStatus(u16),
}

/// Result type alias for listing-miner operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a generic error from a string
    pub fn generic<S: Into<String>>(msg: S) -> Self {
        Error::Generic(msg.into())
    }

    /// Create a CDP error from a string
    pub fn cdp<S: Into<String>>(msg: S) -> Self {
        Error::Cdp(msg.into())
    }

    /// Whether this error class aborts the crawl.
    ///
    /// Only container-lookup and navigation failures terminate a crawl
    /// early; extraction failures are isolated to their page.
    pub fn is_fatal_to_crawl(&self) -> bool {
        !matches!(self, Error::Extraction(_))
    }
}

/// Convert chromiumoxide errors
impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Cdp(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Browser(BrowserError::LaunchFailed("no chrome".to_string()));
        assert!(err.to_string().contains("Failed to launch browser"));
        assert!(err.to_string().contains("no chrome"));
    }

    #[test]
    fn test_container_not_found_display() {
        let err = CrawlError::ContainerNotFound(".srp-results".to_string());
        assert!(err.to_string().contains("Results container not found"));
        assert!(err.to_string().contains(".srp-results"));
    }

    #[test]
    fn test_navigation_timeout_display() {
        let err = NavigationError::Timeout(30000);
        assert!(err.to_string().contains("30000"));
    }

    #[test]
    fn test_extraction_errors_are_not_fatal() {
        let err: Error = ExtractionError::InvalidJson("expected `[`".to_string()).into();
        assert!(!err.is_fatal_to_crawl());

        let err: Error = ExtractionError::HttpStatus(503).into();
        assert!(!err.is_fatal_to_crawl());
    }

    #[test]
    fn test_crawl_and_navigation_errors_are_fatal() {
        let err: Error = CrawlError::ContainerNotFound("#results".to_string()).into();
        assert!(err.is_fatal_to_crawl());

        let err: Error = NavigationError::Timeout(1000).into();
        assert!(err.is_fatal_to_crawl());
    }

    #[test]
    fn test_generic_error() {
        let err = Error::generic("something went wrong");
        assert_eq!(err.to_string(), "something went wrong");
    }
}
