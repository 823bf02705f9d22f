//! The browser-automation boundary
//!
//! The crawler never talks to CDP directly; it runs against the
//! [`PageDriver`] trait so the pagination state machine can be exercised
//! with a scripted driver in tests. [`CdpDriver`] is the production
//! implementation over a chromiumoxide page.
//!
//! Every suspension point here is a blocking await with an explicit
//! timeout; no cancellation is exposed to the caller.

use crate::browser::PageHandle;
use crate::error::{Error, NavigationError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// Driver for a single browser page, as seen by the crawler.
///
/// Semantics the crawler relies on:
/// - `goto` and `wait_for_navigation` fail with
///   [`NavigationError::Timeout`] when the page does not settle in time;
/// - `wait_for_selector` fails when the selector never appears;
/// - `click` returns `Ok(false)` when the element cannot be located at
///   click time (stale control), never an error for that case.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigate the page to a URL and wait for DOMContentLoaded.
    async fn goto(&self, url: &str) -> Result<()>;

    /// Block until the selector matches an element, or time out.
    async fn wait_for_selector(&self, selector: &str, timeout_ms: u64) -> Result<()>;

    /// Capture the full serialized HTML of the current page.
    async fn content(&self) -> Result<String>;

    /// Whether the selector currently matches any element.
    async fn has_selector(&self, selector: &str) -> Result<bool>;

    /// Click the first element matching the selector.
    ///
    /// Returns `Ok(false)` if the element cannot be located.
    async fn click(&self, selector: &str) -> Result<bool>;

    /// Block until the pending navigation completes, or time out.
    async fn wait_for_navigation(&self, timeout_ms: u64) -> Result<()>;
}

/// ChromiumOxide-backed implementation of [`PageDriver`]
pub struct CdpDriver {
    page: PageHandle,
}

impl CdpDriver {
    /// Wrap an open page in a driver
    pub fn new(page: PageHandle) -> Self {
        Self { page }
    }

    fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://")
            && !url.starts_with("https://")
            && !url.starts_with("file://")
        {
            return Err(NavigationError::InvalidUrl(format!(
                "URL must start with http://, https://, or file://: {}",
                url
            ))
            .into());
        }
        Ok(())
    }

    /// Wait until the document has reached DOMContentLoaded.
    async fn wait_for_dom_content_loaded(&self, timeout_ms: u64) -> Result<()> {
        let script = r#"
            new Promise(resolve => {
                if (document.readyState !== 'loading') {
                    resolve(true);
                } else {
                    document.addEventListener('DOMContentLoaded', () => resolve(true));
                }
            })
        "#;

        let timeout = Duration::from_millis(timeout_ms);
        tokio::time::timeout(timeout, self.page.inner().evaluate(script))
            .await
            .map_err(|_| NavigationError::Timeout(timeout_ms))?
            .map_err(|e| Error::cdp(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl PageDriver for CdpDriver {
    #[instrument(skip(self))]
    async fn goto(&self, url: &str) -> Result<()> {
        Self::validate_url(url)?;

        let timeout_ms = 30000;
        let timeout = Duration::from_millis(timeout_ms);

        tokio::time::timeout(timeout, self.page.inner().goto(url))
            .await
            .map_err(|_| NavigationError::Timeout(timeout_ms))?
            .map_err(|e| NavigationError::LoadFailed(e.to_string()))?;

        self.wait_for_dom_content_loaded(timeout_ms).await?;
        debug!("Navigation complete: {}", url);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn wait_for_selector(&self, selector: &str, timeout_ms: u64) -> Result<()> {
        let script = format!(
            r#"
                new Promise((resolve, reject) => {{
                    const timeout = {};
                    const start = Date.now();

                    function check() {{
                        const el = document.querySelector('{}');
                        if (el) {{
                            resolve(true);
                        }} else if (Date.now() - start > timeout) {{
                            reject(new Error('Timeout waiting for selector'));
                        }} else {{
                            requestAnimationFrame(check);
                        }}
                    }}
                    check();
                }})
            "#,
            timeout_ms,
            selector.replace('\'', "\\'")
        );

        let timeout = Duration::from_millis(timeout_ms + 1000);
        tokio::time::timeout(timeout, self.page.inner().evaluate(script.as_str()))
            .await
            .map_err(|_| NavigationError::Timeout(timeout_ms))?
            .map_err(|e| Error::cdp(e.to_string()))?;

        Ok(())
    }

    async fn content(&self) -> Result<String> {
        self.page
            .inner()
            .content()
            .await
            .map_err(|e| Error::cdp(e.to_string()))
    }

    async fn has_selector(&self, selector: &str) -> Result<bool> {
        let script = format!(
            "!!document.querySelector('{}')",
            selector.replace('\'', "\\'")
        );

        // Probe errors count as "not present", matching how the crawler
        // treats a vanished pagination control.
        let present = self
            .page
            .inner()
            .evaluate(script.as_str())
            .await
            .ok()
            .and_then(|v| v.into_value::<bool>().ok())
            .unwrap_or(false);

        Ok(present)
    }

    #[instrument(skip(self))]
    async fn click(&self, selector: &str) -> Result<bool> {
        match self.page.inner().find_element(selector).await {
            Ok(element) => {
                element.click().await.map_err(|e| Error::cdp(e.to_string()))?;
                Ok(true)
            }
            // The element was reported present but is gone at click time.
            Err(_) => {
                debug!("Element not clickable (stale?): {}", selector);
                Ok(false)
            }
        }
    }

    async fn wait_for_navigation(&self, timeout_ms: u64) -> Result<()> {
        let timeout = Duration::from_millis(timeout_ms);

        tokio::time::timeout(timeout, self.page.inner().wait_for_navigation())
            .await
            .map_err(|_| NavigationError::Timeout(timeout_ms))?
            .map_err(|e| Error::cdp(e.to_string()))?;

        self.wait_for_dom_content_loaded(timeout_ms).await
    }
}
