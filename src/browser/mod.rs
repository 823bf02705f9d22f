//! Browser automation module
//!
//! High-level browser control through ChromiumOxide: lifecycle
//! management, the page-driver boundary the crawler runs against, and
//! resource-type request filtering.

pub mod controller;
pub mod driver;
pub mod intercept;

pub use controller::{BrowserConfig, BrowserController, PageHandle};
pub use driver::{CdpDriver, PageDriver};
pub use intercept::{enable_resource_filtering, should_block};
