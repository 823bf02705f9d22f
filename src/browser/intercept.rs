//! Resource-type request filtering
//!
//! Listing pages pull in images, stylesheets, and fonts that contribute
//! nothing to extraction. Blocking them cuts page-load cost; it has no
//! semantic effect on the pipeline.

use crate::error::{Error, Result};
use chromiumoxide::cdp::browser_protocol::fetch::{
    ContinueRequestParams, EnableParams, EventRequestPaused, FailRequestParams,
};
use chromiumoxide::cdp::browser_protocol::network::{ErrorReason, ResourceType};
use chromiumoxide::Page;
use futures::StreamExt;
use tracing::{debug, trace};

/// Whether a request of this resource type should be aborted.
///
/// Pure predicate over the CDP resource-type set; nothing in the
/// pipeline depends on its outcome.
pub fn should_block(resource_type: &ResourceType) -> bool {
    matches!(
        resource_type,
        ResourceType::Image
            | ResourceType::Stylesheet
            | ResourceType::Font
            | ResourceType::Media
            | ResourceType::TextTrack
            | ResourceType::CspViolationReport
    )
}

/// Enable request interception on a page, aborting blocked resource
/// types and continuing everything else.
///
/// Spawns a task that drains paused-request events for the lifetime of
/// the page; the task ends when the event stream closes.
pub async fn enable_resource_filtering(page: &Page) -> Result<()> {
    page.execute(EnableParams::default())
        .await
        .map_err(|e| Error::cdp(e.to_string()))?;

    let mut requests = page
        .event_listener::<EventRequestPaused>()
        .await
        .map_err(|e| Error::cdp(e.to_string()))?;

    let page = page.clone();
    tokio::spawn(async move {
        while let Some(event) = requests.next().await {
            let request_id = event.request_id.clone();
            let outcome = if should_block(&event.resource_type) {
                trace!("Aborting {:?} request", event.resource_type);
                page.execute(FailRequestParams::new(request_id, ErrorReason::Aborted))
                    .await
                    .map(|_| ())
            } else {
                page.execute(ContinueRequestParams::new(request_id))
                    .await
                    .map(|_| ())
            };

            if let Err(e) = outcome {
                debug!("Request interception command failed: {}", e);
            }
        }
        debug!("Request interception stream closed");
    });

    Ok(())
}
