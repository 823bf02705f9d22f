//! Markup sanitization
//!
//! Reduces a captured listing-page snapshot to the results container's
//! minimal structural markup: presentation blocks, scripts, comments,
//! and every attribute removed. The output is the only thing the
//! language model ever sees, so anything that is not structure or text
//! is prompt bloat.
//!
//! This is a pure tree transformation over a parsed snapshot, not live
//! DOM surgery, which keeps it testable without a browser.

use crate::error::{CrawlError, Result};
use ego_tree::NodeId;
use scraper::{ElementRef, Html, Node, Selector};
use std::sync::LazyLock;

/// Elements removed wholesale before anything else. These carry images,
/// captions, subtitles, and review widgets that never contain the
/// fields being extracted.
///
/// Exact-match on the `class` attribute: these selectors must run
/// before attribute stripping, which would otherwise make them
/// inoperable.
static PRESENTATION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        "[class='s-item__image-section'], \
         [class='s-item__caption'], \
         [class='s-item__subtitle'], \
         [class='s-item__reviews']",
    )
    .unwrap()
});

/// Script elements, removed from the whole container subtree.
static SCRIPT: LazyLock<Selector> = LazyLock::new(|| Selector::parse("script").unwrap());

/// Minimal markup produced from one page visit.
///
/// Opaque string with no identity beyond that single use; it exists
/// only to be handed to the extraction client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedMarkup(String);

impl SanitizedMarkup {
    /// View the markup as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SanitizedMarkup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shrinks a page snapshot to the results container's sanitized markup.
pub struct MarkupSanitizer {
    container: Selector,
    container_source: String,
}

impl MarkupSanitizer {
    /// Create a sanitizer for the given results-container selector.
    pub fn new(container_selector: &str) -> Result<Self> {
        let container = Selector::parse(container_selector)
            .map_err(|e| CrawlError::InvalidSelector(format!("{}: {}", container_selector, e)))?;

        Ok(Self {
            container,
            container_source: container_selector.to_string(),
        })
    }

    /// Sanitize a full-page HTML snapshot down to the container's
    /// minimal outer markup.
    ///
    /// Fails with [`CrawlError::ContainerNotFound`] when the container
    /// selector matches nothing — the page is not a usable listing page
    /// and the crawl must not continue on it.
    pub fn sanitize(&self, page_html: &str) -> Result<SanitizedMarkup> {
        let mut document = Html::parse_document(page_html);

        let container_id = document
            .select(&self.container)
            .next()
            .map(|el| el.id())
            .ok_or_else(|| CrawlError::ContainerNotFound(self.container_source.clone()))?;

        // Class-based removals first, while attributes still exist.
        let mut doomed: Vec<NodeId> = Vec::new();
        {
            let container = Self::element_at(&document, container_id);
            doomed.extend(container.select(&PRESENTATION).map(|el| el.id()));
            doomed.extend(container.select(&SCRIPT).map(|el| el.id()));
        }
        for id in doomed {
            if let Some(mut node) = document.tree.get_mut(id) {
                node.detach();
            }
        }

        // Comment nodes, recursively over what remains.
        let comments: Vec<NodeId> = document
            .tree
            .get(container_id)
            .map(|n| {
                n.descendants()
                    .filter(|n| n.value().is_comment())
                    .map(|n| n.id())
                    .collect()
            })
            .unwrap_or_default();
        for id in comments {
            if let Some(mut node) = document.tree.get_mut(id) {
                node.detach();
            }
        }

        // Strip every attribute from every remaining element, the
        // container included.
        let elements: Vec<NodeId> = document
            .tree
            .get(container_id)
            .map(|n| {
                n.descendants()
                    .filter(|n| n.value().is_element())
                    .map(|n| n.id())
                    .collect()
            })
            .unwrap_or_default();
        for id in elements {
            if let Some(mut node) = document.tree.get_mut(id) {
                if let Node::Element(element) = node.value() {
                    element.attrs.clear();
                }
            }
        }

        let container = Self::element_at(&document, container_id);
        Ok(SanitizedMarkup(container.html()))
    }

    /// Re-wrap a known element node id. The id always comes from a
    /// selector match on this document, so both lookups hold.
    fn element_at(document: &Html, id: NodeId) -> ElementRef<'_> {
        ElementRef::wrap(document.tree.get(id).expect("node id from this tree"))
            .expect("selector matches produce element nodes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER_SELECTOR: &str = ".srp-results.srp-grid.clearfix";

    fn sanitizer() -> MarkupSanitizer {
        MarkupSanitizer::new(CONTAINER_SELECTOR).unwrap()
    }

    #[test]
    fn test_invalid_selector_rejected() {
        assert!(MarkupSanitizer::new(":::nope").is_err());
    }

    #[test]
    fn test_missing_container_is_an_error() {
        let html = "<html><body><div class='unrelated'>nothing here</div></body></html>";
        let err = sanitizer().sanitize(html).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Crawl(CrawlError::ContainerNotFound(_))
        ));
    }

    #[test]
    fn test_presentation_blocks_removed_before_attribute_stripping() {
        let html = r#"
            <html><body>
            <ul class="srp-results srp-grid clearfix">
              <li>
                <div class="s-item__image-section"><img src="x.jpg"></div>
                <div class="s-item__caption">caption</div>
                <span>Kept Item</span>
              </li>
            </ul>
            </body></html>
        "#;
        let markup = sanitizer().sanitize(html).unwrap();
        let out = markup.as_str();
        assert!(!out.contains("caption"));
        assert!(!out.contains("img"));
        assert!(out.contains("Kept Item"));
    }

    #[test]
    fn test_scripts_and_comments_removed() {
        let html = r#"
            <html><body>
            <ul class="srp-results srp-grid clearfix">
              <li><script>track();</script><!-- promo --><span>Item</span></li>
            </ul>
            </body></html>
        "#;
        let out = sanitizer().sanitize(html).unwrap().into_inner();
        assert!(!out.contains("<script"));
        assert!(!out.contains("track()"));
        assert!(!out.contains("<!--"));
        assert!(out.contains("Item"));
    }

    #[test]
    fn test_all_attributes_stripped_including_container() {
        let html = r#"
            <html><body>
            <ul class="srp-results srp-grid clearfix" id="results" data-view="grid">
              <li class="s-item" style="color:red" data-id="42"><span>Item</span></li>
            </ul>
            </body></html>
        "#;
        let out = sanitizer().sanitize(html).unwrap().into_inner();
        assert!(!out.contains('='));
        assert!(out.starts_with("<ul>"));
        assert!(out.contains("<li>"));
    }

    #[test]
    fn test_deterministic_on_same_snapshot() {
        let html = r#"
            <html><body>
            <ul class="srp-results srp-grid clearfix">
              <li><span>One</span><!-- a --></li>
              <li><span>Two</span><script>x()</script></li>
            </ul>
            </body></html>
        "#;
        let s = sanitizer();
        let first = s.sanitize(html).unwrap();
        let second = s.sanitize(html).unwrap();
        assert_eq!(first, second);
    }
}
