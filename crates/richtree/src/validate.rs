//! Storage hygiene checks
//!
//! The conversion itself never rejects input; strictness lives here so
//! ingest pipelines can enforce the supported vocabulary before
//! encoding and storing a document.

use crate::dom::DomNode;
#[cfg(feature = "html")]
use crate::html::parse_fragment;
use crate::{Result, RichtreeError};

/// Tags accepted by the supported-vocabulary check
pub const ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "ul", "ol", "li", "blockquote", "table",
    "thead", "tbody", "tfoot", "tr", "th", "td", "caption", "colgroup", "col", "strong",
    "b", "em", "i", "a", "br",
];

/// Check an HTML fragment against the supported vocabulary
#[cfg(feature = "html")]
pub fn validate_fragment(html: &str) -> Result<()> {
    validate_nodes(&parse_fragment(html))
}

/// Check parsed DOM nodes against the supported vocabulary.
///
/// Reports the first offending tag in document order.
pub fn validate_nodes(nodes: &[DomNode]) -> Result<()> {
    for node in nodes {
        if let DomNode::Element { tag, children, .. } = node {
            if !ALLOWED_TAGS.contains(&tag.as_str()) {
                return Err(RichtreeError::UnsupportedTag(tag.clone()));
            }
            validate_nodes(children)?;
        }
    }
    Ok(())
}
