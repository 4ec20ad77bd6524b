//! HTML parsing support.
//!
//! This module parses HTML fragments with scraper (html5ever) and
//! converts the result into the parser-agnostic [`DomNode`] structure
//! consumed by the encoder.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::dom::DomNode;

/// Parse an HTML fragment into a list of DOM nodes.
///
/// The lenient parser repairs malformed input, so unclosed and
/// misnested tags come back as a well-formed tree. A full document
/// wrapper is tolerated; its `html`/`head`/`body` shell does not show
/// up in the result.
///
/// # Example
///
/// ```rust
/// use richtree::parse_fragment;
///
/// let nodes = parse_fragment("<p>Hello <em>World</em></p>");
/// assert_eq!(nodes.len(), 1);
/// assert_eq!(nodes[0].tag(), "p");
/// ```
pub fn parse_fragment(html: &str) -> Vec<DomNode> {
    let document = Html::parse_fragment(html);
    let root = document.root_element();

    let mut nodes = Vec::new();
    for child in root.children() {
        match child.value() {
            ScraperNode::Text(text) => nodes.push(DomNode::text(&text.text)),
            ScraperNode::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    nodes.push(convert_element(element));
                }
            }
            _ => {}
        }
    }
    nodes
}

/// Convert a scraper ElementRef to our DomNode structure
fn convert_element(element: ElementRef) -> DomNode {
    let mut node = DomNode::element_with_attrs(
        element.value().name(),
        element.value().attrs().collect(),
    );

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => node.add_child(DomNode::text(&text.text)),
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(convert_element(child_element));
                }
            }
            _ => {}
        }
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_fragment() {
        let nodes = parse_fragment("<p>Hello World</p>");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].tag(), "p");
        assert_eq!(nodes[0].text_content(), "Hello World");
    }

    #[test]
    fn test_parse_mixed_content() {
        let nodes = parse_fragment("intro<p>body</p>");
        assert_eq!(nodes.len(), 2);
        assert!(nodes[0].is_text());
        assert_eq!(nodes[1].tag(), "p");
    }

    #[test]
    fn test_parse_preserves_attributes() {
        let nodes = parse_fragment("<a href=\"https://example.com\" rel=\"nofollow\">x</a>");
        assert_eq!(nodes[0].attr("href"), Some("https://example.com"));
        assert_eq!(nodes[0].attr("rel"), Some("nofollow"));
    }

    #[test]
    fn test_parse_repairs_unclosed_tags() {
        let nodes = parse_fragment("<p>Unclosed <em>emphasis");
        assert_eq!(nodes.len(), 1);
        let p = &nodes[0];
        assert_eq!(p.tag(), "p");
        assert_eq!(p.children().len(), 2);
        assert_eq!(p.children()[1].tag(), "em");
    }

    #[test]
    fn test_parse_skips_comments() {
        let nodes = parse_fragment("<p>a</p><!-- note --><p>b</p>");
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].tag(), "p");
        assert_eq!(nodes[1].tag(), "p");
    }

    #[test]
    fn test_parse_resolves_entities() {
        let nodes = parse_fragment("<p>a &amp; b</p>");
        assert_eq!(nodes[0].text_content(), "a & b");
    }

    #[test]
    fn test_parse_tolerates_document_shell() {
        let nodes = parse_fragment("<html><body><p>Hi</p></body></html>");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].tag(), "p");
    }
}
