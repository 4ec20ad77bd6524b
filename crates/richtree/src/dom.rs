//! Parser-agnostic DOM node structure.
//!
//! The encoder consumes this structure rather than any one parser's
//! tree. The `html` module converts a scraper parse into it; callers
//! that already hold a DOM from another source can build it directly.

use richtree_core::{escape_attribute, escape_text};

/// A DOM node, either an element or a text run.
#[derive(Debug, Clone, PartialEq)]
pub enum DomNode {
    /// Element with tag name, attributes in source order, and children
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<DomNode>,
    },

    /// Text content, entities already resolved
    Text(String),
}

impl DomNode {
    /// Create an element node
    pub fn element(tag: &str) -> Self {
        DomNode::Element {
            tag: tag.to_lowercase(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an element node with attributes
    pub fn element_with_attrs(tag: &str, attrs: Vec<(&str, &str)>) -> Self {
        DomNode::Element {
            tag: tag.to_lowercase(),
            attrs: attrs
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            children: Vec::new(),
        }
    }

    /// Create a text node
    pub fn text(content: &str) -> Self {
        DomNode::Text(content.to_string())
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, DomNode::Element { .. })
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, DomNode::Text(_))
    }

    /// Get the tag name, empty for text nodes
    pub fn tag(&self) -> &str {
        match self {
            DomNode::Element { tag, .. } => tag,
            DomNode::Text(_) => "",
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            DomNode::Element { attrs, .. } => attrs
                .iter()
                .find(|(attr_name, _)| attr_name.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str()),
            DomNode::Text(_) => None,
        }
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Child nodes, empty for text nodes
    pub fn children(&self) -> &[DomNode] {
        match self {
            DomNode::Element { children, .. } => children,
            DomNode::Text(_) => &[],
        }
    }

    /// Add a child node. No effect on text nodes.
    pub fn add_child(&mut self, child: DomNode) {
        if let DomNode::Element { children, .. } = self {
            children.push(child);
        }
    }

    /// All text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self {
            DomNode::Text(text) => text.clone(),
            DomNode::Element { children, .. } => {
                children.iter().map(|child| child.text_content()).collect()
            }
        }
    }

    /// Reconstruct outer HTML
    pub fn outer_html(&self) -> String {
        match self {
            DomNode::Text(text) => escape_text(text),
            DomNode::Element { tag, attrs, .. } => {
                let mut html = String::new();
                html.push('<');
                html.push_str(tag);
                for (name, value) in attrs {
                    html.push(' ');
                    html.push_str(name);
                    if !value.is_empty() {
                        html.push_str("=\"");
                        html.push_str(&escape_attribute(value));
                        html.push('"');
                    }
                }
                html.push('>');
                if !is_void_element(tag) {
                    html.push_str(&self.inner_html());
                    html.push_str("</");
                    html.push_str(tag);
                    html.push('>');
                }
                html
            }
        }
    }

    /// Reconstruct inner HTML
    pub fn inner_html(&self) -> String {
        self.children()
            .iter()
            .map(|child| child.outer_html())
            .collect()
    }
}

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}
