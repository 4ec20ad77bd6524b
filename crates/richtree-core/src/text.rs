//! Plain text extraction
//!
//! Used for search indexing and scoring stages that only care about
//! the words, not the markup.

use crate::tree::{BlockNode, Document, InlineNode};

/// Concatenate the text content of inline nodes, depth first.
///
/// Only text leaves contribute; there is no separator, escaping or
/// decoration. Link children are walked in place.
pub fn extract_text(nodes: &[InlineNode]) -> String {
    let mut output = String::new();
    extract_into(nodes, &mut output);
    output
}

fn extract_into(nodes: &[InlineNode], out: &mut String) {
    for node in nodes {
        match node {
            InlineNode::Text { text, .. } => out.push_str(text),
            InlineNode::Linebreak => {}
            InlineNode::Link { children, .. } => extract_into(children, out),
        }
    }
}

impl Document {
    /// Plain text of the whole document, one line per content block.
    ///
    /// Tables and images contribute nothing.
    pub fn plain_text(&self) -> String {
        let mut output = String::new();
        collect_block_text(&self.children, &mut output);
        while output.ends_with('\n') {
            output.pop();
        }
        output
    }
}

fn collect_block_text(blocks: &[BlockNode], out: &mut String) {
    for block in blocks {
        match block {
            BlockNode::Paragraph { children }
            | BlockNode::Heading { children, .. }
            | BlockNode::ListItem { children }
            | BlockNode::Quote { children } => {
                extract_into(children, out);
                out.push('\n');
            }
            BlockNode::List { children, .. } => collect_block_text(children, out),
            BlockNode::Table { .. } | BlockNode::Image { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{ListKind, TextFormat};

    #[test]
    fn test_extract_plain_text() {
        let nodes = vec![
            InlineNode::text("Hello "),
            InlineNode::formatted("World", TextFormat::BOLD),
        ];
        assert_eq!(extract_text(&nodes), "Hello World");
    }

    #[test]
    fn test_extract_walks_link_children() {
        let nodes = vec![
            InlineNode::text("See "),
            InlineNode::Link {
                url: "/docs".to_string(),
                rel: None,
                children: vec![InlineNode::text("the docs")],
            },
            InlineNode::text("."),
        ];
        assert_eq!(extract_text(&nodes), "See the docs.");
    }

    #[test]
    fn test_linebreak_contributes_nothing() {
        let nodes = vec![
            InlineNode::text("one"),
            InlineNode::Linebreak,
            InlineNode::text("two"),
        ];
        assert_eq!(extract_text(&nodes), "onetwo");
    }

    #[test]
    fn test_no_unescaping() {
        let nodes = vec![InlineNode::text("a & b")];
        assert_eq!(extract_text(&nodes), "a & b");
    }

    #[test]
    fn test_document_plain_text() {
        let doc = Document::new(vec![
            BlockNode::Heading {
                level: 2,
                children: vec![InlineNode::text("Deals")],
            },
            BlockNode::List {
                kind: ListKind::Bulleted,
                children: vec![
                    BlockNode::ListItem {
                        children: vec![InlineNode::text("One")],
                    },
                    BlockNode::ListItem {
                        children: vec![InlineNode::text("Two")],
                    },
                ],
            },
            BlockNode::Table {
                html: "<table><tbody><tr><td>ignored</td></tr></tbody></table>".to_string(),
            },
        ]);
        assert_eq!(doc.plain_text(), "Deals\nOne\nTwo");
    }

    #[test]
    fn test_empty_document_plain_text() {
        assert_eq!(Document::default().plain_text(), "");
    }
}
