//! Typed document tree
//!
//! This module defines the content nodes shared by the encoder and the
//! renderer. The tree is also the storage format: every node carries a
//! `type` tag when serialized, so documents survive a JSON round trip.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Formatting mask attached to text leaves
    ///
    /// Bits compose, so bold text inside italic collapses into a single
    /// text node carrying both bits. The mask lives on the leaf and is
    /// never inherited structurally.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextFormat: u8 {
        const BOLD = 1;
        const ITALIC = 1 << 1;
    }
}

// The stored form is the raw integer mask, not flag names.
impl Serialize for TextFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for TextFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(TextFormat::from_bits_truncate(bits))
    }
}

/// List flavor, bulleted (`ul`) or numbered (`ol`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Bulleted,
    Numbered,
}

/// An inline content node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InlineNode {
    /// Text run with its formatting mask
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "TextFormat::is_empty")]
        format: TextFormat,
    },

    /// Hard line break
    Linebreak,

    /// Link wrapping inline children; links never nest inside links
    Link {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rel: Option<String>,
        children: Vec<InlineNode>,
    },
}

impl InlineNode {
    /// Plain unformatted text
    pub fn text(text: impl Into<String>) -> Self {
        InlineNode::Text {
            text: text.into(),
            format: TextFormat::empty(),
        }
    }

    /// Text with a formatting mask
    pub fn formatted(text: impl Into<String>, format: TextFormat) -> Self {
        InlineNode::Text {
            text: text.into(),
            format,
        }
    }

    /// The empty text node used to keep blocks non-empty
    pub fn empty_text() -> Self {
        InlineNode::text("")
    }
}

/// A block-level content node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockNode {
    /// Paragraph of inline content
    Paragraph { children: Vec<InlineNode> },

    /// Heading with level (1-6) and inline content
    Heading {
        level: u8,
        children: Vec<InlineNode>,
    },

    /// List of items; a nested list sits between items as a sibling,
    /// never inside the item that held it
    List {
        kind: ListKind,
        children: Vec<BlockNode>,
    },

    /// Item inside a list, inline content only
    ListItem { children: Vec<InlineNode> },

    /// Block quote of inline content
    Quote { children: Vec<InlineNode> },

    /// Opaque table markup, kept verbatim
    Table { html: String },

    /// Reference to an externally stored image. Inserted by upstream
    /// tooling, never produced by the encoder.
    Image {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        alt: String,
    },
}

/// The document root, an ordered sequence of blocks
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub children: Vec<BlockNode>,
}

impl Document {
    pub fn new(children: Vec<BlockNode>) -> Self {
        Self { children }
    }

    /// Serialize to the JSON storage form
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a document back from its JSON storage form
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bits_compose() {
        let both = TextFormat::BOLD | TextFormat::ITALIC;
        assert_eq!(both.bits(), 3);
        assert!(both.contains(TextFormat::BOLD));
        assert!(both.contains(TextFormat::ITALIC));
    }

    #[test]
    fn test_unformatted_text_json_omits_format() {
        let doc = Document::new(vec![BlockNode::Paragraph {
            children: vec![InlineNode::text("Hi")],
        }]);
        let json = doc.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"children":[{"type":"paragraph","children":[{"type":"text","text":"Hi"}]}]}"#
        );
    }

    #[test]
    fn test_formatted_text_json_carries_mask() {
        let doc = Document::new(vec![BlockNode::Paragraph {
            children: vec![InlineNode::formatted(
                "Hi",
                TextFormat::BOLD | TextFormat::ITALIC,
            )],
        }]);
        let json = doc.to_json().unwrap();
        assert!(json.contains(r#""format":3"#));
    }

    #[test]
    fn test_heading_json_shape() {
        let doc = Document::new(vec![BlockNode::Heading {
            level: 2,
            children: vec![InlineNode::text("Title")],
        }]);
        let json = doc.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"children":[{"type":"heading","level":2,"children":[{"type":"text","text":"Title"}]}]}"#
        );
    }

    #[test]
    fn test_list_kind_tags() {
        let doc = Document::new(vec![BlockNode::List {
            kind: ListKind::Numbered,
            children: vec![BlockNode::ListItem {
                children: vec![InlineNode::text("One")],
            }],
        }]);
        let json = doc.to_json().unwrap();
        assert!(json.contains(r#""type":"list""#));
        assert!(json.contains(r#""kind":"numbered""#));
        assert!(json.contains(r#""type":"listitem""#));
    }

    #[test]
    fn test_json_round_trip() {
        let doc = Document::new(vec![
            BlockNode::Heading {
                level: 1,
                children: vec![InlineNode::text("Title")],
            },
            BlockNode::Paragraph {
                children: vec![
                    InlineNode::formatted("bold", TextFormat::BOLD),
                    InlineNode::Linebreak,
                    InlineNode::Link {
                        url: "https://example.com".to_string(),
                        rel: Some("nofollow".to_string()),
                        children: vec![InlineNode::text("link")],
                    },
                ],
            },
            BlockNode::Table {
                html: "<table><tbody><tr><td>1</td></tr></tbody></table>".to_string(),
            },
        ]);

        let json = doc.to_json().unwrap();
        let back = Document::from_json(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_unknown_format_bits_truncated() {
        let json = r#"{"children":[{"type":"paragraph","children":[{"type":"text","text":"x","format":255}]}]}"#;
        let doc = Document::from_json(json).unwrap();
        let expected = TextFormat::BOLD | TextFormat::ITALIC;
        assert_eq!(
            doc.children[0],
            BlockNode::Paragraph {
                children: vec![InlineNode::formatted("x", expected)],
            }
        );
    }

    #[test]
    fn test_missing_format_defaults_to_empty() {
        let json = r#"{"children":[{"type":"paragraph","children":[{"type":"text","text":"x"}]}]}"#;
        let doc = Document::from_json(json).unwrap();
        assert_eq!(
            doc.children[0],
            BlockNode::Paragraph {
                children: vec![InlineNode::text("x")],
            }
        );
    }

    #[test]
    fn test_image_without_url() {
        let doc = Document::new(vec![BlockNode::Image {
            url: None,
            alt: String::new(),
        }]);
        let json = doc.to_json().unwrap();
        assert_eq!(json, r#"{"children":[{"type":"image"}]}"#);
        assert_eq!(Document::from_json(&json).unwrap(), doc);
    }
}
