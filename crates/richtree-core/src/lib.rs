//! richtree-core - document tree model and rendering
//!
//! This crate provides the typed content nodes shared by both
//! conversion directions, the JSON storage round trip, the HTML
//! renderer and plain text extraction. HTML parsing and encoding live
//! in the `richtree` crate.
//!
//! # Architecture
//!
//! ```text
//! HTML fragment ──encode──▶ ┌───────────────┐ ──decode──▶ HTML
//!                           │ Document tree │
//! JSON storage ──parse────▶ └───────────────┘ ──store───▶ JSON
//! ```
//!
//! # Example
//!
//! ```rust
//! use richtree_core::{decode, BlockNode, Document, InlineNode, TextFormat};
//!
//! let doc = Document::new(vec![
//!     BlockNode::Heading {
//!         level: 1,
//!         children: vec![InlineNode::text("Hello World")],
//!     },
//!     BlockNode::Paragraph {
//!         children: vec![
//!             InlineNode::text("This is "),
//!             InlineNode::formatted("bold", TextFormat::BOLD),
//!             InlineNode::text(" text."),
//!         ],
//!     },
//! ]);
//!
//! let html = decode(&doc);
//! assert_eq!(
//!     html,
//!     "<h1>Hello World</h1>\n<p>This is <strong>bold</strong> text.</p>"
//! );
//! ```

mod decode;
mod text;
mod tree;

pub use decode::{decode, escape_attribute, escape_text};
pub use text::extract_text;
pub use tree::{BlockNode, Document, InlineNode, ListKind, TextFormat};
