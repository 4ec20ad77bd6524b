//! # richtree
//!
//! Convert constrained HTML into a typed document tree and back.
//!
//! The encoder walks an HTML fragment and produces a [`Document`] of
//! block and inline nodes suitable for tree-based content storage; the
//! decoder renders the tree back into minimal HTML. Both directions
//! are total: malformed or unknown markup degrades gracefully instead
//! of failing.
//!
//! ## Example
//!
//! ```rust
//! use richtree::{decode, encode};
//!
//! let tree = encode("<h1>Hello <em>World</em></h1>");
//! assert_eq!(decode(&tree), "<h1>Hello <em>World</em></h1>");
//! ```
//!
//! ## Example (node-based)
//!
//! The encoder is parser agnostic. When a DOM is already available
//! from another source, build [`DomNode`] values directly and skip the
//! bundled parser:
//!
//! ```rust
//! use richtree::{encode_nodes, DomNode};
//!
//! let mut p = DomNode::element("p");
//! p.add_child(DomNode::text("Hello World"));
//!
//! let tree = encode_nodes(&[p]);
//! assert_eq!(tree.children.len(), 1);
//! ```

pub mod dom;
pub mod encode;
#[cfg(feature = "html")]
pub mod html;
pub mod validate;

pub use dom::DomNode;
#[cfg(feature = "html")]
pub use encode::encode;
pub use encode::encode_nodes;
#[cfg(feature = "html")]
pub use html::parse_fragment;
pub use richtree_core::{
    decode, extract_text, BlockNode, Document, InlineNode, ListKind, TextFormat,
};
#[cfg(feature = "html")]
pub use validate::validate_fragment;
pub use validate::{validate_nodes, ALLOWED_TAGS};

/// Error type for richtree operations
#[derive(Debug, thiserror::Error)]
pub enum RichtreeError {
    #[error("unsupported tag: <{0}>")]
    UnsupportedTag(String),
}

pub type Result<T> = std::result::Result<T, RichtreeError>;
