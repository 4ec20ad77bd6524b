//! HTML to document tree conversion
//!
//! Walks a DOM node list and classifies children into block nodes,
//! accumulating stray inline content into implicit paragraphs. The
//! conversion is total: unknown containers are flattened, unknown
//! inline tags pass their children through, nothing raises.

use smallvec::SmallVec;

use richtree_core::{BlockNode, Document, InlineNode, ListKind, TextFormat};

use crate::dom::DomNode;
#[cfg(feature = "html")]
use crate::html::parse_fragment;

/// Most inline runs hold few nodes - avoid heap allocation.
type InlineBuf = SmallVec<[InlineNode; 4]>;

/// Encode an HTML fragment into a document tree.
///
/// # Example
///
/// ```rust
/// use richtree::{decode, encode};
///
/// let tree = encode("<h2>Deals</h2><p>Save <strong>big</strong></p>");
/// assert_eq!(tree.children.len(), 2);
/// assert_eq!(
///     decode(&tree),
///     "<h2>Deals</h2>\n<p>Save <strong>big</strong></p>"
/// );
/// ```
#[cfg(feature = "html")]
pub fn encode(html: &str) -> Document {
    encode_nodes(&parse_fragment(html))
}

/// Encode parsed DOM nodes into a document tree.
///
/// An empty input produces a document holding a single empty
/// paragraph, so downstream stages always see at least one block.
pub fn encode_nodes(nodes: &[DomNode]) -> Document {
    let mut blocks = convert_blocks(nodes);

    if blocks.is_empty() {
        blocks.push(BlockNode::Paragraph {
            children: vec![InlineNode::empty_text()],
        });
    }

    Document::new(blocks)
}

/// Classify a container's children into blocks in document order
fn convert_blocks(nodes: &[DomNode]) -> Vec<BlockNode> {
    let mut blocks = Vec::new();
    let mut pending = InlineBuf::new();

    for node in nodes {
        match node {
            DomNode::Text(text) => {
                // Whitespace between sibling blocks is layout, not
                // content. Inside a running inline sequence it
                // separates words and has to stay.
                if !text.trim().is_empty() {
                    convert_inline_into(node, TextFormat::empty(), false, &mut pending);
                } else if !pending.is_empty() {
                    pending.push(InlineNode::text(text.clone()));
                }
            }

            DomNode::Element { tag, children, .. } => match tag.as_str() {
                "p" => {
                    flush_pending(&mut pending, &mut blocks);
                    blocks.push(BlockNode::Paragraph {
                        children: inline_children(children),
                    });
                }

                "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                    flush_pending(&mut pending, &mut blocks);
                    blocks.push(BlockNode::Heading {
                        level: heading_level(tag),
                        children: inline_children(children),
                    });
                }

                "ul" => {
                    flush_pending(&mut pending, &mut blocks);
                    blocks.push(convert_list(children, ListKind::Bulleted));
                }

                "ol" => {
                    flush_pending(&mut pending, &mut blocks);
                    blocks.push(convert_list(children, ListKind::Numbered));
                }

                "blockquote" => {
                    flush_pending(&mut pending, &mut blocks);
                    blocks.push(BlockNode::Quote {
                        children: inline_children(children),
                    });
                }

                "table" => {
                    flush_pending(&mut pending, &mut blocks);
                    blocks.push(BlockNode::Table {
                        html: node.outer_html(),
                    });
                }

                // Wrapper elements are flattened; their children are
                // classified as if they sat in the parent directly.
                "div" | "section" | "article" | "main" | "aside" | "header" | "footer"
                | "nav" | "figure" | "figcaption" | "address" | "form" | "fieldset"
                | "pre" => {
                    flush_pending(&mut pending, &mut blocks);
                    blocks.extend(convert_blocks(children));
                }

                "script" | "style" | "noscript" | "template" => {}

                _ => convert_inline_into(node, TextFormat::empty(), false, &mut pending),
            },
        }
    }

    flush_pending(&mut pending, &mut blocks);
    blocks
}

/// Flush accumulated inline content into an implicit paragraph
fn flush_pending(pending: &mut InlineBuf, blocks: &mut Vec<BlockNode>) {
    trim_trailing_blank(pending);
    if !pending.is_empty() {
        blocks.push(BlockNode::Paragraph {
            children: pending.drain(..).collect(),
        });
    }
}

fn trim_trailing_blank(buf: &mut InlineBuf) {
    while buf
        .last()
        .is_some_and(|node| matches!(node, InlineNode::Text { text, .. } if text.trim().is_empty()))
    {
        buf.pop();
    }
}

/// Convert a block's children to inline nodes, never returning an
/// empty list
fn inline_children(children: &[DomNode]) -> Vec<InlineNode> {
    let mut inlines = InlineBuf::new();
    convert_inlines_into(children, TextFormat::empty(), false, &mut inlines);

    if inlines.is_empty() {
        return vec![InlineNode::empty_text()];
    }
    inlines.into_vec()
}

fn convert_inlines_into(nodes: &[DomNode], format: TextFormat, in_link: bool, out: &mut InlineBuf) {
    for node in nodes {
        convert_inline_into(node, format, in_link, out);
    }
}

/// Convert one node in inline position, carrying the inherited
/// formatting mask
fn convert_inline_into(node: &DomNode, format: TextFormat, in_link: bool, out: &mut InlineBuf) {
    match node {
        DomNode::Text(text) => {
            if !text.is_empty() {
                out.push(InlineNode::formatted(text.clone(), format));
            }
        }

        DomNode::Element { tag, children, .. } => match tag.as_str() {
            "strong" | "b" => {
                convert_inlines_into(children, format | TextFormat::BOLD, in_link, out)
            }

            "em" | "i" => {
                convert_inlines_into(children, format | TextFormat::ITALIC, in_link, out)
            }

            "br" => out.push(InlineNode::Linebreak),

            "a" => match node.attr("href") {
                // Links never nest; an anchor without a target is just
                // its content.
                Some(href) if !href.is_empty() && !in_link => {
                    let mut inner = InlineBuf::new();
                    convert_inlines_into(children, format, true, &mut inner);
                    if inlines_are_blank(&inner) {
                        out.extend(inner);
                    } else {
                        out.push(InlineNode::Link {
                            url: href.to_string(),
                            rel: node.attr("rel").map(str::to_string),
                            children: inner.into_vec(),
                        });
                    }
                }
                _ => convert_inlines_into(children, format, in_link, out),
            },

            "script" | "style" | "noscript" | "template" => {}

            // Unknown inline tags are transparent.
            _ => convert_inlines_into(children, format, in_link, out),
        },
    }
}

fn inlines_are_blank(inlines: &[InlineNode]) -> bool {
    inlines.iter().all(|inline| match inline {
        InlineNode::Text { text, .. } => text.trim().is_empty(),
        InlineNode::Linebreak => false,
        InlineNode::Link { .. } => false,
    })
}

fn heading_level(tag: &str) -> u8 {
    tag.chars()
        .nth(1)
        .and_then(|c| c.to_digit(10))
        .unwrap_or(1) as u8
}

/// Convert the children of a `ul`/`ol` element.
///
/// A list nested inside an item is pulled out and appended right after
/// that item, so nesting shows up as sibling structure. A list parsed
/// as a direct child (which is what the sibling structure itself parses
/// back to) is converted in place.
fn convert_list(children: &[DomNode], kind: ListKind) -> BlockNode {
    let mut items = Vec::new();

    for child in children {
        match child {
            DomNode::Element {
                tag,
                children: item_children,
                ..
            } if tag == "li" => {
                let mut content = InlineBuf::new();
                let mut nested = Vec::new();

                for node in item_children {
                    match node {
                        DomNode::Element { tag, children, .. } if tag == "ul" => {
                            nested.push(convert_list(children, ListKind::Bulleted));
                        }
                        DomNode::Element { tag, children, .. } if tag == "ol" => {
                            nested.push(convert_list(children, ListKind::Numbered));
                        }
                        _ => convert_inline_into(node, TextFormat::empty(), false, &mut content),
                    }
                }

                trim_trailing_blank(&mut content);
                items.push(BlockNode::ListItem {
                    children: if content.is_empty() {
                        vec![InlineNode::empty_text()]
                    } else {
                        content.into_vec()
                    },
                });
                items.extend(nested);
            }

            DomNode::Element { tag, children, .. } if tag == "ul" => {
                items.push(convert_list(children, ListKind::Bulleted));
            }

            DomNode::Element { tag, children, .. } if tag == "ol" => {
                items.push(convert_list(children, ListKind::Numbered));
            }

            _ => {}
        }
    }

    // A list always carries at least one item.
    if !items
        .iter()
        .any(|item| matches!(item, BlockNode::ListItem { .. }))
    {
        items.insert(
            0,
            BlockNode::ListItem {
                children: vec![InlineNode::empty_text()],
            },
        );
    }

    BlockNode::List {
        kind,
        children: items,
    }
}
