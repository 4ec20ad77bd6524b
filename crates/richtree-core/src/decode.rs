//! Document tree rendering
//!
//! Converts a document tree back into minimal, well-formed HTML.
//! Blocks render in order, separated by a single newline. Rendering is
//! total; there is no failure path.

use crate::tree::{BlockNode, Document, InlineNode, ListKind, TextFormat};

/// Render a document tree to an HTML string
pub fn decode(doc: &Document) -> String {
    let mut output = String::with_capacity(4096);

    for block in &doc.children {
        let start = output.len();
        if start > 0 {
            output.push('\n');
        }

        let before = output.len();
        decode_block(block, &mut output);

        // An image without an address renders to nothing; drop the
        // separator we wrote for it.
        if output.len() == before && start > 0 {
            output.truncate(start);
        }
    }

    output
}

fn decode_block(block: &BlockNode, out: &mut String) {
    match block {
        BlockNode::Paragraph { children } => decode_wrapped("p", children, out),

        BlockNode::Heading { level, children } => {
            let level = (*level).clamp(1, 6);
            out.push_str("<h");
            out.push((b'0' + level) as char);
            out.push('>');
            decode_inlines(children, out);
            out.push_str("</h");
            out.push((b'0' + level) as char);
            out.push('>');
        }

        BlockNode::List { kind, children } => {
            let tag = match kind {
                ListKind::Bulleted => "ul",
                ListKind::Numbered => "ol",
            };
            out.push('<');
            out.push_str(tag);
            out.push('>');
            for child in children {
                decode_block(child, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }

        BlockNode::ListItem { children } => decode_wrapped("li", children, out),

        BlockNode::Quote { children } => decode_wrapped("blockquote", children, out),

        BlockNode::Table { html } => out.push_str(html),

        BlockNode::Image { url, alt } => {
            if let Some(url) = url {
                out.push_str("<img src=\"");
                push_escaped_attribute(url, out);
                out.push_str("\" alt=\"");
                push_escaped_attribute(alt, out);
                out.push_str("\">");
            }
        }
    }
}

fn decode_wrapped(tag: &str, children: &[InlineNode], out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    decode_inlines(children, out);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn decode_inlines(inlines: &[InlineNode], out: &mut String) {
    for inline in inlines {
        decode_inline(inline, out);
    }
}

fn decode_inline(inline: &InlineNode, out: &mut String) {
    match inline {
        InlineNode::Text { text, format } => {
            // Bold wraps the text first, italic goes on top.
            if format.contains(TextFormat::ITALIC) {
                out.push_str("<em>");
            }
            if format.contains(TextFormat::BOLD) {
                out.push_str("<strong>");
            }
            push_escaped_text(text, out);
            if format.contains(TextFormat::BOLD) {
                out.push_str("</strong>");
            }
            if format.contains(TextFormat::ITALIC) {
                out.push_str("</em>");
            }
        }

        InlineNode::Linebreak => out.push_str("<br>"),

        InlineNode::Link { url, rel, children } => {
            out.push_str("<a href=\"");
            push_escaped_attribute(url, out);
            out.push('"');
            if let Some(rel) = rel {
                out.push_str(" rel=\"");
                push_escaped_attribute(rel, out);
                out.push('"');
            }
            out.push('>');
            decode_inlines(children, out);
            out.push_str("</a>");
        }
    }
}

/// Escape text content for HTML output
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    push_escaped_text(s, &mut result);
    result
}

/// Escape an attribute value for HTML output
pub fn escape_attribute(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    push_escaped_attribute(s, &mut result);
    result
}

fn push_escaped_text(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn push_escaped_attribute(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
