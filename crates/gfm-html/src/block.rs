//! Block-level serializers.

use std::fmt::Write;

use crate::ast::{ListItem, Node};
use crate::escape::{push_escaped_attribute, push_escaped_content};
use crate::renderer::HtmlRenderer;

/// Clamp a heading level into `1..=6`.
fn clamp_heading_level(level: u8) -> u8 {
    let clamped = level.clamp(1, 6);
    if clamped != level {
        tracing::debug!(requested = level, clamped, "Heading level out of range");
    }
    clamped
}

/// The language class comes from the first word of the info string.
pub(crate) fn code_block(info: Option<&str>, code: &str, out: &mut String) {
    out.push_str("<pre><code");
    if let Some(lang) = info.and_then(|info| info.split_whitespace().next()) {
        out.push_str(r#" class="language-"#);
        push_escaped_attribute(out, lang);
        out.push('"');
    }
    out.push('>');
    push_escaped_content(out, code);
    out.push_str("\n</code></pre>");
}

impl HtmlRenderer<'_> {
    pub(crate) fn paragraph(&self, children: &[Node], out: &mut String) {
        out.push_str("<p>");
        self.write_nodes(children, out);
        out.push_str("</p>");
    }

    pub(crate) fn block_quote(&self, children: &[Node], out: &mut String) {
        out.push_str("<blockquote>");
        self.write_nodes(children, out);
        out.push_str("</blockquote>");
    }

    pub(crate) fn heading(&self, level: u8, children: &[Node], out: &mut String) {
        let digit = char::from(b'0' + clamp_heading_level(level));
        out.push_str("<h");
        out.push(digit);
        out.push('>');
        self.write_nodes(children, out);
        out.push_str("</h");
        out.push(digit);
        out.push('>');
    }

    /// An item holding a single paragraph renders the paragraph's inlines
    /// directly; anything else renders its blocks one per line.
    pub(crate) fn list_item(&self, item: &ListItem, out: &mut String) {
        out.push_str("<li>");
        match item.children.as_slice() {
            [Node::Paragraph { children }] => self.write_nodes(children, out),
            children => self.write_joined(children, "\n", out),
        }
        out.push_str("</li>");
    }

    pub(crate) fn list(&self, first_number: Option<u64>, items: &[ListItem], out: &mut String) {
        let end = if let Some(start) = first_number {
            write!(out, r#"<ol start="{start}">"#).unwrap();
            "</ol>"
        } else {
            out.push_str("<ul>");
            "</ul>"
        };

        out.push('\n');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.list_item(item, out);
        }
        out.push('\n');
        out.push_str(end);
        out.push('\n');
    }
}
