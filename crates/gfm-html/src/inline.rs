//! Inline-level serializers.

use crate::ast::Node;
use crate::escape::{push_escaped_attribute, push_escaped_content};
use crate::renderer::HtmlRenderer;

/// Append ` title="..."` when a title is present.
fn push_title(title: Option<&str>, out: &mut String) {
    if let Some(title) = title {
        out.push_str(r#" title=""#);
        push_escaped_attribute(out, title);
        out.push('"');
    }
}

pub(crate) fn text(text: &str, out: &mut String) {
    push_escaped_content(out, text);
}

pub(crate) fn code_span(code: &str, out: &mut String) {
    out.push_str("<code>");
    push_escaped_content(out, code);
    out.push_str("</code>");
}

pub(crate) fn autolink(destination: &str, text: &str, out: &mut String) {
    out.push_str(r#"<a href=""#);
    push_escaped_attribute(out, destination);
    out.push_str(r#"">"#);
    push_escaped_content(out, text);
    out.push_str("</a>");
}

/// Unlike links, the description is flattened to plain text for `alt`.
pub(crate) fn image(source: &str, title: Option<&str>, description: &[Node], out: &mut String) {
    let mut alt = String::new();
    for node in description {
        node.write_plain_text(&mut alt);
    }

    out.push_str(r#"<img src=""#);
    push_escaped_attribute(out, source);
    out.push('"');
    if !alt.is_empty() {
        out.push_str(r#" alt=""#);
        push_escaped_attribute(out, &alt);
        out.push('"');
    }
    push_title(title, out);
    out.push_str(" />");
}

impl HtmlRenderer<'_> {
    pub(crate) fn emphasis(&self, strong: bool, children: &[Node], out: &mut String) {
        let (open, close) = if strong {
            ("<strong>", "</strong>")
        } else {
            ("<em>", "</em>")
        };
        out.push_str(open);
        self.write_nodes(children, out);
        out.push_str(close);
    }

    pub(crate) fn strikethrough(&self, children: &[Node], out: &mut String) {
        out.push_str("<del>");
        self.write_nodes(children, out);
        out.push_str("</del>");
    }

    pub(crate) fn link(
        &self,
        destination: &str,
        title: Option<&str>,
        children: &[Node],
        out: &mut String,
    ) {
        out.push_str(r#"<a href=""#);
        push_escaped_attribute(out, destination);
        out.push('"');
        push_title(title, out);
        out.push('>');
        self.write_nodes(children, out);
        out.push_str("</a>");
    }
}
