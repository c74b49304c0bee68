//! Tree-walking HTML renderer.
//!
//! [`HtmlRenderer`] maps every [`Node`] variant to its HTML serialization.
//! Children are visited depth-first, left to right, and appended to a single
//! output buffer. Block rules live in `block.rs` and `table.rs`, inline rules
//! in `inline.rs`.

use crate::ast::{Document, Node};
use crate::context::RenderContext;
use crate::{block, inline};

/// HTML renderer over a borrowed [`RenderContext`].
///
/// Rendering never mutates the tree or the context, so one renderer (or many)
/// can be used from several threads at once.
///
/// # Example
///
/// ```
/// use gfm_html::{HtmlRenderer, Node, RenderContext};
///
/// let context = RenderContext::new();
/// let heading = Node::Heading { level: 2, children: vec![Node::text("Hi")] };
/// assert_eq!(HtmlRenderer::new(&context).render(&heading), "<h2>Hi</h2>");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct HtmlRenderer<'ctx> {
    context: &'ctx RenderContext,
}

impl<'ctx> HtmlRenderer<'ctx> {
    #[must_use]
    pub fn new(context: &'ctx RenderContext) -> Self {
        Self { context }
    }

    /// Context forwarded to self-rendering nodes.
    #[must_use]
    pub fn context(&self) -> &'ctx RenderContext {
        self.context
    }

    /// Render a single node.
    #[must_use]
    pub fn render(&self, node: &Node) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out);
        out
    }

    /// Render a sequence of nodes, concatenated without separator.
    #[must_use]
    pub fn render_nodes(&self, nodes: &[Node]) -> String {
        let mut out = String::new();
        self.write_nodes(nodes, &mut out);
        out
    }

    /// Render a whole document.
    #[must_use]
    pub fn render_document(&self, document: &Document) -> String {
        let mut out = String::with_capacity(4096);
        self.write_nodes(&document.children, &mut out);
        tracing::trace!(
            blocks = document.children.len(),
            bytes = out.len(),
            "Rendered document"
        );
        out
    }

    /// Append a sequence of nodes to `out`.
    pub fn write_nodes(&self, nodes: &[Node], out: &mut String) {
        for node in nodes {
            self.write_node(node, out);
        }
    }

    /// Append nodes to `out` with `separator` between consecutive nodes.
    pub(crate) fn write_joined(&self, nodes: &[Node], separator: &str, out: &mut String) {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            self.write_node(node, out);
        }
    }

    /// Append the HTML of `node` to `out`.
    pub fn write_node(&self, node: &Node, out: &mut String) {
        match node {
            Node::Extension(extension) => extension.render(self.context, self, out),

            Node::BlankLine => out.push('\n'),
            Node::Paragraph { children } => self.paragraph(children, out),
            Node::BlockQuote { children } => self.block_quote(children, out),
            Node::CodeBlock { info, code } => block::code_block(info.as_deref(), code, out),
            Node::Heading { level, children } => self.heading(*level, children, out),
            Node::HtmlBlock { code } => out.push_str(code),
            Node::LinkReferenceDefinition { .. } => {}
            Node::List {
                first_number,
                items,
            } => self.list(*first_number, items, out),
            Node::ListItem(item) => self.list_item(item, out),
            Node::ThematicBreak => out.push_str("<hr />\n"),
            Node::Table {
                alignments,
                header,
                rows,
            } => self.table(alignments, header, rows, out),

            Node::Text(text) => inline::text(text, out),
            Node::Emphasis { strong, children } => self.emphasis(*strong, children, out),
            Node::CodeSpan { code } => inline::code_span(code, out),
            Node::HardBreak => out.push_str("<br />\n"),
            Node::SoftBreak => out.push('\n'),
            Node::Strikethrough { children } => self.strikethrough(children, out),
            Node::RawHtml(html) => out.push_str(html),
            Node::AutoLink { destination, text } => inline::autolink(destination, text, out),
            Node::Link {
                destination,
                title,
                children,
            } => self.link(destination, title.as_deref(), children, out),
            Node::Image {
                source,
                title,
                description,
            } => inline::image(source, title.as_deref(), description, out),
        }
    }
}
