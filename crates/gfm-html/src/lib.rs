//! HTML renderer for GitHub Flavored Markdown document trees.
//!
//! Markdown is parsed by pulldown-cmark and assembled into a [`Document`] of
//! [`Node`]s by [`parse_document`]. [`HtmlRenderer`] then serializes the tree
//! to an HTML fragment.
//!
//! # Architecture
//!
//! - [`Node`] is a closed enum of block and inline constructs. The renderer
//!   matches on it exhaustively, so a new variant without a serializer is a
//!   compile error.
//! - [`Node::Extension`] wraps a [`RenderAsHtml`] implementation for nodes
//!   that render themselves. The renderer hands such nodes the active
//!   [`RenderContext`] and itself, so they can render nested nodes.
//! - Text and attribute values are escaped by the serializers; raw HTML nodes
//!   are emitted verbatim.
//!
//! # Example
//!
//! ```
//! use gfm_config::Config;
//! use gfm_html::markdown_to_html;
//!
//! let html = markdown_to_html("# Hello\n\n**Bold** & text", &Config::default()).unwrap();
//! assert_eq!(html, "<h1>Hello</h1>\n<p><strong>Bold</strong> &amp; text</p>");
//! ```

mod ast;
mod block;
mod builder;
mod context;
mod escape;
mod extension;
mod inline;
mod renderer;
mod table;
mod util;

pub use ast::{Alignment, Cell, Document, ListItem, Node};
pub use builder::{BuildError, TreeBuilder, parse_document, parser_options};
pub use context::RenderContext;
pub use escape::{escape_attribute, escape_content, push_escaped_attribute, push_escaped_content};
pub use extension::{Extension, RenderAsHtml};
pub use renderer::HtmlRenderer;

use gfm_config::Config;

/// Parse `markdown` with the options in `config` and render it to HTML.
///
/// The config's `[context]` table becomes the [`RenderContext`] of the pass.
///
/// # Errors
///
/// Returns [`BuildError`] if the parser produces an unbalanced event stream.
pub fn markdown_to_html(markdown: &str, config: &Config) -> Result<String, BuildError> {
    let document = parse_document(markdown, &config.markdown)?;
    let context = RenderContext::from(config);
    Ok(HtmlRenderer::new(&context).render_document(&document))
}
