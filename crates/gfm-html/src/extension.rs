//! Self-rendering nodes.
//!
//! A [`RenderAsHtml`] implementation wrapped in [`Node::Extension`](crate::Node::Extension)
//! takes over its own serialization, so new block or inline kinds can be
//! plugged in without touching the renderer.
//!
//! # Example
//!
//! ```
//! use gfm_html::{Extension, HtmlRenderer, Node, RenderAsHtml, RenderContext};
//!
//! #[derive(Debug)]
//! struct Badge(String);
//!
//! impl RenderAsHtml for Badge {
//!     fn render_as_html(&self, _context: &RenderContext, _renderer: &HtmlRenderer<'_>, out: &mut String) {
//!         out.push_str(r#"<span class="badge">"#);
//!         gfm_html::push_escaped_content(out, &self.0);
//!         out.push_str("</span>");
//!     }
//! }
//!
//! let context = RenderContext::new();
//! let node = Node::Extension(Extension::new(Badge("new".to_owned())));
//! assert_eq!(HtmlRenderer::new(&context).render(&node), r#"<span class="badge">new</span>"#);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::context::RenderContext;
use crate::renderer::HtmlRenderer;

/// Capability of a node to render itself as HTML.
pub trait RenderAsHtml: fmt::Debug + Send + Sync {
    /// Append this node's HTML to `out`.
    ///
    /// `renderer` renders nested [`Node`](crate::Node)s with the built-in rules.
    fn render_as_html(&self, context: &RenderContext, renderer: &HtmlRenderer<'_>, out: &mut String);

    /// Text content with markup removed, used when the node ends up in an
    /// image description.
    fn plain_text(&self) -> String {
        String::new()
    }

    /// Whether the node is text-level markup.
    fn is_inline(&self) -> bool {
        false
    }
}

/// Shared handle to a self-rendering node.
///
/// Two handles are equal when they point to the same node.
#[derive(Clone)]
pub struct Extension(Arc<dyn RenderAsHtml>);

impl Extension {
    #[must_use]
    pub fn new(node: impl RenderAsHtml + 'static) -> Self {
        Self(Arc::new(node))
    }

    pub(crate) fn render(&self, context: &RenderContext, renderer: &HtmlRenderer<'_>, out: &mut String) {
        self.0.render_as_html(context, renderer, out);
    }

    pub(crate) fn plain_text(&self) -> String {
        self.0.plain_text()
    }

    pub(crate) fn is_inline(&self) -> bool {
        self.0.is_inline()
    }
}

impl From<Arc<dyn RenderAsHtml>> for Extension {
    fn from(node: Arc<dyn RenderAsHtml>) -> Self {
        Self(node)
    }
}

impl fmt::Debug for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Extension").field(&self.0).finish()
    }
}

impl PartialEq for Extension {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
