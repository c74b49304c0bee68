//! Document tree consumed by the renderer.
//!
//! [`Node`] is a closed set of block and inline constructs. Fields are public
//! so trees can be assembled directly or by [`parse_document`](crate::parse_document).
//! The renderer only reads them.

use crate::extension::Extension;

/// Inline contents of a single table cell.
pub type Cell = Vec<Node>;

/// Column alignment of a table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Alignment {
    Left,
    Center,
    Right,
    #[default]
    Unspecified,
}

impl Alignment {
    /// Value of the HTML `align` attribute, `None` when unspecified.
    #[must_use]
    pub fn as_attr(self) -> Option<&'static str> {
        match self {
            Self::Left => Some("left"),
            Self::Center => Some("center"),
            Self::Right => Some("right"),
            Self::Unspecified => None,
        }
    }
}

/// Root of a parsed document.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    /// Top-level blocks in source order.
    pub children: Vec<Node>,
}

impl Document {
    #[must_use]
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }
}

/// A single list item.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListItem {
    /// Block children of the item.
    pub children: Vec<Node>,
}

impl ListItem {
    #[must_use]
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }
}

/// A node of the document tree.
///
/// Block and inline constructs share one type; which variants may appear where
/// is up to whoever builds the tree.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Node {
    // Blocks
    /// An empty source line between blocks.
    BlankLine,
    Paragraph {
        children: Vec<Node>,
    },
    BlockQuote {
        children: Vec<Node>,
    },
    /// Fenced or indented code block.
    CodeBlock {
        /// Text after the opening fence (`rust ignore`), if any.
        info: Option<String>,
        code: String,
    },
    Heading {
        /// Heading level, 1 through 6.
        level: u8,
        children: Vec<Node>,
    },
    /// Raw HTML block, emitted verbatim.
    HtmlBlock {
        code: String,
    },
    /// `[label]: destination "title"`. Produces no output.
    LinkReferenceDefinition {
        label: String,
        destination: String,
        title: Option<String>,
    },
    /// Ordered list when `first_number` is set, bullet list otherwise.
    List {
        first_number: Option<u64>,
        items: Vec<ListItem>,
    },
    ListItem(ListItem),
    ThematicBreak,
    Table {
        /// One entry per column.
        alignments: Vec<Alignment>,
        header: Vec<Cell>,
        rows: Vec<Vec<Cell>>,
    },

    // Inlines
    /// Plain text, escaped on output.
    Text(String),
    Emphasis {
        /// `**strong**` rather than `*em*`.
        strong: bool,
        children: Vec<Node>,
    },
    CodeSpan {
        code: String,
    },
    HardBreak,
    SoftBreak,
    Strikethrough {
        children: Vec<Node>,
    },
    /// Inline raw HTML, emitted verbatim.
    RawHtml(String),
    /// `<https://example.com>` style link.
    AutoLink {
        destination: String,
        text: String,
    },
    Link {
        destination: String,
        title: Option<String>,
        children: Vec<Node>,
    },
    Image {
        source: String,
        title: Option<String>,
        /// Alt text inlines; flattened to plain text on output.
        description: Vec<Node>,
    },

    /// A node that renders itself.
    #[cfg_attr(feature = "serde", serde(skip))]
    Extension(Extension),
}

impl Node {
    /// Plain text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Paragraph with the given inline children.
    #[must_use]
    pub fn paragraph(children: Vec<Node>) -> Self {
        Self::Paragraph { children }
    }

    /// Whether this node belongs inside a block (text-level markup).
    #[must_use]
    pub fn is_inline(&self) -> bool {
        if let Self::Extension(extension) = self {
            return extension.is_inline();
        }
        matches!(
            self,
            Self::Text(_)
                | Self::Emphasis { .. }
                | Self::CodeSpan { .. }
                | Self::HardBreak
                | Self::SoftBreak
                | Self::Strikethrough { .. }
                | Self::RawHtml(_)
                | Self::AutoLink { .. }
                | Self::Link { .. }
                | Self::Image { .. }
        )
    }

    /// Content of this node with all markup removed.
    ///
    /// Used for image alt text.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain_text(&mut out);
        out
    }

    /// Append the plain-text content of this node to `out`.
    pub fn write_plain_text(&self, out: &mut String) {
        match self {
            Self::Text(text) | Self::RawHtml(text) => out.push_str(text),
            Self::CodeSpan { code } | Self::CodeBlock { code, .. } => out.push_str(code),
            Self::AutoLink { text, .. } => out.push_str(text),
            Self::HardBreak | Self::SoftBreak => out.push('\n'),
            Self::Paragraph { children }
            | Self::BlockQuote { children }
            | Self::Heading { children, .. }
            | Self::Emphasis { children, .. }
            | Self::Strikethrough { children }
            | Self::Link { children, .. }
            | Self::Image {
                description: children,
                ..
            }
            | Self::ListItem(ListItem { children }) => write_plain_text_all(children, out),
            Self::List { items, .. } => {
                for item in items {
                    write_plain_text_all(&item.children, out);
                }
            }
            Self::Extension(extension) => out.push_str(&extension.plain_text()),
            Self::BlankLine
            | Self::HtmlBlock { .. }
            | Self::LinkReferenceDefinition { .. }
            | Self::ThematicBreak
            | Self::Table { .. } => {}
        }
    }
}

fn write_plain_text_all(nodes: &[Node], out: &mut String) {
    for node in nodes {
        node.write_plain_text(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_alignment_attr() {
        assert_eq!(Alignment::Left.as_attr(), Some("left"));
        assert_eq!(Alignment::Center.as_attr(), Some("center"));
        assert_eq!(Alignment::Right.as_attr(), Some("right"));
        assert_eq!(Alignment::Unspecified.as_attr(), None);
        assert_eq!(Alignment::default(), Alignment::Unspecified);
    }

    #[test]
    fn test_plain_text_strips_markup() {
        let node = Node::Image {
            source: "a.png".to_owned(),
            title: None,
            description: vec![
                Node::text("a "),
                Node::Emphasis {
                    strong: true,
                    children: vec![Node::text("bold")],
                },
                Node::text(" "),
                Node::CodeSpan {
                    code: "x<y".to_owned(),
                },
            ],
        };
        assert_eq!(node.plain_text(), "a bold x<y");
    }

    #[test]
    fn test_plain_text_nested_link() {
        let node = Node::Link {
            destination: "/".to_owned(),
            title: Some("ignored".to_owned()),
            children: vec![
                Node::text("one"),
                Node::SoftBreak,
                Node::Strikethrough {
                    children: vec![Node::text("two")],
                },
            ],
        };
        assert_eq!(node.plain_text(), "one\ntwo");
    }

    #[test]
    fn test_plain_text_of_structural_nodes_is_empty() {
        assert_eq!(Node::ThematicBreak.plain_text(), "");
        assert_eq!(Node::BlankLine.plain_text(), "");
        assert_eq!(
            Node::LinkReferenceDefinition {
                label: "a".to_owned(),
                destination: "/a".to_owned(),
                title: None,
            }
            .plain_text(),
            ""
        );
    }

    #[test]
    fn test_is_inline() {
        assert!(Node::text("x").is_inline());
        assert!(Node::SoftBreak.is_inline());
        assert!(!Node::paragraph(vec![]).is_inline());
        assert!(!Node::ThematicBreak.is_inline());
        assert!(!Node::ListItem(ListItem::default()).is_inline());
    }
}
