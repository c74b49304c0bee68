//! Builds a [`Document`] from pulldown-cmark events.
//!
//! pulldown-cmark does all Markdown parsing; [`TreeBuilder`] only assembles its
//! flat start/end event stream into nested [`Node`]s. A few shapes are
//! normalized on the way:
//!
//! - Adjacent text events merge into one [`Node::Text`].
//! - Inline runs directly inside a list item (tight lists) are wrapped in a
//!   paragraph, so tight and loose items look the same.
//! - Whitespace-only lines between top-level blocks become [`Node::BlankLine`].
//! - Link reference definitions become [`Node::LinkReferenceDefinition`].

use std::collections::VecDeque;
use std::mem;
use std::ops::Range;

use gfm_config::MarkdownConfig;
use pulldown_cmark::{CodeBlockKind, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd};

use crate::ast::{Alignment, Cell, Document, ListItem, Node};
use crate::util::heading_level_to_num;

/// Error assembling a tree from an event stream.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BuildError {
    /// An end event arrived while no element was open.
    #[error("Unexpected end of {tag} at byte {offset}")]
    UnexpectedEnd {
        /// The unmatched end tag.
        tag: String,
        /// Source offset of the event.
        offset: usize,
    },
    /// An end event closed a different element than the innermost open one.
    #[error("Mismatched end of {found} at byte {offset}, expected end of {expected}")]
    MismatchedEnd {
        /// End tag of the innermost open element.
        expected: String,
        /// End tag that arrived.
        found: String,
        /// Source offset of the event.
        offset: usize,
    },
    /// The event stream ended with elements still open.
    #[error("{open} element(s) left open at end of input")]
    Unclosed {
        /// Number of open elements.
        open: usize,
    },
}

/// Get parser options for the given configuration.
#[must_use]
pub fn parser_options(config: &MarkdownConfig) -> Options {
    let mut options = Options::empty();
    if config.tables {
        options.insert(Options::ENABLE_TABLES);
    }
    if config.strikethrough {
        options.insert(Options::ENABLE_STRIKETHROUGH);
    }
    if config.smart_punctuation {
        options.insert(Options::ENABLE_SMART_PUNCTUATION);
    }
    options
}

/// Parse `markdown` into a [`Document`].
///
/// # Errors
///
/// Returns [`BuildError`] if the parser produces an unbalanced event stream.
///
/// # Example
///
/// ```
/// use gfm_config::MarkdownConfig;
/// use gfm_html::{HtmlRenderer, RenderContext, parse_document};
///
/// let document = parse_document("- one\n- two", &MarkdownConfig::default()).unwrap();
/// let html = HtmlRenderer::new(&RenderContext::new()).render_document(&document);
/// assert_eq!(html, "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n");
/// ```
pub fn parse_document(markdown: &str, config: &MarkdownConfig) -> Result<Document, BuildError> {
    let parser = Parser::new_ext(markdown, parser_options(config));

    let mut definitions: Vec<(usize, Node)> = parser
        .reference_definitions()
        .iter()
        .map(|(label, def)| {
            let node = Node::LinkReferenceDefinition {
                label: label.to_owned(),
                destination: def.dest.to_string(),
                title: def.title.as_ref().map(ToString::to_string),
            };
            (def.span.start, node)
        })
        .collect();
    definitions.sort_by_key(|(start, _)| *start);

    let mut builder = TreeBuilder::new(markdown);
    builder.definitions = definitions.into();
    for (event, range) in parser.into_offset_iter() {
        builder.push(event, range)?;
    }
    builder.finish()
}

/// What an open element turns into once its end event arrives.
#[derive(Debug)]
enum ElementKind {
    Paragraph,
    Heading(u8),
    BlockQuote,
    Item,
    Cell,
    Emphasis { strong: bool },
    Strikethrough,
    Link { destination: String, title: Option<String> },
    AutoLink { destination: String },
    Image { source: String, title: Option<String> },
}

#[derive(Debug)]
enum Content {
    Element { kind: ElementKind, children: Vec<Node> },
    CodeBlock { info: Option<String>, code: String },
    HtmlBlock { code: String },
    List { first_number: Option<u64>, items: Vec<ListItem> },
    Table { alignments: Vec<Alignment>, header: Vec<Cell>, rows: Vec<Vec<Cell>> },
    Row { cells: Vec<Cell> },
    /// Unsupported container; children move to the parent on close.
    Transparent { children: Vec<Node> },
    /// Unsupported container whose content is dropped.
    Discard,
}

#[derive(Debug)]
struct Frame {
    end: TagEnd,
    content: Content,
}

/// Assembles pulldown-cmark offset events into a [`Document`].
///
/// Feed events from [`Parser::into_offset_iter`] with [`push`](Self::push),
/// then call [`finish`](Self::finish).
#[derive(Debug)]
pub struct TreeBuilder<'src> {
    source: &'src str,
    stack: Vec<Frame>,
    nodes: Vec<Node>,
    definitions: VecDeque<(usize, Node)>,
    /// End offset of the last finished top-level block.
    last_end: usize,
}

impl<'src> TreeBuilder<'src> {
    /// Create a builder for events parsed from `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            stack: Vec::new(),
            nodes: Vec::new(),
            definitions: VecDeque::new(),
            last_end: 0,
        }
    }

    /// Process one event and its source range.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] for end events that don't close the innermost
    /// open element.
    pub fn push(&mut self, event: Event<'_>, range: Range<usize>) -> Result<(), BuildError> {
        let Range { start, end } = range;

        if self.stack.is_empty() && !matches!(event, Event::End(_)) {
            self.begin_block(start);
        }

        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag, start)?,
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.push_node(Node::CodeSpan {
                code: code.into_string(),
            }),
            Event::Html(html) => self.html(&html),
            Event::InlineHtml(html) => self.push_node(Node::RawHtml(html.into_string())),
            Event::SoftBreak => self.push_node(Node::SoftBreak),
            Event::HardBreak => self.push_node(Node::HardBreak),
            Event::Rule => self.push_node(Node::ThematicBreak),
            other => tracing::debug!(event = ?other, "Dropping unsupported event"),
        }

        if self.stack.is_empty() {
            self.last_end = end;
        }
        Ok(())
    }

    /// Finish building and return the document.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Unclosed`] if elements are still open.
    pub fn finish(mut self) -> Result<Document, BuildError> {
        if !self.stack.is_empty() {
            return Err(BuildError::Unclosed {
                open: self.stack.len(),
            });
        }

        self.begin_block(self.source.len());
        tracing::debug!(blocks = self.nodes.len(), "Built document");
        Ok(Document::new(self.nodes))
    }

    /// Emit definitions and blank lines that precede a top-level block at `start`.
    fn begin_block(&mut self, start: usize) {
        while self
            .definitions
            .front()
            .is_some_and(|(def_start, _)| *def_start < start)
        {
            if let Some((_, definition)) = self.definitions.pop_front() {
                self.nodes.push(definition);
            }
        }

        let blank_lines = count_blank_lines(self.source, self.last_end, start);
        self.nodes
            .extend(std::iter::repeat_n(Node::BlankLine, blank_lines));
    }

    fn start(&mut self, tag: Tag<'_>) {
        let end = tag.to_end();
        let content = match tag {
            Tag::Paragraph => element(ElementKind::Paragraph),
            Tag::Heading { level, .. } => element(ElementKind::Heading(heading_level_to_num(level))),
            Tag::BlockQuote(_) => element(ElementKind::BlockQuote),
            Tag::CodeBlock(kind) => Content::CodeBlock {
                info: match kind {
                    CodeBlockKind::Fenced(info) => non_empty(info),
                    CodeBlockKind::Indented => None,
                },
                code: String::new(),
            },
            Tag::HtmlBlock => Content::HtmlBlock {
                code: String::new(),
            },
            Tag::List(first_number) => Content::List {
                first_number,
                items: Vec::new(),
            },
            Tag::Item => element(ElementKind::Item),
            Tag::Table(alignments) => Content::Table {
                alignments: alignments.into_iter().map(convert_alignment).collect(),
                header: Vec::new(),
                rows: Vec::new(),
            },
            Tag::TableHead | Tag::TableRow => Content::Row { cells: Vec::new() },
            Tag::TableCell => element(ElementKind::Cell),
            Tag::Emphasis => element(ElementKind::Emphasis { strong: false }),
            Tag::Strong => element(ElementKind::Emphasis { strong: true }),
            Tag::Strikethrough => element(ElementKind::Strikethrough),
            Tag::Link {
                link_type,
                dest_url,
                title,
                ..
            } => element(match link_type {
                LinkType::Autolink => ElementKind::AutoLink {
                    destination: dest_url.into_string(),
                },
                LinkType::Email => ElementKind::AutoLink {
                    destination: format!("mailto:{dest_url}"),
                },
                _ => ElementKind::Link {
                    destination: dest_url.into_string(),
                    title: non_empty(title),
                },
            }),
            Tag::Image {
                dest_url, title, ..
            } => element(ElementKind::Image {
                source: dest_url.into_string(),
                title: non_empty(title),
            }),
            Tag::MetadataBlock(_) => Content::Discard,
            other => {
                tracing::debug!(tag = ?other, "Unwrapping unsupported element");
                Content::Transparent {
                    children: Vec::new(),
                }
            }
        };
        self.stack.push(Frame { end, content });
    }

    fn end(&mut self, tag: TagEnd, offset: usize) -> Result<(), BuildError> {
        let Some(frame) = self.stack.pop() else {
            return Err(BuildError::UnexpectedEnd {
                tag: format!("{tag:?}"),
                offset,
            });
        };
        if frame.end != tag {
            return Err(BuildError::MismatchedEnd {
                expected: format!("{:?}", frame.end),
                found: format!("{tag:?}"),
                offset,
            });
        }

        match frame.content {
            Content::Element { kind, children } => self.close_element(kind, children),
            Content::CodeBlock { info, code } => self.push_node(Node::CodeBlock { info, code }),
            Content::HtmlBlock { code } => self.push_node(Node::HtmlBlock { code }),
            Content::List {
                first_number,
                items,
            } => self.push_node(Node::List {
                first_number,
                items,
            }),
            Content::Table {
                alignments,
                header,
                rows,
            } => self.push_node(Node::Table {
                alignments,
                header,
                rows,
            }),
            Content::Row { cells } => self.close_row(tag == TagEnd::TableHead, cells),
            Content::Transparent { children } => {
                for child in children {
                    self.push_node(child);
                }
            }
            Content::Discard => {}
        }
        Ok(())
    }

    fn close_element(&mut self, kind: ElementKind, children: Vec<Node>) {
        let node = match kind {
            ElementKind::Item => {
                let item = ListItem::new(wrap_inline_runs(children));
                if let Some(Frame {
                    content: Content::List { items, .. },
                    ..
                }) = self.stack.last_mut()
                {
                    items.push(item);
                } else {
                    self.push_node(Node::ListItem(item));
                }
                return;
            }
            ElementKind::Cell => {
                if let Some(Frame {
                    content: Content::Row { cells },
                    ..
                }) = self.stack.last_mut()
                {
                    cells.push(children);
                } else {
                    tracing::debug!("Table cell outside of a row");
                    for child in children {
                        self.push_node(child);
                    }
                }
                return;
            }
            ElementKind::Paragraph => Node::Paragraph { children },
            ElementKind::Heading(level) => Node::Heading { level, children },
            ElementKind::BlockQuote => Node::BlockQuote { children },
            ElementKind::Emphasis { strong } => Node::Emphasis { strong, children },
            ElementKind::Strikethrough => Node::Strikethrough { children },
            ElementKind::Link { destination, title } => Node::Link {
                destination,
                title,
                children,
            },
            ElementKind::AutoLink { destination } => {
                let mut text = String::new();
                for child in &children {
                    child.write_plain_text(&mut text);
                }
                Node::AutoLink { destination, text }
            }
            ElementKind::Image { source, title } => Node::Image {
                source,
                title,
                description: children,
            },
        };
        self.push_node(node);
    }

    fn close_row(&mut self, head: bool, cells: Vec<Cell>) {
        if let Some(Frame {
            content: Content::Table { header, rows, .. },
            ..
        }) = self.stack.last_mut()
        {
            if head {
                *header = cells;
            } else {
                rows.push(cells);
            }
        } else {
            tracing::debug!(cells = cells.len(), "Dropping table row outside of a table");
        }
    }

    fn text(&mut self, text: &str) {
        match self.stack.last_mut().map(|frame| &mut frame.content) {
            Some(Content::CodeBlock { code, .. } | Content::HtmlBlock { code }) => {
                code.push_str(text);
            }
            _ => self.push_text(text),
        }
    }

    fn html(&mut self, html: &str) {
        if let Some(Content::HtmlBlock { code }) =
            self.stack.last_mut().map(|frame| &mut frame.content)
        {
            code.push_str(html);
        } else {
            self.push_node(Node::HtmlBlock {
                code: html.to_owned(),
            });
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(Node::Text(last)) = self.current_children().and_then(|c| c.last_mut()) {
            last.push_str(text);
        } else {
            self.push_node(Node::text(text));
        }
    }

    /// Children list of the innermost open element, or the document itself.
    fn current_children(&mut self) -> Option<&mut Vec<Node>> {
        match self.stack.last_mut() {
            None => Some(&mut self.nodes),
            Some(frame) => match &mut frame.content {
                Content::Element { children, .. } | Content::Transparent { children } => {
                    Some(children)
                }
                _ => None,
            },
        }
    }

    fn push_node(&mut self, node: Node) {
        if let Some(children) = self.current_children() {
            children.push(node);
        } else {
            tracing::debug!(node = ?node, "Dropping node with no place in the tree");
        }
    }
}

fn element(kind: ElementKind) -> Content {
    Content::Element {
        kind,
        children: Vec::new(),
    }
}

fn non_empty(value: CowStr<'_>) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.into_string())
    }
}

fn convert_alignment(alignment: pulldown_cmark::Alignment) -> Alignment {
    match alignment {
        pulldown_cmark::Alignment::None => Alignment::Unspecified,
        pulldown_cmark::Alignment::Left => Alignment::Left,
        pulldown_cmark::Alignment::Center => Alignment::Center,
        pulldown_cmark::Alignment::Right => Alignment::Right,
    }
}

/// Wrap each run of inline nodes in a paragraph, leaving blocks as they are.
fn wrap_inline_runs(children: Vec<Node>) -> Vec<Node> {
    let mut blocks = Vec::with_capacity(children.len());
    let mut run = Vec::new();
    for child in children {
        if child.is_inline() {
            run.push(child);
        } else {
            if !run.is_empty() {
                blocks.push(Node::Paragraph {
                    children: mem::take(&mut run),
                });
            }
            blocks.push(child);
        }
    }
    if !run.is_empty() {
        blocks.push(Node::Paragraph { children: run });
    }
    blocks
}

/// Count whitespace-only lines fully contained in `source[from..to]`.
///
/// The partial line before `from` belongs to the previous block and the
/// partial line ending at `to` to the next one.
fn count_blank_lines(source: &str, from: usize, to: usize) -> usize {
    let Some(gap) = source.get(from..to) else {
        return 0;
    };
    let at_line_start = from == 0 || source.as_bytes().get(from - 1) == Some(&b'\n');
    let complete_lines = gap.matches('\n').count();

    gap.split('\n')
        .take(complete_lines)
        .skip(usize::from(!at_line_start))
        .filter(|line| line.trim().is_empty())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RenderContext;
    use crate::renderer::HtmlRenderer;
    use pretty_assertions::assert_eq;

    fn parse(markdown: &str) -> Document {
        parse_document(markdown, &MarkdownConfig::default()).unwrap()
    }

    fn render(markdown: &str) -> String {
        HtmlRenderer::new(&RenderContext::new()).render_document(&parse(markdown))
    }

    #[test]
    fn test_heading_and_paragraph_with_blank_line() {
        assert_eq!(
            parse("# Hello\n\nWorld"),
            Document::new(vec![
                Node::Heading {
                    level: 1,
                    children: vec![Node::text("Hello")],
                },
                Node::BlankLine,
                Node::paragraph(vec![Node::text("World")]),
            ])
        );
        assert_eq!(render("# Hello\n\nWorld"), "<h1>Hello</h1>\n<p>World</p>");
    }

    #[test]
    fn test_multiple_blank_lines() {
        let document = parse("a\n\n\n\nb\n");
        let blank = document
            .children
            .iter()
            .filter(|node| **node == Node::BlankLine)
            .count();
        assert_eq!(blank, 3);
    }

    #[test]
    fn test_adjacent_text_merged() {
        assert_eq!(
            parse(r"a\*b"),
            Document::new(vec![Node::paragraph(vec![Node::text("a*b")])])
        );
    }

    #[test]
    fn test_tight_list_items_unwrap() {
        assert_eq!(
            render("- one\n- two *em*"),
            "<ul>\n<li>one</li>\n<li>two <em>em</em></li>\n</ul>\n"
        );
    }

    #[test]
    fn test_tight_list_item_wrapped_in_paragraph() {
        let document = parse("- one");
        assert_eq!(
            document.children,
            vec![Node::List {
                first_number: None,
                items: vec![ListItem::new(vec![Node::paragraph(vec![Node::text("one")])])],
            }]
        );
    }

    #[test]
    fn test_loose_list_matches_tight_list() {
        let tight = render("- one\n- two\n");
        let loose = render("- one\n\n- two\n");
        assert!(tight.starts_with("<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n"));
        assert!(loose.starts_with("<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n"));
    }

    #[test]
    fn test_ordered_list_start() {
        assert_eq!(render("3. x"), "<ol start=\"3\">\n<li>x</li>\n</ol>\n");
    }

    #[test]
    fn test_nested_list_in_tight_item() {
        let html = render("- outer\n  - inner\n");
        assert!(html.starts_with("<ul>\n<li><p>outer</p>\n<ul>\n<li>inner</li>\n</ul>\n</li>\n</ul>\n"));
    }

    #[test]
    fn test_fenced_code_block() {
        let document = parse("```js extra\nlet x;\n```\n");
        assert_eq!(
            document.children[0],
            Node::CodeBlock {
                info: Some("js extra".to_owned()),
                code: "let x;\n".to_owned(),
            }
        );
        assert!(render("```js extra\nlet x;\n```\n")
            .starts_with("<pre><code class=\"language-js\">let x;\n\n</code></pre>"));
    }

    #[test]
    fn test_fenced_code_block_without_info() {
        let document = parse("```\n<tag>\n```\n");
        assert_eq!(
            document.children[0],
            Node::CodeBlock {
                info: None,
                code: "<tag>\n".to_owned(),
            }
        );
    }

    #[test]
    fn test_indented_code_block() {
        let document = parse("    code\n");
        assert_eq!(
            document.children[0],
            Node::CodeBlock {
                info: None,
                code: "code\n".to_owned(),
            }
        );
    }

    #[test]
    fn test_table() {
        let html = render("| A | B |\n|:--|---|\n| 1 | 2 |\n");
        assert!(html.starts_with("<table>\n<thead>\n<tr>\n"));
        assert!(html.contains(r#"<th align="left">A</th>"#));
        assert!(html.contains("<th>B</th>"));
        assert!(html.contains("\n<tbody>\n<tr>\n"));
        assert!(html.contains(r#"<td align="left">1</td>"#));
        assert!(html.contains("<td>2</td>"));
        assert!(html.contains("</tbody></table>"));
    }

    #[test]
    fn test_table_without_rows() {
        let html = render("| A | B |\n|---|--:|\n");
        assert!(html.contains(r#"<th align="right">B</th>"#));
        assert!(html.contains("</thead></table>\n"));
        assert!(!html.contains("<tbody>"));
    }

    #[test]
    fn test_tables_disabled() {
        let config = MarkdownConfig {
            tables: false,
            ..MarkdownConfig::default()
        };
        let document = parse_document("| A |\n|---|\n", &config).unwrap();
        assert!(matches!(document.children[0], Node::Paragraph { .. }));
    }

    #[test]
    fn test_strikethrough() {
        assert_eq!(render("~~gone~~"), "<p><del>gone</del></p>");
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(render("> quoted"), "<blockquote><p>quoted</p></blockquote>");
    }

    #[test]
    fn test_thematic_break() {
        assert_eq!(parse("---\n").children, vec![Node::ThematicBreak]);
    }

    #[test]
    fn test_autolinks() {
        assert_eq!(
            render("<https://example.com>"),
            r#"<p><a href="https://example.com">https://example.com</a></p>"#
        );
        assert_eq!(
            render("<me@example.com>"),
            r#"<p><a href="mailto:me@example.com">me@example.com</a></p>"#
        );
    }

    #[test]
    fn test_link_with_title() {
        assert_eq!(
            render(r#"[**Guide**](/guide "The guide")"#),
            r#"<p><a href="/guide" title="The guide"><strong>Guide</strong></a></p>"#
        );
    }

    #[test]
    fn test_image_alt_from_description() {
        assert_eq!(
            render(r#"![a *b*](x.png "T")"#),
            r#"<p><img src="x.png" alt="a b" title="T" /></p>"#
        );
    }

    #[test]
    fn test_link_reference_definition() {
        let document = parse("[foo]: /url \"t\"\n\n[foo]\n");
        assert!(document.children.iter().any(|node| matches!(
            node,
            Node::LinkReferenceDefinition { destination, title, .. }
                if destination == "/url" && title.as_deref() == Some("t")
        )));

        let html = HtmlRenderer::new(&RenderContext::new()).render_document(&document);
        assert!(html.contains(r#"<p><a href="/url" title="t">foo</a></p>"#));
        assert!(!html.contains("[foo]"));
    }

    #[test]
    fn test_html_block_verbatim() {
        let document = parse("<div>\n*hi*\n</div>\n");
        assert_eq!(
            document.children[0],
            Node::HtmlBlock {
                code: "<div>\n*hi*\n</div>\n".to_owned(),
            }
        );
    }

    #[test]
    fn test_inline_html() {
        assert_eq!(
            render("a <span>b</span>"),
            "<p>a <span>b</span></p>"
        );
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(render("a  \nb"), "<p>a<br />\nb</p>");
        assert_eq!(render("a\nb"), "<p>a\nb</p>");
    }

    #[test]
    fn test_text_escaped() {
        assert_eq!(render("1 &lt; 2 & 3 > 2"), "<p>1 &lt; 2 &amp; 3 &gt; 2</p>");
    }

    #[test]
    fn test_smart_punctuation() {
        let config = MarkdownConfig {
            smart_punctuation: true,
            ..MarkdownConfig::default()
        };
        let document = parse_document("\"hi\"", &config).unwrap();
        assert_eq!(
            document.children,
            vec![Node::paragraph(vec![Node::text("\u{201c}hi\u{201d}")])]
        );
    }

    #[test]
    fn test_unexpected_end() {
        let mut builder = TreeBuilder::new("");
        let err = builder
            .push(Event::End(TagEnd::Paragraph), 0..0)
            .unwrap_err();
        assert!(matches!(err, BuildError::UnexpectedEnd { offset: 0, .. }));
    }

    #[test]
    fn test_mismatched_end() {
        let mut builder = TreeBuilder::new("*a*");
        builder.push(Event::Start(Tag::Paragraph), 0..3).unwrap();
        let err = builder
            .push(Event::End(TagEnd::Emphasis), 2..3)
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::MismatchedEnd {
                expected: "Paragraph".to_owned(),
                found: "Emphasis".to_owned(),
                offset: 2,
            }
        );
    }

    #[test]
    fn test_unclosed() {
        let mut builder = TreeBuilder::new("a");
        builder.push(Event::Start(Tag::Paragraph), 0..1).unwrap();
        builder.push(Event::Start(Tag::Emphasis), 0..1).unwrap();
        assert_eq!(builder.finish(), Err(BuildError::Unclosed { open: 2 }));
    }

    #[test]
    fn test_unsupported_events_dropped() {
        let mut builder = TreeBuilder::new("x");
        builder.push(Event::Start(Tag::Paragraph), 0..1).unwrap();
        builder.push(Event::TaskListMarker(true), 0..1).unwrap();
        builder.push(Event::Text("x".into()), 0..1).unwrap();
        builder.push(Event::End(TagEnd::Paragraph), 0..1).unwrap();
        assert_eq!(
            builder.finish().unwrap().children,
            vec![Node::paragraph(vec![Node::text("x")])]
        );
    }

    #[test]
    fn test_unsupported_container_unwrapped() {
        let mut builder = TreeBuilder::new("x");
        builder
            .push(Event::Start(Tag::FootnoteDefinition("n".into())), 0..1)
            .unwrap();
        builder.push(Event::Start(Tag::Paragraph), 0..1).unwrap();
        builder.push(Event::Text("x".into()), 0..1).unwrap();
        builder.push(Event::End(TagEnd::Paragraph), 0..1).unwrap();
        builder.push(Event::End(TagEnd::FootnoteDefinition), 0..1).unwrap();
        assert_eq!(
            builder.finish().unwrap().children,
            vec![Node::paragraph(vec![Node::text("x")])]
        );
    }

    #[test]
    fn test_count_blank_lines() {
        assert_eq!(count_blank_lines("a\n\nb", 2, 3), 1);
        assert_eq!(count_blank_lines("a\n\nb", 1, 3), 1);
        assert_eq!(count_blank_lines("a\n  \n\t\nb", 2, 7), 2);
        assert_eq!(count_blank_lines("a\nb", 2, 2), 0);
        assert_eq!(count_blank_lines("\n\na", 0, 2), 2);
        assert_eq!(count_blank_lines("a", 5, 9), 0);
    }

    #[test]
    fn test_wrap_inline_runs() {
        let list = Node::List {
            first_number: None,
            items: vec![],
        };
        let wrapped = wrap_inline_runs(vec![
            Node::text("a"),
            Node::SoftBreak,
            list.clone(),
            Node::text("b"),
        ]);
        assert_eq!(
            wrapped,
            vec![
                Node::paragraph(vec![Node::text("a"), Node::SoftBreak]),
                list,
                Node::paragraph(vec![Node::text("b")]),
            ]
        );
    }
}
