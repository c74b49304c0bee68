//! Escaping of text placed into HTML.
//!
//! Element content and quoted attribute values need different escaping:
//! - [`escape_content`]: `&`, `<`, `>`
//! - [`escape_attribute`]: `&`, `<`, `>`, `"`, `'`

use std::borrow::Cow;

fn content_entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    }
}

fn attribute_entity(c: char) -> Option<&'static str> {
    match c {
        '"' => Some("&quot;"),
        '\'' => Some("&#x27;"),
        _ => content_entity(c),
    }
}

fn push_escaped(out: &mut String, text: &str, entity: fn(char) -> Option<&'static str>) {
    for c in text.chars() {
        match entity(c) {
            Some(escaped) => out.push_str(escaped),
            None => out.push(c),
        }
    }
}

fn escape_with(text: &str, entity: fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    if text.chars().any(|c| entity(c).is_some()) {
        let mut result = String::with_capacity(text.len() + 8);
        push_escaped(&mut result, text, entity);
        Cow::Owned(result)
    } else {
        Cow::Borrowed(text)
    }
}

/// Escape text for use inside an HTML element.
///
/// # Examples
///
/// ```
/// use gfm_html::escape_content;
///
/// assert_eq!(escape_content("a < b && c"), "a &lt; b &amp;&amp; c");
/// assert_eq!(escape_content(r#"say "hi""#), r#"say "hi""#);
/// ```
#[must_use]
pub fn escape_content(text: &str) -> Cow<'_, str> {
    escape_with(text, content_entity)
}

/// Escape text for use inside a double-quoted HTML attribute value.
///
/// # Examples
///
/// ```
/// use gfm_html::escape_attribute;
///
/// assert_eq!(escape_attribute(r#"a "b" <c>"#), "a &quot;b&quot; &lt;c&gt;");
/// ```
#[must_use]
pub fn escape_attribute(text: &str) -> Cow<'_, str> {
    escape_with(text, attribute_entity)
}

/// Append `text` to `out`, escaped for element content.
pub fn push_escaped_content(out: &mut String, text: &str) {
    push_escaped(out, text, content_entity);
}

/// Append `text` to `out`, escaped for a double-quoted attribute value.
pub fn push_escaped_attribute(out: &mut String, text: &str) {
    push_escaped(out, text, attribute_entity);
}
