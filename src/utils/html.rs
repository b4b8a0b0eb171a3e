//! HTML utility functions.
//!
//! - `escape()`, `escape_attr()` - HTML entity escaping
//! - `quote_attr()` - Quote an already-encoded attribute value

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters escaped in text content.
const TEXT_CHARS: [char; 3] = ['<', '>', '&'];

/// Characters escaped in attribute values.
const ATTR_CHARS: [char; 4] = ['<', '>', '&', '"'];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &TEXT_CHARS)
}

/// Escape a value for use inside a double-quoted attribute.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ATTR_CHARS)
}

/// Internal: escape with specified character set.
#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + s.len() / 8);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) if chars.contains(&c) => result.push_str(entity),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

// =============================================================================
// Attribute Quoting
// =============================================================================

/// Quote a value taken verbatim from source markup.
///
/// The value keeps its encoding. Single quotes are used when the value holds
/// a `"` but no `'`, which is how such values appear in the source.
pub fn quote_attr(value: &str) -> String {
    match (value.contains('"'), value.contains('\'')) {
        (false, _) => format!("\"{value}\""),
        (true, false) => format!("'{value}'"),
        (true, true) => format!("\"{}\"", value.replace('"', "&quot;")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape("say \"hi\""), "say \"hi\"");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("say \"hi\" & go"), "say &quot;hi&quot; &amp; go");
        assert_eq!(escape_attr("it's"), "it's");
    }

    #[test]
    fn test_quote_attr() {
        assert_eq!(quote_attr("/a.js"), "\"/a.js\"");
        assert_eq!(quote_attr("a &amp; b"), "\"a &amp; b\"");
        assert_eq!(quote_attr("{\"a\":1}"), "'{\"a\":1}'");
        assert_eq!(quote_attr("\"it's\""), "\"&quot;it's&quot;\"");
    }
}
