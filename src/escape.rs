//! HTML escaping utilities.
//!
//! Fast-path optimized: scans for the first escapable character,
//! then bulk-copies segments between escapes.
//!
//! The parser never escapes anything itself. These helpers are for sinks
//! that emit XHTML.

use std::borrow::Cow;

use memchr::{memchr2, memchr3};

/// Lookup table for the five characters that are replaced by references.
/// Index by byte value, true if needs escaping.
const ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table[b'\'' as usize] = true;
    table
};

/// Escape `< > & " '` into an output buffer.
///
/// # Example
/// ```
/// use ferrocreole::escape::escape_html_into;
///
/// let mut out = String::new();
/// escape_html_into(&mut out, "<a href='x'>");
/// assert_eq!(out, "&lt;a href=&#39;x&#39;&gt;");
/// ```
#[inline]
pub fn escape_html_into(out: &mut String, input: &str) {
    let bytes = input.as_bytes();
    let mut pos = match first_escape(bytes) {
        Some(p) => p,
        None => {
            out.push_str(input);
            return;
        }
    };

    out.reserve(input.len() + input.len() / 8);
    out.push_str(&input[..pos]);

    while pos < bytes.len() {
        // Scan for any escapable character using lookup table
        let scan_start = pos;
        while pos < bytes.len() && !ESCAPE_TABLE[bytes[pos] as usize] {
            pos += 1;
        }

        // Copy non-escaped portion; escapable bytes are ASCII, so both ends
        // are char boundaries.
        if pos > scan_start {
            out.push_str(&input[scan_start..pos]);
        }

        if pos < bytes.len() {
            out.push_str(match bytes[pos] {
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'&' => "&amp;",
                b'"' => "&quot;",
                _ => "&#39;",
            });
            pos += 1;
        }
    }
}

/// Escape `< > & " '`, borrowing the input when nothing needs escaping.
///
/// # Example
/// ```
/// use ferrocreole::escape_html;
///
/// assert_eq!(escape_html("a & b"), "a &amp; b");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !needs_escape(input) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    escape_html_into(&mut out, input);
    Cow::Owned(out)
}

/// Check if a string contains any character that needs escaping.
#[inline]
pub fn needs_escape(input: &str) -> bool {
    first_escape(input.as_bytes()).is_some()
}

#[inline]
fn first_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr2(b'"', b'\'', input);
    min_opt(a, b)
}

#[inline]
fn min_opt(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(input: &str) -> String {
        let mut out = String::new();
        escape_html_into(&mut out, input);
        out
    }

    #[test]
    fn test_escape_basic() {
        assert_eq!(escaped("Hello, World!"), "Hello, World!");
    }

    #[test]
    fn test_escape_lt_gt() {
        assert_eq!(escaped("<script>"), "&lt;script&gt;");
    }

    #[test]
    fn test_escape_amp() {
        assert_eq!(escaped("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escaped("\"it's\""), "&quot;it&#39;s&quot;");
    }

    #[test]
    fn test_escape_all() {
        assert_eq!(escaped("<>&\"'"), "&lt;&gt;&amp;&quot;&#39;");
    }

    #[test]
    fn test_escape_empty() {
        assert_eq!(escaped(""), "");
    }

    #[test]
    fn test_escape_consecutive() {
        assert_eq!(escaped("<<<"), "&lt;&lt;&lt;");
    }

    #[test]
    fn test_escape_at_boundaries() {
        assert_eq!(escaped("<"), "&lt;");
        assert_eq!(escaped("hello<"), "hello&lt;");
        assert_eq!(escaped("<hello"), "&lt;hello");
    }

    #[test]
    fn test_escape_appends() {
        let mut out = String::from("<p>");
        escape_html_into(&mut out, "x<y");
        assert_eq!(out, "<p>x&lt;y");
    }

    #[test]
    fn test_escape_unicode() {
        assert_eq!(escaped("Grüße <tag> – ok"), "Grüße &lt;tag&gt; – ok");
    }

    #[test]
    fn test_escape_html_borrows_clean_input() {
        assert!(matches!(escape_html("nothing here"), Cow::Borrowed(_)));
        assert!(matches!(escape_html("x > y"), Cow::Owned(_)));
    }

    #[test]
    fn test_needs_escape() {
        assert!(!needs_escape("hello"));
        assert!(needs_escape("<hello>"));
        assert!(needs_escape("it's"));
        assert!(!needs_escape(""));
    }
}
