//! Closer lookup for the span constructs.
//!
//! All searches run to the end of the input, not the end of the line, so a
//! link or image may span lines. Offsets are absolute byte offsets into the
//! input.

use std::borrow::Cow;

use memchr::{memchr, memchr_iter};

/// Offset of the `}}}` that closes a nowiki span whose content starts at
/// `from`.
///
/// A `}` preceded by `~` never starts the closer. A run of more than three
/// `}` closes at its last three, so `{{{x}}}}` has content `x}`.
pub fn find_nowiki_end(bytes: &[u8], from: usize) -> Option<usize> {
    let at = |i: usize| bytes.get(i).copied().unwrap_or(0);
    for rel in memchr_iter(b'}', bytes.get(from..)?) {
        let mut p = from + rel;
        if p > 0 && bytes[p - 1] == b'~' {
            continue;
        }
        if at(p + 1) == b'}' && at(p + 2) == b'}' {
            while at(p + 3) == b'}' {
                p += 1;
            }
            return Some(p);
        }
    }
    None
}

/// Offset of the first `bb` at or after `from`.
pub fn find_double(bytes: &[u8], from: usize, b: u8) -> Option<usize> {
    let hay = bytes.get(from..)?;
    memchr_iter(b, hay)
        .find(|&i| hay.get(i + 1) == Some(&b))
        .map(|i| from + i)
}

/// Offset of the first `bbb` at or after `from`.
pub fn find_triple(bytes: &[u8], from: usize, b: u8) -> Option<usize> {
    let hay = bytes.get(from..)?;
    memchr_iter(b, hay)
        .find(|&i| hay.get(i + 1) == Some(&b) && hay.get(i + 2) == Some(&b))
        .map(|i| from + i)
}

/// Drop the `~` of every `~}}}` in nowiki content.
pub fn strip_nowiki_escapes(content: &str) -> Cow<'_, str> {
    let bytes = content.as_bytes();
    let is_escape = |i: usize| i + 4 <= bytes.len() && &bytes[i + 1..i + 4] == b"}}}";

    let mut tildes = memchr_iter(b'~', bytes).filter(|&i| is_escape(i)).peekable();
    if tildes.peek().is_none() {
        return Cow::Borrowed(content);
    }

    let mut out = String::with_capacity(content.len());
    let mut copied = 0;
    for i in tildes {
        out.push_str(&content[copied..i]);
        copied = i + 1;
    }
    out.push_str(&content[copied..]);
    Cow::Owned(out)
}

/// Content bounds of a multi-line nowiki whose interior is `start..end`.
///
/// Returns `None` when the interior has no newline (an inline span).
/// Otherwise leading horizontal whitespace and one newline are trimmed from
/// the front and one newline from the back. The result may be empty.
pub fn literal_block_bounds(bytes: &[u8], start: usize, end: usize) -> Option<(usize, usize)> {
    memchr(b'\n', &bytes[start..end])?;

    let mut s = start;
    while s < end && crate::cursor::is_horizontal_space(bytes[s]) {
        s += 1;
    }
    if s < end && bytes[s] == b'\n' {
        s += 1;
    }
    let mut e = end;
    if e > s && bytes[e - 1] == b'\n' {
        e -= 1;
    }
    Some((s, e.max(s)))
}

/// Bytes allowed inside a bare URL.
const URL_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0;
    while i < 256 {
        let b = i as u8;
        table[i] = b.is_ascii_alphanumeric();
        i += 1;
    }
    let extra = b"/?@&=+,-_.!~()%#;:$*";
    let mut j = 0;
    while j < extra.len() {
        table[extra[j] as usize] = true;
        j += 1;
    }
    table
};

/// Check if a byte may appear in a bare URL.
#[inline]
pub fn is_url_char(b: u8) -> bool {
    URL_TABLE[b as usize]
}

/// End of a bare URL whose `://` starts at `colon`.
///
/// Extends over URL bytes, then gives back trailing punctuation that more
/// likely belongs to the sentence.
pub fn autolink_end(bytes: &[u8], colon: usize) -> usize {
    let mut end = colon + 3;
    while end < bytes.len() && is_url_char(bytes[end]) {
        end += 1;
    }
    while end > colon + 3 && matches!(bytes[end - 1], b',' | b'.' | b';' | b':' | b'?' | b'!' | b'%' | b')') {
        end -= 1;
    }
    end
}
