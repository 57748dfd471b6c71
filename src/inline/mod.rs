//! Item scanner: inline markup inside paragraphs, list items, table cells
//! and headings.
//!
//! The scanner is recursive descent. A format span (`**`, `//`, `__`, `##`)
//! recurses with its marker as the delimiter, and every scan reports how it
//! ended so the caller can unwind to the right level.

pub mod spans;

use log::trace;

use crate::event::{FormatKind, ListKind, Sink};
use crate::limits::MAX_FORMAT_NESTING;
use crate::parser::Parser;

/// Where an item is being scanned. Decides which line ends terminate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemContext {
    Paragraph,
    ListItem,
    TableCell,
    Header,
}

/// How a scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndOfContext {
    /// The closing delimiter of a format span was consumed.
    Item,
    /// A `|` ends the current table cell. It is not consumed.
    Cell,
    /// The enclosing block ends.
    Block,
}

/// Bytes that may start inline markup. Everything else is copied in runs.
const SPECIAL: [bool; 256] = {
    let mut table = [false; 256];
    let chars = b"\n*/_#|{[\\<=~:-";
    let mut i = 0;
    while i < chars.len() {
        table[chars[i] as usize] = true;
        i += 1;
    }
    table
};

#[inline]
fn is_format_char(b: u8) -> bool {
    matches!(b, b'*' | b'/' | b'_' | b'#')
}

#[inline]
fn is_list_char(b: u8) -> bool {
    ListKind::from_marker(b).is_some()
}

impl<S: Sink + ?Sized> Parser<'_, '_, S> {
    /// Scan inline content until the delimiter closes, a cell ends, or the
    /// block ends.
    ///
    /// `at_line_start` applies to the first position only; it enables the
    /// line-start escapes (`~*`, `~=`, `~|`, `~{` and the other list
    /// markers).
    pub(crate) fn parse_item(
        &mut self,
        delimiter: Option<u8>,
        ctx: ItemContext,
        at_line_start: bool,
    ) -> EndOfContext {
        let mut at_line_start = at_line_start;
        loop {
            if self.cursor.is_eof() {
                self.flush_text();
                return EndOfContext::Block;
            }
            let c = self.cursor.peek();
            if Some(c) == delimiter && self.cursor.peek_ahead(1) == c {
                self.cursor.advance(2);
                self.flush_text();
                return EndOfContext::Item;
            }

            if c == b'\n' {
                if matches!(ctx, ItemContext::Header | ItemContext::TableCell) {
                    self.flush_text();
                    return EndOfContext::Block;
                }
                self.cursor.bump();
                self.cursor.skip_whitespace();
                if self.line_starts_new_block() {
                    self.flush_text();
                    return EndOfContext::Block;
                }
                self.text.push('\n');
                at_line_start = true;
                continue;
            }
            let line_start = std::mem::take(&mut at_line_start);

            // A doubled marker ending the input opens nothing.
            if is_format_char(c)
                && self.cursor.peek_ahead(1) == c
                && self.cursor.peek_ahead(2) != 0
            {
                if self.format_depth < MAX_FORMAT_NESTING {
                    let res = self.parse_format_span(c, ctx);
                    if res != EndOfContext::Item {
                        return res;
                    }
                    continue;
                }
                trace!("format nesting limit reached at offset {}", self.cursor.offset());
            }

            let handled = match c {
                b'|' if ctx == ItemContext::TableCell => {
                    self.flush_text();
                    return EndOfContext::Cell;
                }
                b'{' => self.scan_brace(ctx),
                b'[' => self.scan_link(),
                b'\\' => self.scan_line_break(),
                b'<' => self.scan_placeholder(),
                b'=' if ctx == ItemContext::Header => {
                    if self.scan_heading_trailer() {
                        self.flush_text();
                        return EndOfContext::Block;
                    }
                    false
                }
                b'~' => self.scan_escape(line_start),
                b':' => self.scan_autolink(),
                b'-' => self.scan_dash(),
                _ => false,
            };
            if !handled {
                self.push_literal();
            }
        }
    }

    /// After a newline and its indentation: does this line start a new
    /// block rather than continue the current item?
    fn line_starts_new_block(&self) -> bool {
        let c = self.cursor.peek();
        let next = self.cursor.peek_ahead(1);
        match c {
            0 | b'\n' | b'=' | b'|' => true,
            _ if is_list_char(c) => {
                !is_format_char(c)
                    || next != c
                    || self.list_stack.first().map(|k| k.marker()) == Some(c)
            }
            b'{' => {
                self.options.mediawiki_tables
                    && next == b'|'
                    && self.cursor.is_blank_to_eol(self.cursor.offset() + 2)
            }
            _ => false,
        }
    }

    /// Open a format span at the cursor, scan it, and close it.
    fn parse_format_span(&mut self, marker: u8, ctx: ItemContext) -> EndOfContext {
        let Some(kind) = FormatKind::from_marker(marker) else {
            return EndOfContext::Item;
        };
        self.flush_text();
        self.sink.format_open(kind);
        self.cursor.advance(2);
        self.format_depth += 1;
        let res = self.parse_item(Some(marker), ctx, false);
        self.format_depth -= 1;
        self.sink.format_close(kind);
        res
    }

    /// Copy the current character, plus any following run of plain text.
    #[inline]
    fn push_literal(&mut self) {
        let start = self.cursor.offset();
        let bytes = self.cursor.bytes();
        let mut end = start + 1;
        // Markup bytes are ASCII; a multi-byte char is never split here.
        while end < bytes.len() && !SPECIAL[bytes[end] as usize] {
            end += 1;
        }
        while !self.cursor.source().is_char_boundary(end) {
            end += 1;
        }
        self.text.push_str(self.cursor.slice(start, end));
        self.cursor.set_offset(end);
    }

    /// `{{{nowiki}}}` or `{{image}}`.
    fn scan_brace(&mut self, ctx: ItemContext) -> bool {
        if self.cursor.peek_ahead(1) != b'{' {
            return false;
        }
        let pos = self.cursor.offset();
        let bytes = self.cursor.bytes();

        if self.cursor.peek_ahead(2) == b'{' {
            let start = pos + 3;
            let Some(end) = spans::find_nowiki_end(bytes, start) else {
                trace!("unterminated nowiki at offset {pos}");
                return false;
            };
            self.flush_text();
            match spans::literal_block_bounds(bytes, start, end) {
                Some((s, e)) => {
                    if e > s {
                        let content = spans::strip_nowiki_escapes(self.cursor.slice(s, e));
                        // Only a top-level paragraph is split around the block;
                        // inside a format span it stays nested.
                        let split = ctx == ItemContext::Paragraph && self.format_depth == 0;
                        if split {
                            self.sink.paragraph_close();
                        }
                        self.sink.literal_block(&content);
                        if split {
                            self.sink.paragraph_open();
                        }
                    }
                }
                None => {
                    let content = spans::strip_nowiki_escapes(self.cursor.slice(start, end));
                    self.sink.literal_inline(&content);
                }
            }
            self.cursor.set_offset(end + 3);
            return true;
        }

        let start = pos + 2;
        match spans::find_double(bytes, start, b'}') {
            Some(end) => {
                self.flush_text();
                self.sink.image(self.cursor.slice(start, end));
                self.cursor.set_offset(end + 2);
                true
            }
            None => {
                trace!("unterminated image at offset {pos}");
                false
            }
        }
    }

    /// `[[link]]`.
    fn scan_link(&mut self) -> bool {
        if self.cursor.peek_ahead(1) != b'[' {
            return false;
        }
        let start = self.cursor.offset() + 2;
        match spans::find_double(self.cursor.bytes(), start, b']') {
            Some(end) => {
                self.flush_text();
                self.sink.link(self.cursor.slice(start, end));
                self.cursor.set_offset(end + 2);
                true
            }
            None => {
                trace!("unterminated link at offset {}", start - 2);
                false
            }
        }
    }

    /// `\\` forced line break.
    fn scan_line_break(&mut self) -> bool {
        if self.cursor.peek_ahead(1) != b'\\' {
            return false;
        }
        self.flush_text();
        self.sink.line_break();
        self.cursor.advance(2);
        true
    }

    /// `<<<placeholder>>>`.
    fn scan_placeholder(&mut self) -> bool {
        if self.cursor.peek_ahead(1) != b'<' || self.cursor.peek_ahead(2) != b'<' {
            return false;
        }
        let start = self.cursor.offset() + 3;
        match spans::find_triple(self.cursor.bytes(), start, b'>') {
            Some(end) => {
                self.flush_text();
                self.sink.placeholder(self.cursor.slice(start, end));
                self.cursor.set_offset(end + 3);
                true
            }
            None => {
                trace!("unterminated placeholder at offset {}", start - 3);
                false
            }
        }
    }

    /// A run of `=` with nothing but whitespace after it ends a heading.
    /// Trailing whitespace of the heading text is dropped.
    fn scan_heading_trailer(&mut self) -> bool {
        let mut p = self.cursor.offset() + 1;
        while self.cursor.byte_at(p) == b'=' {
            p += 1;
        }
        let p = self.cursor.skip_whitespace_from(p);
        if !matches!(self.cursor.byte_at(p), 0 | b'\n') {
            return false;
        }
        let trimmed = self.text.trim_end_matches(|ch: char| ch <= ' ').len();
        self.text.truncate(trimmed);
        self.cursor.set_offset(p);
        true
    }

    /// `~x`: take the next character literally.
    fn scan_escape(&mut self, at_line_start: bool) -> bool {
        let nc = self.cursor.peek_ahead(1);
        let doubled = self.cursor.peek_ahead(2) == nc;
        let escapes = (at_line_start && (is_list_char(nc) || matches!(nc, b'=' | b'|' | b'{')))
            || (is_format_char(nc) && doubled)
            || (matches!(nc, b'{' | b'[' | b'\\' | b'<' | b'-') && doubled)
            || nc == b'~';
        if !escapes {
            return false;
        }
        self.text.push(nc as char);
        self.cursor.advance(2);
        true
    }

    /// Bare `http://` URL. The `http` is already in the pending text.
    fn scan_autolink(&mut self) -> bool {
        if !self.options.autolinks {
            return false;
        }
        let colon = self.cursor.offset();
        let bytes = self.cursor.bytes();
        if colon < 4
            || &bytes[colon - 4..colon] != b"http"
            || !self.text.ends_with("http")
            || self.cursor.peek_ahead(1) != b'/'
            || self.cursor.peek_ahead(2) != b'/'
        {
            return false;
        }

        if self.text.ends_with("~http") {
            // Escaped: drop the tilde, keep the URL as text.
            let tilde = self.text.len() - 5;
            self.text.remove(tilde);
            self.text.push_str("://");
            self.cursor.advance(3);
            return true;
        }

        let start = colon - 4;
        let end = spans::autolink_end(bytes, colon);
        if end - start <= "http://".len() {
            return false;
        }
        self.text.truncate(self.text.len() - 4);
        self.flush_text();
        self.sink.link(self.cursor.slice(start, end));
        self.cursor.set_offset(end);
        true
    }

    /// ` -- ` becomes an en dash.
    fn scan_dash(&mut self) -> bool {
        if !self.options.typographic_dashes
            || !self.text.ends_with(' ')
            || self.cursor.peek_ahead(1) != b'-'
            || self.cursor.peek_ahead(2) != b' '
        {
            return false;
        }
        self.text.push('\u{2013}');
        self.cursor.advance(2);
        true
    }
}
