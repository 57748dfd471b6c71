//! Block driver: one block construct per step.
//!
//! Each step skips indentation, looks at the first byte of the line, and
//! dispatches to exactly one handler. A step either consumes input or closes
//! at least one open list level, so the loop always terminates.

mod list;
mod table;

use log::trace;

use crate::event::{ListKind, Sink};
use crate::inline::ItemContext;
use crate::inline::spans;
use crate::parser::Parser;

/// Outcome of a block handler that may decline the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// The handler consumed the construct.
    Consumed,
    /// The input ended; stop the block loop.
    EndOfInput,
    /// Not this construct; try the next handler.
    NotMatched,
}

impl<S: Sink + ?Sized> Parser<'_, '_, S> {
    /// Parse one block construct. Returns `false` once the input is done.
    pub(crate) fn parse_block(&mut self) -> bool {
        self.cursor.skip_whitespace();
        if self.cursor.is_eof() {
            return false;
        }
        let c = self.cursor.peek();

        if c == b'\n' {
            self.close_lists_and_table();
            self.cursor.bump();
            return true;
        }

        if c == b'|' {
            if self.mediawiki_depth > 0 {
                match self.parse_mediawiki_markup() {
                    Step::Consumed => return true,
                    Step::EndOfInput => return false,
                    Step::NotMatched => {}
                }
            }
            self.parse_pipe_table_row();
            return true;
        }

        if self.in_table {
            self.close_lists_and_table();
        }

        let step = match c {
            b'=' => self.parse_heading(),
            b'{' => match self.parse_literal_block() {
                Step::NotMatched => self.parse_mediawiki_open(),
                step => step,
            },
            b'-' => self.parse_horizontal_rule(),
            _ => Step::NotMatched,
        };
        match step {
            Step::Consumed => return true,
            Step::EndOfInput => return false,
            Step::NotMatched => {}
        }

        if !self.list_stack.is_empty() || ListKind::from_marker(c).is_some() {
            match self.parse_list_line() {
                Step::Consumed => return true,
                Step::EndOfInput => return false,
                Step::NotMatched => {}
            }
        }

        self.parse_paragraph();
        true
    }

    /// `== Heading ==`. Open lists stay open.
    fn parse_heading(&mut self) -> Step {
        let level = self.cursor.run_length(b'=');
        self.cursor.advance(level);
        self.cursor.skip_whitespace();
        if self.cursor.is_eof() {
            return Step::EndOfInput;
        }
        trace!("heading level {level} at offset {}", self.cursor.offset());
        self.sink.heading_open(level);
        self.parse_item(None, ItemContext::Header, false);
        self.sink.heading_close(level);
        Step::Consumed
    }

    /// `{{{` on its own spanning several lines. A single-line nowiki is left
    /// to the paragraph.
    fn parse_literal_block(&mut self) -> Step {
        if self.cursor.peek_ahead(1) != b'{' || self.cursor.peek_ahead(2) != b'{' {
            return Step::NotMatched;
        }
        let bytes = self.cursor.bytes();
        let start = self.cursor.offset() + 3;
        let Some(end) = spans::find_nowiki_end(bytes, start) else {
            return Step::NotMatched;
        };
        let Some((s, e)) = spans::literal_block_bounds(bytes, start, end) else {
            return Step::NotMatched;
        };
        if e > s {
            let content = spans::strip_nowiki_escapes(self.cursor.slice(s, e));
            self.sink.literal_block(&content);
        }
        self.cursor.set_offset(end + 3);
        Step::Consumed
    }

    /// `----` alone on a line. The newline is left for the blank-line check.
    fn parse_horizontal_rule(&mut self) -> Step {
        let pos = self.cursor.offset();
        if self.cursor.bytes_from(pos).starts_with(b"----") && self.cursor.is_blank_to_eol(pos + 4) {
            self.sink.horizontal_rule();
            let end = self.cursor.skip_whitespace_from(pos + 4);
            self.cursor.set_offset(end);
            Step::Consumed
        } else {
            Step::NotMatched
        }
    }

    fn parse_paragraph(&mut self) {
        self.sink.paragraph_open();
        self.parse_item(None, ItemContext::Paragraph, true);
        self.sink.paragraph_close();
    }
}
