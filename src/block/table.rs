//! Tables: `|a|b|` pipe rows and `{| ... |}` mediawiki-style blocks.

use log::trace;

use super::Step;
use crate::event::Sink;
use crate::inline::{EndOfContext, ItemContext};
use crate::limits::MAX_COLSPAN;
use crate::parser::Parser;

impl<S: Sink + ?Sized> Parser<'_, '_, S> {
    /// A `|` row, opening the table first if needed.
    ///
    /// Each cell starts at a run of `|` (its length is the colspan) and an
    /// optional `=` marks a header cell. A row that ends in `|` consumes its
    /// newline; one that doesn't leaves it, which ends the table.
    pub(super) fn parse_pipe_table_row(&mut self) {
        if !self.in_table {
            self.close_lists_to(0);
            self.sink.table_open();
            self.in_table = true;
        }

        self.sink.table_row_open();
        loop {
            let colspan = self.cursor.run_length(b'|');
            self.cursor.advance(colspan);
            let head = self.cursor.eat(b'=');
            self.cursor.skip_whitespace();
            if self.cursor.is_eof() {
                break;
            }
            if self.cursor.eat(b'\n') {
                break;
            }

            let colspan = colspan.min(MAX_COLSPAN) as u8;
            if head {
                self.sink.table_head_cell_open(colspan);
            } else {
                self.sink.table_cell_open(colspan);
            }
            let res = self.parse_item(None, ItemContext::TableCell, false);
            if head {
                self.sink.table_head_cell_close();
            } else {
                self.sink.table_cell_close();
            }
            if res == EndOfContext::Block {
                break;
            }
        }
        self.sink.table_row_close();
    }

    /// `{|` alone on a line opens a mediawiki table with its first cell.
    pub(super) fn parse_mediawiki_open(&mut self) -> Step {
        if !self.options.mediawiki_tables || self.cursor.peek_ahead(1) != b'|' {
            return Step::NotMatched;
        }
        let p = self.cursor.skip_whitespace_from(self.cursor.offset() + 2);
        if self.cursor.byte_at(p) != b'\n' {
            return Step::NotMatched;
        }
        // Lists cannot straddle the table boundary.
        self.close_lists_to(0);
        self.sink.table_open();
        self.sink.table_row_open();
        self.sink.table_cell_open(1);
        self.mediawiki_depth += 1;
        trace!("mediawiki table opened, depth {}", self.mediawiki_depth);
        self.cursor.set_offset(p + 1);
        Step::Consumed
    }

    /// Inside a mediawiki table, a line holding only `|`, `|-` or `|}` moves
    /// to the next cell, the next row, or closes the table.
    pub(super) fn parse_mediawiki_markup(&mut self) -> Step {
        let mut p = self.cursor.offset() + 1;
        let nc = self.cursor.byte_at(p);
        if matches!(nc, b'-' | b'}') {
            p += 1;
        }
        let p = self.cursor.skip_whitespace_from(p);
        match self.cursor.byte_at(p) {
            0 => return Step::EndOfInput,
            b'\n' => {}
            _ => return Step::NotMatched,
        }

        self.close_lists_and_table();
        self.sink.table_cell_close();
        match nc {
            b'-' => {
                self.sink.table_row_close();
                self.sink.table_row_open();
                self.sink.table_cell_open(1);
            }
            b'}' => {
                self.sink.table_row_close();
                self.sink.table_close();
                self.mediawiki_depth -= 1;
                trace!("mediawiki table closed, depth {}", self.mediawiki_depth);
            }
            _ => self.sink.table_cell_open(1),
        }
        self.cursor.set_offset(p + 1);
        Step::Consumed
    }
}
