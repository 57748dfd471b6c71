//! List-like blocks: `*` and `-` bullets, `#` numbers, `>` quotes, `:`
//! indents and `!` centered blocks.
//!
//! A line's leading markers are matched against the open levels. Fewer
//! matches close levels, one extra marker opens a level, and an exact match
//! starts the next item.

use log::debug;

use super::Step;
use crate::event::{ListKind, Sink};
use crate::inline::ItemContext;
use crate::limits::MAX_LIST_DEPTH;
use crate::parser::Parser;

impl<S: Sink + ?Sized> Parser<'_, '_, S> {
    /// Handle a line while a list is open or when it starts with a marker.
    pub(super) fn parse_list_line(&mut self) -> Step {
        let pos = self.cursor.offset();
        let matched = self
            .list_stack
            .iter()
            .enumerate()
            .take_while(|&(i, kind)| self.cursor.byte_at(pos + i) == kind.marker())
            .count();

        let cc = self.cursor.byte_at(pos + matched);
        if cc == 0 {
            return Step::EndOfInput;
        }

        if matched < self.list_stack.len() {
            // Retry the same line against the remaining levels.
            self.close_lists_to(matched);
            self.pending_blank_item = true;
            return Step::Consumed;
        }

        let doubled = self.cursor.byte_at(pos + matched + 1) == cc;
        if let Some(kind) = ListKind::from_marker(cc).filter(|_| !doubled) {
            if self.list_stack.len() < MAX_LIST_DEPTH {
                self.list_stack.push(kind);
                self.pending_blank_item = true;
                self.sink.list_open(kind);
                self.cursor.set_offset(pos + matched + 1);
                self.parse_list_item();
                return Step::Consumed;
            }
            debug!("list depth limit reached at offset {pos}, marker kept as text");
        }

        match self.list_stack.last() {
            Some(&top) => {
                self.sink.list_next_item(top);
                self.cursor.set_offset(pos + matched);
                self.parse_list_item();
                Step::Consumed
            }
            None => Step::NotMatched,
        }
    }

    /// Item body after the markers. An empty body is a blank item, reported
    /// once per run of blank lines.
    fn parse_list_item(&mut self) {
        self.cursor.skip_whitespace();
        if self.cursor.peek() == b'\n' {
            if !self.pending_blank_item {
                if let Some(&top) = self.list_stack.last() {
                    self.sink.list_blank_item(top);
                }
                self.pending_blank_item = true;
            }
            self.cursor.bump();
            return;
        }
        self.pending_blank_item = false;
        self.parse_item(None, ItemContext::ListItem, false);
    }
}
