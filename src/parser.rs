//! Parser state shared by the block driver and the item scanner.

use log::debug;
use smallvec::SmallVec;

use crate::Options;
use crate::cursor::Cursor;
use crate::event::{ListKind, Sink};

/// Single-pass Creole parser feeding a [`Sink`].
///
/// One value per parse. The block driver lives in [`crate::block`], the
/// item scanner in [`crate::inline`]; both work on this state through
/// `&mut self`.
pub(crate) struct Parser<'a, 's, S: Sink + ?Sized> {
    /// Position in the input.
    pub(crate) cursor: Cursor<'a>,
    /// Open list-like blocks, outermost first.
    pub(crate) list_stack: SmallVec<[ListKind; 8]>,
    /// Whether a pipe table is open.
    pub(crate) in_table: bool,
    /// Number of open `{| ... |}` tables.
    pub(crate) mediawiki_depth: usize,
    /// Suppresses consecutive blank-item events.
    pub(crate) pending_blank_item: bool,
    /// Pending literal text, flushed as one text event.
    pub(crate) text: String,
    /// Current nesting of format spans.
    pub(crate) format_depth: usize,
    pub(crate) options: Options,
    pub(crate) sink: &'s mut S,
}

impl<'a, 's, S: Sink + ?Sized> Parser<'a, 's, S> {
    pub(crate) fn new(input: &'a str, sink: &'s mut S, options: &Options) -> Self {
        Self {
            cursor: Cursor::new(input),
            list_stack: SmallVec::new(),
            in_table: false,
            mediawiki_depth: 0,
            pending_blank_item: false,
            text: String::with_capacity(256),
            format_depth: 0,
            options: *options,
            sink,
        }
    }

    /// Parse the whole input, then close everything left open.
    pub(crate) fn run(mut self) {
        debug!("parsing {} bytes of creole", self.cursor.remaining());
        while self.parse_block() {}
        self.finish();
        debug!("parse finished at offset {}", self.cursor.offset());
    }

    /// End-of-input close sequence: lists innermost first, the pipe table,
    /// then every open mediawiki table.
    fn finish(&mut self) {
        self.flush_text();
        self.close_lists_and_table();
        while self.mediawiki_depth > 0 {
            self.sink.table_cell_close();
            self.sink.table_row_close();
            self.sink.table_close();
            self.mediawiki_depth -= 1;
        }
    }

    /// Close list levels until `depth` remain.
    pub(crate) fn close_lists_to(&mut self, depth: usize) {
        while self.list_stack.len() > depth {
            if let Some(kind) = self.list_stack.pop() {
                self.sink.list_close(kind);
            }
        }
    }

    /// Close every open list and the pipe table. Mediawiki tables stay open.
    pub(crate) fn close_lists_and_table(&mut self) {
        self.close_lists_to(0);
        if self.in_table {
            self.sink.table_close();
            self.in_table = false;
        }
    }

    /// Emit the pending text run, if any.
    #[inline]
    pub(crate) fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.sink.text(&self.text);
            self.text.clear();
        }
    }
}
