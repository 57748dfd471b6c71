//! Parser events and the sink interface that receives them.
//!
//! The parser never builds a tree. It calls one [`Sink`] method per event,
//! in document order. Structure is expressed by open/close pairs, and the
//! stream is always balanced: anything still open at end of input is closed
//! before the parse returns.

/// Kind of a list-like block, identified by its marker character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Bulleted list (`*`).
    Bullet,
    /// Bulleted list (`-`).
    Dash,
    /// Numbered list (`#`).
    Numbered,
    /// Block quote (`>`).
    Quote,
    /// Indented block (`:`).
    Indent,
    /// Centered block (`!`).
    Center,
}

impl ListKind {
    /// Map a marker byte to its list kind.
    #[inline]
    pub fn from_marker(b: u8) -> Option<Self> {
        match b {
            b'*' => Some(Self::Bullet),
            b'-' => Some(Self::Dash),
            b'#' => Some(Self::Numbered),
            b'>' => Some(Self::Quote),
            b':' => Some(Self::Indent),
            b'!' => Some(Self::Center),
            _ => None,
        }
    }

    /// The marker byte that opens this kind.
    #[inline]
    pub fn marker(self) -> u8 {
        match self {
            Self::Bullet => b'*',
            Self::Dash => b'-',
            Self::Numbered => b'#',
            Self::Quote => b'>',
            Self::Indent => b':',
            Self::Center => b'!',
        }
    }

    /// The marker as a `char`.
    #[inline]
    pub fn as_char(self) -> char {
        self.marker() as char
    }
}

/// Kind of an inline format span, identified by its doubled marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// `**bold**`
    Bold,
    /// `//italic//`
    Italic,
    /// `__underline__`
    Underline,
    /// `##monospace##`
    Monospace,
}

impl FormatKind {
    /// Map a marker byte to its format kind.
    #[inline]
    pub fn from_marker(b: u8) -> Option<Self> {
        match b {
            b'*' => Some(Self::Bold),
            b'/' => Some(Self::Italic),
            b'_' => Some(Self::Underline),
            b'#' => Some(Self::Monospace),
            _ => None,
        }
    }

    /// The marker byte (written doubled in source).
    #[inline]
    pub fn marker(self) -> u8 {
        match self {
            Self::Bold => b'*',
            Self::Italic => b'/',
            Self::Underline => b'_',
            Self::Monospace => b'#',
        }
    }

    /// The marker as a `char`.
    #[inline]
    pub fn as_char(self) -> char {
        self.marker() as char
    }
}

/// Receiver of parser events.
///
/// Every method has an empty default body, so a sink only implements the
/// events it cares about. Text payloads are raw source text: nothing is
/// escaped for any output format. See [`crate::escape`] for XHTML escaping.
///
/// # Example
/// ```
/// use ferrocreole::{parse, Sink};
///
/// #[derive(Default)]
/// struct LinkCollector(Vec<String>);
///
/// impl Sink for LinkCollector {
///     fn link(&mut self, payload: &str) {
///         self.0.push(payload.to_string());
///     }
/// }
///
/// let mut links = LinkCollector::default();
/// parse("see [[Home|home page]] and http://example.com/", &mut links);
/// assert_eq!(links.0, ["Home|home page", "http://example.com/"]);
/// ```
#[allow(unused_variables)]
pub trait Sink {
    /// A run of literal text.
    fn text(&mut self, text: &str) {}

    /// Start of a table.
    fn table_open(&mut self) {}
    /// Start of a table row.
    fn table_row_open(&mut self) {}
    /// Start of a header cell spanning `colspan` columns (1..=99).
    fn table_head_cell_open(&mut self, colspan: u8) {}
    /// End of a header cell.
    fn table_head_cell_close(&mut self) {}
    /// Start of a data cell spanning `colspan` columns (1..=99).
    fn table_cell_open(&mut self, colspan: u8) {}
    /// End of a data cell.
    fn table_cell_close(&mut self) {}
    /// End of a table row.
    fn table_row_close(&mut self) {}
    /// End of a table.
    fn table_close(&mut self) {}

    /// Start of a list-like block and its first item.
    fn list_open(&mut self, kind: ListKind) {}
    /// Start of the next item at the same level.
    fn list_next_item(&mut self, kind: ListKind) {}
    /// A blank line inside the block.
    fn list_blank_item(&mut self, kind: ListKind) {}
    /// End of the current item and the block.
    fn list_close(&mut self, kind: ListKind) {}

    /// Start of a paragraph.
    fn paragraph_open(&mut self) {}
    /// End of a paragraph.
    fn paragraph_close(&mut self) {}

    /// Start of a heading. `level` is the number of `=` and is not clamped.
    fn heading_open(&mut self, level: usize) {}
    /// End of a heading.
    fn heading_close(&mut self, level: usize) {}

    /// Start of a format span.
    fn format_open(&mut self, kind: FormatKind) {}
    /// End of a format span.
    fn format_close(&mut self, kind: FormatKind) {}

    /// A horizontal rule (`----`).
    fn horizontal_rule(&mut self) {}
    /// A forced line break (`\\`).
    fn line_break(&mut self) {}

    /// A multi-line `{{{ }}}` block, emitted verbatim.
    fn literal_block(&mut self, text: &str) {}
    /// A single-line `{{{ }}}` span, emitted verbatim.
    fn literal_inline(&mut self, text: &str) {}

    /// An image `{{path|title}}`. The payload is everything between the braces.
    fn image(&mut self, payload: &str) {}
    /// A link `[[target|title]]` or a bare URL.
    fn link(&mut self, payload: &str) {}
    /// A placeholder `<<<name>>>`.
    fn placeholder(&mut self, payload: &str) {}
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn text(&mut self, text: &str) {
        (**self).text(text)
    }
    fn table_open(&mut self) {
        (**self).table_open()
    }
    fn table_row_open(&mut self) {
        (**self).table_row_open()
    }
    fn table_head_cell_open(&mut self, colspan: u8) {
        (**self).table_head_cell_open(colspan)
    }
    fn table_head_cell_close(&mut self) {
        (**self).table_head_cell_close()
    }
    fn table_cell_open(&mut self, colspan: u8) {
        (**self).table_cell_open(colspan)
    }
    fn table_cell_close(&mut self) {
        (**self).table_cell_close()
    }
    fn table_row_close(&mut self) {
        (**self).table_row_close()
    }
    fn table_close(&mut self) {
        (**self).table_close()
    }
    fn list_open(&mut self, kind: ListKind) {
        (**self).list_open(kind)
    }
    fn list_next_item(&mut self, kind: ListKind) {
        (**self).list_next_item(kind)
    }
    fn list_blank_item(&mut self, kind: ListKind) {
        (**self).list_blank_item(kind)
    }
    fn list_close(&mut self, kind: ListKind) {
        (**self).list_close(kind)
    }
    fn paragraph_open(&mut self) {
        (**self).paragraph_open()
    }
    fn paragraph_close(&mut self) {
        (**self).paragraph_close()
    }
    fn heading_open(&mut self, level: usize) {
        (**self).heading_open(level)
    }
    fn heading_close(&mut self, level: usize) {
        (**self).heading_close(level)
    }
    fn format_open(&mut self, kind: FormatKind) {
        (**self).format_open(kind)
    }
    fn format_close(&mut self, kind: FormatKind) {
        (**self).format_close(kind)
    }
    fn horizontal_rule(&mut self) {
        (**self).horizontal_rule()
    }
    fn line_break(&mut self) {
        (**self).line_break()
    }
    fn literal_block(&mut self, text: &str) {
        (**self).literal_block(text)
    }
    fn literal_inline(&mut self, text: &str) {
        (**self).literal_inline(text)
    }
    fn image(&mut self, payload: &str) {
        (**self).image(payload)
    }
    fn link(&mut self, payload: &str) {
        (**self).link(payload)
    }
    fn placeholder(&mut self, payload: &str) {
        (**self).placeholder(payload)
    }
}

/// An owned parser event, one variant per [`Sink`] method.
///
/// `Vec<Event>` implements [`Sink`], which makes it easy to record a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Literal text.
    Text(String),

    /// Start of a table.
    TableOpen,
    /// Start of a table row.
    TableRowOpen,
    /// Start of a header cell.
    TableHeadCellOpen {
        /// Columns spanned (1..=99).
        colspan: u8,
    },
    /// End of a header cell.
    TableHeadCellClose,
    /// Start of a data cell.
    TableCellOpen {
        /// Columns spanned (1..=99).
        colspan: u8,
    },
    /// End of a data cell.
    TableCellClose,
    /// End of a table row.
    TableRowClose,
    /// End of a table.
    TableClose,

    /// Start of a list-like block.
    ListOpen(ListKind),
    /// Next item at the same level.
    ListNextItem(ListKind),
    /// Blank line inside the block.
    ListBlankItem(ListKind),
    /// End of a list-like block.
    ListClose(ListKind),

    /// Start of a paragraph.
    ParagraphOpen,
    /// End of a paragraph.
    ParagraphClose,

    /// Start of a heading.
    HeadingOpen {
        /// Number of `=` in the opener.
        level: usize,
    },
    /// End of a heading.
    HeadingClose {
        /// Number of `=` in the opener.
        level: usize,
    },

    /// Start of a format span.
    FormatOpen(FormatKind),
    /// End of a format span.
    FormatClose(FormatKind),

    /// Horizontal rule.
    HorizontalRule,
    /// Forced line break.
    LineBreak,

    /// Multi-line literal block.
    LiteralBlock(String),
    /// Single-line literal span.
    LiteralInline(String),

    /// Image payload.
    Image(String),
    /// Link payload.
    Link(String),
    /// Placeholder payload.
    Placeholder(String),
}

impl Event {
    /// Text-bearing payload of the event, if any.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Text(s)
            | Self::LiteralBlock(s)
            | Self::LiteralInline(s)
            | Self::Image(s)
            | Self::Link(s)
            | Self::Placeholder(s) => Some(s),
            _ => None,
        }
    }
}

impl Sink for Vec<Event> {
    fn text(&mut self, text: &str) {
        self.push(Event::Text(text.to_string()));
    }
    fn table_open(&mut self) {
        self.push(Event::TableOpen);
    }
    fn table_row_open(&mut self) {
        self.push(Event::TableRowOpen);
    }
    fn table_head_cell_open(&mut self, colspan: u8) {
        self.push(Event::TableHeadCellOpen { colspan });
    }
    fn table_head_cell_close(&mut self) {
        self.push(Event::TableHeadCellClose);
    }
    fn table_cell_open(&mut self, colspan: u8) {
        self.push(Event::TableCellOpen { colspan });
    }
    fn table_cell_close(&mut self) {
        self.push(Event::TableCellClose);
    }
    fn table_row_close(&mut self) {
        self.push(Event::TableRowClose);
    }
    fn table_close(&mut self) {
        self.push(Event::TableClose);
    }
    fn list_open(&mut self, kind: ListKind) {
        self.push(Event::ListOpen(kind));
    }
    fn list_next_item(&mut self, kind: ListKind) {
        self.push(Event::ListNextItem(kind));
    }
    fn list_blank_item(&mut self, kind: ListKind) {
        self.push(Event::ListBlankItem(kind));
    }
    fn list_close(&mut self, kind: ListKind) {
        self.push(Event::ListClose(kind));
    }
    fn paragraph_open(&mut self) {
        self.push(Event::ParagraphOpen);
    }
    fn paragraph_close(&mut self) {
        self.push(Event::ParagraphClose);
    }
    fn heading_open(&mut self, level: usize) {
        self.push(Event::HeadingOpen { level });
    }
    fn heading_close(&mut self, level: usize) {
        self.push(Event::HeadingClose { level });
    }
    fn format_open(&mut self, kind: FormatKind) {
        self.push(Event::FormatOpen(kind));
    }
    fn format_close(&mut self, kind: FormatKind) {
        self.push(Event::FormatClose(kind));
    }
    fn horizontal_rule(&mut self) {
        self.push(Event::HorizontalRule);
    }
    fn line_break(&mut self) {
        self.push(Event::LineBreak);
    }
    fn literal_block(&mut self, text: &str) {
        self.push(Event::LiteralBlock(text.to_string()));
    }
    fn literal_inline(&mut self, text: &str) {
        self.push(Event::LiteralInline(text.to_string()));
    }
    fn image(&mut self, payload: &str) {
        self.push(Event::Image(payload.to_string()));
    }
    fn link(&mut self, payload: &str) {
        self.push(Event::Link(payload.to_string()));
    }
    fn placeholder(&mut self, payload: &str) {
        self.push(Event::Placeholder(payload.to_string()));
    }
}

/// Split a link or image payload at its first `|` into target and title.
///
/// A trailing `|` gives an empty title, which is distinct from no title.
///
/// # Example
/// ```
/// use ferrocreole::split_payload;
///
/// assert_eq!(split_payload("Home|Start page"), ("Home", Some("Start page")));
/// assert_eq!(split_payload("a|b|c"), ("a", Some("b|c")));
/// assert_eq!(split_payload("Home|"), ("Home", Some("")));
/// assert_eq!(split_payload("Home"), ("Home", None));
/// ```
pub fn split_payload(payload: &str) -> (&str, Option<&str>) {
    match memchr::memchr(b'|', payload.as_bytes()) {
        Some(i) => (&payload[..i], Some(&payload[i + 1..])),
        None => (payload, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_kind_markers_round_trip() {
        for &b in b"*-#>:!" {
            let kind = ListKind::from_marker(b).unwrap();
            assert_eq!(kind.marker(), b);
        }
        assert_eq!(ListKind::from_marker(b'/'), None);
    }

    #[test]
    fn test_format_kind_markers() {
        assert_eq!(FormatKind::from_marker(b'*'), Some(FormatKind::Bold));
        assert_eq!(FormatKind::from_marker(b'/'), Some(FormatKind::Italic));
        assert_eq!(FormatKind::from_marker(b'_'), Some(FormatKind::Underline));
        assert_eq!(FormatKind::from_marker(b'#'), Some(FormatKind::Monospace));
        assert_eq!(FormatKind::from_marker(b'-'), None);
        assert_eq!(FormatKind::Underline.as_char(), '_');
    }

    #[test]
    fn test_vec_sink_records() {
        let mut events: Vec<Event> = Vec::new();
        events.paragraph_open();
        events.text("hi");
        events.table_cell_open(3);
        assert_eq!(
            events,
            vec![
                Event::ParagraphOpen,
                Event::Text("hi".into()),
                Event::TableCellOpen { colspan: 3 },
            ]
        );
    }

    #[test]
    fn test_sink_through_mut_ref() {
        fn feed(mut sink: impl Sink) {
            sink.horizontal_rule();
        }
        let mut events: Vec<Event> = Vec::new();
        feed(&mut events);
        assert_eq!(events, vec![Event::HorizontalRule]);
    }

    #[test]
    fn test_payload() {
        assert_eq!(Event::Link("x".into()).payload(), Some("x"));
        assert_eq!(Event::LineBreak.payload(), None);
    }

    #[test]
    fn test_split_payload_empty_title() {
        assert_eq!(split_payload("img.png|"), ("img.png", Some("")));
        assert_eq!(split_payload("|t"), ("", Some("t")));
    }
}
