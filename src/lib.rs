//! ferrocreole: fast streaming Wiki Creole to XHTML parser
//!
//! The parser makes a single pass over the input and reports what it finds
//! to a [`Sink`], one method call per event, in document order. It never
//! builds a tree and never fails: unterminated markup is kept as text, and
//! every construct still open at end of input is closed.
//!
//! # Design Principles
//! - No AST: streaming events only
//! - No regex: byte-level scanning over ASCII markup
//! - Raw payloads: the parser escapes nothing, the sink decides
//! - Bounded nesting: list depth and format spans are capped
//!
//! # Example
//! ```
//! let html = ferrocreole::to_html("== Hello ==\n\n* one\n* two");
//! assert_eq!(
//!     html,
//!     "<h2>Hello</h2>\n<ul><li>one</li>\n<li>two</li></ul>\n"
//! );
//! ```

mod block;
pub mod cursor;
pub mod error;
pub mod escape;
pub mod event;
pub mod inline;
pub mod limits;
mod parser;
pub mod render;

pub use error::{Error, Result};
pub use escape::escape_html;
pub use event::{Event, FormatKind, ListKind, Sink, split_payload};
pub use render::HtmlWriter;

use parser::Parser;

/// Parsing options. Every extension is on by default; a disabled extension's
/// syntax is plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Recognize bare `http://` URLs as links.
    pub autolinks: bool,
    /// Recognize `{|`, `|-`, `|` and `|}` mediawiki-style tables.
    pub mediawiki_tables: bool,
    /// Turn ` -- ` into an en dash.
    pub typographic_dashes: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            autolinks: true,
            mediawiki_tables: true,
            typographic_dashes: true,
        }
    }
}

/// Parse Creole text, feeding events to `sink`.
///
/// # Example
/// ```
/// use ferrocreole::{parse, Event};
///
/// let mut events: Vec<Event> = Vec::new();
/// parse("[[abc", &mut events);
/// assert_eq!(
///     events,
///     [Event::ParagraphOpen, Event::Text("[[abc".into()), Event::ParagraphClose]
/// );
/// ```
pub fn parse<S: Sink + ?Sized>(input: &str, sink: &mut S) {
    parse_with_options(input, sink, &Options::default());
}

/// Parse Creole text with options.
pub fn parse_with_options<S: Sink + ?Sized>(input: &str, sink: &mut S, options: &Options) {
    Parser::new(input, sink, options).run();
}

/// Decode `input` as UTF-8 and parse it.
///
/// Invalid input is reported without emitting any event.
///
/// # Example
/// ```
/// use ferrocreole::{parse_bytes, Error, HtmlWriter, Options};
///
/// let mut writer = HtmlWriter::new();
/// let err = parse_bytes(b"ok \xff", &mut writer, &Options::default()).unwrap_err();
/// assert!(matches!(err, Error::InvalidUtf8 { valid_up_to: 3, .. }));
/// assert!(writer.is_empty());
/// ```
pub fn parse_bytes<S: Sink + ?Sized>(input: &[u8], sink: &mut S, options: &Options) -> Result<()> {
    let text = std::str::from_utf8(input)?;
    parse_with_options(text, sink, options);
    Ok(())
}

/// Parse Creole text and collect the events.
pub fn events(input: &str) -> Vec<Event> {
    events_with_options(input, &Options::default())
}

/// Parse Creole text with options and collect the events.
pub fn events_with_options(input: &str, options: &Options) -> Vec<Event> {
    let mut events = Vec::new();
    parse_with_options(input, &mut events, options);
    events
}

/// Convert Creole to XHTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = ferrocreole::to_html("**bold** and //italic//");
/// assert_eq!(html, "<p><strong>bold</strong> and <em>italic</em></p>\n");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Creole to XHTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    parse_with_options(input, &mut writer, options);
    writer.into_string()
}

/// Convert Creole to XHTML, writing into a provided buffer.
///
/// The buffer is cleared first; its allocation is reused.
pub fn to_html_into(input: &str, out: &mut String) {
    out.clear();
    out.reserve(input.len() + input.len() / 4);
    let mut writer = HtmlWriter::with_capacity(0);
    std::mem::swap(writer.buffer_mut(), out);
    parse(input, &mut writer);
    std::mem::swap(writer.buffer_mut(), out);
}
