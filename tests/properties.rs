//! Property tests: every input parses, and the event stream is balanced.

use ferrocreole::{
    Event, FormatKind, ListKind, Options, Sink, escape_html, events, events_with_options,
    parse_bytes, parse_with_options, to_html,
};
use proptest::prelude::*;

/// An open construct, as tracked by [`Balance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Open {
    Table,
    Row,
    HeadCell,
    Cell,
    List(ListKind),
    Paragraph,
    Heading(usize),
    Format(FormatKind),
}

/// Sink that checks open/close pairing as events arrive.
#[derive(Default)]
struct Balance {
    stack: Vec<Open>,
    errors: Vec<String>,
}

impl Balance {
    fn open(&mut self, what: Open) {
        self.stack.push(what);
    }

    fn close(&mut self, what: Open) {
        match self.stack.pop() {
            Some(top) if top == what => {}
            top => self.errors.push(format!("close {what:?} with {top:?} on top")),
        }
    }

    fn expect_top(&mut self, what: Open) {
        if self.stack.last() != Some(&what) {
            self.errors
                .push(format!("expected {what:?} on top, found {:?}", self.stack.last()));
        }
    }
}

impl Sink for Balance {
    fn text(&mut self, text: &str) {
        if text.is_empty() {
            self.errors.push("empty text event".to_string());
        }
    }
    fn table_open(&mut self) {
        self.open(Open::Table);
    }
    fn table_row_open(&mut self) {
        self.expect_top(Open::Table);
        self.open(Open::Row);
    }
    fn table_head_cell_open(&mut self, colspan: u8) {
        assert!((1..=99).contains(&colspan));
        self.expect_top(Open::Row);
        self.open(Open::HeadCell);
    }
    fn table_head_cell_close(&mut self) {
        self.close(Open::HeadCell);
    }
    fn table_cell_open(&mut self, colspan: u8) {
        assert!((1..=99).contains(&colspan));
        self.expect_top(Open::Row);
        self.open(Open::Cell);
    }
    fn table_cell_close(&mut self) {
        self.close(Open::Cell);
    }
    fn table_row_close(&mut self) {
        self.close(Open::Row);
    }
    fn table_close(&mut self) {
        self.close(Open::Table);
    }
    fn list_open(&mut self, kind: ListKind) {
        self.open(Open::List(kind));
    }
    fn list_next_item(&mut self, kind: ListKind) {
        self.expect_top(Open::List(kind));
    }
    fn list_blank_item(&mut self, kind: ListKind) {
        self.expect_top(Open::List(kind));
    }
    fn list_close(&mut self, kind: ListKind) {
        self.close(Open::List(kind));
    }
    fn paragraph_open(&mut self) {
        self.open(Open::Paragraph);
    }
    fn paragraph_close(&mut self) {
        self.close(Open::Paragraph);
    }
    fn heading_open(&mut self, level: usize) {
        self.open(Open::Heading(level));
    }
    fn heading_close(&mut self, level: usize) {
        self.close(Open::Heading(level));
    }
    fn format_open(&mut self, kind: FormatKind) {
        self.open(Open::Format(kind));
    }
    fn format_close(&mut self, kind: FormatKind) {
        self.close(Open::Format(kind));
    }
}

/// Creole-flavoured input: markup fragments mixed with plain text.
fn creole() -> impl Strategy<Value = String> {
    let pieces = prop::sample::select(vec![
        "*", "**", "#", "##", "-", "--", "----", "=", "==", "|", "||", "|=", "{", "}", "{{",
        "}}", "{{{", "}}}", "[[", "]]", "\\\\", "<<<", ">>>", "~", ":", ">", "!", "//", "__",
        "http://x.y/z", " ", " ", "\t", "\n", "\n", "\n\n", "{|\n", "|-\n", "|}\n", "|\n", "a",
        "word", "é", "ß",
    ]);
    prop::collection::vec(pieces, 0..120).prop_map(|v| v.concat())
}

fn any_options() -> impl Strategy<Value = Options> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(a, m, d)| Options {
        autolinks: a,
        mediawiki_tables: m,
        typographic_dashes: d,
    })
}

proptest! {
    #[test]
    fn events_are_balanced(input in creole(), options in any_options()) {
        let mut balance = Balance::default();
        parse_with_options(&input, &mut balance, &options);
        prop_assert!(balance.errors.is_empty(), "{:?} for {:?}", balance.errors, input);
        prop_assert!(balance.stack.is_empty(), "left open {:?} for {:?}", balance.stack, input);
    }

    #[test]
    fn arbitrary_text_is_balanced(input in "\\PC{0,200}") {
        let mut balance = Balance::default();
        parse_with_options(&input, &mut balance, &Options::default());
        prop_assert!(balance.errors.is_empty());
        prop_assert!(balance.stack.is_empty());
    }

    #[test]
    fn event_count_is_linear(input in creole()) {
        let count = events(&input).len();
        prop_assert!(count <= 8 * input.len() + 8, "{} events for {} bytes", count, input.len());
    }

    #[test]
    fn plain_words_are_one_paragraph(input in "[a-z][a-z ]{0,40}") {
        prop_assert_eq!(
            events(&input),
            vec![Event::ParagraphOpen, Event::Text(input.clone()), Event::ParagraphClose]
        );
    }

    #[test]
    fn disabled_extensions_still_balanced(input in creole()) {
        let options = Options { autolinks: false, mediawiki_tables: false, typographic_dashes: false };
        let evs = events_with_options(&input, &options);
        let opens = evs.iter().filter(|e| matches!(e, Event::TableOpen)).count();
        let closes = evs.iter().filter(|e| matches!(e, Event::TableClose)).count();
        prop_assert_eq!(opens, closes);
    }

    #[test]
    fn rendered_text_never_leaks_angle_brackets(input in "[a-z][a-z <>&\"']{0,60}") {
        let html = to_html(&input);
        let inner = html.trim_start_matches("<p>").trim_end_matches("</p>\n");
        prop_assert!(!inner.contains('<'));
        prop_assert!(!inner.contains('>'));
    }

    #[test]
    fn escape_removes_special_chars(input in "\\PC{0,100}") {
        let escaped = escape_html(&input);
        prop_assert!(!escaped.contains(['<', '>', '"', '\'']));
    }

    #[test]
    fn parse_bytes_fails_only_on_invalid_utf8(bytes in prop::collection::vec(any::<u8>(), 0..100)) {
        let mut sink: Vec<Event> = Vec::new();
        let res = parse_bytes(&bytes, &mut sink, &Options::default());
        prop_assert_eq!(res.is_ok(), std::str::from_utf8(&bytes).is_ok());
        if res.is_err() {
            prop_assert!(sink.is_empty());
        }
    }
}
