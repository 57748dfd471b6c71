//! Tilde escapes and nowiki spans.

use ferrocreole::Event::*;
use ferrocreole::{events, to_html};
use pretty_assertions::assert_eq;

// === Tilde ===

#[test]
fn escaped_bold_markers() {
    let evs = events("~**not bold~**");
    assert!(!evs.iter().any(|e| matches!(e, FormatOpen(_))));
    assert_eq!(
        evs,
        vec![ParagraphOpen, Text("**not bold**".into()), ParagraphClose]
    );
}

#[test]
fn marker_at_end_of_input_is_text() {
    assert_eq!(
        events("~**not bold**"),
        vec![ParagraphOpen, Text("**not bold**".into()), ParagraphClose]
    );
    assert_eq!(to_html("a //"), "<p>a //</p>\n");
}

#[test]
fn escaped_tilde() {
    assert_eq!(to_html("a ~~ b"), "<p>a ~ b</p>\n");
}

#[test]
fn tilde_before_plain_char_is_kept() {
    assert_eq!(to_html("~x ~"), "<p>~x ~</p>\n");
}

#[test]
fn escaped_link_opener() {
    assert_eq!(to_html("~[[x]]"), "<p>[[x]]</p>\n");
}

#[test]
fn escaped_line_break() {
    assert_eq!(to_html("a~\\\\b"), "<p>a\\\\b</p>\n");
}

#[test]
fn escaped_dash_pair() {
    assert_eq!(to_html("a ~-- b"), "<p>a -- b</p>\n");
}

#[test]
fn escaped_heading_marker() {
    assert_eq!(to_html("~= not heading"), "<p>= not heading</p>\n");
}

#[test]
fn escaped_table_marker() {
    assert_eq!(to_html("~|not|table|"), "<p>|not|table|</p>\n");
}

#[test]
fn escaped_marker_only_at_line_start() {
    assert_eq!(to_html("a ~= b"), "<p>a ~= b</p>\n");
}

#[test]
fn escaped_marker_on_continuation_line() {
    assert_eq!(to_html("a\n~= b"), "<p>a\n= b</p>\n");
}

#[test]
fn escaped_marker_after_list() {
    assert_eq!(
        to_html("* a\n= h\n~* b"),
        "<ul><li>a<h1>h</h1>\n</li></ul>\n<p>* b</p>\n"
    );
}

// === Nowiki ===

#[test]
fn inline_nowiki_is_verbatim() {
    assert_eq!(
        to_html("{{{**x** <y>}}}"),
        "<p><span class=\"nowiki\">**x** &lt;y&gt;</span></p>\n"
    );
}

#[test]
fn nowiki_closer_escape() {
    assert_eq!(
        events("{{{a~}}}b}}}"),
        vec![ParagraphOpen, LiteralInline("a}}}b".into()), ParagraphClose]
    );
}

#[test]
fn nowiki_long_closer() {
    assert_eq!(
        events("{{{x}}}}"),
        vec![ParagraphOpen, LiteralInline("x}".into()), ParagraphClose]
    );
}

#[test]
fn unterminated_nowiki_is_text() {
    assert_eq!(to_html("{{{abc"), "<p>{{{abc</p>\n");
}

#[test]
fn literal_block() {
    assert_eq!(
        to_html("{{{\n<b>\n  **x**\n}}}"),
        "<pre>&lt;b&gt;\n  **x**</pre>\n"
    );
}

#[test]
fn literal_block_inside_paragraph_splits_it() {
    assert_eq!(
        events("text {{{\ncode\n}}} more"),
        vec![
            ParagraphOpen,
            Text("text ".into()),
            ParagraphClose,
            LiteralBlock("code".into()),
            ParagraphOpen,
            Text(" more".into()),
            ParagraphClose,
        ]
    );
}

#[test]
fn literal_block_in_list_item_keeps_item() {
    assert_eq!(
        events("* a {{{\nb\n}}}"),
        vec![
            ferrocreole::Event::ListOpen(ferrocreole::ListKind::Bullet),
            Text("a ".into()),
            LiteralBlock("b".into()),
            ferrocreole::Event::ListClose(ferrocreole::ListKind::Bullet),
        ]
    );
}

#[test]
fn empty_literal_block_inside_paragraph() {
    assert_eq!(
        events("a {{{\n}}} b"),
        vec![ParagraphOpen, Text("a ".into()), Text(" b".into()), ParagraphClose]
    );
}
