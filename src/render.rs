//! XHTML output writer.
//!
//! [`HtmlWriter`] is a [`Sink`] that renders the event stream to XHTML
//! fragments. Text and payloads are escaped on the way out.

use crate::escape;
use crate::event::{FormatKind, ListKind, Sink, split_payload};

/// XHTML writer backed by a reusable `String` buffer.
///
/// # Example
/// ```
/// use ferrocreole::{parse, HtmlWriter};
///
/// let mut writer = HtmlWriter::with_capacity_for(32);
/// parse("Hello **<World>**", &mut writer);
/// assert_eq!(writer.into_string(), "<p>Hello <strong>&lt;World&gt;</strong></p>\n");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Typical XHTML is ~1.25x the Creole source.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 4),
        }
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
        }
    }

    /// Write a static string (compile-time known) without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.push_str(s);
    }

    /// Write text with XHTML escaping.
    #[inline]
    pub fn write_escaped(&mut self, text: &str) {
        escape::escape_html_into(&mut self.out, text);
    }

    /// Get current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear the buffer for reuse, keeping its capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Get the output as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consume the writer and return the output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    /// Mutable access to the underlying buffer.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.out
    }

    fn cell_open(&mut self, tag: &'static str, colspan: u8) {
        self.out.push('<');
        self.out.push_str(tag);
        if colspan != 1 {
            self.out.push_str(" colspan=\"");
            self.out.push_str(&colspan.to_string());
            self.out.push('"');
        }
        self.out.push('>');
    }
}

impl Sink for HtmlWriter {
    fn text(&mut self, text: &str) {
        self.write_escaped(text);
    }

    fn table_open(&mut self) {
        self.write_str("<table>");
    }

    fn table_row_open(&mut self) {
        self.write_str("<tr>");
    }

    fn table_head_cell_open(&mut self, colspan: u8) {
        self.cell_open("th", colspan);
    }

    fn table_head_cell_close(&mut self) {
        self.write_str("</th>");
    }

    fn table_cell_open(&mut self, colspan: u8) {
        self.cell_open("td", colspan);
    }

    fn table_cell_close(&mut self) {
        self.write_str("</td>");
    }

    fn table_row_close(&mut self) {
        self.write_str("</tr>");
    }

    fn table_close(&mut self) {
        self.write_str("</table>");
    }

    fn list_open(&mut self, kind: ListKind) {
        self.write_str(match kind {
            ListKind::Bullet | ListKind::Dash => "<ul><li>",
            ListKind::Numbered => "<ol><li>",
            ListKind::Quote => "<blockquote>",
            ListKind::Indent => "<div class=\"indent\">",
            ListKind::Center => "<div class=\"center\">",
        });
    }

    fn list_next_item(&mut self, kind: ListKind) {
        match kind {
            ListKind::Bullet | ListKind::Dash | ListKind::Numbered => self.write_str("</li>\n<li>"),
            ListKind::Center => self.write_str("</div>\n<div class=\"center\">"),
            ListKind::Quote | ListKind::Indent => {}
        }
    }

    fn list_blank_item(&mut self, kind: ListKind) {
        self.write_str(match kind {
            ListKind::Quote | ListKind::Indent => "<br/><br/>\n",
            _ => "&nbsp;",
        });
    }

    fn list_close(&mut self, kind: ListKind) {
        self.write_str(match kind {
            ListKind::Bullet | ListKind::Dash => "</li></ul>\n",
            ListKind::Numbered => "</li></ol>\n",
            ListKind::Quote => "</blockquote>\n",
            ListKind::Indent | ListKind::Center => "</div>\n",
        });
    }

    fn paragraph_open(&mut self) {
        self.write_str("<p>");
    }

    fn paragraph_close(&mut self) {
        self.write_str("</p>\n");
    }

    fn heading_open(&mut self, level: usize) {
        self.out.push_str("<h");
        self.out.push_str(&level.to_string());
        self.out.push('>');
    }

    fn heading_close(&mut self, level: usize) {
        self.out.push_str("</h");
        self.out.push_str(&level.to_string());
        self.out.push_str(">\n");
    }

    fn format_open(&mut self, kind: FormatKind) {
        self.write_str(match kind {
            FormatKind::Bold => "<strong>",
            FormatKind::Italic => "<em>",
            FormatKind::Underline => "<span class=\"underline\">",
            FormatKind::Monospace => "<code>",
        });
    }

    fn format_close(&mut self, kind: FormatKind) {
        self.write_str(match kind {
            FormatKind::Bold => "</strong>",
            FormatKind::Italic => "</em>",
            FormatKind::Underline => "</span>",
            FormatKind::Monospace => "</code>",
        });
    }

    fn horizontal_rule(&mut self) {
        self.write_str("\n<hr/>\n");
    }

    fn line_break(&mut self) {
        self.write_str("<br/>\n");
    }

    fn literal_block(&mut self, text: &str) {
        self.write_str("<pre>");
        self.write_escaped(text);
        self.write_str("</pre>\n");
    }

    fn literal_inline(&mut self, text: &str) {
        self.write_str("<span class=\"nowiki\">");
        self.write_escaped(text);
        self.write_str("</span>");
    }

    fn image(&mut self, payload: &str) {
        let (src, alt) = split_payload(payload);
        self.write_str("<img src=\"");
        self.write_escaped(src);
        self.write_str("\"");
        if let Some(alt) = alt {
            self.write_str(" alt=\"");
            self.write_escaped(alt);
            self.write_str("\"");
        }
        self.write_str(" />");
    }

    fn link(&mut self, payload: &str) {
        let (href, title) = split_payload(payload);
        self.write_str("<a href=\"");
        self.write_escaped(href);
        self.write_str("\">");
        self.write_escaped(title.unwrap_or(href));
        self.write_str("</a>");
    }

    fn placeholder(&mut self, payload: &str) {
        self.write_str("&lt;&lt;&lt;Placeholder:");
        self.write_escaped(payload);
        self.write_str("&gt;&gt;&gt;");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_basic() {
        let mut writer = HtmlWriter::new();
        writer.paragraph_open();
        writer.text("a < b");
        writer.paragraph_close();
        assert_eq!(writer.as_str(), "<p>a &lt; b</p>\n");
    }

    #[test]
    fn test_cell_colspan_attribute() {
        let mut writer = HtmlWriter::new();
        writer.table_cell_open(1);
        writer.table_head_cell_open(12);
        assert_eq!(writer.as_str(), "<td><th colspan=\"12\">");
    }

    #[test]
    fn test_link_without_title_repeats_target() {
        let mut writer = HtmlWriter::new();
        writer.link("a&b");
        assert_eq!(writer.as_str(), "<a href=\"a&amp;b\">a&amp;b</a>");
    }

    #[test]
    fn test_image_with_alt() {
        let mut writer = HtmlWriter::new();
        writer.image("pic.png|A \"pic\"");
        assert_eq!(
            writer.as_str(),
            "<img src=\"pic.png\" alt=\"A &quot;pic&quot;\" />"
        );
    }

    #[test]
    fn test_clear_reuses_buffer() {
        let mut writer = HtmlWriter::with_capacity(64);
        writer.horizontal_rule();
        assert!(!writer.is_empty());
        writer.clear();
        assert_eq!(writer.len(), 0);
    }
}
