//! Byte cursor over Creole source text.
//!
//! Every Creole markup character is ASCII, so the scanners work on bytes and
//! only ever split the input at ASCII positions. Slices handed out by the
//! cursor are therefore always valid `&str` boundaries.
//!
//! Reads past the end return `0`, which doubles as the end-of-input sentinel
//! (the input is cut at its first NUL when the cursor is created).

/// A cursor for byte-by-byte scanning of a `&str`.
///
/// # Example
/// ```
/// use ferrocreole::cursor::Cursor;
///
/// let mut cursor = Cursor::new("  == Title");
/// cursor.skip_whitespace();
/// assert_eq!(cursor.peek(), b'=');
/// assert_eq!(cursor.peek_ahead(2), b' ');
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `src`, which ends at its first NUL.
    #[inline]
    pub fn new(src: &'a str) -> Self {
        let end = memchr::memchr(0, src.as_bytes()).unwrap_or(src.len());
        Self {
            src: &src[..end],
            pos: 0,
        }
    }

    /// The text being scanned.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.src
    }

    /// Current byte offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Move to an absolute byte offset.
    #[inline]
    pub fn set_offset(&mut self, pos: usize) {
        debug_assert!(pos <= self.src.len());
        self.pos = pos;
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.src.len() - self.pos
    }

    /// Check if cursor is at end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Byte at an absolute offset, `0` past the end.
    #[inline]
    pub fn byte_at(&self, pos: usize) -> u8 {
        self.src.as_bytes().get(pos).copied().unwrap_or(0)
    }

    /// Current byte, `0` at end of input.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte `n` positions ahead, `0` past the end.
    #[inline]
    pub fn peek_ahead(&self, n: usize) -> u8 {
        self.byte_at(self.pos + n)
    }

    /// Advance by n bytes.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.pos += n;
    }

    /// Advance by 1 byte.
    #[inline]
    pub fn bump(&mut self) {
        debug_assert!(!self.is_eof());
        self.pos += 1;
    }

    /// Consume a specific byte if present.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        if !self.is_eof() && self.peek() == b {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Length of the run of `b` starting at the cursor.
    #[inline]
    pub fn run_length(&self, b: u8) -> usize {
        self.src.as_bytes()[self.pos..]
            .iter()
            .take_while(|&&c| c == b)
            .count()
    }

    /// Skip horizontal whitespace, returning the number of bytes skipped.
    #[inline]
    pub fn skip_whitespace(&mut self) -> usize {
        let start = self.pos;
        self.pos = self.skip_whitespace_from(start);
        self.pos - start
    }

    /// Offset of the first non-whitespace byte at or after `pos`.
    #[inline]
    pub fn skip_whitespace_from(&self, mut pos: usize) -> usize {
        while is_horizontal_space(self.byte_at(pos)) {
            pos += 1;
        }
        pos
    }

    /// True if only horizontal whitespace separates `pos` from the next
    /// newline or the end of input.
    #[inline]
    pub fn is_blank_to_eol(&self, pos: usize) -> bool {
        matches!(self.byte_at(self.skip_whitespace_from(pos)), 0 | b'\n')
    }

    /// Text between two absolute offsets.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.src[start..end]
    }

    /// Bytes from `pos` to the end of input.
    #[inline]
    pub fn bytes_from(&self, pos: usize) -> &'a [u8] {
        &self.src.as_bytes()[pos.min(self.src.len())..]
    }

    /// The whole input as bytes.
    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.src.as_bytes()
    }
}

/// Horizontal whitespace: every control or space code point except `\n`.
#[inline]
pub fn is_horizontal_space(b: u8) -> bool {
    b > 0 && b <= b' ' && b != b'\n'
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset())
            .field("remaining", &self.remaining())
            .finish()
    }
}
