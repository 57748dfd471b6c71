//! Nesting and formatting limits.
//!
//! These bound the parser's recursion and open-block bookkeeping so that
//! adversarial input cannot exhaust the stack.

/// Maximum number of simultaneously open list, quote and indent levels.
/// Markers beyond this depth are treated as item text.
pub const MAX_LIST_DEPTH: usize = 128;

/// Maximum nesting depth for format spans (`**`, `//`, `__`, `##`).
/// Doubled format characters beyond this depth are literal text.
pub const MAX_FORMAT_NESTING: usize = 128;

/// Largest colspan reported for a table cell. Longer `|` runs are clamped
/// in the emitted value only.
pub const MAX_COLSPAN: usize = 99;
