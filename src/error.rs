//! Error type for the byte-level entry point.
//!
//! Parsing itself cannot fail: unterminated markup degrades to text. The only
//! fallible step is decoding the input.

use std::str::Utf8Error;

/// Errors reported by [`crate::parse_bytes`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is not valid UTF-8. Nothing was parsed.
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 {
        /// Length of the longest valid prefix.
        valid_up_to: usize,
        #[source]
        source: Utf8Error,
    },
}

impl From<Utf8Error> for Error {
    fn from(source: Utf8Error) -> Self {
        Self::InvalidUtf8 {
            valid_up_to: source.valid_up_to(),
            source,
        }
    }
}

/// Result alias for this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
