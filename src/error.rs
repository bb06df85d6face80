//! Error types for the countdown.

use std::io;

use thiserror::Error;

use crate::font::Font;

#[derive(Debug, Error)]
pub enum CountdownError {
    #[error("Invalid time format: {input}. Use formats like '10m', '2h', '30s'")]
    InvalidFormat { input: String },

    #[error("Countdown interrupted")]
    Interrupted,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Failure on a large-glyph rendering path. Always recovered locally by
/// falling back to a smaller font or plain text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FontError {
    #[error("font {font:?} has no glyph for {ch:?}")]
    UnsupportedGlyph { font: Font, ch: char },
}
