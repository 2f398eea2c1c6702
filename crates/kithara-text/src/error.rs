#![forbid(unsafe_code)]

use thiserror::Error;

/// Timed-text track errors.
///
/// Cue syntax problems are not errors; they are reported as
/// [`CueParseError`](crate::CueParseError) diagnostics.
#[derive(Debug, Error)]
pub enum TextError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Loader error: {0}")]
    Loader(String),

    #[error("Track disposed")]
    Disposed,
}

impl From<url::ParseError> for TextError {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidUrl(e.to_string())
    }
}

pub type TextResult<T> = Result<T, TextError>;
