//! Parsing-strategy contract.
//!
//! A [`CueParser`] turns decoded text into cues plus non-fatal diagnostics.
//! Implementations hold no per-payload state, so one instance can be shared by
//! every track.

#![forbid(unsafe_code)]

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;
use thiserror::Error;

use crate::cue::Cue;

/// Non-fatal cue syntax diagnostic.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CueParseError {
    #[error("payload is not valid UTF-8; invalid sequences were replaced")]
    InvalidUtf8,

    #[error("missing WEBVTT signature")]
    MissingSignature,

    #[error("line {line}: cue block has no timing line")]
    MissingTiming { line: usize },

    #[error("line {line}: malformed timestamp {value:?}")]
    InvalidTimestamp { line: usize, value: String },

    #[error("line {line}: cue ends before it starts")]
    InvertedTiming { line: usize },

    /// Parser produced a cue ending before it starts. `index` is the cue's
    /// position in the parser output.
    #[error("cue #{index} ends before it starts")]
    InvertedCue { index: usize },
}

/// Result of parsing one payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutput {
    /// Cues in document order.
    pub cues: Vec<Cue>,
    /// Diagnostics collected while parsing. Never stop the parse.
    pub errors: Vec<CueParseError>,
}

/// Pluggable timed-text grammar.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait CueParser: Send + Sync {
    /// Parse a complete payload.
    fn parse(&self, input: &str) -> ParseOutput;
}
