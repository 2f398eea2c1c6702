//! Default WebVTT cue grammar.
//!
//! Covers what HLS subtitle segments use: the `WEBVTT` header block (including
//! `X-TIMESTAMP-MAP`), optional cue identifiers, `[hh:]mm:ss.ttt` timings with
//! trailing cue settings, multi-line payloads, and `NOTE`/`STYLE`/`REGION`
//! blocks. Cue settings are accepted and dropped.

#![forbid(unsafe_code)]

use tracing::trace;

use crate::{
    cue::Cue,
    parser::{CueParseError, CueParser, ParseOutput},
};

const SIGNATURE: &str = "WEBVTT";
const ARROW: &str = "-->";
const BOM: char = '\u{feff}';

/// Stateless WebVTT parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebVttParser;

impl WebVttParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CueParser for WebVttParser {
    fn parse(&self, input: &str) -> ParseOutput {
        let normalized = input
            .strip_prefix(BOM)
            .unwrap_or(input)
            .replace("\r\n", "\n")
            .replace('\r', "\n");
        let lines: Vec<&str> = normalized.split('\n').collect();

        let mut out = ParseOutput::default();
        let mut pos = 0;

        if lines.first().is_some_and(|l| is_keyword(l, SIGNATURE)) {
            // Header block runs to the first blank line. A timing line ends it
            // early for writers that omit the blank separator.
            pos = 1;
            while pos < lines.len() && !lines[pos].trim().is_empty() && !lines[pos].contains(ARROW)
            {
                pos += 1;
            }
        } else {
            out.errors.push(CueParseError::MissingSignature);
        }

        while pos < lines.len() {
            if lines[pos].trim().is_empty() {
                pos += 1;
                continue;
            }
            let start = pos;
            while pos < lines.len() && !lines[pos].trim().is_empty() {
                pos += 1;
            }
            parse_block(&lines[start..pos], start + 1, &mut out);
        }

        out
    }
}

/// `first_line` is the 1-based line number of `block[0]`.
///
/// A timing line inside the block ends the current cue's text and starts the
/// next cue, so cues without a blank separator are not merged.
fn parse_block(block: &[&str], first_line: usize, out: &mut ParseOutput) {
    let Some(head) = block.first() else {
        return;
    };
    if ["NOTE", "STYLE", "REGION"]
        .iter()
        .any(|kw| is_keyword(head, kw))
    {
        return;
    }

    let mut rest = block;
    let mut rest_line = first_line;
    while let Some(head) = rest.first() {
        let timing_idx = if head.contains(ARROW) {
            0
        } else if rest.get(1).is_some_and(|l| l.contains(ARROW)) {
            1
        } else {
            out.errors.push(CueParseError::MissingTiming { line: rest_line });
            return;
        };
        let line = rest_line + timing_idx;
        let text_end = rest[timing_idx + 1..]
            .iter()
            .position(|l| l.contains(ARROW))
            .map_or(rest.len(), |i| timing_idx + 1 + i);

        match parse_timing(rest[timing_idx], line, &mut out.errors) {
            Some((start, end)) if end < start => {
                out.errors.push(CueParseError::InvertedTiming { line });
            }
            Some((start, end)) => {
                let text = rest[timing_idx + 1..text_end].join("\n");
                trace!(start, end, line, "webvtt cue");
                out.cues.push(Cue::new(start, end, text));
            }
            None => {}
        }

        rest = &rest[text_end..];
        rest_line += text_end;
    }
}

fn parse_timing(line_str: &str, line: usize, errors: &mut Vec<CueParseError>) -> Option<(f64, f64)> {
    let (left, right) = line_str.split_once(ARROW)?;
    let start_raw = left.trim();
    let end_raw = right.split_whitespace().next().unwrap_or("");

    let start = parse_timestamp(start_raw);
    if start.is_none() {
        errors.push(CueParseError::InvalidTimestamp {
            line,
            value: start_raw.to_string(),
        });
        return None;
    }
    let end = parse_timestamp(end_raw);
    if end.is_none() {
        errors.push(CueParseError::InvalidTimestamp {
            line,
            value: end_raw.to_string(),
        });
        return None;
    }
    start.zip(end)
}

/// Parse `[hh:]mm:ss.ttt` into seconds.
pub(crate) fn parse_timestamp(value: &str) -> Option<f64> {
    let parts: Vec<&str> = value.split(':').collect();
    let (hours, minutes, rest) = match parts.as_slice() {
        [m, rest] => (0, two_digits(m)?, *rest),
        [h, m, rest] => (digits(h, 2)?, two_digits(m)?, *rest),
        _ => return None,
    };
    let (secs, frac) = rest.split_once('.')?;
    let seconds = two_digits(secs)?;
    if minutes >= 60 || seconds >= 60 || frac.len() != 3 {
        return None;
    }
    let millis = digits(frac, 3)?;

    Some(hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds as f64 + millis as f64 / 1000.0)
}

fn two_digits(s: &str) -> Option<u64> {
    if s.len() != 2 {
        return None;
    }
    digits(s, 2)
}

fn digits(s: &str, min_len: usize) -> Option<u64> {
    if s.len() < min_len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// `line` is `keyword` alone or followed by whitespace.
fn is_keyword(line: &str, keyword: &str) -> bool {
    line.strip_prefix(keyword)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with([' ', '\t']))
}
