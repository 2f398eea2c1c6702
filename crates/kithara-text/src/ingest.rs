//! Cue ingestion: decode, parse, deduplicate, flush.

#![forbid(unsafe_code)]

use std::sync::Arc;

use kithara_events::TextEvent;
use tracing::{debug, warn, warn_span};

use crate::{
    dedup,
    parser::{CueParseError, CueParser},
    track::TextTrackBase,
    webvtt::WebVttParser,
};

/// Outcome of ingesting one payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestReport {
    /// Cues appended to the track.
    pub added: usize,
    /// Cues rejected as boundary repeats.
    pub duplicates: usize,
    /// Syntax diagnostics for the payload.
    pub errors: Vec<CueParseError>,
}

/// Drives a [`CueParser`] over whole payloads and merges the result into a
/// track's cue list.
///
/// Runs to completion on every call; there is no state between payloads.
#[derive(Clone)]
pub struct CueIngester {
    parser: Arc<dyn CueParser>,
}

impl std::fmt::Debug for CueIngester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CueIngester")
            .field("parser", &"CueParser")
            .finish()
    }
}

impl Default for CueIngester {
    fn default() -> Self {
        Self::new(Arc::new(WebVttParser::new()))
    }
}

impl CueIngester {
    pub fn new(parser: Arc<dyn CueParser>) -> Self {
        Self { parser }
    }

    /// Parse `bytes` and append every new cue to `track`.
    ///
    /// Diagnostics are logged and published, then `LoadedData` is triggered,
    /// whether or not any cue was added.
    pub fn ingest<T>(&self, bytes: &[u8], track: &mut T) -> IngestReport
    where
        T: TextTrackBase + ?Sized,
    {
        let mut errors = Vec::new();
        let text = match std::str::from_utf8(bytes) {
            Ok(text) => std::borrow::Cow::Borrowed(text),
            Err(_) => {
                errors.push(CueParseError::InvalidUtf8);
                String::from_utf8_lossy(bytes)
            }
        };

        let parsed = self.parser.parse(&text);
        errors.extend(parsed.errors);

        let mut report = IngestReport::default();
        for (index, cue) in parsed.cues.into_iter().enumerate() {
            if !cue.is_well_formed() {
                errors.push(CueParseError::InvertedCue { index });
            } else if dedup::is_duplicate(track.cues().as_slice(), &cue) {
                report.duplicates += 1;
            } else {
                track.add_cue(cue);
                report.added += 1;
            }
        }

        if !errors.is_empty() {
            let _span = warn_span!("text_track_parse_errors", src = track.src()).entered();
            for error in &errors {
                warn!(%error, "cue parse error");
            }
            track.trigger(TextEvent::ParseErrors {
                track: track.src().to_string(),
                count: errors.len(),
            });
        }

        debug!(
            src = track.src(),
            bytes = bytes.len(),
            added = report.added,
            duplicates = report.duplicates,
            total = track.cues().len(),
            "payload ingested"
        );
        track.trigger(TextEvent::LoadedData {
            track: track.src().to_string(),
            added: report.added,
            total: track.cues().len(),
        });

        report.errors = errors;
        report
    }
}
