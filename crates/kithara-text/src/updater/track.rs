#![forbid(unsafe_code)]

use std::sync::Arc;

use bytes::Bytes;
use parking_lot::Mutex;
use tracing::{debug, trace};

use super::{DoneCallback, SourceUpdater, TimeRanges};
use crate::{
    ingest::{CueIngester, IngestReport},
    track::{TextTrack, TextTrackBase},
};

/// [`SourceUpdater`] backed by a text track's cue list.
///
/// Appends go straight through the [`CueIngester`]; nothing is queued.
/// `buffered()` reports one range per cue, in arrival order, unmerged.
/// The timestamp offset is stored for the pipeline and never applied to cues.
#[derive(Debug)]
pub struct TrackSourceUpdater {
    track: Option<Arc<Mutex<TextTrack>>>,
    ingester: CueIngester,
    timestamp_offset: f64,
    duration: Option<f64>,
}

impl TrackSourceUpdater {
    pub fn new(track: Arc<Mutex<TextTrack>>, ingester: CueIngester) -> Self {
        Self {
            track: Some(track),
            ingester,
            timestamp_offset: 0.0,
            duration: None,
        }
    }

    /// Ingest `bytes` and return the report directly.
    ///
    /// Returns `None` once the updater has been disposed.
    pub fn append(&mut self, bytes: &[u8]) -> Option<IngestReport> {
        let track = self.track.as_ref()?;
        let mut guard = track.lock();
        Some(self.ingester.ingest(bytes, &mut *guard))
    }

    /// Last value passed to [`SourceUpdater::duration`].
    #[must_use]
    pub fn nominal_duration(&self) -> Option<f64> {
        self.duration
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.track.is_none()
    }
}

impl SourceUpdater for TrackSourceUpdater {
    fn append_buffer(&mut self, bytes: Bytes, done: DoneCallback) {
        if self.append(&bytes).is_none() {
            trace!(bytes = bytes.len(), "append after dispose ignored");
        }
        done();
    }

    fn abort(&mut self, done: DoneCallback) {
        done();
    }

    fn buffered(&self) -> TimeRanges {
        let Some(track) = self.track.as_ref() else {
            return TimeRanges::default();
        };
        let guard = track.lock();
        guard.cues().iter().map(|cue| cue.range()).collect()
    }

    fn duration(&mut self, duration: f64) {
        self.duration = Some(duration);
    }

    fn remove(&mut self, start: f64, end: f64) {
        trace!(start, end, "cue removal by range is not supported");
    }

    fn updating(&self) -> bool {
        false
    }

    fn timestamp_offset(&mut self, offset: Option<f64>) -> f64 {
        if let Some(offset) = offset {
            self.timestamp_offset = offset;
        }
        self.timestamp_offset
    }

    fn dispose(&mut self) {
        if self.track.take().is_some() {
            debug!("track source updater disposed");
        }
    }
}
