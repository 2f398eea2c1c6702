#![forbid(unsafe_code)]

use bytes::Bytes;
use tracing::trace;

use super::{DoneCallback, SourceUpdater, TimeRanges};

/// [`SourceUpdater`] with no backing buffer.
///
/// Stands in for renditions the pipeline has to drive but whose media is
/// delivered elsewhere (e.g. muxed into the main stream). Appends are
/// acknowledged and discarded; nothing is ever buffered.
#[derive(Debug, Clone, Default)]
pub struct NullSourceUpdater {
    timestamp_offset: f64,
    duration: Option<f64>,
}

impl NullSourceUpdater {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value passed to [`SourceUpdater::duration`].
    #[must_use]
    pub fn nominal_duration(&self) -> Option<f64> {
        self.duration
    }
}

impl SourceUpdater for NullSourceUpdater {
    fn append_buffer(&mut self, bytes: Bytes, done: DoneCallback) {
        trace!(bytes = bytes.len(), "null source updater discarding payload");
        done();
    }

    fn abort(&mut self, done: DoneCallback) {
        done();
    }

    fn buffered(&self) -> TimeRanges {
        TimeRanges::default()
    }

    fn duration(&mut self, duration: f64) {
        self.duration = Some(duration);
    }

    fn remove(&mut self, _start: f64, _end: f64) {}

    fn updating(&self) -> bool {
        false
    }

    fn timestamp_offset(&mut self, offset: Option<f64>) -> f64 {
        if let Some(offset) = offset {
            self.timestamp_offset = offset;
        }
        self.timestamp_offset
    }

    fn dispose(&mut self) {}
}
