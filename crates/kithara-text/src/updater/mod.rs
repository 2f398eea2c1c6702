//! Source-buffer contract shared by binary and cue-backed buffers.
//!
//! The playback pipeline drives anything that implements [`SourceUpdater`]
//! the same way, so a text rendition can sit next to audio/video buffers
//! without the pipeline branching on which kind it holds.

#![forbid(unsafe_code)]

mod null;
mod track;

pub use null::NullSourceUpdater;
pub use track::TrackSourceUpdater;

use bytes::Bytes;

/// Completion callback for buffer operations.
///
/// Invoked exactly once, before the operation returns.
pub type DoneCallback = Box<dyn FnOnce() + Send>;

/// Operation set a buffer-driving pipeline expects.
///
/// Every operation completes synchronously: callbacks fire inline and
/// [`updating`](SourceUpdater::updating) is never observed as `true`.
pub trait SourceUpdater: Send {
    /// Append a payload, then call `done`.
    fn append_buffer(&mut self, bytes: Bytes, done: DoneCallback);

    /// Abort the current append, then call `done`.
    fn abort(&mut self, done: DoneCallback);

    /// Buffered time ranges.
    fn buffered(&self) -> TimeRanges;

    /// Store the nominal media duration.
    fn duration(&mut self, duration: f64);

    /// Remove buffered data in `[start, end)`.
    fn remove(&mut self, start: f64, end: f64);

    /// Whether an operation is still pending.
    fn updating(&self) -> bool;

    /// Get the timestamp offset, or set it when `offset` is `Some`.
    ///
    /// Returns the (new) current value.
    fn timestamp_offset(&mut self, offset: Option<f64>) -> f64;

    /// Release the underlying buffer.
    fn dispose(&mut self);
}

/// Ordered `(start, end)` pairs in seconds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeRanges {
    ranges: Vec<(f64, f64)>,
}

impl TimeRanges {
    #[must_use]
    pub fn new(ranges: Vec<(f64, f64)>) -> Self {
        Self { ranges }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Start of range `index`.
    #[must_use]
    pub fn start(&self, index: usize) -> Option<f64> {
        self.ranges.get(index).map(|r| r.0)
    }

    /// End of range `index`.
    #[must_use]
    pub fn end(&self, index: usize) -> Option<f64> {
        self.ranges.get(index).map(|r| r.1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.ranges.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[(f64, f64)] {
        &self.ranges
    }
}

impl FromIterator<(f64, f64)> for TimeRanges {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
