//! Cue records and the per-track cue list.

#![forbid(unsafe_code)]

/// A timed text fragment.
///
/// Two cues are the same cue when start, end and text are all equal. Times
/// compare exactly; segmented WebVTT repeats boundary cues byte-for-byte.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    /// Start time in seconds.
    pub start_time: f64,
    /// End time in seconds. Never less than `start_time`.
    pub end_time: f64,
    /// Cue payload; lines are joined with `\n`.
    pub text: String,
}

impl Cue {
    pub fn new(start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        Self {
            start_time,
            end_time,
            text: text.into(),
        }
    }

    /// `start_time <= end_time`, with neither time NaN.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.start_time <= self.end_time
    }

    /// `(start_time, end_time)` pair.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.start_time, self.end_time)
    }
}

/// Ordered, append-only cue storage of one track.
///
/// Order is arrival order across every payload ingested for the track.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CueList {
    cues: Vec<Cue>,
}

impl CueList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Cue] {
        &self.cues
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cue> {
        self.cues.iter()
    }
}

impl<'a> IntoIterator for &'a CueList {
    type Item = &'a Cue;
    type IntoIter = std::slice::Iter<'a, Cue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Cue>> for CueList {
    fn from(cues: Vec<Cue>) -> Self {
        Self { cues }
    }
}
