//! Boundary-overlap cue deduplication.
//!
//! Segmented WebVTT must repeat a cue that spans a segment boundary in both
//! segments. Repeats are almost always among the most recently added cues, so
//! the scan runs from the back and usually stops after a few comparisons.

#![forbid(unsafe_code)]

use tracing::trace;

use crate::cue::{Cue, CueList};

/// Whether `candidate` is already present in `existing`.
#[must_use]
pub fn is_duplicate(existing: &[Cue], candidate: &Cue) -> bool {
    existing.iter().rev().any(|cue| {
        cue.start_time == candidate.start_time
            && cue.end_time == candidate.end_time
            && cue.text == candidate.text
    })
}

/// Append `candidate` unless it duplicates a cue already in `list`.
///
/// Returns `true` if the cue was appended.
pub fn push_unique(list: &mut CueList, candidate: Cue) -> bool {
    if is_duplicate(list.as_slice(), &candidate) {
        trace!(
            start = candidate.start_time,
            end = candidate.end_time,
            "duplicate cue skipped"
        );
        return false;
    }
    list.push(candidate);
    true
}
