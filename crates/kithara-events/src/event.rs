#![forbid(unsafe_code)]

use crate::TextEvent;

/// Unified event published on the [`EventBus`](crate::EventBus).
///
/// Hierarchical: each subsystem has its own variant with a sub-enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Timed-text track event.
    Text(TextEvent),
}

impl From<TextEvent> for Event {
    fn from(e: TextEvent) -> Self {
        Self::Text(e)
    }
}

impl Event {
    /// Returns the text sub-event, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&TextEvent> {
        match self {
            Self::Text(e) => Some(e),
        }
    }
}
