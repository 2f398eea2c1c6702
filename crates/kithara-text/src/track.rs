//! Base text-track entity.
//!
//! [`TextTrackBase`] is the capability the ingestion path needs from a track:
//! read the cues, append one, and raise a notification. [`TextTrack`] is the
//! stock implementation that [`HlsTextTrack`](crate::HlsTextTrack) embeds.

#![forbid(unsafe_code)]

use kithara_events::{EventBus, TextEvent};

use crate::cue::{Cue, CueList};

/// Presentation role of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    /// The rendition marked `DEFAULT=YES`.
    Main,
    /// Any other rendition.
    Alternative,
}

impl TrackKind {
    #[must_use]
    pub fn from_default(is_default: bool) -> Self {
        if is_default {
            Self::Main
        } else {
            Self::Alternative
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Alternative => "alternative",
        }
    }
}

/// Capability object exposed by a track to the ingestion engine.
pub trait TextTrackBase {
    /// Cues in arrival order.
    fn cues(&self) -> &CueList;

    /// Append a cue. Deduplication is the caller's job.
    fn add_cue(&mut self, cue: Cue);

    /// Raise a track notification.
    fn trigger(&self, event: TextEvent);

    /// Human-readable source description used in notifications and logs.
    fn src(&self) -> &str;
}

/// Cue container plus event plumbing of one rendition.
#[derive(Debug)]
pub struct TextTrack {
    cues: CueList,
    bus: EventBus,
    src: String,
    kind: TrackKind,
    enabled: bool,
    language: Option<String>,
    label: Option<String>,
}

impl TextTrack {
    pub fn new(
        src: impl Into<String>,
        kind: TrackKind,
        enabled: bool,
        language: Option<String>,
        label: Option<String>,
        bus: EventBus,
    ) -> Self {
        Self {
            cues: CueList::new(),
            bus,
            src: src.into(),
            kind,
            enabled,
            language,
            label,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl TextTrackBase for TextTrack {
    fn cues(&self) -> &CueList {
        &self.cues
    }

    fn add_cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    fn trigger(&self, event: TextEvent) {
        self.bus.publish(event);
    }

    fn src(&self) -> &str {
        &self.src
    }
}
