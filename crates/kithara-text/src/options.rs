#![forbid(unsafe_code)]

use std::sync::Arc;

use derive_setters::Setters;
use kithara_events::EventBus;
use url::Url;

use crate::parser::CueParser;

/// Configuration for an [`HlsTextTrack`](crate::HlsTextTrack).
///
/// Mirrors the attributes of an `#EXT-X-MEDIA:TYPE=SUBTITLES` rendition.
///
/// ```ignore
/// let options = TextTrackOptions::new("subs")
///     .with_resolved_uri(Url::parse("https://cdn.example.com/subs/en.m3u8")?)
///     .with_language("en")
///     .with_label("English")
///     .with_default(true);
/// ```
#[derive(Clone, Setters)]
#[setters(prefix = "with_", strip_option)]
pub struct TextTrackOptions {
    /// `GROUP-ID` of the rendition; the key of the initial loader binding.
    #[setters(skip)]
    pub media_group: String,
    /// Absolute playlist URI. `None` when the rendition is carried in the
    /// main stream and needs no loader of its own.
    pub resolved_uri: Option<Url>,
    /// `LANGUAGE` attribute.
    #[setters(into)]
    pub language: Option<String>,
    /// `NAME` attribute.
    #[setters(into)]
    pub label: Option<String>,
    /// `DEFAULT=YES`. Also decides kind and initial enabled state.
    pub default: bool,
    /// `AUTOSELECT=YES`.
    pub autoselect: bool,
    /// Send credentials with playlist requests made by the track's loaders.
    #[setters(rename = "with_credentials")]
    pub with_credentials: bool,
    /// Bus for track notifications. When `None`, the bus of the
    /// [`HlsContext`](crate::HlsContext) passed to the track is used.
    #[setters(rename = "with_events")]
    pub bus: Option<EventBus>,
    /// Cue grammar. When `None`, [`WebVttParser`](crate::WebVttParser) is used.
    pub parser: Option<Arc<dyn CueParser>>,
}

impl TextTrackOptions {
    /// Options for a non-default rendition of `media_group` with no loader.
    pub fn new(media_group: impl Into<String>) -> Self {
        Self {
            media_group: media_group.into(),
            resolved_uri: None,
            language: None,
            label: None,
            default: false,
            autoselect: false,
            with_credentials: false,
            bus: None,
            parser: None,
        }
    }

    /// Name used for the track in notifications and logs.
    #[must_use]
    pub fn src(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.media_group)
    }
}

impl std::fmt::Debug for TextTrackOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextTrackOptions")
            .field("media_group", &self.media_group)
            .field("resolved_uri", &self.resolved_uri)
            .field("language", &self.language)
            .field("label", &self.label)
            .field("default", &self.default)
            .field("autoselect", &self.autoselect)
            .field("with_credentials", &self.with_credentials)
            .field("bus", &self.bus.as_ref().map(|_| "EventBus"))
            .field("parser", &self.parser.as_ref().map(|_| "CueParser"))
            .finish()
    }
}
