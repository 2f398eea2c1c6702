//! HLS text track: a base [`TextTrack`] plus HLS rendition data.
//!
//! Owns the cue list (through the shared base track), the source updater the
//! pipeline drives, and the media-group registry of playlist loaders.
//! Presentation state (kind, enabled, language, label) lives in the base track
//! only; this wrapper keeps the HLS-specific attributes.

#![forbid(unsafe_code)]

use std::sync::Arc;

use bytes::Bytes;
use kithara_events::TextEvent;
use parking_lot::Mutex;
use tracing::debug;
use url::Url;

use crate::{
    cue::Cue,
    error::{TextError, TextResult},
    ingest::{CueIngester, IngestReport},
    loader::{HlsContext, LoaderFactory, PlaylistLoader},
    options::TextTrackOptions,
    registry::MediaGroupRegistry,
    track::{TextTrack, TextTrackBase, TrackKind},
    updater::{SourceUpdater, TimeRanges, TrackSourceUpdater},
};

/// Subtitle/caption rendition of an HLS stream.
#[derive(Debug)]
pub struct HlsTextTrack {
    track: Arc<Mutex<TextTrack>>,
    updater: TrackSourceUpdater,
    registry: MediaGroupRegistry,
    is_default: bool,
    autoselect: bool,
    with_credentials: bool,
    disposed: bool,
}

impl HlsTextTrack {
    /// Create a track and register its initial media group.
    ///
    /// Notifications go to `options.bus` if set, otherwise to the bus of
    /// `context`.
    ///
    /// # Errors
    ///
    /// Fails if the loader for `options.resolved_uri` cannot be constructed.
    pub fn new(
        options: TextTrackOptions,
        factory: Arc<dyn LoaderFactory>,
        context: HlsContext,
    ) -> TextResult<Self> {
        let bus = options.bus.clone().unwrap_or_else(|| context.bus.clone());
        let ingester = options
            .parser
            .clone()
            .map(CueIngester::new)
            .unwrap_or_default();

        let track = Arc::new(Mutex::new(TextTrack::new(
            options.src(),
            TrackKind::from_default(options.default),
            options.default,
            options.language.clone(),
            options.label.clone(),
            bus,
        )));
        let updater = TrackSourceUpdater::new(Arc::clone(&track), ingester);
        let registry = MediaGroupRegistry::new(factory, context, options.with_credentials);

        let mut this = Self {
            track,
            updater,
            registry,
            is_default: options.default,
            autoselect: options.autoselect,
            with_credentials: options.with_credentials,
            disposed: false,
        };
        this.add_loader(options.media_group, options.resolved_uri)?;
        debug!(src = %this.src(), kind = this.kind().as_str(), "text track created");
        Ok(this)
    }

    /// Loader registered for `media_group`, if it has one.
    #[must_use]
    pub fn get_loader(&self, media_group: &str) -> Option<&dyn PlaylistLoader> {
        self.registry.get_loader(media_group)
    }

    /// Register `media_group`, constructing a loader when `uri` is given.
    ///
    /// # Errors
    ///
    /// [`TextError::Disposed`] after [`dispose`](Self::dispose); otherwise
    /// whatever the loader factory returns.
    pub fn add_loader(&mut self, media_group: impl Into<String>, uri: Option<Url>) -> TextResult<()> {
        if self.disposed {
            return Err(TextError::Disposed);
        }
        let media_group = media_group.into();
        let has_loader = uri.is_some();
        self.registry.add_loader(media_group.clone(), uri)?;
        self.notify(|track| TextEvent::LoaderAdded {
            track,
            media_group,
            has_loader,
        });
        Ok(())
    }

    /// [`add_loader`](Self::add_loader) with an unparsed URI.
    ///
    /// An empty or blank `uri` registers the group without a loader.
    ///
    /// # Errors
    ///
    /// [`TextError::InvalidUrl`] if `uri` does not parse.
    pub fn add_loader_str(&mut self, media_group: impl Into<String>, uri: Option<&str>) -> TextResult<()> {
        let uri = uri
            .filter(|u| !u.trim().is_empty())
            .map(Url::parse)
            .transpose()?;
        self.add_loader(media_group, uri)
    }

    /// Dispose and drop the loader for `media_group`.
    ///
    /// Returns `false` if nothing was registered under that key.
    pub fn remove_loader(&mut self, media_group: &str) -> bool {
        let removed = self.registry.remove_loader(media_group);
        if removed {
            self.notify(|track| TextEvent::LoaderRemoved {
                track,
                media_group: media_group.to_string(),
            });
        }
        removed
    }

    /// Parse a segment payload into this track's cue list.
    ///
    /// Returns `None` once the track has been disposed; the payload is dropped.
    pub fn ingest_payload(&mut self, bytes: &[u8]) -> Option<IngestReport> {
        self.updater.append(bytes)
    }

    /// [`SourceUpdater`] the pipeline appends segments through.
    pub fn source_updater_mut(&mut self) -> &mut TrackSourceUpdater {
        &mut self.updater
    }

    /// [`ingest_payload`](Self::ingest_payload) for callers holding `Bytes`.
    pub fn append_buffer(&mut self, bytes: Bytes) -> Option<IngestReport> {
        self.ingest_payload(&bytes)
    }

    /// Snapshot of the cue list.
    #[must_use]
    pub fn cues(&self) -> Vec<Cue> {
        self.track.lock().cues().as_slice().to_vec()
    }

    #[must_use]
    pub fn cue_count(&self) -> usize {
        self.track.lock().cues().len()
    }

    #[must_use]
    pub fn buffered(&self) -> TimeRanges {
        self.updater.buffered()
    }

    /// Release every loader and the source updater. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.registry.dispose_all();
        self.updater.dispose();
        debug!(src = %self.src(), "text track disposed");
        self.notify(|track| TextEvent::Disposed { track });
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Source description: the label, or the media group without one.
    #[must_use]
    pub fn src(&self) -> String {
        self.track.lock().src().to_string()
    }

    #[must_use]
    pub fn kind(&self) -> TrackKind {
        self.track.lock().kind()
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.track.lock().enabled()
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    #[must_use]
    pub fn autoselect(&self) -> bool {
        self.autoselect
    }

    #[must_use]
    pub fn with_credentials(&self) -> bool {
        self.with_credentials
    }

    #[must_use]
    pub fn language(&self) -> Option<String> {
        self.track.lock().language().map(str::to_string)
    }

    #[must_use]
    pub fn label(&self) -> Option<String> {
        self.track.lock().label().map(str::to_string)
    }

    /// Registered media groups in registration order.
    pub fn media_groups(&self) -> Vec<String> {
        self.registry.media_groups().map(str::to_string).collect()
    }

    /// Publish through the base track, tagged with its source description.
    fn notify(&self, event: impl FnOnce(String) -> TextEvent) {
        let track = self.track.lock();
        track.trigger(event(track.src().to_string()));
    }
}

impl Drop for HlsTextTrack {
    fn drop(&mut self) {
        self.dispose();
    }
}
