//! `kithara-text`
//!
//! HLS subtitle/caption renditions for the kithara pipeline.
//!
//! WebVTT segment payloads are parsed and merged into one ordered cue list per
//! track, dropping the cues segmented WebVTT repeats across segment
//! boundaries. The cue list is exposed through [`SourceUpdater`], the same
//! contract the pipeline uses for binary media buffers.
//!
//! - [`HlsTextTrack`]: one rendition; owns the cue list, the updater, and the
//!   media-group loader registry.
//! - [`CueIngester`]: decode → [`CueParser`] → dedup → flush notification.
//! - [`MediaGroupRegistry`]: media group → [`PlaylistLoader`] ownership.

#![forbid(unsafe_code)]

pub mod cue;
pub mod dedup;
pub mod error;
pub mod hls_track;
pub mod ingest;
pub mod loader;
pub mod options;
pub mod parser;
pub mod registry;
pub mod track;
pub mod updater;
pub mod webvtt;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use cue::{Cue, CueList};
pub use error::{TextError, TextResult};
pub use hls_track::HlsTextTrack;
pub use ingest::{CueIngester, IngestReport};
pub use loader::{HlsContext, LoaderFactory, LoaderRequest, PlaylistLoader};
pub use options::TextTrackOptions;
pub use parser::{CueParseError, CueParser, ParseOutput};
pub use registry::{MediaGroupBinding, MediaGroupRegistry};
pub use track::{TextTrack, TextTrackBase, TrackKind};
pub use updater::{DoneCallback, NullSourceUpdater, SourceUpdater, TimeRanges, TrackSourceUpdater};
pub use webvtt::WebVttParser;
