#![forbid(unsafe_code)]

/// Events emitted by HLS timed-text tracks.
///
/// `track` is the source description of the emitting track (its label, or the
/// media group when no label is set).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextEvent {
    /// A payload was fully parsed and merged into the cue list.
    ///
    /// Emitted once per payload, even when no cue was added.
    LoadedData {
        track: String,
        added: usize,
        total: usize,
    },
    /// A payload contained malformed cue syntax. Parsing continued.
    ParseErrors { track: String, count: usize },
    /// A media group binding was registered.
    LoaderAdded {
        track: String,
        media_group: String,
        has_loader: bool,
    },
    /// A media group binding was removed and its loader disposed.
    LoaderRemoved { track: String, media_group: String },
    /// The track released all of its loaders.
    Disposed { track: String },
}
