//! Playlist-loader collaborator contract.
//!
//! Loaders resolve and refresh the media playlist of one alternate rendition.
//! This crate only constructs them (through a [`LoaderFactory`]) and disposes
//! them; fetching, refreshing and network errors are the loader's business.

#![forbid(unsafe_code)]

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;
use kithara_events::EventBus;
use url::Url;

use crate::error::TextResult;

/// Shared playback context handed to every loader a track constructs.
#[derive(Clone, Debug, Default)]
pub struct HlsContext {
    /// Bus loaders may publish on.
    pub bus: EventBus,
    /// Base URL override for resolving relative playlist URIs.
    pub base_url: Option<Url>,
}

impl HlsContext {
    #[must_use]
    pub fn new(bus: EventBus) -> Self {
        Self {
            bus,
            base_url: None,
        }
    }

    /// Set base URL override.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }
}

/// Everything a loader is bound to at construction.
#[derive(Clone, Debug)]
pub struct LoaderRequest {
    /// Playlist URI of the rendition.
    pub uri: Url,
    /// Shared playback context.
    pub context: HlsContext,
    /// Send credentials (cookies, auth headers) with playlist requests.
    pub with_credentials: bool,
}

/// A playlist loader owned by a [`MediaGroupRegistry`](crate::MediaGroupRegistry).
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PlaylistLoader: Send {
    /// Playlist URI this loader was created for.
    fn uri(&self) -> &Url;

    /// Stop refreshing and release resources.
    ///
    /// Called exactly once by the owning registry, right before the loader is
    /// dropped.
    fn dispose(&mut self);
}

/// Constructs playlist loaders.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait LoaderFactory: Send + Sync {
    /// Build a loader for `request`.
    ///
    /// # Errors
    ///
    /// Implementations return [`TextError::Loader`](crate::TextError::Loader)
    /// when the loader cannot be set up.
    fn create(&self, request: LoaderRequest) -> TextResult<Box<dyn PlaylistLoader>>;
}
