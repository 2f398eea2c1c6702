//! Media-group → playlist-loader registry of one track.
//!
//! Bindings are kept in registration order and duplicate keys are tolerated;
//! lookups resolve to the first binding with a matching key. A binding without
//! a loader stands for a rendition carried in the main stream.

#![forbid(unsafe_code)]

use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::{
    error::TextResult,
    loader::{HlsContext, LoaderFactory, LoaderRequest, PlaylistLoader},
};

/// One `(media group, loader)` entry.
pub struct MediaGroupBinding {
    media_group: String,
    loader: Option<Box<dyn PlaylistLoader>>,
}

impl MediaGroupBinding {
    #[must_use]
    pub fn media_group(&self) -> &str {
        &self.media_group
    }

    #[must_use]
    pub fn loader(&self) -> Option<&dyn PlaylistLoader> {
        self.loader.as_deref()
    }

    fn dispose(mut self) {
        if let Some(loader) = self.loader.as_mut() {
            debug!(media_group = %self.media_group, uri = %loader.uri(), "disposing playlist loader");
            loader.dispose();
        }
    }
}

impl std::fmt::Debug for MediaGroupBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaGroupBinding")
            .field("media_group", &self.media_group)
            .field("loader", &self.loader.as_ref().map(|l| l.uri().as_str()))
            .finish()
    }
}

/// Sole owner of the playlist loaders of one track.
pub struct MediaGroupRegistry {
    bindings: Vec<MediaGroupBinding>,
    factory: Arc<dyn LoaderFactory>,
    context: HlsContext,
    with_credentials: bool,
}

impl std::fmt::Debug for MediaGroupRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaGroupRegistry")
            .field("bindings", &self.bindings)
            .field("with_credentials", &self.with_credentials)
            .finish_non_exhaustive()
    }
}

impl MediaGroupRegistry {
    pub fn new(factory: Arc<dyn LoaderFactory>, context: HlsContext, with_credentials: bool) -> Self {
        Self {
            bindings: Vec::new(),
            factory,
            context,
            with_credentials,
        }
    }

    /// Register `media_group`.
    ///
    /// With a `uri`, a loader is constructed for it and owned by the new
    /// binding. Without one, the binding carries no loader. Existing bindings
    /// with the same key are left in place.
    ///
    /// # Errors
    ///
    /// Propagates the factory error; nothing is registered in that case.
    pub fn add_loader(&mut self, media_group: impl Into<String>, uri: Option<Url>) -> TextResult<()> {
        let media_group = media_group.into();
        let loader = match uri {
            Some(uri) => Some(self.factory.create(LoaderRequest {
                uri,
                context: self.context.clone(),
                with_credentials: self.with_credentials,
            })?),
            None => None,
        };
        debug!(
            media_group = %media_group,
            has_loader = loader.is_some(),
            "media group registered"
        );
        self.bindings.push(MediaGroupBinding {
            media_group,
            loader,
        });
        Ok(())
    }

    /// Loader of the first binding for `media_group`.
    #[must_use]
    pub fn get_loader(&self, media_group: &str) -> Option<&dyn PlaylistLoader> {
        self.find(media_group)
            .and_then(|idx| self.bindings[idx].loader())
    }

    /// Dispose and drop the first binding for `media_group`.
    ///
    /// Returns `false` if no binding matched.
    pub fn remove_loader(&mut self, media_group: &str) -> bool {
        let Some(idx) = self.find(media_group) else {
            return false;
        };
        self.bindings.remove(idx).dispose();
        true
    }

    /// Dispose every loader and clear the registry.
    pub fn dispose_all(&mut self) {
        while let Some(binding) = self.bindings.pop() {
            binding.dispose();
        }
    }

    #[must_use]
    pub fn contains(&self, media_group: &str) -> bool {
        self.find(media_group).is_some()
    }

    /// Keys in registration order, duplicates included.
    pub fn media_groups(&self) -> impl Iterator<Item = &str> + '_ {
        self.bindings.iter().map(MediaGroupBinding::media_group)
    }

    pub fn bindings(&self) -> &[MediaGroupBinding] {
        &self.bindings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn find(&self, media_group: &str) -> Option<usize> {
        self.bindings
            .iter()
            .position(|b| b.media_group == media_group)
    }
}

impl Drop for MediaGroupRegistry {
    fn drop(&mut self) {
        self.dispose_all();
    }
}
