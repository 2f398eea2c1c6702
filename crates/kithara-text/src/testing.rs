//! Recording loader doubles for registry and track tests.
//!
//! `MockPlaylistLoader` cannot tell whether `dispose` ran before the mock was
//! dropped, which is the property the registry has to guarantee. These
//! doubles write every construction and disposal to a shared [`LoaderLog`].

use std::sync::Arc;

use parking_lot::Mutex;
use url::Url;

use crate::{
    error::{TextError, TextResult},
    loader::{LoaderFactory, LoaderRequest, PlaylistLoader},
};

#[derive(Debug, Default)]
struct LogInner {
    created: Vec<LoaderRequest>,
    disposed: Vec<Url>,
}

/// Shared record of loader constructions and disposals.
#[derive(Debug, Clone, Default)]
pub struct LoaderLog {
    inner: Arc<Mutex<LogInner>>,
}

impl LoaderLog {
    /// Requests seen by the factory, in order.
    pub fn created(&self) -> Vec<LoaderRequest> {
        self.inner.lock().created.clone()
    }

    pub fn created_count(&self) -> usize {
        self.inner.lock().created.len()
    }

    /// URIs of disposed loaders, in disposal order.
    pub fn disposed(&self) -> Vec<Url> {
        self.inner.lock().disposed.clone()
    }

    pub fn disposed_count(&self) -> usize {
        self.inner.lock().disposed.len()
    }

    /// How many times the loader for `uri` was disposed.
    pub fn disposed_times(&self, uri: &str) -> usize {
        self.inner
            .lock()
            .disposed
            .iter()
            .filter(|u| u.as_str() == uri)
            .count()
    }
}

/// Factory producing [`RecordingLoader`]s.
#[derive(Debug, Clone, Default)]
pub struct RecordingLoaderFactory {
    log: LoaderLog,
    fail: bool,
}

impl RecordingLoaderFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory whose `create` always fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn log(&self) -> LoaderLog {
        self.log.clone()
    }
}

impl LoaderFactory for RecordingLoaderFactory {
    fn create(&self, request: LoaderRequest) -> TextResult<Box<dyn PlaylistLoader>> {
        if self.fail {
            return Err(TextError::Loader(format!("refused {}", request.uri)));
        }
        let uri = request.uri.clone();
        self.log.inner.lock().created.push(request);
        Ok(Box::new(RecordingLoader {
            uri,
            log: self.log.clone(),
        }))
    }
}

/// Loader that records its disposal.
#[derive(Debug)]
pub struct RecordingLoader {
    uri: Url,
    log: LoaderLog,
}

impl PlaylistLoader for RecordingLoader {
    fn uri(&self) -> &Url {
        &self.uri
    }

    fn dispose(&mut self) {
        self.log.inner.lock().disposed.push(self.uri.clone());
    }
}
