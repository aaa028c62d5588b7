//! Mock override sources
//!
//! Configurable implementations of [`OverrideSource`] for testing the store
//! and resolver without a specification tree on disk:
//!
//! - `StaticSource`: serves fixed override sets per package path
//! - `RecordingSource`: wraps a source and counts underlying loads
//! - `FailingSource`: fails every load, for fatal-path tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::overrides::{OverrideError, OverrideSource, Overrides};
use crate::product::PackagePath;

/// Serves a fixed set of overrides per package path.
///
/// Packages without a registered set load as the empty set, mirroring a
/// package directory with no override file.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    overrides: HashMap<PackagePath, Overrides>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the override set for its package path.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides.insert(overrides.package().clone(), overrides);
        self
    }
}

impl OverrideSource for StaticSource {
    fn load(&self, package: &PackagePath) -> Result<Overrides, OverrideError> {
        Ok(self
            .overrides
            .get(package)
            .cloned()
            .unwrap_or_else(|| Overrides::empty(package.clone())))
    }
}

/// Shared handle onto a [`RecordingSource`]'s load counter.
#[derive(Debug, Clone)]
pub struct LoadCounter(Arc<AtomicUsize>);

impl LoadCounter {
    /// Number of underlying loads performed so far.
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Wraps a source and counts how many loads reach it.
///
/// Drives the load-once guarantees: the counter handle stays valid after
/// the source moves into an [`crate::overrides::OverrideStore`].
#[derive(Debug)]
pub struct RecordingSource<S> {
    inner: S,
    loads: Arc<AtomicUsize>,
}

impl<S> RecordingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn counter(&self) -> LoadCounter {
        LoadCounter(self.loads.clone())
    }
}

impl<S: OverrideSource> OverrideSource for RecordingSource<S> {
    fn load(&self, package: &PackagePath) -> Result<Overrides, OverrideError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.inner.load(package)
    }
}

/// Fails every load with a parse error carrying the given detail.
#[derive(Debug, Clone)]
pub struct FailingSource {
    detail: String,
}

impl FailingSource {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl OverrideSource for FailingSource {
    fn load(&self, package: &PackagePath) -> Result<Overrides, OverrideError> {
        Err(OverrideError::Parse {
            package: package.clone(),
            detail: self.detail.clone(),
        })
    }
}
