//! Per-package override cache.
//!
//! The store owns the only shared mutable state in the subsystem: a map from
//! package path to its loaded override set. An entry is created by the first
//! `ensure_loaded` call for that path and is read-only afterwards; repeated
//! loads within one run are never performed.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;

use super::record::{OverrideKind, Overrides};
use super::source::OverrideSource;
use super::OverrideError;
use crate::product::PackagePath;

/// Lazily populated cache of override records, keyed by package path.
///
/// Constructed once by the outer pipeline and threaded by reference into the
/// resolver and the derived accessors. The cache must outlive every
/// `ProductMetadata` resolved through it during the run.
pub struct OverrideStore {
    source: Box<dyn OverrideSource + Send + Sync>,
    cache: Mutex<HashMap<PackagePath, Arc<Overrides>>>,
}

impl OverrideStore {
    /// Create a store backed by the given override source.
    pub fn new(source: impl OverrideSource + Send + Sync + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Load overrides for `package` if no entry exists yet.
    ///
    /// Idempotent: the lock is held across the check and the load, so under
    /// concurrent first calls exactly one underlying load is performed and
    /// later callers observe the finished entry.
    pub fn ensure_loaded(&self, package: &PackagePath) -> Result<(), OverrideError> {
        let mut cache = self.cache.lock().unwrap();
        if cache.contains_key(package) {
            return Ok(());
        }
        let overrides = self.source.load(package)?;
        cache.insert(package.clone(), Arc::new(overrides));
        Ok(())
    }

    /// Whether overrides for `package` have been loaded.
    pub fn is_loaded(&self, package: &PackagePath) -> bool {
        self.cache.lock().unwrap().contains_key(package)
    }

    /// The cached override set for `package`.
    ///
    /// Calling this before `ensure_loaded` is a violated precondition and
    /// yields `OverrideError::NotLoaded`; it cannot occur for metadata
    /// obtained from the resolver, which always loads first.
    pub fn overrides(&self, package: &PackagePath) -> Result<Arc<Overrides>, OverrideError> {
        self.cache
            .lock()
            .unwrap()
            .get(package)
            .cloned()
            .ok_or_else(|| OverrideError::NotLoaded {
                package: package.clone(),
            })
    }

    /// Decode the payload of `kind` for `package` from the cache.
    ///
    /// `Ok(None)` means no override of that kind is declared.
    pub fn lookup<T: DeserializeOwned>(
        &self,
        package: &PackagePath,
        kind: OverrideKind,
    ) -> Result<Option<T>, OverrideError> {
        self.overrides(package)?.details_for(kind)
    }
}
