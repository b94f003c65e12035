//! Cache of resources derived from material descriptions
//!
//! Renderer adapters build a backend resource per description. Keying the
//! cache on the description itself means equal descriptions, however they
//! were assembled, share one resource.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::pbr::Pbr;

/// Thread-safe map from material description to a shared derived resource
pub struct MaterialCache<R> {
    /// Cache storage: description -> resource
    cache: RwLock<HashMap<Pbr, Arc<R>>>,
}

impl<R> MaterialCache<R> {
    /// Create a new empty material cache
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Return the resource for `pbr`, creating it on first request
    ///
    /// `create` runs outside the lock. If another thread stores a resource for
    /// an equal description first, that resource is returned and the new one
    /// is dropped.
    pub fn get_or_insert_with<F>(&self, pbr: &Pbr, create: F) -> Arc<R>
    where
        F: FnOnce(&Pbr) -> R,
    {
        if let Some(resource) = self.get_cached(pbr) {
            return resource;
        }

        let resource = Arc::new(create(pbr));
        self.store(pbr, resource)
    }

    /// Fallible variant of [`get_or_insert_with`](Self::get_or_insert_with)
    ///
    /// Nothing is cached when `create` fails.
    pub fn get_or_try_insert_with<F, E>(&self, pbr: &Pbr, create: F) -> Result<Arc<R>, E>
    where
        F: FnOnce(&Pbr) -> Result<R, E>,
    {
        if let Some(resource) = self.get_cached(pbr) {
            return Ok(resource);
        }

        let resource = Arc::new(create(pbr)?);
        Ok(self.store(pbr, resource))
    }

    /// Get a cached resource without creating one
    pub fn get_cached(&self, pbr: &Pbr) -> Option<Arc<R>> {
        let resource = self.read().get(pbr).map(Arc::clone);
        if resource.is_some() {
            log::trace!("Material cache hit");
        }
        resource
    }

    /// Check if a resource exists for `pbr`
    pub fn is_cached(&self, pbr: &Pbr) -> bool {
        self.read().contains_key(pbr)
    }

    /// Remove the resource for `pbr`, returning it if present
    pub fn remove(&self, pbr: &Pbr) -> Option<Arc<R>> {
        self.write().remove(pbr)
    }

    /// Clear all cached resources
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Get the number of cached resources
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn store(&self, pbr: &Pbr, resource: Arc<R>) -> Arc<R> {
        let mut cache = self.write();
        let stored = Arc::clone(cache.entry(pbr.clone()).or_insert(resource));
        log::trace!("Material cache miss, {} resources cached", cache.len());
        stored
    }

    // Entries are immutable once stored, so a poisoned lock still holds valid data
    fn read(&self) -> RwLockReadGuard<'_, HashMap<Pbr, Arc<R>>> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Pbr, Arc<R>>> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R> Default for MaterialCache<R> {
    fn default() -> Self {
        Self::new()
    }
}
