//! The process-scoped class metadata cache.

use crate::error::MetadataError;
use crate::source::SchemaSource;
use ontic_model::{ClassFullName, ClassMetadata};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Caches resolved [`ClassMetadata`] by fully-qualified class name.
///
/// Misses are materialized on demand from the injected [`SchemaSource`].
/// Cached metadata is immutable and shared via `Arc`, so concurrent readers
/// need no coordination; the insert path guarantees that concurrent first
/// lookups for one class converge on a single cached value.
pub struct ClassRegistry {
    source: Arc<dyn SchemaSource>,
    cache: RwLock<HashMap<ClassFullName, Arc<ClassMetadata>>>,
}

impl ClassRegistry {
    /// Creates a registry over the given schema source.
    pub fn new(source: Arc<dyn SchemaSource>) -> Self {
        Self {
            source,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Resolves class metadata, materializing and caching it on first use.
    ///
    /// Repeated lookups for the same class are O(1) after the first. A
    /// source that cannot produce the class yields
    /// [`MetadataError::NotFound`], never a placeholder.
    pub fn find(&self, class: &ClassFullName) -> Result<Arc<ClassMetadata>, MetadataError> {
        if let Some(cached) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(class)
        {
            return Ok(Arc::clone(cached));
        }

        // Materialize outside any lock; the source may block.
        let def = self
            .source
            .class_def(class)
            .ok_or_else(|| MetadataError::NotFound(class.clone()))?;

        let meta: ClassMetadata =
            serde_json::from_value(def).map_err(|source| MetadataError::Malformed {
                class: class.clone(),
                source,
            })?;
        let meta = Arc::new(meta);

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        // A concurrent first lookup may have won the race; keep its value
        // and discard ours so every caller observes one cached instance.
        let entry = cache.entry(class.clone()).or_insert_with(|| {
            debug!(class = %class, "class metadata materialized");
            Arc::clone(&meta)
        });
        Ok(Arc::clone(entry))
    }

    /// Number of classes currently cached.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True when nothing has been materialized yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
