//! The schema-loading collaborator boundary.

use ontic_model::ClassFullName;
use std::collections::HashMap;

/// Supplies raw JSON-shaped class descriptions on demand.
///
/// This is the seam to the external schema-loading pipeline; any blocking
/// or asynchronous work lives entirely behind it. Returning `None` means
/// the source cannot produce the class, whether because it is not yet
/// loaded or because it does not exist.
pub trait SchemaSource: Send + Sync {
    /// Returns the JSON description of the named class, if the source can
    /// produce one.
    fn class_def(&self, class: &ClassFullName) -> Option<serde_json::Value>;
}

/// An in-memory schema source backed by a fixed map of class definitions.
///
/// Used by tests and by embedders that import a whole schema up front.
#[derive(Debug, Default)]
pub struct StaticSchemaSource {
    classes: HashMap<ClassFullName, serde_json::Value>,
}

impl StaticSchemaSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) one class definition.
    pub fn insert(&mut self, class: ClassFullName, def: serde_json::Value) {
        self.classes.insert(class, def);
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with_class(mut self, class: ClassFullName, def: serde_json::Value) -> Self {
        self.insert(class, def);
        self
    }
}

impl SchemaSource for StaticSchemaSource {
    fn class_def(&self, class: &ClassFullName) -> Option<serde_json::Value> {
        self.classes.get(class).cloned()
    }
}
