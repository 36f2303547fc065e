//! The owning in-memory model.

use crate::entity::Entity;
use crate::error::EntityError;
use ontic_model::ClassFullName;
use ontic_registry::{ClassRegistry, SchemaSource};
use std::sync::Arc;

/// The session that owns entities and their metadata resolution.
///
/// Created once with an injected schema source and handed around as
/// `Arc<Model>`; every entity keeps a handle back to its model so it can
/// resolve its own class metadata. There is no ambient global; the model
/// is the single explicit lifecycle for the registry it wraps.
pub struct Model {
    registry: ClassRegistry,
}

impl Model {
    /// Creates a model over the given schema source.
    pub fn new(source: Arc<dyn SchemaSource>) -> Arc<Self> {
        Arc::new(Self {
            registry: ClassRegistry::new(source),
        })
    }

    /// The model's class metadata registry.
    #[must_use]
    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    /// Constructs a new editable entity of `class` from a raw property bag.
    ///
    /// Every declared visible property receives a slot whether or not the
    /// bag carries a value for it; a metadata resolution failure anywhere
    /// along the inheritance chain fails the construction as a whole.
    pub fn entity_from_bag(
        self: &Arc<Self>,
        class: ClassFullName,
        bag: &serde_json::Value,
    ) -> Result<Entity, EntityError> {
        Entity::from_bag(Arc::clone(self), class, bag)
    }
}
