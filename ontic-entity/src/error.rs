//! Error types for entities.

use ontic_model::ClassFullName;
use ontic_registry::MetadataError;
use thiserror::Error;

/// Errors raised by entity construction, serialization, and mutation.
#[derive(Debug, Error)]
pub enum EntityError {
    /// Class metadata could not be resolved; bubbles up unmodified from the
    /// registry.
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    /// A write against a persistent entity. Detected at the point of
    /// mutation, never later.
    #[error("entity of class {class} is persistent; cannot write {target}")]
    ImmutabilityViolation {
        class: ClassFullName,
        target: String,
    },

    /// A write against a name with no slot. Slots are fixed at
    /// construction time.
    #[error("class {class} declares no property named {property}")]
    UnknownProperty {
        class: ClassFullName,
        property: String,
    },
}
