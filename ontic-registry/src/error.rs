//! Error types for metadata resolution.

use ontic_model::ClassFullName;
use thiserror::Error;

/// Errors raised while resolving class metadata.
///
/// Resolution failures are fatal to the calling operation and always
/// propagate unmodified: construction, serialization, and explicit
/// enumeration all fail together when metadata cannot be found.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// No metadata could be resolved for the class: neither cached nor
    /// materializable from the schema source. Whether the class is not yet
    /// loaded or does not exist at all is not distinguished.
    #[error("class metadata not found: {0}")]
    NotFound(ClassFullName),

    /// The schema source returned a shape that is not valid class metadata.
    #[error("malformed class metadata for {class}")]
    Malformed {
        class: ClassFullName,
        #[source]
        source: serde_json::Error,
    },
}
