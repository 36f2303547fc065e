//! Class metadata resolution for Ontic.
//!
//! - [`ClassRegistry`] — process-scoped cache mapping class full name to
//!   resolved [`ClassMetadata`](ontic_model::ClassMetadata), populated on
//!   demand from a [`SchemaSource`]
//! - [`SchemaSource`] — the boundary to the external schema-loading pipeline
//! - [`ClassRegistry::for_each_property`] — recursive, inheritance-aware
//!   traversal of a class's full property surface, most-derived first
//!
//! Resolution failures ([`MetadataError`]) are fatal to the calling
//! operation and propagate unmodified; there is no partial enumeration.

mod enumerate;
mod error;
mod registry;
mod source;

pub use error::MetadataError;
pub use registry::ClassRegistry;
pub use source::{SchemaSource, StaticSchemaSource};
