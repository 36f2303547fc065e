//! Entities and property marshaling for Ontic.
//!
//! - [`Model`] — the owning session: wraps the class registry and constructs
//!   entities from raw property bags
//! - [`Entity`] — the base polymorphic record, with declaration-ordered
//!   property slots and a one-way persistent/editable lifecycle
//! - [`PropertyValue`] — the tagged in-memory value variant
//! - [`marshal_property`] — primitive-type-driven raw-to-typed conversion
//!
//! Raw property bags flow in from the storage collaborator, through
//! metadata-driven marshaling, into typed slots; [`Entity::to_bag`]
//! reverses the trip using the same enumeration rule, which is what makes
//! construction and serialization round-trip.

mod entity;
mod error;
mod ids;
mod marshal;
mod model;
mod value;

pub use entity::Entity;
pub use error::EntityError;
pub use ids::InstanceId;
pub use marshal::marshal_property;
pub use model::Model;
pub use value::PropertyValue;
