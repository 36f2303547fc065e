//! Class and property metadata types for Ontic.
//!
//! Defines the resolved metadata model the rest of the engine consumes:
//! - [`ClassMetadata`] — one class's property set, base-class chain, and custom attributes
//! - [`PropertyMetadata`] — one property's primitive type, cardinality, and constraints
//! - [`PrimitiveType`] — the fixed numeric type-code table driving value marshaling
//! - [`ClassFullName`] — schema-qualified class names with one canonical separator
//!
//! These types deserialize directly from the JSON shape the schema-loading
//! collaborator supplies. Once constructed they are immutable and shared
//! freely across the engine.

mod attribute;
mod class;
mod error;
mod name;
mod point;
mod primitive;
mod property;

pub use attribute::CustomAttribute;
pub use class::{ClassMetadata, PropertyMap};
pub use error::ModelError;
pub use name::ClassFullName;
pub use point::{Point2d, Point3d};
pub use primitive::PrimitiveType;
pub use property::{PropertyMetadata, RelationshipDirection};
