//! Property metadata.

use crate::attribute::CustomAttribute;
use crate::primitive::PrimitiveType;
use serde::{Deserialize, Serialize};

/// Which end of the backing relationship a navigation property points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipDirection {
    Forward,
    Backward,
}

/// Resolved description of one property: primitive type, cardinality,
/// navigation semantics, and constraints. Immutable once constructed.
///
/// Optional fields mirror the schema JSON shape; camelCase aliases accept
/// the generated-code spelling of each key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertyMetadata {
    /// Primitive type code driving value marshaling.
    #[serde(default, alias = "primitiveType")]
    pub primitive_type: PrimitiveType,

    /// Struct class name when the property holds a struct value.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "structName")]
    pub struct_name: Option<String>,

    /// Extended (semantic) type tag layered over the primitive type.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "extendedType")]
    pub extended_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", alias = "minimumValue")]
    pub minimum_value: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", alias = "maximumValue")]
    pub maximum_value: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", alias = "minimumLength")]
    pub minimum_length: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none", alias = "maximumLength")]
    pub maximum_length: Option<u32>,

    /// True when applications may not write this property.
    #[serde(default, alias = "readOnly")]
    pub read_only: bool,

    /// Kind-of-quantity tag for unit-bearing values.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "kindOfQuantity")]
    pub kind_of_quantity: Option<String>,

    /// True when code outside the generic marshaling pipeline owns this
    /// property's value.
    #[serde(default, alias = "isCustomHandled")]
    pub is_custom_handled: bool,

    /// True when the custom handling code is gone. The property then falls
    /// back to default visibility so stale data is not silently dropped.
    #[serde(default, alias = "isCustomHandledOrphan")]
    pub is_custom_handled_orphan: bool,

    /// Presence of either occurrence bound makes the value a sequence.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "minOccurs")]
    pub min_occurs: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none", alias = "maxOccurs")]
    pub max_occurs: Option<u32>,

    /// Presence makes this a navigation property: the value is a reference
    /// identifier, not a primitive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<RelationshipDirection>,

    /// Relationship class backing a navigation property.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "relationshipClass")]
    pub relationship_class: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", alias = "customAttributes")]
    pub custom_attributes: Option<Vec<CustomAttribute>>,
}

impl PropertyMetadata {
    /// True when occurrence bounds make the value an ordered sequence.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        self.min_occurs.is_some() || self.max_occurs.is_some()
    }

    /// True when the value is a reference identifier.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        self.direction.is_some()
    }

    /// Whether enumeration should surface this property.
    ///
    /// Orphaned custom-handled properties stay visible regardless.
    #[must_use]
    pub const fn is_visible(&self, include_custom_handled: bool) -> bool {
        include_custom_handled || !self.is_custom_handled || self.is_custom_handled_orphan
    }
}
