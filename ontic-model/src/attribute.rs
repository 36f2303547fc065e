//! Custom attribute instances.

use serde::{Deserialize, Serialize};

/// An instance of a custom attribute class applied to a class or property.
///
/// The core carries attribute instances through metadata untouched; the
/// payload structure is defined by the attribute class itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomAttribute {
    /// Full name of the attribute class this instance belongs to.
    #[serde(alias = "className")]
    pub class_full_name: String,

    /// Free-form attribute payload.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub properties: serde_json::Value,
}
