//! Typed in-memory property values.

use crate::ids::InstanceId;
use ontic_model::{Point2d, Point3d};
use serde_json::{json, Value as Json};

/// The in-memory form of one property slot.
///
/// `Json` is the last-resort passthrough carrier for shapes the marshaler
/// has no conversion for (struct values, binary, date-time); it preserves
/// the persisted representation unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Absent: the bag had no value (or an explicit null) for the slot.
    Null,
    Bool(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Point2d(Point2d),
    Point3d(Point3d),
    /// Reference to another entity, from a navigation property.
    Id(InstanceId),
    /// Ordered sequence, from a property with occurrence bounds.
    Array(Vec<PropertyValue>),
    /// Raw passthrough.
    Json(Json),
}

impl PropertyValue {
    /// True for the absent value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(b) = self { Some(*b) } else { None }
    }

    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        if let Self::Integer(i) = self { Some(*i) } else { None }
    }

    /// Numeric read; integers widen to `f64`.
    #[must_use]
    pub const fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(s) = self { Some(s) } else { None }
    }

    #[must_use]
    pub const fn as_id(&self) -> Option<&InstanceId> {
        if let Self::Id(id) = self { Some(id) } else { None }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        if let Self::Array(items) = self { Some(items) } else { None }
    }

    /// Converts back to the JSON bag representation.
    ///
    /// Total: every variant has a JSON form. `Null` maps to JSON null; the
    /// bag level omits the key instead of emitting it.
    #[must_use]
    pub fn to_json(&self) -> Json {
        match self {
            Self::Null => Json::Null,
            Self::Bool(b) => Json::Bool(*b),
            Self::Integer(i) => Json::from(*i),
            Self::Double(d) => Json::from(*d),
            Self::String(s) => Json::from(s.clone()),
            Self::Point2d(p) => json!({ "x": p.x, "y": p.y }),
            Self::Point3d(p) => json!({ "x": p.x, "y": p.y, "z": p.z }),
            Self::Id(id) => Json::from(id.as_str()),
            Self::Array(items) => Json::Array(items.iter().map(Self::to_json).collect()),
            Self::Json(raw) => raw.clone(),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for PropertyValue {
    fn from(d: f64) -> Self {
        Self::Double(d)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
