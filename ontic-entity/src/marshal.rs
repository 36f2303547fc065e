//! Raw-bag to typed-value conversion.

use crate::ids::InstanceId;
use crate::value::PropertyValue;
use ontic_model::{Point2d, Point3d, PrimitiveType, PropertyMetadata};
use serde_json::Value as Json;

/// Converts one raw bag value into its typed in-memory form.
///
/// Conversion never fails: a raw shape the declared type has no case for
/// passes through unchanged, and only metadata *resolution* can reject an
/// operation. Absent and explicit-null raws both map to
/// [`PropertyValue::Null`].
#[must_use]
pub fn marshal_property(meta: &PropertyMetadata, raw: Option<&Json>) -> PropertyValue {
    let raw = match raw {
        None | Some(Json::Null) => return PropertyValue::Null,
        Some(value) => value,
    };

    if meta.is_array() {
        // Occurrence bounds make this a sequence; a scalar raw is carried
        // as a one-element sequence rather than rejected.
        let items = match raw {
            Json::Array(items) => items.iter().map(|item| marshal_scalar(meta, item)).collect(),
            other => vec![marshal_scalar(meta, other)],
        };
        return PropertyValue::Array(items);
    }

    marshal_scalar(meta, raw)
}

/// Scalar conversion rule, dispatched on the primitive type code.
///
/// Codes with no scalar case (none, binary, date-time) fall through to the
/// navigation check and finally to raw passthrough.
fn marshal_scalar(meta: &PropertyMetadata, raw: &Json) -> PropertyValue {
    match meta.primitive_type {
        PrimitiveType::Boolean => match raw.as_bool() {
            Some(b) => PropertyValue::Bool(b),
            None => PropertyValue::Json(raw.clone()),
        },
        PrimitiveType::Double => match raw.as_f64() {
            Some(d) => PropertyValue::Double(d),
            None => PropertyValue::Json(raw.clone()),
        },
        PrimitiveType::Integer | PrimitiveType::Long => match raw.as_i64() {
            Some(i) => PropertyValue::Integer(i),
            None => PropertyValue::Json(raw.clone()),
        },
        PrimitiveType::String => match raw.as_str() {
            Some(s) => PropertyValue::String(s.to_string()),
            None => PropertyValue::Json(raw.clone()),
        },
        PrimitiveType::Point2d => match serde_json::from_value::<Point2d>(raw.clone()) {
            Ok(p) => PropertyValue::Point2d(p),
            Err(_) => PropertyValue::Json(raw.clone()),
        },
        PrimitiveType::Point3d => match serde_json::from_value::<Point3d>(raw.clone()) {
            Ok(p) => PropertyValue::Point3d(p),
            Err(_) => PropertyValue::Json(raw.clone()),
        },
        PrimitiveType::None | PrimitiveType::Binary | PrimitiveType::DateTime => {
            if meta.is_navigation() {
                marshal_reference(raw)
            } else {
                PropertyValue::Json(raw.clone())
            }
        }
    }
}

/// Navigation raws are either a bare identifier string or an object
/// carrying one under `"id"`.
fn marshal_reference(raw: &Json) -> PropertyValue {
    let id = raw.as_str().or_else(|| raw.get("id").and_then(Json::as_str));
    match id {
        Some(id) => PropertyValue::Id(InstanceId::from(id)),
        None => PropertyValue::Json(raw.clone()),
    }
}
