use ontic_entity::{marshal_property, PropertyValue};
use ontic_model::{Point2d, Point3d, PrimitiveType, PropertyMetadata, RelationshipDirection};
use serde_json::json;

fn typed(primitive_type: PrimitiveType) -> PropertyMetadata {
    PropertyMetadata {
        primitive_type,
        ..Default::default()
    }
}

fn typed_array(primitive_type: PrimitiveType) -> PropertyMetadata {
    PropertyMetadata {
        primitive_type,
        min_occurs: Some(0),
        ..Default::default()
    }
}

fn navigation() -> PropertyMetadata {
    PropertyMetadata {
        direction: Some(RelationshipDirection::Forward),
        relationship_class: Some("Site:AssetOwnsChild".to_string()),
        ..Default::default()
    }
}

// ── Absent values ────────────────────────────────────────────────

#[test]
fn missing_raw_is_absent() {
    let v = marshal_property(&typed(PrimitiveType::String), None);
    assert_eq!(v, PropertyValue::Null);
}

#[test]
fn explicit_null_is_absent() {
    let v = marshal_property(&typed(PrimitiveType::String), Some(&json!(null)));
    assert_eq!(v, PropertyValue::Null);
}

// ── Scalar conversion ────────────────────────────────────────────

#[test]
fn primitive_scalars_pass_through_typed() {
    assert_eq!(
        marshal_property(&typed(PrimitiveType::Boolean), Some(&json!(true))),
        PropertyValue::Bool(true)
    );
    assert_eq!(
        marshal_property(&typed(PrimitiveType::Double), Some(&json!(2.5))),
        PropertyValue::Double(2.5)
    );
    assert_eq!(
        marshal_property(&typed(PrimitiveType::Integer), Some(&json!(7))),
        PropertyValue::Integer(7)
    );
    assert_eq!(
        marshal_property(&typed(PrimitiveType::String), Some(&json!("hi"))),
        PropertyValue::String("hi".to_string())
    );
}

#[test]
fn long_marshals_like_integer() {
    assert_eq!(
        marshal_property(&typed(PrimitiveType::Long), Some(&json!(1_234_567_890_123i64))),
        PropertyValue::Integer(1_234_567_890_123)
    );
}

#[test]
fn integer_raw_widens_for_double_property() {
    assert_eq!(
        marshal_property(&typed(PrimitiveType::Double), Some(&json!(3))),
        PropertyValue::Double(3.0)
    );
}

#[test]
fn mismatched_shape_passes_through_unchanged() {
    let v = marshal_property(&typed(PrimitiveType::Boolean), Some(&json!("yes")));
    assert_eq!(v, PropertyValue::Json(json!("yes")));
}

// ── Points ───────────────────────────────────────────────────────

#[test]
fn point2d_scalar_constructed_from_coordinates() {
    let v = marshal_property(&typed(PrimitiveType::Point2d), Some(&json!({"x": 1.0, "y": 2.0})));
    assert_eq!(v, PropertyValue::Point2d(Point2d::new(1.0, 2.0)));
}

#[test]
fn point3d_scalar_constructed_from_coordinates() {
    let v = marshal_property(
        &typed(PrimitiveType::Point3d),
        Some(&json!({"x": 1.0, "y": 2.0, "z": 3.0})),
    );
    assert_eq!(v, PropertyValue::Point3d(Point3d::new(1.0, 2.0, 3.0)));
}

#[test]
fn point3d_sequence_preserves_order() {
    let v = marshal_property(
        &typed_array(PrimitiveType::Point3d),
        Some(&json!([
            {"x": 1.0, "y": 2.0, "z": 3.0},
            {"x": 4.0, "y": 5.0, "z": 6.0},
        ])),
    );
    assert_eq!(
        v,
        PropertyValue::Array(vec![
            PropertyValue::Point3d(Point3d::new(1.0, 2.0, 3.0)),
            PropertyValue::Point3d(Point3d::new(4.0, 5.0, 6.0)),
        ])
    );
}

#[test]
fn malformed_point_passes_through() {
    let v = marshal_property(&typed(PrimitiveType::Point3d), Some(&json!({"x": 1.0})));
    assert_eq!(v, PropertyValue::Json(json!({"x": 1.0})));
}

// ── Sequences ────────────────────────────────────────────────────

#[test]
fn occurrence_bounds_marshal_element_wise() {
    let v = marshal_property(&typed_array(PrimitiveType::Integer), Some(&json!([1, 2, 3])));
    assert_eq!(
        v,
        PropertyValue::Array(vec![
            PropertyValue::Integer(1),
            PropertyValue::Integer(2),
            PropertyValue::Integer(3),
        ])
    );
}

#[test]
fn scalar_raw_under_bounds_wraps_to_one_element() {
    let v = marshal_property(&typed_array(PrimitiveType::Integer), Some(&json!(9)));
    assert_eq!(v, PropertyValue::Array(vec![PropertyValue::Integer(9)]));
}

#[test]
fn empty_sequence_stays_empty() {
    let v = marshal_property(&typed_array(PrimitiveType::String), Some(&json!([])));
    assert_eq!(v, PropertyValue::Array(vec![]));
}

// ── Navigation ───────────────────────────────────────────────────

#[test]
fn navigation_string_becomes_reference() {
    let v = marshal_property(&navigation(), Some(&json!("0x1d")));
    assert_eq!(v.as_id().map(|id| id.as_str()), Some("0x1d"));
}

#[test]
fn navigation_object_reference_reads_id_field() {
    let v = marshal_property(&navigation(), Some(&json!({"id": "0x1d", "rel": "ignored"})));
    assert_eq!(v.as_id().map(|id| id.as_str()), Some("0x1d"));
}

#[test]
fn navigation_without_recognizable_id_passes_through() {
    let v = marshal_property(&navigation(), Some(&json!(42)));
    assert_eq!(v, PropertyValue::Json(json!(42)));
}

// ── Unconverted primitive types ──────────────────────────────────

#[test]
fn date_time_passes_through_as_raw_text() {
    let v = marshal_property(
        &typed(PrimitiveType::DateTime),
        Some(&json!("2026-08-05T12:00:00Z")),
    );
    assert_eq!(v, PropertyValue::Json(json!("2026-08-05T12:00:00Z")));
}

#[test]
fn binary_passes_through_unchanged() {
    let v = marshal_property(&typed(PrimitiveType::Binary), Some(&json!("AQIDBA==")));
    assert_eq!(v, PropertyValue::Json(json!("AQIDBA==")));
}
