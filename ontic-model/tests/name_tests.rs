use ontic_model::ClassFullName;
use std::collections::HashMap;

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parses_canonical_colon_form() {
    let n = ClassFullName::parse("BisCore:GeometricElement").unwrap();
    assert_eq!(n.schema(), "BisCore");
    assert_eq!(n.name(), "GeometricElement");
}

#[test]
fn parses_generated_code_dot_form() {
    let n = ClassFullName::parse("BisCore.GeometricElement").unwrap();
    assert_eq!(n.schema(), "BisCore");
    assert_eq!(n.name(), "GeometricElement");
}

#[test]
fn rejects_missing_separator() {
    assert!(ClassFullName::parse("JustAClass").is_err());
}

#[test]
fn rejects_empty_halves() {
    assert!(ClassFullName::parse(":Class").is_err());
    assert!(ClassFullName::parse("Schema:").is_err());
    assert!(ClassFullName::parse(".").is_err());
}

#[test]
fn from_str_matches_parse() {
    let parsed: ClassFullName = "Planning:Task".parse().unwrap();
    assert_eq!(parsed, ClassFullName::new("Planning", "Task"));
}

// ── Normalization ────────────────────────────────────────────────

#[test]
fn display_is_always_canonical() {
    let colon = ClassFullName::parse("Planning:Task").unwrap();
    let dot = ClassFullName::parse("Planning.Task").unwrap();
    assert_eq!(colon.to_string(), "Planning:Task");
    assert_eq!(dot.to_string(), "Planning:Task");
}

#[test]
fn both_spellings_are_one_lookup_key() {
    let mut cache = HashMap::new();
    cache.insert(ClassFullName::parse("Planning:Task").unwrap(), 1u32);

    let dot = ClassFullName::parse("Planning.Task").unwrap();
    assert_eq!(cache.get(&dot), Some(&1));
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serializes_as_canonical_string() {
    let n = ClassFullName::new("Planning", "Task");
    assert_eq!(serde_json::to_value(&n).unwrap(), "Planning:Task");
}

#[test]
fn deserializes_either_separator() {
    let colon: ClassFullName = serde_json::from_str(r#""Planning:Task""#).unwrap();
    let dot: ClassFullName = serde_json::from_str(r#""Planning.Task""#).unwrap();
    assert_eq!(colon, dot);
}

#[test]
fn deserialize_rejects_bare_name() {
    let result: Result<ClassFullName, _> = serde_json::from_str(r#""Task""#);
    assert!(result.is_err());
}
