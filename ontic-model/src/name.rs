//! Schema-qualified class names.
//!
//! The canonical textual form is `"Schema:Class"`. Generated code spells the
//! same name as `"Schema.Class"`; parsing accepts either separator and
//! normalizes, so a registry keyed on [`ClassFullName`] can never split one
//! class across two spellings.

use crate::error::ModelError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A fully-qualified class name: schema (namespace) plus class name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassFullName {
    schema: String,
    name: String,
}

impl ClassFullName {
    /// Creates a full name from already-split parts.
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
        }
    }

    /// Parses the canonical `Schema:Class` form or the generated-code
    /// `Schema.Class` form. Both halves must be non-empty.
    pub fn parse(s: &str) -> Result<Self, ModelError> {
        let (schema, name) = s
            .split_once(':')
            .or_else(|| s.split_once('.'))
            .ok_or_else(|| ModelError::InvalidClassName(s.to_string()))?;

        if schema.is_empty() || name.is_empty() {
            return Err(ModelError::InvalidClassName(s.to_string()));
        }

        Ok(Self::new(schema, name))
    }

    /// Returns the schema half.
    #[must_use]
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Returns the class half.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ClassFullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.schema, self.name)
    }
}

impl FromStr for ClassFullName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ClassFullName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClassFullName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
