//! Class metadata and its declaration-ordered property map.

use crate::attribute::CustomAttribute;
use crate::error::ModelError;
use crate::name::ClassFullName;
use crate::property::PropertyMetadata;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Declaration-ordered mapping from property name to metadata.
///
/// Serializes as a JSON object. Deserialization preserves the source
/// declaration order and rejects duplicate names. Classes are small, so
/// lookup is a linear scan.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyMap {
    entries: Vec<(String, PropertyMetadata)>,
}

impl PropertyMap {
    /// Builds a map from `(name, metadata)` pairs, rejecting duplicates.
    pub fn from_entries(entries: Vec<(String, PropertyMetadata)>) -> Result<Self, ModelError> {
        for (i, (name, _)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(seen, _)| seen == name) {
                return Err(ModelError::DuplicateProperty(name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyMetadata> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, m)| m)
    }

    /// Iterates `(name, metadata)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyMetadata)> {
        self.entries.iter().map(|(n, m)| (n.as_str(), m))
    }

    /// Number of declared properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the class declares no properties of its own.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for PropertyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, meta) in &self.entries {
            map.serialize_entry(name, meta)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PropertyMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PropertyMapVisitor;

        impl<'de> Visitor<'de> for PropertyMapVisitor {
            type Value = PropertyMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of property name to property metadata")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, meta)) = access.next_entry::<String, PropertyMetadata>()? {
                    entries.push((name, meta));
                }
                PropertyMap::from_entries(entries).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_map(PropertyMapVisitor)
    }
}

/// Resolved description of one class: its property set, base-class chain,
/// and custom attributes.
///
/// Built once from the schema JSON the schema-loading collaborator supplies,
/// then cached for the process lifetime and shared immutably.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetadata {
    /// Canonical `Schema:Class` name.
    #[serde(alias = "classFullName")]
    pub class_full_name: ClassFullName,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Class modifier (`Abstract`, `Sealed`, ...) as spelled by the schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", alias = "displayLabel")]
    pub display_label: Option<String>,

    /// Base class full names. Index 0 is the true base class; any further
    /// entries are mixins applied after it, in listed order.
    #[serde(default, skip_serializing_if = "Vec::is_empty", alias = "baseClasses")]
    pub base_classes: Vec<ClassFullName>,

    #[serde(default, skip_serializing_if = "Option::is_none", alias = "customAttributes")]
    pub custom_attributes: Option<Vec<CustomAttribute>>,

    /// Properties declared directly on this class, in declaration order.
    #[serde(default, skip_serializing_if = "PropertyMap::is_empty")]
    pub properties: PropertyMap,
}

impl ClassMetadata {
    /// The true base class, when the class has one.
    ///
    /// Mixins (entries past index 0) are never part of the inheritance
    /// traversal; only this entry is.
    #[must_use]
    pub fn base_class(&self) -> Option<&ClassFullName> {
        self.base_classes.first()
    }
}
