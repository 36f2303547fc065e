//! The base entity type and its persistent/editable lifecycle.

use crate::error::EntityError;
use crate::ids::InstanceId;
use crate::marshal::marshal_property;
use crate::model::Model;
use crate::value::PropertyValue;
use ontic_model::ClassFullName;
use serde_json::Value as Json;
use std::fmt;
use std::sync::Arc;

/// Lifecycle state. The transition to `Persistent` is one-way; every
/// mutating operation checks this tag and fails once it has happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Editable,
    Persistent,
}

/// An in-memory object bound to a runtime-resolved class definition.
///
/// Constructed from a raw JSON property bag with one slot per declared
/// visible property of the class and its single-base inheritance chain.
/// While editable it may be mutated freely; once frozen every write fails
/// with [`EntityError::ImmutabilityViolation`] while reads keep returning
/// the pre-freeze values. The class full name is an explicit immutable
/// field set at construction, never recomputed.
pub struct Entity {
    model: Arc<Model>,
    class_full_name: ClassFullName,
    id: Option<InstanceId>,
    slots: Vec<(String, PropertyValue)>,
    state: Lifecycle,
}

impl Entity {
    /// Bag key carrying the class identity in serialized form.
    pub const CLASS_KEY: &'static str = "class_full_name";

    pub(crate) fn from_bag(
        model: Arc<Model>,
        class_full_name: ClassFullName,
        bag: &Json,
    ) -> Result<Self, EntityError> {
        let mut slots: Vec<(String, PropertyValue)> = Vec::new();
        model
            .registry()
            .for_each_property(&class_full_name, true, false, &mut |name, meta| {
                // A shadowed inherited name keeps the most-derived slot,
                // which enumeration visits first.
                if !slots.iter().any(|(n, _)| n == name) {
                    slots.push((name.to_string(), marshal_property(meta, bag.get(name))));
                }
            })?;

        Ok(Self {
            model,
            class_full_name,
            id: None,
            slots,
            state: Lifecycle::Editable,
        })
    }

    /// The entity's fully-qualified class name.
    #[must_use]
    pub fn class_full_name(&self) -> &ClassFullName {
        &self.class_full_name
    }

    /// The owning model.
    #[must_use]
    pub fn model(&self) -> &Arc<Model> {
        &self.model
    }

    /// The stored-record identifier, once assigned.
    #[must_use]
    pub fn id(&self) -> Option<&InstanceId> {
        self.id.as_ref()
    }

    /// True once the entity reflects a confirmed stored record.
    #[must_use]
    pub const fn is_persistent(&self) -> bool {
        matches!(self.state, Lifecycle::Persistent)
    }

    /// Reads one property slot. Works identically in both lifecycle states.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&PropertyValue> {
        self.slots.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Iterates `(name, value)` slots in enumeration order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.slots.iter().map(|(n, v)| (n.as_str(), v))
    }

    #[must_use]
    pub fn get_string(&self, name: &str) -> Option<&str> {
        self.value(name).and_then(PropertyValue::as_str)
    }

    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.value(name).and_then(PropertyValue::as_bool)
    }

    #[must_use]
    pub fn get_integer(&self, name: &str) -> Option<i64> {
        self.value(name).and_then(PropertyValue::as_integer)
    }

    #[must_use]
    pub fn get_double(&self, name: &str) -> Option<f64> {
        self.value(name).and_then(PropertyValue::as_double)
    }

    /// Writes one property slot; editable state only.
    pub fn set_value(
        &mut self,
        name: &str,
        value: impl Into<PropertyValue>,
    ) -> Result<(), EntityError> {
        self.ensure_editable(name)?;
        match self.slots.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(EntityError::UnknownProperty {
                class: self.class_full_name.clone(),
                property: name.to_string(),
            }),
        }
    }

    /// Assigns the stored-record identifier; editable state only.
    pub fn set_id(&mut self, id: InstanceId) -> Result<(), EntityError> {
        self.ensure_editable("id")?;
        self.id = Some(id);
        Ok(())
    }

    fn ensure_editable(&self, target: &str) -> Result<(), EntityError> {
        match self.state {
            Lifecycle::Editable => Ok(()),
            Lifecycle::Persistent => Err(EntityError::ImmutabilityViolation {
                class: self.class_full_name.clone(),
                target: target.to_string(),
            }),
        }
    }

    /// Freezes the entity into the persistent state.
    ///
    /// One-way: once persistent, always persistent. Invoked by the storage
    /// collaborator at the point it confirms the stored record.
    pub fn freeze(&mut self) {
        self.state = Lifecycle::Persistent;
    }

    /// Serializes the entity back into bag form: the class full name plus
    /// every visible property's current value, using the same enumeration
    /// rule as construction. Null slots emit no key.
    pub fn to_bag(&self) -> Result<Json, EntityError> {
        let mut bag = serde_json::Map::new();
        bag.insert(
            Self::CLASS_KEY.to_string(),
            Json::String(self.class_full_name.to_string()),
        );
        self.model
            .registry()
            .for_each_property(&self.class_full_name, true, false, &mut |name, _| {
                if let Some(value) = self.value(name) {
                    if !value.is_null() {
                        bag.insert(name.to_string(), value.to_json());
                    }
                }
            })?;
        Ok(Json::Object(bag))
    }

    /// Builds a fresh editable copy by re-running the construction pipeline
    /// over this entity's own serialized bag.
    ///
    /// The copy carries the same identifier (it still shadows the same
    /// stored record) but starts editable; mutating it never affects the
    /// original.
    pub fn copy_for_edit(&self) -> Result<Self, EntityError> {
        let bag = self.to_bag()?;
        let mut copy = Self::from_bag(
            Arc::clone(&self.model),
            self.class_full_name.clone(),
            &bag,
        )?;
        copy.id = self.id.clone();
        Ok(copy)
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("class_full_name", &self.class_full_name)
            .field("id", &self.id)
            .field("slots", &self.slots)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
