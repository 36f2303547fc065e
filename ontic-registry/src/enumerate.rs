//! Inheritance-aware property enumeration.

use crate::error::MetadataError;
use crate::registry::ClassRegistry;
use ontic_model::{ClassFullName, PropertyMetadata};

impl ClassRegistry {
    /// Visits every property of `class`, most-derived first.
    ///
    /// Properties declared directly on the class are visited in declaration
    /// order, filtered by the custom-handled visibility rule (orphans stay
    /// visible). When `include_super` is set and the class declares a base
    /// class, enumeration recurses into the first base-class entry only;
    /// mixins listed after it contribute no inherited properties. A cycle
    /// in the base-class chain is a schema defect and is not guarded
    /// against here.
    ///
    /// A resolution failure anywhere along the chain aborts the whole
    /// enumeration; there is no best-effort partial visit.
    pub fn for_each_property<F>(
        &self,
        class: &ClassFullName,
        include_super: bool,
        include_custom_handled: bool,
        visit: &mut F,
    ) -> Result<(), MetadataError>
    where
        F: FnMut(&str, &PropertyMetadata),
    {
        let meta = self.find(class)?;

        for (name, prop) in meta.properties.iter() {
            if prop.is_visible(include_custom_handled) {
                visit(name, prop);
            }
        }

        if include_super {
            if let Some(base) = meta.base_class() {
                self.for_each_property(base, true, include_custom_handled, visit)?;
            }
        }

        Ok(())
    }
}
