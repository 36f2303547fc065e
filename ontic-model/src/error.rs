//! Error types for the metadata model.

use thiserror::Error;

/// Errors raised while parsing or constructing metadata types.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A class full name not of the `Schema:Class` (or `Schema.Class`) form.
    #[error("invalid class full name: {0:?}")]
    InvalidClassName(String),

    /// A primitive type code outside the fixed code table.
    #[error("unknown primitive type code: {0:#x}")]
    UnknownPrimitiveType(u16),

    /// A property name declared twice within one class.
    #[error("duplicate property: {0}")]
    DuplicateProperty(String),
}
