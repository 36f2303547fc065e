//! Primitive type codes.

use crate::error::ModelError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The primitive type of a property value, as a fixed numeric code.
///
/// Codes are part of the persisted schema format and round-trip through
/// serde as raw `u16` values, never as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u16)]
pub enum PrimitiveType {
    #[default]
    None = 0x00,
    Binary = 0x101,
    Boolean = 0x201,
    DateTime = 0x301,
    Double = 0x401,
    Integer = 0x501,
    Long = 0x601,
    Point2d = 0x701,
    Point3d = 0x801,
    String = 0x901,
}

impl PrimitiveType {
    /// Returns the raw numeric code.
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }
}

impl TryFrom<u16> for PrimitiveType {
    type Error = ModelError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            0x00 => Ok(Self::None),
            0x101 => Ok(Self::Binary),
            0x201 => Ok(Self::Boolean),
            0x301 => Ok(Self::DateTime),
            0x401 => Ok(Self::Double),
            0x501 => Ok(Self::Integer),
            0x601 => Ok(Self::Long),
            0x701 => Ok(Self::Point2d),
            0x801 => Ok(Self::Point3d),
            0x901 => Ok(Self::String),
            other => Err(ModelError::UnknownPrimitiveType(other)),
        }
    }
}

impl Serialize for PrimitiveType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.code())
    }
}

impl<'de> Deserialize<'de> for PrimitiveType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u16::deserialize(deserializer)?;
        Self::try_from(code).map_err(serde::de::Error::custom)
    }
}
