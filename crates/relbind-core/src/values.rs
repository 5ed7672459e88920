//! Runtime parameter values.
//!
//! This module defines `ParameterValue`, the set of runtime values that can be
//! bound to a command parameter. Dynamic parameters use the value itself to
//! infer a [`RelationalType`] at bind time.

use crate::types::RelationalType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A runtime value supplied for a command parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// Boolean value
    Bool(bool),

    /// 32-bit signed integer
    Int32(i32),

    /// 64-bit signed integer
    Int64(i64),

    /// 64-bit floating point
    Float64(f64),

    /// String value
    String(String),

    /// Binary data
    Bytes(Vec<u8>),

    /// UUID value
    Uuid(Uuid),

    /// Date/time with timezone
    DateTime(DateTime<Utc>),

    /// Decimal value stored as string with precision info
    Decimal {
        /// String representation of the decimal value
        value: String,
        /// Total number of digits
        precision: u8,
        /// Number of digits after decimal point
        scale: u8,
    },

    /// Array of values, used to carry composite parameter values
    Array(Vec<ParameterValue>),

    /// Null value
    Null,
}

impl ParameterValue {
    /// Create a new decimal value.
    pub fn decimal(value: impl Into<String>, precision: u8, scale: u8) -> Self {
        Self::Decimal {
            value: value.into(),
            precision,
            scale,
        }
    }

    /// Create a string value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int32(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(i) => Some(*i),
            Self::Int32(i) => Some(i64::from(*i)),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a byte slice.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get this value as a UUID.
    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(u) => Some(u),
            _ => None,
        }
    }

    /// Try to get this value as a DateTime.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&[ParameterValue]> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Short name of the value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int32(_) => "int32",
            Self::Int64(_) => "int64",
            Self::Float64(_) => "float64",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Uuid(_) => "uuid",
            Self::DateTime(_) => "datetime",
            Self::Decimal { .. } => "decimal",
            Self::Array(_) => "array",
            Self::Null => "null",
        }
    }

    /// Infer the relational type of this value.
    ///
    /// Returns `None` for `Null` (no type can be inferred) and for `Array`
    /// (arrays are composite carriers, not bindable scalars).
    pub fn relational_type(&self) -> Option<RelationalType> {
        match self {
            Self::Bool(_) => Some(RelationalType::Bool),
            Self::Int32(_) => Some(RelationalType::Int),
            Self::Int64(_) => Some(RelationalType::BigInt),
            Self::Float64(_) => Some(RelationalType::Double),
            Self::String(_) => Some(RelationalType::Text),
            Self::Bytes(_) => Some(RelationalType::Bytes),
            Self::Uuid(_) => Some(RelationalType::Uuid),
            Self::DateTime(_) => Some(RelationalType::TimestampTz),
            Self::Decimal {
                precision, scale, ..
            } => Some(RelationalType::Decimal {
                precision: *precision,
                scale: *scale,
            }),
            Self::Array(_) | Self::Null => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(ParameterValue::Bool(true).as_bool(), Some(true));
        assert_eq!(ParameterValue::Int32(42).as_i32(), Some(42));
        assert_eq!(ParameterValue::Int64(100).as_i64(), Some(100));
        assert_eq!(ParameterValue::Float64(3.15).as_f64(), Some(3.15));
        assert_eq!(ParameterValue::string("test").as_str(), Some("test"));

        // Cross-type widening
        assert_eq!(ParameterValue::Int32(42).as_i64(), Some(42));
        assert_eq!(ParameterValue::Bool(true).as_i32(), None);
    }

    #[test]
    fn test_relational_type_inference() {
        assert_eq!(
            ParameterValue::Int32(1).relational_type(),
            Some(RelationalType::Int)
        );
        assert_eq!(
            ParameterValue::Int64(1).relational_type(),
            Some(RelationalType::BigInt)
        );
        assert_eq!(
            ParameterValue::string("x").relational_type(),
            Some(RelationalType::Text)
        );
        assert_eq!(
            ParameterValue::decimal("10.25", 10, 2).relational_type(),
            Some(RelationalType::decimal(10, 2))
        );
        assert_eq!(ParameterValue::Null.relational_type(), None);
        assert_eq!(ParameterValue::Array(vec![]).relational_type(), None);
    }

    #[test]
    fn test_is_null() {
        assert!(ParameterValue::Null.is_null());
        assert!(!ParameterValue::Int32(0).is_null());
    }
}
