//! The relational type universe for relbind.
//!
//! This module defines `RelationalType`, the closed set of relational column
//! types a command parameter can be mapped to. Type mappings and schema
//! properties are both expressed against this universe.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// A relational column type.
///
/// `RelationalType` represents the conceptual column type, independent of any
/// specific database's spelling of it. A [`crate::mapping::TypeMappingSource`]
/// turns a `RelationalType` into a concrete store type for command
/// materialization.
///
/// # YAML Format
///
/// Simple types are specified as strings:
/// ```yaml
/// type: uuid
/// type: int
/// type: text
/// ```
///
/// Parameterized types use object format:
/// ```yaml
/// type:
///   type: var_char
///   length: 255
/// type:
///   type: decimal
///   precision: 10
///   scale: 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RelationalType {
    /// Boolean value
    Bool,

    /// 16-bit signed integer
    SmallInt,

    /// 32-bit signed integer
    Int,

    /// 64-bit signed integer
    BigInt,

    /// 32-bit IEEE 754 floating point
    Float,

    /// 64-bit IEEE 754 floating point
    Double,

    /// Exact decimal with specified precision and scale
    Decimal {
        /// Total number of digits
        precision: u8,
        /// Number of digits after the decimal point
        scale: u8,
    },

    /// Fixed-length character string
    Char {
        /// Exact length
        length: u16,
    },

    /// Variable-length character string with max length
    VarChar {
        /// Maximum length
        length: u16,
    },

    /// Unlimited text
    Text,

    /// Binary data
    Bytes,

    /// Date only (YYYY-MM-DD)
    Date,

    /// Time only (HH:MM:SS)
    Time,

    /// Timestamp without timezone
    DateTime,

    /// Timestamp with timezone
    TimestampTz,

    /// UUID (128-bit)
    Uuid,

    /// JSON document
    Json,
}

// Custom serialization/deserialization for RelationalType.
// Supports both simple string format ("uuid", "int") and object format
// ({"type": "var_char", "length": 255}).

impl Serialize for RelationalType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        match self {
            // Simple types - serialize as string
            Self::Bool => serializer.serialize_str("bool"),
            Self::SmallInt => serializer.serialize_str("small_int"),
            Self::Int => serializer.serialize_str("int"),
            Self::BigInt => serializer.serialize_str("big_int"),
            Self::Float => serializer.serialize_str("float"),
            Self::Double => serializer.serialize_str("double"),
            Self::Text => serializer.serialize_str("text"),
            Self::Bytes => serializer.serialize_str("bytes"),
            Self::Date => serializer.serialize_str("date"),
            Self::Time => serializer.serialize_str("time"),
            Self::DateTime => serializer.serialize_str("date_time"),
            Self::TimestampTz => serializer.serialize_str("timestamp_tz"),
            Self::Uuid => serializer.serialize_str("uuid"),
            Self::Json => serializer.serialize_str("json"),

            // Parameterized types - serialize as map
            Self::Decimal { precision, scale } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "decimal")?;
                map.serialize_entry("precision", precision)?;
                map.serialize_entry("scale", scale)?;
                map.end()
            }
            Self::Char { length } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "char")?;
                map.serialize_entry("length", length)?;
                map.end()
            }
            Self::VarChar { length } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "var_char")?;
                map.serialize_entry("length", length)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for RelationalType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, MapAccess, Visitor};

        struct RelationalTypeVisitor;

        impl<'de> Visitor<'de> for RelationalTypeVisitor {
            type Value = RelationalType;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string or map representing a RelationalType")
            }

            // Handle string format: "uuid", "int", etc.
            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                simple_type(value).ok_or_else(|| E::custom(format!("unknown simple type: {value}")))
            }

            // Handle map format: {"type": "var_char", "length": 255}
            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut type_name: Option<String> = None;
                let mut fields: HashMap<String, serde_yaml::Value> = HashMap::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == "type" {
                        type_name = Some(map.next_value()?);
                    } else {
                        fields.insert(key, map.next_value()?);
                    }
                }

                let type_name = type_name.ok_or_else(|| M::Error::missing_field("type"))?;

                if let Some(simple) = simple_type(&type_name) {
                    return Ok(simple);
                }

                match type_name.as_str() {
                    "decimal" => {
                        let precision = get_field_required(&fields, "precision")?;
                        let scale = get_field_required(&fields, "scale")?;
                        Ok(RelationalType::Decimal { precision, scale })
                    }
                    "char" => {
                        let length = get_field_required(&fields, "length")?;
                        Ok(RelationalType::Char { length })
                    }
                    "var_char" | "varchar" => {
                        let length = get_field_required(&fields, "length")?;
                        Ok(RelationalType::VarChar { length })
                    }
                    _ => Err(M::Error::custom(format!("unknown type: {type_name}"))),
                }
            }
        }

        deserializer.deserialize_any(RelationalTypeVisitor)
    }
}

fn simple_type(name: &str) -> Option<RelationalType> {
    match name {
        "bool" => Some(RelationalType::Bool),
        "small_int" | "smallint" => Some(RelationalType::SmallInt),
        "int" => Some(RelationalType::Int),
        "big_int" | "bigint" => Some(RelationalType::BigInt),
        "float" => Some(RelationalType::Float),
        "double" => Some(RelationalType::Double),
        "text" => Some(RelationalType::Text),
        "bytes" => Some(RelationalType::Bytes),
        "date" => Some(RelationalType::Date),
        "time" => Some(RelationalType::Time),
        "date_time" | "datetime" => Some(RelationalType::DateTime),
        "timestamp_tz" | "timestamptz" => Some(RelationalType::TimestampTz),
        "uuid" => Some(RelationalType::Uuid),
        "json" => Some(RelationalType::Json),
        _ => None,
    }
}

fn get_field_required<T: for<'de> Deserialize<'de>, E: serde::de::Error>(
    fields: &HashMap<String, serde_yaml::Value>,
    key: &'static str,
) -> Result<T, E> {
    let value = fields.get(key).ok_or_else(|| E::missing_field(key))?;
    serde_yaml::from_value(value.clone())
        .map_err(|e| E::custom(format!("invalid field '{key}': {e}")))
}

impl RelationalType {
    /// Create a new Decimal type with the given precision and scale.
    pub fn decimal(precision: u8, scale: u8) -> Self {
        Self::Decimal { precision, scale }
    }

    /// Create a new Char type with the given length.
    pub fn char(length: u16) -> Self {
        Self::Char { length }
    }

    /// Create a new VarChar type with the given length.
    pub fn varchar(length: u16) -> Self {
        Self::VarChar { length }
    }

    /// Check if this type represents a numeric type.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::SmallInt
                | Self::Int
                | Self::BigInt
                | Self::Float
                | Self::Double
                | Self::Decimal { .. }
        )
    }

    /// Check if this type represents a string type.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::Char { .. } | Self::VarChar { .. } | Self::Text)
    }

    /// Check if this type represents a temporal type.
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::Date | Self::Time | Self::DateTime | Self::TimestampTz
        )
    }
}
