//! Type mappings and the mapping resolver.
//!
//! A [`TypeMapping`] describes how a runtime value converts to/from a
//! relational column type, pairing the conceptual [`RelationalType`] with the
//! concrete store type string used during command materialization.
//!
//! [`TypeMappingSource`] is the resolver capability: given a relational type,
//! a runtime value, or a schema property, produce a `TypeMapping` or fail.
//! It is injected into the parameter builder rather than held as global state.

use crate::schema::PropertyDefinition;
use crate::types::RelationalType;
use crate::values::ParameterValue;
use serde::{Deserialize, Serialize};

/// Error type for type-mapping resolution.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    /// No mapping exists for the given relational type
    #[error("no type mapping found for relational type {0:?}")]
    Unmappable(RelationalType),

    /// The runtime value's kind has no relational counterpart
    #[error("no type mapping can be inferred for a value of kind '{kind}'")]
    UnmappableValue {
        /// Kind name of the offending value
        kind: &'static str,
    },

    /// A null value carries no type to infer a mapping from
    #[error("cannot infer a type mapping for a null value")]
    UntypedNull,
}

/// Description of how a runtime value converts to/from a relational column type.
///
/// Equality is structural: two mappings are equal when they target the same
/// relational type with the same store type, which is what command
/// materialization relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeMapping {
    /// Store type string used in command text (e.g. `"varchar(255)"`)
    pub store_type: String,

    /// The relational type this mapping targets
    pub relational_type: RelationalType,
}

impl TypeMapping {
    /// Create a new type mapping.
    pub fn new(store_type: impl Into<String>, relational_type: RelationalType) -> Self {
        Self {
            store_type: store_type.into(),
            relational_type,
        }
    }
}

/// Resolver capability: produce type mappings for types, values, and properties.
pub trait TypeMappingSource {
    /// Find the mapping for a relational type.
    fn find_mapping(&self, relational_type: &RelationalType) -> Result<TypeMapping, MappingError>;

    /// Find the mapping for a runtime value, inferring its relational type.
    ///
    /// Used by dynamic parameters at bind time. Fails with
    /// [`MappingError::UntypedNull`] for null values and
    /// [`MappingError::UnmappableValue`] for values with no relational
    /// counterpart (arrays).
    fn find_mapping_for_value(&self, value: &ParameterValue) -> Result<TypeMapping, MappingError> {
        match value.relational_type() {
            Some(relational_type) => self.find_mapping(&relational_type),
            None if value.is_null() => Err(MappingError::UntypedNull),
            None => Err(MappingError::UnmappableValue { kind: value.kind() }),
        }
    }

    /// Find the mapping for a schema property, from its declared type.
    fn find_mapping_for_property(
        &self,
        property: &PropertyDefinition,
    ) -> Result<TypeMapping, MappingError> {
        self.find_mapping(&property.property_type)
    }
}

/// Default mapping source covering the whole type universe.
///
/// Store types follow conventional SQL spellings. Databases with their own
/// spellings provide their own `TypeMappingSource` implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackTypeMappingSource;

impl TypeMappingSource for FallbackTypeMappingSource {
    fn find_mapping(&self, relational_type: &RelationalType) -> Result<TypeMapping, MappingError> {
        let store_type = match relational_type {
            RelationalType::Bool => "boolean".to_string(),
            RelationalType::SmallInt => "smallint".to_string(),
            RelationalType::Int => "integer".to_string(),
            RelationalType::BigInt => "bigint".to_string(),
            RelationalType::Float => "real".to_string(),
            RelationalType::Double => "double precision".to_string(),
            RelationalType::Decimal { precision, scale } => {
                format!("numeric({precision},{scale})")
            }
            RelationalType::Char { length } => format!("char({length})"),
            RelationalType::VarChar { length } => format!("varchar({length})"),
            RelationalType::Text => "text".to_string(),
            RelationalType::Bytes => "bytea".to_string(),
            RelationalType::Date => "date".to_string(),
            RelationalType::Time => "time".to_string(),
            RelationalType::DateTime => "timestamp".to_string(),
            RelationalType::TimestampTz => "timestamptz".to_string(),
            RelationalType::Uuid => "uuid".to_string(),
            RelationalType::Json => "json".to_string(),
        };

        Ok(TypeMapping::new(store_type, relational_type.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_find_mapping() {
        let source = FallbackTypeMappingSource;

        let mapping = source.find_mapping(&RelationalType::Int).unwrap();
        assert_eq!(mapping.store_type, "integer");
        assert_eq!(mapping.relational_type, RelationalType::Int);

        let mapping = source.find_mapping(&RelationalType::varchar(255)).unwrap();
        assert_eq!(mapping.store_type, "varchar(255)");

        let mapping = source.find_mapping(&RelationalType::decimal(10, 2)).unwrap();
        assert_eq!(mapping.store_type, "numeric(10,2)");
    }

    #[test]
    fn test_find_mapping_for_value() {
        let source = FallbackTypeMappingSource;

        let mapping = source
            .find_mapping_for_value(&ParameterValue::Int32(42))
            .unwrap();
        assert_eq!(mapping.relational_type, RelationalType::Int);

        let mapping = source
            .find_mapping_for_value(&ParameterValue::string("hello"))
            .unwrap();
        assert_eq!(mapping.relational_type, RelationalType::Text);
    }

    #[test]
    fn test_null_value_is_untyped() {
        let source = FallbackTypeMappingSource;
        let result = source.find_mapping_for_value(&ParameterValue::Null);
        assert!(matches!(result, Err(MappingError::UntypedNull)));
    }

    #[test]
    fn test_array_value_is_unmappable() {
        let source = FallbackTypeMappingSource;
        let result = source.find_mapping_for_value(&ParameterValue::Array(vec![]));
        assert!(matches!(
            result,
            Err(MappingError::UnmappableValue { kind: "array" })
        ));
    }

    #[test]
    fn test_find_mapping_for_property() {
        let source = FallbackTypeMappingSource;
        let property = PropertyDefinition::nullable("bio", RelationalType::Text);

        let mapping = source.find_mapping_for_property(&property).unwrap();
        assert_eq!(mapping.relational_type, RelationalType::Text);
        assert_eq!(mapping.store_type, "text");
    }

    #[test]
    fn test_mapping_equality_is_structural() {
        let a = TypeMapping::new("integer", RelationalType::Int);
        let b = TypeMapping::new("integer", RelationalType::Int);
        let c = TypeMapping::new("int4", RelationalType::Int);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
