//! Core types for relbind.
//!
//! This crate provides the foundational types used across the parameter
//! construction and binding layer, including:
//!
//! - [`RelationalType`] - The relational column type universe
//! - [`ParameterValue`] - Runtime values bound to command parameters
//! - [`TypeMapping`] / [`TypeMappingSource`] - Value-to-column conversion descriptions
//!   and the resolver capability producing them
//! - [`ModelSchema`] - Entity/property metadata loaded from YAML
//!
//! # Architecture
//!
//! relbind-core sits at the foundation of the stack:
//!
//! ```text
//! relbind-core (this crate)
//!    │
//!    └─── relbind  (parameter builder and binder)
//! ```
//!
//! # Example
//!
//! ```rust
//! use relbind_core::{FallbackTypeMappingSource, ParameterValue, RelationalType, TypeMappingSource};
//!
//! let source = FallbackTypeMappingSource;
//! let mapping = source.find_mapping(&RelationalType::varchar(255)).unwrap();
//! assert_eq!(mapping.store_type, "varchar(255)");
//!
//! let mapping = source.find_mapping_for_value(&ParameterValue::Int32(42)).unwrap();
//! assert_eq!(mapping.relational_type, RelationalType::Int);
//! ```

pub mod mapping;
pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use mapping::{FallbackTypeMappingSource, MappingError, TypeMapping, TypeMappingSource};
pub use schema::{EntityDefinition, ModelSchema, PropertyDefinition, SchemaError};
pub use types::RelationalType;
pub use values::ParameterValue;
