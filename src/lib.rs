//! Parameter construction and binding for relational database commands.
//!
//! relbind accumulates an ordered sequence of command-parameter descriptors
//! through a per-command [`ParameterBuilder`], then materializes them against
//! runtime values into driver-ready [`BoundParameter`]s.
//!
//! Descriptors come in three flavors:
//!
//! - **Dynamic** - value and type mapping supplied at bind time; the mapping
//!   is resolved from the runtime value by the injected
//!   [`TypeMappingSource`](relbind_core::TypeMappingSource)
//! - **Type-mapped** - mapping and nullability fixed at build time, either
//!   explicitly or derived from a schema property's metadata
//! - **Composite** - an ordered group of nested descriptors bound as one
//!   logical unit; empty composites are never materialized
//!
//! # Example
//!
//! ```rust
//! use relbind::{bind_parameters, ParameterBuilder, ParameterNameGenerator};
//! use relbind_core::{FallbackTypeMappingSource, ParameterValue, RelationalType, TypeMapping};
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = FallbackTypeMappingSource;
//! let mut names = ParameterNameGenerator::default();
//! let mut builder = ParameterBuilder::new(&source);
//!
//! builder.add_parameter("user_id", names.next_name())?;
//! builder.add_type_mapped_parameter(
//!     "email",
//!     names.next_name(),
//!     TypeMapping::new("varchar(255)", RelationalType::varchar(255)),
//!     false,
//! )?;
//!
//! let mut values = HashMap::new();
//! values.insert("user_id".to_string(), ParameterValue::Int64(7));
//! values.insert("email".to_string(), ParameterValue::string("a@example.com"));
//!
//! let bound = bind_parameters(builder.parameters(), &values, &source)?;
//! assert_eq!(bound.len(), 2);
//! assert_eq!(bound[0].name, "p0");
//! # Ok(())
//! # }
//! ```

pub mod binder;
pub mod builder;
pub mod names;

// Re-exports for convenience
pub use binder::{bind_parameters, BindError, BoundParameter};
pub use builder::{BuildError, Parameter, ParameterBuilder};
pub use names::ParameterNameGenerator;
