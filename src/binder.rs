//! Parameter binding.
//!
//! At execution time the ordered descriptor list produced by the builder is
//! materialized against a bag of runtime values keyed by invariant name,
//! yielding the ordered [`BoundParameter`] list a driver attaches to the
//! command.
//!
//! Composite descriptors consume a single array value from the bag and
//! distribute its elements positionally over their nested descriptors.

use crate::builder::Parameter;
use relbind_core::{MappingError, ParameterValue, TypeMapping, TypeMappingSource};
use std::collections::HashMap;
use tracing::debug;

/// Error type for parameter binding.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// The value bag has no entry for a descriptor's invariant name
    #[error("no value supplied for parameter '{invariant_name}'")]
    MissingValue {
        /// Invariant name with no bag entry
        invariant_name: String,
    },

    /// A composite descriptor's bag value is not an array
    #[error("composite parameter '{invariant_name}' requires an array value, got {kind}")]
    CompositeValueNotArray {
        /// Invariant name of the composite
        invariant_name: String,
        /// Kind of the offending value
        kind: &'static str,
    },

    /// A composite's array value has fewer elements than nested descriptors
    #[error(
        "composite parameter '{invariant_name}' expects {expected} values, got {actual}"
    )]
    CompositeArity {
        /// Invariant name of the composite
        invariant_name: String,
        /// Number of nested descriptors
        expected: usize,
        /// Number of array elements supplied
        actual: usize,
    },

    /// The mapping resolver could not produce a mapping for a dynamic value
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

/// A fully materialized command parameter: placeholder name, runtime value,
/// resolved type mapping, and nullability.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundParameter {
    /// Placeholder text used in the command
    pub name: String,

    /// The runtime value to attach
    pub value: ParameterValue,

    /// Resolved conversion description
    pub type_mapping: TypeMapping,

    /// Whether the parameter admits null values
    pub nullable: bool,
}

/// Bind the ordered descriptor list against a value bag keyed by invariant
/// name.
///
/// The result preserves descriptor order; each composite contributes one
/// bound parameter per nested descriptor, in nested order.
pub fn bind_parameters(
    parameters: &[Parameter],
    values: &HashMap<String, ParameterValue>,
    mapping_source: &dyn TypeMappingSource,
) -> Result<Vec<BoundParameter>, BindError> {
    let mut bound = Vec::with_capacity(parameters.len());

    for parameter in parameters {
        let invariant_name = parameter.invariant_name();
        let value = values
            .get(invariant_name)
            .cloned()
            .ok_or_else(|| BindError::MissingValue {
                invariant_name: invariant_name.to_string(),
            })?;

        bind_value(parameter, value, mapping_source, &mut bound)?;
    }

    debug!(count = bound.len(), "bound command parameters");
    Ok(bound)
}

fn bind_value(
    parameter: &Parameter,
    value: ParameterValue,
    mapping_source: &dyn TypeMappingSource,
    out: &mut Vec<BoundParameter>,
) -> Result<(), BindError> {
    match parameter {
        Parameter::Dynamic { name, .. } => {
            let type_mapping = mapping_source.find_mapping_for_value(&value)?;
            let nullable = value.is_null();
            out.push(BoundParameter {
                name: name.clone(),
                value,
                type_mapping,
                nullable,
            });
            Ok(())
        }

        Parameter::TypeMapped {
            name,
            type_mapping,
            nullable,
            ..
        } => {
            out.push(BoundParameter {
                name: name.clone(),
                value,
                type_mapping: type_mapping.clone(),
                nullable: *nullable,
            });
            Ok(())
        }

        Parameter::Composite {
            invariant_name,
            parameters,
        } => {
            let elements = match value {
                ParameterValue::Array(elements) => elements,
                other => {
                    return Err(BindError::CompositeValueNotArray {
                        invariant_name: invariant_name.clone(),
                        kind: other.kind(),
                    })
                }
            };

            if elements.len() < parameters.len() {
                return Err(BindError::CompositeArity {
                    invariant_name: invariant_name.clone(),
                    expected: parameters.len(),
                    actual: elements.len(),
                });
            }

            // Elements pair with nested descriptors positionally, not by
            // invariant name.
            for (nested, element) in parameters.iter().zip(elements) {
                bind_value(nested, element, mapping_source, out)?;
            }
            Ok(())
        }
    }
}
