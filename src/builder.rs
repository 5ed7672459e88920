//! Parameter construction.
//!
//! [`ParameterBuilder`] accumulates an ordered sequence of [`Parameter`]
//! descriptors for one database command. Descriptors come in three flavors:
//! dynamic (type resolved at bind time from the runtime value), type-mapped
//! (mapping and nullability fixed at build time), and composite (an ordered
//! group of nested descriptors materialized as one logical unit).
//!
//! One builder is populated by one caller within one command-building pass;
//! the accumulated list is then handed to the binder.

use relbind_core::{MappingError, PropertyDefinition, TypeMapping, TypeMappingSource};
use tracing::{debug, trace};

/// Error type for parameter construction.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Invariant names and placeholder names must be non-empty
    #[error("parameter identifiers must be non-empty")]
    EmptyIdentifier,

    /// The mapping resolver could not produce a mapping
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

/// A command parameter descriptor.
///
/// Every variant carries an invariant name: the stable logical key a runtime
/// value is looked up by, distinct from the placeholder `name` used in the
/// command text.
#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
    /// Value and type mapping are supplied at bind time.
    Dynamic {
        /// Stable logical key, unique within one command
        invariant_name: String,
        /// Placeholder text used in the command
        name: String,
    },

    /// Mapping and nullability fixed at build time.
    TypeMapped {
        /// Stable logical key, unique within one command
        invariant_name: String,
        /// Placeholder text used in the command
        name: String,
        /// How the runtime value converts to the column type
        type_mapping: TypeMapping,
        /// Whether the parameter admits null values
        nullable: bool,
    },

    /// Ordered group of nested descriptors bound as one logical unit.
    Composite {
        /// Stable logical key, unique within one command
        invariant_name: String,
        /// Nested descriptors, in insertion order; never empty
        parameters: Vec<Parameter>,
    },
}

impl Parameter {
    /// The parameter's stable logical key.
    pub fn invariant_name(&self) -> &str {
        match self {
            Self::Dynamic { invariant_name, .. }
            | Self::TypeMapped { invariant_name, .. }
            | Self::Composite { invariant_name, .. } => invariant_name,
        }
    }
}

/// Append-only, insertion-order-preserving builder for one command's
/// parameters.
///
/// The builder holds the injected [`TypeMappingSource`] so that the
/// property-driven overload can derive mappings from schema metadata, and so
/// that nested composite builders share the same resolver.
pub struct ParameterBuilder<'a> {
    mapping_source: &'a dyn TypeMappingSource,
    parameters: Vec<Parameter>,
}

impl<'a> ParameterBuilder<'a> {
    /// Create a new builder over the given mapping resolver.
    pub fn new(mapping_source: &'a dyn TypeMappingSource) -> Self {
        Self {
            mapping_source,
            parameters: Vec::new(),
        }
    }

    /// Append a dynamic parameter whose value and mapping are supplied at
    /// bind time.
    pub fn add_parameter(
        &mut self,
        invariant_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<(), BuildError> {
        let invariant_name = non_empty(invariant_name.into())?;
        let name = non_empty(name.into())?;

        trace!(%invariant_name, %name, "adding dynamic parameter");
        self.parameters.push(Parameter::Dynamic {
            invariant_name,
            name,
        });
        Ok(())
    }

    /// Append a type-mapped parameter with an explicit mapping and
    /// nullability.
    pub fn add_type_mapped_parameter(
        &mut self,
        invariant_name: impl Into<String>,
        name: impl Into<String>,
        type_mapping: TypeMapping,
        nullable: bool,
    ) -> Result<(), BuildError> {
        let invariant_name = non_empty(invariant_name.into())?;
        let name = non_empty(name.into())?;

        trace!(
            %invariant_name,
            %name,
            store_type = %type_mapping.store_type,
            nullable,
            "adding type-mapped parameter"
        );
        self.parameters.push(Parameter::TypeMapped {
            invariant_name,
            name,
            type_mapping,
            nullable,
        });
        Ok(())
    }

    /// Append a type-mapped parameter derived from a schema property: the
    /// mapping comes from the resolver, the nullability from the property's
    /// own flag.
    pub fn add_property_parameter(
        &mut self,
        invariant_name: impl Into<String>,
        name: impl Into<String>,
        property: &PropertyDefinition,
    ) -> Result<(), BuildError> {
        let type_mapping = self.mapping_source.find_mapping_for_property(property)?;
        self.add_type_mapped_parameter(invariant_name, name, type_mapping, property.nullable)
    }

    /// Append a composite parameter populated by `populate` through a fresh
    /// child builder sharing this builder's resolver.
    ///
    /// If the child builder ends with zero descriptors, nothing is appended.
    /// A failure inside `populate` propagates and nothing is appended.
    pub fn add_composite_parameter<F>(
        &mut self,
        invariant_name: impl Into<String>,
        populate: F,
    ) -> Result<(), BuildError>
    where
        F: FnOnce(&mut ParameterBuilder<'_>) -> Result<(), BuildError>,
    {
        let invariant_name = non_empty(invariant_name.into())?;

        let mut child = ParameterBuilder::new(self.mapping_source);
        populate(&mut child)?;

        if child.parameters.is_empty() {
            debug!(%invariant_name, "eliding empty composite parameter");
            return Ok(());
        }

        trace!(
            %invariant_name,
            count = child.parameters.len(),
            "adding composite parameter"
        );
        self.parameters.push(Parameter::Composite {
            invariant_name,
            parameters: child.parameters,
        });
        Ok(())
    }

    /// The accumulated descriptors, in insertion order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Consume the builder, yielding the ordered descriptor list.
    pub fn into_parameters(self) -> Vec<Parameter> {
        self.parameters
    }
}

fn non_empty(identifier: String) -> Result<String, BuildError> {
    if identifier.is_empty() {
        return Err(BuildError::EmptyIdentifier);
    }
    Ok(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use relbind_core::{FallbackTypeMappingSource, RelationalType, TypeMappingSource};

    #[test]
    fn test_can_add_dynamic_parameter() {
        let source = FallbackTypeMappingSource;
        let mut builder = ParameterBuilder::new(&source);

        builder.add_parameter("InvariantName", "Name").unwrap();

        assert_eq!(builder.parameters().len(), 1);
        assert_eq!(
            builder.parameters()[0],
            Parameter::Dynamic {
                invariant_name: "InvariantName".to_string(),
                name: "Name".to_string(),
            }
        );
    }

    #[test]
    fn test_can_add_type_mapped_parameter() {
        for nullable in [true, false] {
            let source = FallbackTypeMappingSource;
            let type_mapping = source.find_mapping(&RelationalType::Int).unwrap();
            let mut builder = ParameterBuilder::new(&source);

            builder
                .add_type_mapped_parameter(
                    "InvariantName",
                    "Name",
                    type_mapping.clone(),
                    nullable,
                )
                .unwrap();

            assert_eq!(builder.parameters().len(), 1);
            match &builder.parameters()[0] {
                Parameter::TypeMapped {
                    invariant_name,
                    name,
                    type_mapping: mapping,
                    nullable: is_nullable,
                } => {
                    assert_eq!(invariant_name, "InvariantName");
                    assert_eq!(name, "Name");
                    assert_eq!(mapping, &type_mapping);
                    assert_eq!(*is_nullable, nullable);
                }
                other => panic!("expected type-mapped parameter, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_can_add_parameter_by_property() {
        for nullable in [true, false] {
            let source = FallbackTypeMappingSource;
            let mut property = PropertyDefinition::new("MyProp", RelationalType::Text);
            property.nullable = nullable;

            let mut builder = ParameterBuilder::new(&source);
            builder
                .add_property_parameter("InvariantName", "Name", &property)
                .unwrap();

            assert_eq!(builder.parameters().len(), 1);
            match &builder.parameters()[0] {
                Parameter::TypeMapped {
                    invariant_name,
                    name,
                    type_mapping,
                    nullable: is_nullable,
                } => {
                    assert_eq!(invariant_name, "InvariantName");
                    assert_eq!(name, "Name");
                    assert_eq!(
                        type_mapping,
                        &source.find_mapping_for_property(&property).unwrap()
                    );
                    assert_eq!(*is_nullable, nullable);
                }
                other => panic!("expected type-mapped parameter, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_can_add_composite_parameter() {
        let source = FallbackTypeMappingSource;
        let mut builder = ParameterBuilder::new(&source);

        builder
            .add_composite_parameter("CompositeInvariant", |b| {
                b.add_type_mapped_parameter(
                    "FirstInvariant",
                    "FirstName",
                    TypeMapping::new("integer", RelationalType::Int),
                    false,
                )?;
                b.add_type_mapped_parameter(
                    "SecondInvariant",
                    "SecondName",
                    TypeMapping::new("varchar(255)", RelationalType::varchar(255)),
                    true,
                )
            })
            .unwrap();

        assert_eq!(builder.parameters().len(), 1);
        match &builder.parameters()[0] {
            Parameter::Composite {
                invariant_name,
                parameters,
            } => {
                assert_eq!(invariant_name, "CompositeInvariant");
                assert_eq!(parameters.len(), 2);
            }
            other => panic!("expected composite parameter, got {other:?}"),
        }
    }

    #[test]
    fn test_does_not_add_empty_composite_parameter() {
        let source = FallbackTypeMappingSource;
        let mut builder = ParameterBuilder::new(&source);

        builder
            .add_composite_parameter("CompositeInvariant", |_| Ok(()))
            .unwrap();

        assert_eq!(builder.parameters().len(), 0);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let source = FallbackTypeMappingSource;
        let mut builder = ParameterBuilder::new(&source);

        builder.add_parameter("a", "p0").unwrap();
        builder
            .add_type_mapped_parameter(
                "b",
                "p1",
                TypeMapping::new("text", RelationalType::Text),
                false,
            )
            .unwrap();
        builder
            .add_composite_parameter("c", |b| b.add_parameter("c0", "p2"))
            .unwrap();
        builder.add_parameter("d", "p3").unwrap();

        let names: Vec<&str> = builder
            .parameters()
            .iter()
            .map(Parameter::invariant_name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_empty_identifier_is_rejected() {
        let source = FallbackTypeMappingSource;
        let mut builder = ParameterBuilder::new(&source);

        let result = builder.add_parameter("", "Name");
        assert!(matches!(result, Err(BuildError::EmptyIdentifier)));

        let result = builder.add_parameter("Invariant", "");
        assert!(matches!(result, Err(BuildError::EmptyIdentifier)));

        assert_eq!(builder.parameters().len(), 0);
    }

    #[test]
    fn test_failed_composite_populate_appends_nothing() {
        let source = FallbackTypeMappingSource;
        let mut builder = ParameterBuilder::new(&source);

        let result = builder.add_composite_parameter("Composite", |b| {
            b.add_parameter("inner", "p0")?;
            b.add_parameter("", "p1")
        });

        assert!(matches!(result, Err(BuildError::EmptyIdentifier)));
        assert_eq!(builder.parameters().len(), 0);
    }
}
