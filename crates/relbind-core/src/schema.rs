//! Schema (model) definitions.
//!
//! This module defines the property metadata the property-driven builder
//! overload consumes: a property's declared relational type and nullability.
//! Schemas are loadable from YAML files for callers that describe their model
//! declaratively.

use crate::types::RelationalType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Entity not found in schema
    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    /// Property not found in entity
    #[error("Property '{property}' not found in entity '{entity}'")]
    PropertyNotFound {
        /// Entity that was searched
        entity: String,
        /// Property that was missing
        property: String,
    },
}

/// A single property of an entity: name, declared type, and nullability.
///
/// The property-driven builder overload derives a parameter's type mapping
/// and nullability from this metadata rather than from explicit arguments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyDefinition {
    /// Property name
    pub name: String,

    /// Declared relational type
    #[serde(rename = "type")]
    pub property_type: RelationalType,

    /// Whether this property admits null values
    #[serde(default)]
    pub nullable: bool,
}

impl PropertyDefinition {
    /// Create a new non-nullable property definition.
    pub fn new(name: impl Into<String>, property_type: RelationalType) -> Self {
        Self {
            name: name.into(),
            property_type,
            nullable: false,
        }
    }

    /// Create a new nullable property definition.
    pub fn nullable(name: impl Into<String>, property_type: RelationalType) -> Self {
        Self {
            name: name.into(),
            property_type,
            nullable: true,
        }
    }
}

/// An entity (table-level unit) with its ordered properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityDefinition {
    /// Entity name
    pub name: String,

    /// Property definitions
    pub properties: Vec<PropertyDefinition>,
}

impl EntityDefinition {
    /// Create a new entity definition.
    pub fn new(name: impl Into<String>, properties: Vec<PropertyDefinition>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// Get a property by name.
    pub fn get_property(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Get the type of a property by name.
    pub fn get_property_type(&self, name: &str) -> Option<&RelationalType> {
        self.get_property(name).map(|p| &p.property_type)
    }

    /// Get all property names.
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }
}

/// A model schema: the collection of entities known to one command-building
/// context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelSchema {
    /// Entity definitions
    pub entities: Vec<EntityDefinition>,

    /// Cached entity lookup (not serialized)
    #[serde(skip)]
    entity_map: HashMap<String, usize>,
}

impl ModelSchema {
    /// Create a new model schema from a list of entity definitions.
    pub fn new(entities: Vec<EntityDefinition>) -> Self {
        let mut schema = Self {
            entities,
            entity_map: HashMap::new(),
        };
        schema.build_entity_map();
        schema
    }

    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut schema: ModelSchema = serde_yaml::from_str(yaml)?;
        schema.build_entity_map();
        Ok(schema)
    }

    /// Build the internal entity lookup map.
    fn build_entity_map(&mut self) {
        self.entity_map = self
            .entities
            .iter()
            .enumerate()
            .map(|(idx, entity)| (entity.name.clone(), idx))
            .collect();
    }

    /// Get an entity by name.
    pub fn get_entity(&self, name: &str) -> Option<&EntityDefinition> {
        self.entity_map
            .get(name)
            .and_then(|&idx| self.entities.get(idx))
    }

    /// Get a property of a specific entity.
    pub fn get_property(
        &self,
        entity: &str,
        property: &str,
    ) -> Result<&PropertyDefinition, SchemaError> {
        let entity_def = self
            .get_entity(entity)
            .ok_or_else(|| SchemaError::EntityNotFound(entity.to_string()))?;

        entity_def
            .get_property(property)
            .ok_or_else(|| SchemaError::PropertyNotFound {
                entity: entity.to_string(),
                property: property.to_string(),
            })
    }

    /// Get all entity names in the schema.
    pub fn entity_names(&self) -> Vec<&str> {
        self.entities.iter().map(|e| e.name.as_str()).collect()
    }

    /// Add an entity to the schema.
    pub fn add_entity(&mut self, entity: EntityDefinition) {
        let idx = self.entities.len();
        self.entity_map.insert(entity.name.clone(), idx);
        self.entities.push(entity);
    }
}
