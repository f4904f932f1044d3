//! Schema IR definitions.
//!
//! A [`Schema`] is the full set of classes visible to one generation run.
//! It is built once by an external loader, validated, and then consumed
//! read-only by the rendering engine — nothing mutates it after
//! construction.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::types::TypeIR;
use crate::error::SchemaError;

/// Field intermediate representation.
///
/// A name paired with its classified type. Field order within a class is
/// significant: it is preserved from source order and drives the order of
/// emitted statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIR {
    /// Field name, unique within its owning class
    pub name: String,

    /// Field type
    pub ty: TypeIR,
}

impl FieldIR {
    /// Create a new field with the given name and type.
    pub fn new(name: impl Into<String>, ty: TypeIR) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Class intermediate representation.
///
/// One structured data type: a name plus its fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassIR {
    /// Class name, unique within a schema
    pub name: String,

    /// Derive markers declared on the class (e.g. `SerializeJson`).
    /// An empty list means the class opts into every emitter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub derives: Vec<String>,

    /// Fields in declaration order
    pub fields: Vec<FieldIR>,
}

impl ClassIR {
    /// Create a new class with the given name and fields.
    pub fn new(name: impl Into<String>, fields: Vec<FieldIR>) -> Self {
        Self {
            name: name.into(),
            derives: Vec::new(),
            fields,
        }
    }

    /// Add derive markers.
    pub fn with_derives(mut self, derives: Vec<String>) -> Self {
        self.derives = derives;
        self
    }

    /// Check whether this class opts into the given marker.
    ///
    /// A class with no declared markers opts into everything.
    pub fn opts_into(&self, marker: &str) -> bool {
        self.derives.is_empty() || self.derives.iter().any(|d| d == marker)
    }
}

/// The full set of classes for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Classes in declaration order
    pub classes: Vec<ClassIR>,
}

impl Schema {
    /// Create a schema from classes in declaration order.
    pub fn new(classes: Vec<ClassIR>) -> Self {
        Self { classes }
    }

    /// Check structural validity: class names unique across the schema,
    /// field names unique within each class.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut class_names = HashSet::new();
        for class in &self.classes {
            if !class_names.insert(class.name.as_str()) {
                return Err(SchemaError::DuplicateClass {
                    name: class.name.clone(),
                });
            }

            let mut field_names = HashSet::new();
            for field in &class.fields {
                if !field_names.insert(field.name.as_str()) {
                    return Err(SchemaError::DuplicateField {
                        class: class.name.clone(),
                        field: field.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Check if the schema contains no classes.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// A schema containing only the classes opting into the given marker,
    /// in the original order.
    pub fn select(&self, marker: &str) -> Schema {
        Schema {
            classes: self
                .classes
                .iter()
                .filter(|c| c.opts_into(marker))
                .cloned()
                .collect(),
        }
    }
}
