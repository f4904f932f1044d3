//! Schema document loading.
//!
//! The input boundary of the tool: a JSON document describing classes and
//! their fields, produced by whatever frontend extracted them from source.
//! Loading classifies each field's source type string and validates the
//! resulting schema, so everything downstream works on a checked IR.

use crate::error::{CliResult, LoadError};
use cppgen::{ClassIR, FieldIR, Schema, TypeIR};
use serde::Deserialize;
use std::path::Path;

/// Raw schema document as it appears on disk.
#[derive(Debug, Deserialize)]
struct SchemaDoc {
    classes: Vec<ClassDoc>,
}

/// One class entry in the document.
#[derive(Debug, Deserialize)]
struct ClassDoc {
    name: String,

    #[serde(default)]
    derives: Vec<String>,

    #[serde(default)]
    fields: Vec<FieldDoc>,
}

/// One field entry: a name plus the source type string.
#[derive(Debug, Deserialize)]
struct FieldDoc {
    name: String,

    #[serde(rename = "type")]
    ty: String,
}

/// Loader for schema documents.
pub struct SchemaLoader;

impl SchemaLoader {
    /// Load and validate a schema from a JSON file.
    pub fn load(path: &Path) -> CliResult<Schema> {
        if !path.exists() {
            return Err(LoadError::not_found(path.to_path_buf()).into());
        }

        let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let doc: SchemaDoc = serde_json::from_str(&content)
            .map_err(|e| LoadError::json(path.to_path_buf(), e.to_string()))?;

        let schema = Self::build(doc);
        schema.validate().map_err(LoadError::from)?;
        Ok(schema)
    }

    /// Parse and validate a schema from JSON text.
    pub fn from_json(content: &str) -> Result<Schema, LoadError> {
        let doc: SchemaDoc = serde_json::from_str(content)
            .map_err(|e| LoadError::json(Path::new("<inline>").to_path_buf(), e.to_string()))?;

        let schema = Self::build(doc);
        schema.validate()?;
        Ok(schema)
    }

    /// Convert the raw document into IR, classifying each field type.
    fn build(doc: SchemaDoc) -> Schema {
        let classes = doc
            .classes
            .into_iter()
            .map(|class| {
                let fields = class
                    .fields
                    .into_iter()
                    .map(|field| FieldIR::new(field.name, TypeIR::classify(&field.ty)))
                    .collect();
                ClassIR::new(class.name, fields).with_derives(class.derives)
            })
            .collect();
        Schema::new(classes)
    }
}
