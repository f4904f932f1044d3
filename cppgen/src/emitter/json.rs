//! JSON serializer emitter.
//!
//! Emits one `serialize_json` free function per class, converting the
//! class's fields into an `nlohmann::json` object keyed by field name.

use crate::emitter::Emitter;
use crate::error::RenderError;
use crate::ir::{ClassIR, FieldIR, Schema};
use crate::render::RenderConfig;

/// Emitter for `nlohmann::json` serializer functions.
///
/// Every field maps uniformly into one key assignment regardless of its
/// kind; the dispatch point in [`field_fragment`](Emitter::field_fragment)
/// exists so sequences can diverge into element-wise conversion if the
/// target library ever requires it. Zero-field classes are tolerated and
/// produce an empty-body serializer.
#[derive(Debug, Clone)]
pub struct JsonEmitter {
    /// Header include carrying the class declarations
    header: String,
}

impl Default for JsonEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonEmitter {
    /// Create a JSON emitter with the default target header.
    pub fn new() -> Self {
        Self {
            header: "classes.hpp".to_string(),
        }
    }

    /// Set the header include carrying the class declarations.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }
}

impl Emitter for JsonEmitter {
    fn id(&self) -> &'static str {
        "json"
    }

    fn name(&self) -> &'static str {
        "JSON Serializer"
    }

    fn file_extension(&self) -> &'static str {
        "cpp"
    }

    fn artifact_header(&self, _schema: &Schema, config: &RenderConfig) -> String {
        let nl = config.line_ending_str();
        format!("#include \"{}\"{nl}{nl}#include <json.hpp>{nl}", self.header)
    }

    fn class_prologue(&self, class: &ClassIR, config: &RenderConfig) -> String {
        let nl = config.line_ending_str();
        let indent = config.indent_str();
        format!(
            "{nl}nlohmann::json serialize_json(const {}& item) {{{nl}{indent}nlohmann::json j;{nl}",
            class.name
        )
    }

    fn field_fragment(
        &self,
        field: &FieldIR,
        config: &RenderConfig,
    ) -> Result<String, RenderError> {
        let nl = config.line_ending_str();
        let indent = config.indent_str();
        // One assignment form for every kind; nlohmann converts sequences
        // element-wise on its own.
        Ok(format!(
            "{indent}j[\"{name}\"] = nlohmann::json{{item.{name}}};{nl}",
            name = field.name
        ))
    }

    fn class_epilogue(&self, _class: &ClassIR, config: &RenderConfig) -> String {
        let nl = config.line_ending_str();
        let indent = config.indent_str();
        format!("{indent}return j;{nl}}}{nl}")
    }

    fn artifact_footer(&self, _schema: &Schema, _config: &RenderConfig) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::TypeIR;
    use crate::render::Renderer;

    fn point_schema() -> Schema {
        Schema::new(vec![ClassIR::new(
            "Point",
            vec![
                FieldIR::new("x", TypeIR::classify("float")),
                FieldIR::new("y", TypeIR::classify("float")),
            ],
        )])
    }

    #[test]
    fn test_point_serializer() {
        let renderer = Renderer::new(JsonEmitter::new(), RenderConfig::default());
        let output = renderer.render(&point_schema()).unwrap();

        assert_eq!(
            output,
            "#include \"classes.hpp\"\n\
             \n\
             #include <json.hpp>\n\
             \n\
             nlohmann::json serialize_json(const Point& item) {\n\
             \x20 nlohmann::json j;\n\
             \x20 j[\"x\"] = nlohmann::json{item.x};\n\
             \x20 j[\"y\"] = nlohmann::json{item.y};\n\
             \x20 return j;\n\
             }\n"
        );
    }

    #[test]
    fn test_field_order_matches_declaration_order() {
        let renderer = Renderer::new(JsonEmitter::new(), RenderConfig::default());
        let output = renderer.render(&point_schema()).unwrap();

        let x = output.find("j[\"x\"]").unwrap();
        let y = output.find("j[\"y\"]").unwrap();
        assert!(x < y);
    }

    #[test]
    fn test_sequence_field_uses_same_assignment() {
        let schema = Schema::new(vec![ClassIR::new(
            "Batch",
            vec![FieldIR::new("items", TypeIR::classify("std::vector<int>"))],
        )]);
        let renderer = Renderer::new(JsonEmitter::new(), RenderConfig::default());
        let output = renderer.render(&schema).unwrap();
        assert!(output.contains("j[\"items\"] = nlohmann::json{item.items};"));
    }

    #[test]
    fn test_custom_header() {
        let emitter = JsonEmitter::new().with_header("model/types.hpp");
        let renderer = Renderer::new(emitter, RenderConfig::default());
        let output = renderer.render(&point_schema()).unwrap();
        assert!(output.starts_with("#include \"model/types.hpp\"\n"));
    }

    #[test]
    fn test_tolerates_empty_class() {
        let schema = Schema::new(vec![ClassIR::new("Empty", vec![])]);
        let renderer = Renderer::new(JsonEmitter::new(), RenderConfig::default());
        let output = renderer.render(&schema).unwrap();

        assert!(output.contains("serialize_json(const Empty& item)"));
        assert!(!output.contains("j[\""));
    }
}
