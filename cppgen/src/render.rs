//! Rendering engine.
//!
//! [`Renderer`] drives one emitter over one schema and assembles the final
//! artifact text. The engine owns exactly two pieces of control flow —
//! iterate classes, iterate fields within a class — and delegates every
//! piece of text, including all type-kind branching, to the emitter.

use crate::emitter::Emitter;
use crate::error::{RenderError, SchemaError};
use crate::ir::Schema;

/// Rendering configuration shared by all emitters.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Indentation style for generated code
    pub indent: IndentStyle,

    /// Line ending style for generated code
    pub line_ending: LineEnding,
}

impl RenderConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation style.
    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }

    /// Set the line ending style.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Get the indentation string.
    pub fn indent_str(&self) -> &'static str {
        self.indent.as_str()
    }

    /// Get the line ending string.
    pub fn line_ending_str(&self) -> &'static str {
        self.line_ending.as_str()
    }
}

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentStyle {
    /// Two spaces (default)
    #[default]
    Spaces2,

    /// Four spaces
    Spaces4,

    /// Tabs
    Tabs,
}

impl IndentStyle {
    /// Get the indentation string.
    pub fn as_str(&self) -> &'static str {
        match self {
            IndentStyle::Spaces2 => "  ",
            IndentStyle::Spaces4 => "    ",
            IndentStyle::Tabs => "\t",
        }
    }
}

/// Line ending style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix-style line endings (LF)
    #[default]
    Lf,

    /// Windows-style line endings (CRLF)
    CrLf,
}

impl LineEnding {
    /// Get the line ending string.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Drives an [`Emitter`] over a [`Schema`] to produce one artifact.
#[derive(Debug, Clone)]
pub struct Renderer<E: Emitter> {
    emitter: E,
    config: RenderConfig,
}

impl<E: Emitter> Renderer<E> {
    /// Create a renderer for the given emitter and configuration.
    pub fn new(emitter: E, config: RenderConfig) -> Self {
        Self { emitter, config }
    }

    /// Get a reference to the underlying emitter.
    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render one artifact.
    ///
    /// Classes render in schema order and fields in declared order; units
    /// are concatenated as-is, with no reordering and no deduplication.
    /// The schema is only read — rendering the same schema twice, or from
    /// multiple emitters concurrently, yields identical output.
    pub fn render(&self, schema: &Schema) -> Result<String, RenderError> {
        schema.validate()?;

        if self.emitter.requires_fields() {
            if let Some(class) = schema.classes.iter().find(|c| c.fields.is_empty()) {
                return Err(SchemaError::EmptyClass {
                    class: class.name.clone(),
                    emitter: self.emitter.id().to_string(),
                }
                .into());
            }
        }

        let mut output = String::new();
        output.push_str(&self.emitter.artifact_header(schema, &self.config));

        for class in &schema.classes {
            output.push_str(&self.emitter.class_prologue(class, &self.config));
            for field in &class.fields {
                output.push_str(&self.emitter.field_fragment(field, &self.config)?);
            }
            output.push_str(&self.emitter.class_epilogue(class, &self.config));
        }

        output.push_str(&self.emitter.artifact_footer(schema, &self.config));
        Ok(output)
    }
}
