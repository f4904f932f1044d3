//! Error types for schema validation and rendering.

use thiserror::Error;

/// Structural problem with a schema, detected before or at render start.
///
/// Fatal for the artifact being rendered; other emitters' runs over the
/// same schema are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two classes share a name.
    #[error("duplicate class name '{name}'")]
    DuplicateClass { name: String },

    /// Two fields within one class share a name.
    #[error("duplicate field name '{field}' in class '{class}'")]
    DuplicateField { class: String, field: String },

    /// A class has no fields but the active emitter needs at least one
    /// field fragment to form valid output.
    #[error("class '{class}' has no fields, but emitter '{emitter}' requires at least one")]
    EmptyClass { class: String, emitter: String },
}

/// Rendering failure for one (emitter, schema) artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The schema failed a pre-render check.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The emitter's field dispatch has no branch for this type kind.
    #[error("emitter '{emitter}' has no branch for {kind} field '{field}'")]
    UnsupportedKind {
        emitter: String,
        field: String,
        kind: &'static str,
    },
}

impl RenderError {
    /// Create an unsupported-kind error.
    pub fn unsupported_kind(
        emitter: impl Into<String>,
        field: impl Into<String>,
        kind: &'static str,
    ) -> Self {
        Self::UnsupportedKind {
            emitter: emitter.into(),
            field: field.into(),
            kind,
        }
    }
}
