//! ZMQ transport emitter.
//!
//! Emits one `send` free function per class that pushes each field over a
//! connector and returns the total byte count.

use crate::emitter::Emitter;
use crate::error::RenderError;
use crate::ir::{ClassIR, FieldIR, Schema, TypeKind};
use crate::render::RenderConfig;

/// Accumulator identifier shared by the prologue, every field fragment,
/// and the epilogue. All three must agree on it for the generated function
/// to compile.
const ACCUMULATOR: &str = "totalBytes";

/// Emitter for ZMQ send functions.
///
/// Fragment dispatch branches on the field's kind: a sequence goes out
/// through the bulk `sendVector` wire call, everything else through the
/// scalar `send` call, each with a "more data follows" flag. Sending an
/// empty message is not representable, so this emitter requires every
/// class to carry at least one field.
#[derive(Debug, Clone)]
pub struct ZmqEmitter {
    /// Header include carrying the class declarations
    header: String,

    /// Optional namespace wrapped around the whole artifact
    namespace: Option<String>,
}

impl Default for ZmqEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ZmqEmitter {
    /// Create a ZMQ emitter with the default target header and no
    /// namespace envelope.
    pub fn new() -> Self {
        Self {
            header: "classes.hpp".to_string(),
            namespace: None,
        }
    }

    /// Set the header include carrying the class declarations.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Wrap the artifact in the given namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

impl Emitter for ZmqEmitter {
    fn id(&self) -> &'static str {
        "zmq"
    }

    fn name(&self) -> &'static str {
        "ZMQ Transport"
    }

    fn file_extension(&self) -> &'static str {
        "cpp"
    }

    fn requires_fields(&self) -> bool {
        true
    }

    fn artifact_header(&self, _schema: &Schema, config: &RenderConfig) -> String {
        let nl = config.line_ending_str();
        let mut header = format!("#include \"{}\"{nl}{nl}#include <zmq.hpp>{nl}", self.header);
        if let Some(namespace) = &self.namespace {
            header.push_str(&format!("{nl}namespace {namespace} {{{nl}"));
        }
        header
    }

    fn class_prologue(&self, class: &ClassIR, config: &RenderConfig) -> String {
        let nl = config.line_ending_str();
        let indent = config.indent_str();
        format!(
            "{nl}size_t send(Connector& connector, const {}& item) {{{nl}\
             {indent}size_t {ACCUMULATOR} = 0;{nl}{nl}",
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
        // Sequences need the bulk wire call; scalars and opaque types pass
        // through the scalar one.
        let call = match &field.ty.kind {
            TypeKind::Sequence(_) => "sendVector",
            TypeKind::Scalar | TypeKind::Opaque => "send",
        };
        Ok(format!(
            "{indent}{ACCUMULATOR} += connector.{call}(item.{}, zmq::snd_more);{nl}",
            field.name
        ))
    }

    fn class_epilogue(&self, _class: &ClassIR, config: &RenderConfig) -> String {
        let nl = config.line_ending_str();
        let indent = config.indent_str();
        format!("{nl}{indent}return {ACCUMULATOR};{nl}}}{nl}")
    }

    fn artifact_footer(&self, _schema: &Schema, config: &RenderConfig) -> String {
        let nl = config.line_ending_str();
        match &self.namespace {
            Some(namespace) => format!("{nl}}}  // namespace {namespace}{nl}"),
            None => String::new(),
        }
    }
}
