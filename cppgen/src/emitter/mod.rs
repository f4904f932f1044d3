//! Emitter contract and the reference emitters.
//!
//! An [`Emitter`] is a pluggable generator: the rendering engine walks the
//! schema in a fixed order and asks the emitter for each piece of text.
//! Branching on a field's type kind belongs to the emitter, not the engine —
//! different emitters special-case different kinds (the JSON serializer
//! treats every field alike; the ZMQ transport needs a distinct wire call
//! for sequences).

mod json;
mod zmq;

pub use json::JsonEmitter;
pub use zmq::ZmqEmitter;

use crate::error::RenderError;
use crate::ir::{ClassIR, FieldIR, Schema};
use crate::render::RenderConfig;

/// Contract implemented by each concrete generator.
///
/// The engine invokes these callbacks in a fixed traversal order:
/// [`artifact_header`](Emitter::artifact_header) once, then per class (in
/// schema order) [`class_prologue`](Emitter::class_prologue), one
/// [`field_fragment`](Emitter::field_fragment) per field in declared order,
/// [`class_epilogue`](Emitter::class_epilogue), and finally
/// [`artifact_footer`](Emitter::artifact_footer) once.
///
/// Implementations must be stateless across invocations: any accumulation
/// the emitted code performs (e.g. a byte counter) lives in the generated
/// text, never in the emitter value, so the same emitter can render
/// multiple schemas, or the same schema concurrently with other emitters.
pub trait Emitter: Send + Sync {
    /// Unique identifier used to select this emitter (e.g. "json", "zmq").
    fn id(&self) -> &'static str;

    /// Human-readable name for display purposes.
    fn name(&self) -> &'static str;

    /// File extension for the rendered artifact (e.g. "cpp").
    fn file_extension(&self) -> &'static str;

    /// Whether every rendered class must contribute at least one field
    /// fragment to form valid output. The engine checks this before
    /// rendering and fails with a schema error on a zero-field class.
    fn requires_fields(&self) -> bool {
        false
    }

    /// Artifact prologue: includes and any namespace open. Constant per run.
    fn artifact_header(&self, schema: &Schema, config: &RenderConfig) -> String;

    /// Text preceding a class's field fragments (function signature,
    /// accumulator init).
    fn class_prologue(&self, class: &ClassIR, config: &RenderConfig) -> String;

    /// The per-field emission. Must branch on `field.ty.kind` — either
    /// exhaustively or with a default arm; a kind the emitter declines maps
    /// to [`RenderError::UnsupportedKind`].
    fn field_fragment(
        &self,
        field: &FieldIR,
        config: &RenderConfig,
    ) -> Result<String, RenderError>;

    /// Text following a class's field fragments (return statement).
    fn class_epilogue(&self, class: &ClassIR, config: &RenderConfig) -> String;

    /// Artifact epilogue: namespace close, if any.
    fn artifact_footer(&self, schema: &Schema, config: &RenderConfig) -> String;
}
