//! # cppgen
//!
//! Schema model and rendering engine for generating C++ serialization and
//! transport boilerplate from a language-agnostic class description.
//!
//! ## Overview
//!
//! `cppgen` takes a [`Schema`] — classes with named, typed fields — and
//! renders one text artifact per emitter. The crate ships two reference
//! emitters: [`JsonEmitter`](emitter::JsonEmitter) produces
//! `nlohmann::json` serializer functions, and
//! [`ZmqEmitter`](emitter::ZmqEmitter) produces ZMQ send functions. New
//! output formats plug in by implementing the [`Emitter`](emitter::Emitter)
//! trait.
//!
//! Field types are classified once, when the schema is built
//! ([`TypeIR::classify`](ir::TypeIR::classify)): a parametrized sequence
//! container becomes a `Sequence` carrying its element type, any other
//! parametrized type is `Opaque`, and every plain name is a `Scalar`.
//! Emitters branch on that classification instead of re-inspecting type
//! strings.
//!
//! ## Quick Start
//!
//! ```rust
//! use cppgen::emitter::JsonEmitter;
//! use cppgen::ir::{ClassIR, FieldIR, Schema, TypeIR};
//! use cppgen::render::{RenderConfig, Renderer};
//!
//! let schema = Schema::new(vec![ClassIR::new(
//!     "Point",
//!     vec![
//!         FieldIR::new("x", TypeIR::classify("float")),
//!         FieldIR::new("y", TypeIR::classify("float")),
//!     ],
//! )]);
//!
//! let renderer = Renderer::new(JsonEmitter::new(), RenderConfig::default());
//! let artifact = renderer.render(&schema).unwrap();
//! assert!(artifact.contains("serialize_json(const Point& item)"));
//! ```

pub mod emitter;
pub mod error;
pub mod ir;
pub mod render;

// Re-export main types for convenience
pub use emitter::{Emitter, JsonEmitter, ZmqEmitter};
pub use error::{RenderError, SchemaError};
pub use ir::{ClassIR, FieldIR, Schema, TypeIR, TypeKind};
pub use render::{IndentStyle, LineEnding, RenderConfig, Renderer};
