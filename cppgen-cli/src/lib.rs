//! # cppgen-cli
//!
//! CLI library for generating C++ boilerplate from class schema documents.
//!
//! This crate provides the functionality behind the `cppgen` binary:
//! schema loading, configuration, generation orchestration, and file
//! output.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`loader`] - Schema document loading and type classification
//! - [`driver`] - Generation orchestration across emitters
//! - [`writer`] - File output, dry-run, and unchanged-skip support
//! - [`watcher`] - Schema file watching for development mode
//! - [`error`] - Error types and handling

pub mod config;
pub mod driver;
pub mod error;
pub mod loader;
pub mod watcher;
pub mod writer;

// Re-export main types for convenience
pub use config::{CliArgs, Config, ConfigManager};
pub use driver::{ArtifactReport, GenerationDriver, PlannedArtifact};
pub use error::{CliError, CliResult};
pub use loader::SchemaLoader;
pub use watcher::SchemaWatcher;
pub use writer::{ArtifactWriter, WriteOutcome};
