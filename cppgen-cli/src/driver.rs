//! Generation driver.
//!
//! Orchestrates one generation run: build each enabled emitter from
//! configuration, select the classes opting into it, render, and write the
//! artifact. One emitter's failure is captured in its report and never
//! prevents the other emitters from completing.

use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::writer::{ArtifactWriter, WriteOutcome};
use cppgen::{Emitter, JsonEmitter, RenderConfig, Renderer, Schema, ZmqEmitter};
use std::path::PathBuf;

/// A rendered-but-unwritten artifact.
#[derive(Debug)]
pub struct PlannedArtifact {
    /// Emitter id that produced (or failed to produce) the content.
    pub emitter: &'static str,

    /// Destination path for the artifact.
    pub path: PathBuf,

    /// Rendered content, or the per-artifact failure.
    pub content: Result<String, CliError>,
}

/// Final report for one artifact of a generation run.
#[derive(Debug)]
pub struct ArtifactReport {
    /// Emitter id.
    pub emitter: &'static str,

    /// Destination path for the artifact.
    pub path: PathBuf,

    /// Write outcome, or the per-artifact failure.
    pub outcome: Result<WriteOutcome, CliError>,
}

impl ArtifactReport {
    /// Check whether this artifact completed.
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Drives the enabled emitters over a schema and writes the results.
pub struct GenerationDriver {
    config: Config,
    render: RenderConfig,
    writer: ArtifactWriter,
}

impl GenerationDriver {
    /// Build a driver from configuration.
    pub fn from_config(config: Config, dry_run: bool) -> CliResult<Self> {
        let render = config.render_config()?;
        Ok(Self {
            config,
            render,
            writer: ArtifactWriter::new(dry_run),
        })
    }

    /// Render every enabled emitter without touching the filesystem.
    pub fn plan(&self, schema: &Schema) -> Vec<PlannedArtifact> {
        let mut artifacts = Vec::new();

        if self.config.emitters.json.enabled {
            let cfg = &self.config.emitters.json;
            let emitter = JsonEmitter::new().with_header(&cfg.header);
            artifacts.push(self.plan_one(schema, emitter, &cfg.marker, &cfg.file));
        }

        if self.config.emitters.zmq.enabled {
            let cfg = &self.config.emitters.zmq;
            let mut emitter = ZmqEmitter::new().with_header(&cfg.header);
            if let Some(namespace) = &cfg.namespace {
                emitter = emitter.with_namespace(namespace);
            }
            artifacts.push(self.plan_one(schema, emitter, &cfg.marker, &cfg.file));
        }

        artifacts
    }

    /// Render and write every enabled emitter's artifact.
    pub fn run(&self, schema: &Schema) -> Vec<ArtifactReport> {
        self.plan(schema)
            .into_iter()
            .map(|artifact| {
                let outcome = artifact
                    .content
                    .and_then(|content| self.writer.write(&artifact.path, &content));
                ArtifactReport {
                    emitter: artifact.emitter,
                    path: artifact.path,
                    outcome,
                }
            })
            .collect()
    }

    /// Check if this driver writes anything to disk.
    pub fn is_dry_run(&self) -> bool {
        self.writer.is_dry_run()
    }

    fn plan_one<E: Emitter>(
        &self,
        schema: &Schema,
        emitter: E,
        marker: &str,
        file: &str,
    ) -> PlannedArtifact {
        let id = emitter.id();
        let path = self.config.output.dir.join(file);
        let selected = schema.select(marker);
        let content = Renderer::new(emitter, self.render.clone())
            .render(&selected)
            .map_err(CliError::from);
        PlannedArtifact {
            emitter: id,
            path,
            content,
        }
    }
}
