//! Artifact writer.
//!
//! Writes rendered artifacts to disk with dry-run support. An artifact
//! whose content already matches the file on disk is skipped, so
//! regeneration does not touch mtimes and trigger downstream C++ rebuilds.

use crate::error::{CliResult, WriteError};
use std::path::{Path, PathBuf};

/// Outcome of writing one artifact.
#[derive(Debug)]
pub enum WriteOutcome {
    /// File was written.
    Written {
        /// Path to the written file.
        path: PathBuf,
        /// Number of bytes written.
        bytes: usize,
    },
    /// File already had identical content; nothing was written.
    Unchanged {
        /// Path to the existing file.
        path: PathBuf,
    },
    /// Dry run - content was not written.
    DryRun {
        /// Content that would have been written.
        content: String,
        /// Path where content would have been written.
        path: PathBuf,
    },
}

/// Artifact writer with dry-run support.
#[derive(Debug)]
pub struct ArtifactWriter {
    dry_run: bool,
}

impl ArtifactWriter {
    /// Create a new writer.
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Write an artifact to the given path.
    ///
    /// In dry-run mode, returns the content without writing. Identical
    /// existing content is reported as [`WriteOutcome::Unchanged`].
    pub fn write(&self, path: &Path, content: &str) -> CliResult<WriteOutcome> {
        if self.dry_run {
            return Ok(WriteOutcome::DryRun {
                content: content.to_string(),
                path: path.to_path_buf(),
            });
        }

        if let Ok(existing) = std::fs::read_to_string(path) {
            if existing == content {
                return Ok(WriteOutcome::Unchanged {
                    path: path.to_path_buf(),
                });
            }
        }

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| WriteError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        std::fs::write(path, content).map_err(|e| WriteError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(WriteOutcome::Written {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }

    /// Check if running in dry-run mode.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

impl WriteOutcome {
    /// Get the path associated with this outcome.
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Written { path, .. }
            | WriteOutcome::Unchanged { path }
            | WriteOutcome::DryRun { path, .. } => path,
        }
    }

    /// Check if the artifact landed on disk (written or already current).
    pub fn on_disk(&self) -> bool {
        !matches!(self, WriteOutcome::DryRun { .. })
    }
}
