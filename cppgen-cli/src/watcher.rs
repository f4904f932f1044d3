//! Schema file watcher for development mode.
//!
//! Watches the schema document and reports debounced change events so the
//! CLI can regenerate artifacts without being restarted.

use crate::error::{CliResult, WatchError};
use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{new_debouncer, DebouncedEvent, Debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

/// Event types for schema file changes.
#[derive(Debug, Clone)]
pub enum WatchEvent {
    /// The schema document changed.
    Changed(PathBuf),
    /// The schema document was removed.
    Removed(PathBuf),
    /// An error occurred.
    Error(String),
}

/// Watcher for a single schema document.
pub struct SchemaWatcher {
    /// Schema file to watch.
    schema_path: PathBuf,
    /// Debounce duration in milliseconds.
    debounce_ms: u64,
}

impl SchemaWatcher {
    /// Create a new watcher for the given schema file.
    pub fn new(schema_path: impl Into<PathBuf>) -> Self {
        Self {
            schema_path: schema_path.into(),
            debounce_ms: 500,
        }
    }

    /// Set the debounce duration in milliseconds.
    pub fn with_debounce(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Start watching for changes to the schema document.
    ///
    /// Returns a receiver that yields watch events. The debouncer must stay
    /// alive for as long as events are wanted.
    pub fn watch(&self) -> CliResult<(Debouncer<RecommendedWatcher>, Receiver<WatchEvent>)> {
        let (tx, rx) = channel::<WatchEvent>();
        let schema_path = self.schema_path.clone();

        let mut debouncer = new_debouncer(
            Duration::from_millis(self.debounce_ms),
            move |result: Result<Vec<DebouncedEvent>, notify::Error>| match result {
                Ok(events) => {
                    for event in events {
                        // The parent directory is watched; skip siblings
                        if event.path != schema_path {
                            continue;
                        }

                        let watch_event = if event.path.exists() {
                            WatchEvent::Changed(event.path)
                        } else {
                            WatchEvent::Removed(event.path)
                        };

                        let _ = tx.send(watch_event);
                    }
                }
                Err(e) => {
                    let _ = tx.send(WatchEvent::Error(e.to_string()));
                }
            },
        )
        .map_err(|e| WatchError::Init(e.to_string()))?;

        // Watch the parent directory: editors replace files on save, and a
        // watch on the file itself dies with the original inode.
        let watch_root = self
            .schema_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        debouncer
            .watcher()
            .watch(watch_root, RecursiveMode::NonRecursive)
            .map_err(|e| WatchError::Init(e.to_string()))?;

        Ok((debouncer, rx))
    }

    /// Get the schema file being watched.
    pub fn schema_path(&self) -> &Path {
        &self.schema_path
    }
}

impl WatchEvent {
    /// Get the path associated with this event.
    pub fn path(&self) -> Option<&Path> {
        match self {
            WatchEvent::Changed(p) | WatchEvent::Removed(p) => Some(p),
            WatchEvent::Error(_) => None,
        }
    }

    /// Check if this is an error event.
    pub fn is_error(&self) -> bool {
        matches!(self, WatchEvent::Error(_))
    }

    /// Get the error message if this is an error event.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            WatchEvent::Error(msg) => Some(msg),
            _ => None,
        }
    }
}
