//! Configuration management for the CLI.
//!
//! This module handles loading configuration from `cppgen.toml` files
//! and merging with command-line arguments.

use crate::error::{CliResult, ConfigError};
use cppgen::{IndentStyle, RenderConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "cppgen.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration.
    pub output: OutputConfig,

    /// Rendering style.
    pub render: RenderStyleConfig,

    /// Per-emitter configuration.
    pub emitters: EmittersConfig,
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory for generated files.
    pub dir: PathBuf,
}

/// Rendering style configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderStyleConfig {
    /// Indentation style: "spaces2", "spaces4", or "tabs".
    pub indent: String,
}

/// Per-emitter configuration tables.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct EmittersConfig {
    /// JSON serializer emitter.
    pub json: JsonEmitterConfig,

    /// ZMQ transport emitter.
    pub zmq: ZmqEmitterConfig,
}

/// Configuration for the JSON serializer emitter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JsonEmitterConfig {
    /// Whether this emitter runs.
    pub enabled: bool,

    /// Output filename inside the output directory.
    pub file: String,

    /// Header include carrying the class declarations.
    pub header: String,

    /// Derive marker classes use to opt into this emitter.
    pub marker: String,
}

/// Configuration for the ZMQ transport emitter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ZmqEmitterConfig {
    /// Whether this emitter runs.
    pub enabled: bool,

    /// Output filename inside the output directory.
    pub file: String,

    /// Header include carrying the class declarations.
    pub header: String,

    /// Namespace wrapped around the generated send functions.
    pub namespace: Option<String>,

    /// Derive marker classes use to opt into this emitter.
    pub marker: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./generated"),
        }
    }
}

impl Default for RenderStyleConfig {
    fn default() -> Self {
        Self {
            indent: "spaces2".to_string(),
        }
    }
}

impl Default for JsonEmitterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: "serialize_json.cpp".to_string(),
            header: "classes.hpp".to_string(),
            marker: "SerializeJson".to_string(),
        }
    }
}

impl Default for ZmqEmitterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: "zmq_send.cpp".to_string(),
            header: "classes.hpp".to_string(),
            namespace: Some("cppgen".to_string()),
            marker: "ZMQSend".to_string(),
        }
    }
}

impl Config {
    /// Build the core rendering configuration from this config.
    pub fn render_config(&self) -> CliResult<RenderConfig> {
        let indent = match self.render.indent.as_str() {
            "spaces2" => IndentStyle::Spaces2,
            "spaces4" => IndentStyle::Spaces4,
            "tabs" => IndentStyle::Tabs,
            other => {
                return Err(ConfigError::invalid_value(
                    "render.indent",
                    format!("'{}' is not one of spaces2, spaces4, tabs", other),
                )
                .into())
            }
        };
        Ok(RenderConfig::new().with_indent(indent))
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// If the path is None, attempts to load from the default location.
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path, e.to_string()))?;

        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref output) = args.output {
            config.output.dir = output.clone();
        }

        if let Some(ref header) = args.header {
            config.emitters.json.header = header.clone();
            config.emitters.zmq.header = header.clone();
        }

        if let Some(ref emitters) = args.emitters {
            config.emitters.json.enabled = emitters.iter().any(|e| e == "json");
            config.emitters.zmq.enabled = emitters.iter().any(|e| e == "zmq");
        }

        config
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# cppgen configuration file
# See https://github.com/example/cppgen for documentation

[output]
# Output directory for generated C++ files
dir = "./generated"

[render]
# Indentation style for generated code (spaces2, spaces4, tabs)
indent = "spaces2"

[emitters.json]
# JSON serializer functions (nlohmann::json)
enabled = true
file = "serialize_json.cpp"
header = "classes.hpp"
# Classes opt in with derive(SerializeJson); classes declaring no derive
# markers opt into every emitter
marker = "SerializeJson"

[emitters.zmq]
# ZMQ transport send functions
enabled = true
file = "zmq_send.cpp"
header = "classes.hpp"
# Namespace wrapped around the generated send functions
namespace = "cppgen"
marker = "ZMQSend"
"#
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Output directory override.
    pub output: Option<PathBuf>,

    /// Header include override, applied to every emitter.
    pub header: Option<String>,

    /// Restrict the run to these emitter ids.
    pub emitters: Option<Vec<String>>,
}
