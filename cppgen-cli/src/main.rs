//! # cppgen
//!
//! CLI tool for generating C++ serialization and transport boilerplate
//! from a class schema document.
//!
//! ## Usage
//!
//! ```bash
//! # Generate artifacts from a schema document
//! cppgen generate schema.json
//!
//! # Generate into a specific output directory
//! cppgen generate schema.json --output ./generated
//!
//! # Run a single emitter
//! cppgen generate schema.json --emitter json
//!
//! # Watch mode for development
//! cppgen generate schema.json --watch
//!
//! # Dry run to preview artifacts
//! cppgen generate schema.json --dry-run
//!
//! # Initialize configuration
//! cppgen init
//!
//! # Validate artifacts are up-to-date
//! cppgen validate schema.json
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use cppgen_cli::{
    config::{CliArgs, Config, ConfigManager},
    driver::GenerationDriver,
    error::CliError,
    loader::SchemaLoader,
    watcher::SchemaWatcher,
    writer::WriteOutcome,
};

#[derive(Parser)]
#[command(name = "cppgen")]
#[command(author, version, about = "Generate C++ boilerplate from class schemas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate C++ artifacts from a schema document
    Generate {
        /// Schema document (JSON) describing the classes
        schema: PathBuf,

        /// Output directory for generated files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Run only the given emitter(s) (json, zmq)
        #[arg(short, long)]
        emitter: Vec<String>,

        /// Header include override for every emitter
        #[arg(long)]
        header: Option<String>,

        /// Watch the schema document and regenerate on change
        #[arg(short, long)]
        watch: bool,

        /// Preview artifacts without writing files
        #[arg(long)]
        dry_run: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize a new cppgen configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = "cppgen.toml")]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Validate that generated artifacts are up-to-date
    Validate {
        /// Schema document (JSON) describing the classes
        schema: PathBuf,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            match e {
                CliError::Validation(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Generate {
            schema,
            output,
            emitter,
            header,
            watch,
            dry_run,
            config,
        } => cmd_generate(schema, output, emitter, header, watch, dry_run, config),

        Commands::Init { output, force } => cmd_init(output, force),

        Commands::Validate { schema, config } => cmd_validate(schema, config),
    }
}

/// Generate command implementation.
fn cmd_generate(
    schema_path: PathBuf,
    output: Option<PathBuf>,
    emitters: Vec<String>,
    header: Option<String>,
    watch: bool,
    dry_run: bool,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = ConfigManager::load(config_path.as_deref())?;
    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            output,
            header,
            emitters: if emitters.is_empty() {
                None
            } else {
                Some(emitters)
            },
        },
    );

    if watch {
        run_watch_mode(&schema_path, config, dry_run)
    } else {
        run_generate(&schema_path, &config, dry_run)
    }
}

/// Run artifact generation once.
fn run_generate(schema_path: &PathBuf, config: &Config, dry_run: bool) -> Result<(), CliError> {
    println!("{}", "Loading schema...".cyan());
    let schema = SchemaLoader::load(schema_path)?;
    println!(
        "  Found {} class(es)",
        schema.classes.len().to_string().green()
    );

    println!("{}", "Generating artifacts...".cyan());
    let driver = GenerationDriver::from_config(config.clone(), dry_run)?;
    let reports = driver.run(&schema);

    let mut failed = 0;
    for report in &reports {
        match &report.outcome {
            Ok(WriteOutcome::Written { path, bytes }) => {
                println!(
                    "{} [{}] Written {} bytes to {}",
                    "✓".green(),
                    report.emitter,
                    bytes,
                    path.display()
                );
            }
            Ok(WriteOutcome::Unchanged { path }) => {
                println!(
                    "{} [{}] Up-to-date: {}",
                    "✓".green(),
                    report.emitter,
                    path.display()
                );
            }
            Ok(WriteOutcome::DryRun { content, path }) => {
                println!(
                    "{} [{}] Would write to {}:",
                    "[dry-run]".yellow(),
                    report.emitter,
                    path.display()
                );
                println!("{}", "─".repeat(60).dimmed());
                println!("{}", content);
                println!("{}", "─".repeat(60).dimmed());
            }
            Err(e) => {
                failed += 1;
                println!("{} [{}] {}", "✗".red(), report.emitter, e);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::Artifacts { failed });
    }

    Ok(())
}

/// Run in watch mode.
fn run_watch_mode(schema_path: &PathBuf, config: Config, dry_run: bool) -> Result<(), CliError> {
    println!("{}", "Starting watch mode...".cyan());
    println!("  Watching: {}", schema_path.display());
    println!("  Press Ctrl+C to stop\n");

    // Initial generation; keep watching even if it fails
    if let Err(e) = run_generate(schema_path, &config, dry_run) {
        println!("{} {}", "Generation error:".red(), e);
    }

    let watcher = SchemaWatcher::new(schema_path.clone());
    let (_debouncer, rx) = watcher.watch()?;

    println!("\n{}", "Watching for changes...".cyan());

    while let Ok(event) = rx.recv() {
        if event.is_error() {
            println!(
                "{} {}",
                "Watch error:".red(),
                event.error_message().unwrap_or("Unknown error")
            );
            continue;
        }

        if let Some(path) = event.path() {
            println!("\n{} {}", "Schema changed:".cyan(), path.display());
        }

        if let Err(e) = run_generate(schema_path, &config, dry_run) {
            println!("{} {}", "Generation error:".red(), e);
        }

        println!("\n{}", "Watching for changes...".cyan());
    }

    Ok(())
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        println!(
            "{} Configuration file already exists: {}",
            "Error:".red(),
            output.display()
        );
        println!("  Use --force to overwrite");
        return Err(CliError::Validation(
            "Configuration file already exists".to_string(),
        ));
    }

    let content = ConfigManager::default_config_content();
    std::fs::write(&output, content)?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

/// Validate command implementation.
fn cmd_validate(schema_path: PathBuf, config_path: Option<PathBuf>) -> Result<(), CliError> {
    println!("{}", "Validating artifacts...".cyan());

    let config = ConfigManager::load(config_path.as_deref())?;
    let schema = SchemaLoader::load(&schema_path)?;

    let driver = GenerationDriver::from_config(config, true)?;
    let mut stale = Vec::new();

    for artifact in driver.plan(&schema) {
        let expected = artifact.content?;
        match std::fs::read_to_string(&artifact.path) {
            Ok(existing) if existing == expected => {
                println!(
                    "{} [{}] {} is up-to-date",
                    "✓".green(),
                    artifact.emitter,
                    artifact.path.display()
                );
            }
            Ok(_) => {
                println!(
                    "{} [{}] {} is out of date",
                    "✗".red(),
                    artifact.emitter,
                    artifact.path.display()
                );
                stale.push(artifact.path);
            }
            Err(_) => {
                println!(
                    "{} [{}] {} is missing",
                    "✗".red(),
                    artifact.emitter,
                    artifact.path.display()
                );
                stale.push(artifact.path);
            }
        }
    }

    if stale.is_empty() {
        println!("{} Artifacts are up-to-date", "✓".green());
        Ok(())
    } else {
        println!("  Run 'cppgen generate' to update");
        Err(CliError::Validation(format!(
            "{} artifact(s) out of date",
            stale.len()
        )))
    }
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
