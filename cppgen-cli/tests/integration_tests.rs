//! Integration tests for cppgen-cli.
//!
//! These tests verify end-to-end functionality of the CLI crate:
//! loading a schema document, driving the emitters, and writing artifacts.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use cppgen_cli::{
    config::{CliArgs, Config, ConfigManager},
    driver::GenerationDriver,
    loader::SchemaLoader,
    writer::ArtifactWriter,
};

/// Get the path to test fixtures.
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Config writing into a temp directory.
fn config_for(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.output.dir = dir.path().to_path_buf();
    config
}

// =============================================================================
// Loader Integration Tests
// =============================================================================

#[test]
fn test_loader_reads_fixture() {
    let schema = SchemaLoader::load(&fixtures_path().join("point_batch.json")).unwrap();

    assert_eq!(schema.classes.len(), 2);
    assert_eq!(schema.classes[0].name, "Point");
    assert_eq!(schema.classes[1].name, "Batch");
    assert!(schema.classes[1].fields[0].ty.is_sequence());
}

#[test]
fn test_loader_rejects_duplicate_class_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("schema.json");
    fs::write(
        &path,
        r#"{"classes": [
            {"name": "Point", "fields": [{"name": "x", "type": "float"}]},
            {"name": "Point", "fields": [{"name": "y", "type": "float"}]}
        ]}"#,
    )
    .unwrap();

    assert!(SchemaLoader::load(&path).is_err());
}

// =============================================================================
// End-to-End Generation Tests
// =============================================================================

#[test]
fn test_generate_from_fixture_writes_both_artifacts() {
    let dir = TempDir::new().unwrap();
    let schema = SchemaLoader::load(&fixtures_path().join("point_batch.json")).unwrap();

    let driver = GenerationDriver::from_config(config_for(&dir), false).unwrap();
    let reports = driver.run(&schema);

    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.is_ok()));

    let json = fs::read_to_string(dir.path().join("serialize_json.cpp")).unwrap();
    let zmq = fs::read_to_string(dir.path().join("zmq_send.cpp")).unwrap();

    // Point derives both markers, Batch only ZMQSend
    assert!(json.contains("serialize_json(const Point& item)"));
    assert!(!json.contains("Batch"));

    assert!(zmq.contains("send(Connector& connector, const Point& item)"));
    assert!(zmq.contains("send(Connector& connector, const Batch& item)"));
    assert!(zmq.contains("connector.sendVector(item.items, zmq::snd_more);"));
    assert!(zmq.contains("connector.send(item.label, zmq::snd_more);"));
}

#[test]
fn test_generated_field_order_follows_declaration_order() {
    let dir = TempDir::new().unwrap();
    let schema = SchemaLoader::from_json(
        r#"{"classes": [{
            "name": "Point",
            "fields": [
                {"name": "x", "type": "float"},
                {"name": "y", "type": "float"}
            ]
        }]}"#,
    )
    .unwrap();

    let driver = GenerationDriver::from_config(config_for(&dir), false).unwrap();
    driver.run(&schema);

    let json = fs::read_to_string(dir.path().join("serialize_json.cpp")).unwrap();
    let x = json.find("j[\"x\"]").unwrap();
    let y = json.find("j[\"y\"]").unwrap();
    assert!(x < y);
}

#[test]
fn test_empty_class_fails_zmq_but_not_json() {
    let dir = TempDir::new().unwrap();
    let schema = SchemaLoader::from_json(r#"{"classes": [{"name": "Empty", "fields": []}]}"#)
        .unwrap();

    let driver = GenerationDriver::from_config(config_for(&dir), false).unwrap();
    let reports = driver.run(&schema);

    let json = reports.iter().find(|r| r.emitter == "json").unwrap();
    let zmq = reports.iter().find(|r| r.emitter == "zmq").unwrap();

    assert!(json.is_ok(), "json emitter tolerates empty classes");
    assert!(!zmq.is_ok(), "zmq emitter requires at least one field");

    let err = zmq.outcome.as_ref().unwrap_err().to_string();
    assert!(err.contains("has no fields"));
}

#[test]
fn test_regeneration_skips_unchanged_artifacts() {
    let dir = TempDir::new().unwrap();
    let schema = SchemaLoader::load(&fixtures_path().join("point_batch.json")).unwrap();
    let driver = GenerationDriver::from_config(config_for(&dir), false).unwrap();

    let first = driver.run(&schema);
    assert!(first
        .iter()
        .all(|r| matches!(r.outcome, Ok(cppgen_cli::WriteOutcome::Written { .. }))));

    let second = driver.run(&schema);
    assert!(second
        .iter()
        .all(|r| matches!(r.outcome, Ok(cppgen_cli::WriteOutcome::Unchanged { .. }))));
}

// =============================================================================
// Validation Workflow Tests
// =============================================================================

#[test]
fn test_plan_matches_written_artifacts() {
    let dir = TempDir::new().unwrap();
    let schema = SchemaLoader::load(&fixtures_path().join("point_batch.json")).unwrap();
    let driver = GenerationDriver::from_config(config_for(&dir), false).unwrap();

    driver.run(&schema);

    // A fresh plan over the same schema must match the files on disk
    for artifact in driver.plan(&schema) {
        let expected = artifact.content.unwrap();
        let existing = fs::read_to_string(&artifact.path).unwrap();
        assert_eq!(expected, existing, "{} artifact is stale", artifact.emitter);
    }
}

#[test]
fn test_plan_detects_stale_artifact() {
    let dir = TempDir::new().unwrap();
    let schema = SchemaLoader::load(&fixtures_path().join("point_batch.json")).unwrap();
    let driver = GenerationDriver::from_config(config_for(&dir), false).unwrap();

    driver.run(&schema);
    fs::write(dir.path().join("serialize_json.cpp"), "// edited by hand\n").unwrap();

    let stale: Vec<_> = driver
        .plan(&schema)
        .into_iter()
        .filter(|a| {
            let expected = a.content.as_ref().unwrap();
            fs::read_to_string(&a.path).map(|e| &e != expected).unwrap_or(true)
        })
        .collect();

    assert_eq!(stale.len(), 1);
    assert_eq!(stale[0].emitter, "json");
}

// =============================================================================
// Config Integration Tests
// =============================================================================

#[test]
fn test_config_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cppgen.toml");
    fs::write(&path, ConfigManager::default_config_content()).unwrap();

    let config = ConfigManager::load(Some(&path)).unwrap();
    assert!(config.emitters.json.enabled);
    assert!(config.emitters.zmq.enabled);
    assert_eq!(config.emitters.zmq.namespace.as_deref(), Some("cppgen"));
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let config = ConfigManager::load(None).unwrap();
    assert_eq!(config.output.dir, PathBuf::from("./generated"));
}

#[test]
fn test_cli_override_changes_output_and_emitters() {
    let config = ConfigManager::load(None).unwrap();
    let merged = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            output: Some(PathBuf::from("./elsewhere")),
            header: Some("model.hpp".to_string()),
            emitters: Some(vec!["json".to_string()]),
        },
    );

    assert_eq!(merged.output.dir, PathBuf::from("./elsewhere"));
    assert_eq!(merged.emitters.json.header, "model.hpp");
    assert!(merged.emitters.json.enabled);
    assert!(!merged.emitters.zmq.enabled);
}

#[test]
fn test_custom_output_files_from_config() {
    let dir = TempDir::new().unwrap();
    let mut config = config_for(&dir);
    config.emitters.json.file = "json_out.cpp".to_string();
    config.emitters.zmq.file = "wire_out.cpp".to_string();

    let schema = SchemaLoader::load(&fixtures_path().join("point_batch.json")).unwrap();
    let driver = GenerationDriver::from_config(config, false).unwrap();
    driver.run(&schema);

    assert!(dir.path().join("json_out.cpp").exists());
    assert!(dir.path().join("wire_out.cpp").exists());
}

// =============================================================================
// Writer Integration Tests
// =============================================================================

#[test]
fn test_writer_dry_run_reports_content_without_writing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.cpp");

    let writer = ArtifactWriter::new(true);
    let outcome = writer.write(&path, "// artifact\n").unwrap();

    assert!(!outcome.on_disk());
    assert!(!path.exists());
}
