use std::path::Path;

use sarel_core::{load_report, RelayError};
use tempfile::TempDir;

const MINIMAL: &str = r#"{
  "version": "2.1.0",
  "$schema": "https://json.schemastore.org/sarif-2.1.0.json",
  "runs": [{
    "tool": {"driver": {"name": "t", "version": "1",
      "rules": [{"fullDescription": {"text": "d"}, "help": {"text": "h"}}]}},
    "results": [{"ruleId": "R1", "ruleIndex": 0, "message": {"text": "m"},
      "locations": [{"physicalLocation": {"artifactLocation": {"uri": "img:tag"}}}]}]
  }]
}"#;

fn write_report(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_valid_report() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, "in.sarif", MINIMAL);

    let report = load_report(&path).unwrap();
    assert_eq!(report.version, "2.1.0");
    assert_eq!(report.schema, "https://json.schemastore.org/sarif-2.1.0.json");
    assert_eq!(report.runs.len(), 1);
    assert_eq!(report.runs[0].results.len(), 1);
}

#[test]
fn envelope_is_seeded_from_shell_pass() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, "in.sarif", r#"{"runs": []}"#);

    // No envelope fields in the document: the shell's defaults carry over.
    let report = load_report(&path).unwrap();
    assert!(report.version.is_empty());
    assert!(report.schema.is_empty());
}

#[test]
fn missing_file_is_io_error() {
    let err = load_report(Path::new("/nonexistent/in.sarif")).unwrap_err();
    assert!(matches!(err, RelayError::Io { .. }));
    assert!(err.to_string().contains("cannot read report"));
}

#[test]
fn malformed_json_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, "in.sarif", "{not json");

    let err = load_report(&path).unwrap_err();
    assert!(matches!(err, RelayError::Parse { .. }));
    assert!(err.to_string().contains("cannot parse report"));
}

#[test]
fn shape_mismatch_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, "in.sarif", r#"{"version": "2.1.0", "runs": 42}"#);

    assert!(matches!(
        load_report(&path).unwrap_err(),
        RelayError::Parse { .. }
    ));
}

#[test]
fn parse_error_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, "broken.sarif", "[");

    let err = load_report(&path).unwrap_err();
    assert!(err.to_string().contains("broken.sarif"));
}
