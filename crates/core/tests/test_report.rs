use sarel_core::{parse_report, ReportShell};

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

#[test]
fn shell_probe_extracts_envelope() {
    let shell: ReportShell = serde_json::from_str(MINIMAL).unwrap();
    assert_eq!(shell.version, "2.1.0");
    assert_eq!(shell.schema, "https://json.schemastore.org/sarif-2.1.0.json");
}

#[test]
fn shell_probe_defaults_missing_fields() {
    let shell: ReportShell = serde_json::from_str(r#"{"runs": []}"#).unwrap();
    assert!(shell.version.is_empty());
    assert!(shell.schema.is_empty());
}

#[test]
fn minimal_document_parses_fully() {
    let report = parse_report(MINIMAL.as_bytes()).unwrap();

    assert_eq!(report.version, "2.1.0");
    assert_eq!(report.runs.len(), 1);

    let run = &report.runs[0];
    assert_eq!(run.tool_name(), "t");
    assert_eq!(run.tool_version(), "1");
    assert_eq!(run.rules().len(), 1);
    assert_eq!(run.rules()[0].full_description.text, "d");
    assert_eq!(run.rules()[0].help.text, "h");

    let result = &run.results[0];
    assert_eq!(result.rule_id, "R1");
    assert_eq!(result.rule_index, 0);
    assert_eq!(result.message.text, "m");
    assert_eq!(result.locations[0].uri(), "img:tag");
}

#[test]
fn absent_arrays_default_to_empty() {
    let json = r#"{"runs": [{"tool": {"driver": {"name": "t"}}}]}"#;
    let report = parse_report(json.as_bytes()).unwrap();

    let run = &report.runs[0];
    assert!(run.results.is_empty());
    assert!(run.rules().is_empty());
    assert!(run.tool_version().is_empty());
}

#[test]
fn absent_rule_index_is_no_rule_sentinel() {
    let json = r#"{"runs": [{"tool": {"driver": {"name": "t"}},
      "results": [{"ruleId": "R1", "message": {"text": "m"}}]}]}"#;
    let report = parse_report(json.as_bytes()).unwrap();

    assert_eq!(report.runs[0].results[0].rule_index, -1);
    assert!(report.runs[0].results[0].locations.is_empty());
}

#[test]
fn unknown_fields_are_ignored() {
    let json = r#"{
      "version": "2.1.0",
      "properties": {"vendor": "x"},
      "runs": [{
        "tool": {"driver": {"name": "t", "informationUri": "https://example.com"}},
        "columnKind": "utf16CodeUnits",
        "results": []
      }]
    }"#;
    let report = parse_report(json.as_bytes()).unwrap();
    assert_eq!(report.runs[0].tool_name(), "t");
}

#[test]
fn empty_runs_document_parses() {
    let report = parse_report(br#"{"version": "2.1.0", "runs": []}"#).unwrap();
    assert!(report.runs.is_empty());
}
