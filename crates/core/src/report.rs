//! SARIF 2.1.0 input model
//!
//! Covers the subset of the result-log schema sarel consumes: `version`,
//! `$schema`, and each run's `tool.driver.{name,version,rules}` plus the
//! `results[].{ruleId,ruleIndex,message,locations}` tree. Unknown fields in
//! the document are ignored; absent optional fields default to empty.

use serde::{Deserialize, Serialize};

// ── Envelope ─────────────────────────────────────────────────────

/// Pass-1 probe: only the two envelope fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportShell {
    #[serde(default)]
    pub version: String,

    #[serde(default, rename = "$schema")]
    pub schema: String,
}

/// A fully parsed report. `version`/`schema` come from the pass-1 shell,
/// `runs` from the pass-2 typed parse.
#[derive(Debug, Clone)]
pub struct Report {
    pub version: String,
    pub schema: String,
    pub runs: Vec<Run>,
}

/// Pass-2 body: the typed run list, parsed from the same bytes as the shell.
#[derive(Debug, Default, Deserialize)]
pub struct ReportBody {
    #[serde(default)]
    pub runs: Vec<Run>,
}

// ── Runs ─────────────────────────────────────────────────────────

/// One analysis tool invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub tool: Tool,

    #[serde(default)]
    pub results: Vec<ResultEntry>,
}

impl Run {
    pub fn tool_name(&self) -> &str {
        &self.tool.driver.name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool.driver.version
    }

    /// The run's rule catalog, indexable by `ResultEntry::rule_index`.
    pub fn rules(&self) -> &[Rule] {
        &self.tool.driver.rules
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(default)]
    pub driver: Driver,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// SARIF `reportingDescriptor` — one catalog entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub full_description: Message,

    #[serde(default)]
    pub help: Message,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub text: String,
}

// ── Results ──────────────────────────────────────────────────────

/// One finding instance. Named `ResultEntry` to stay clear of
/// `std::result::Result`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    #[serde(default)]
    pub rule_id: String,

    /// Index into the owning run's rule catalog. −1 when the document does
    /// not carry one (SARIF's "no rule" sentinel).
    #[serde(default = "default_rule_index")]
    pub rule_index: i64,

    #[serde(default)]
    pub message: Message,

    #[serde(default)]
    pub locations: Vec<Location>,
}

fn default_rule_index() -> i64 {
    -1
}

/// One site a result applies to. In this deployment's convention the
/// artifact URI holds a container image identifier, not a filesystem path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub physical_location: PhysicalLocation,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalLocation {
    #[serde(default)]
    pub artifact_location: ArtifactLocation,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactLocation {
    #[serde(default)]
    pub uri: String,
}

impl Location {
    pub fn uri(&self) -> &str {
        &self.physical_location.artifact_location.uri
    }
}
