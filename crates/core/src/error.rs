//! Error taxonomy for the relay pipeline
//!
//! Every variant is fatal: the CLI prints one diagnostic line and exits
//! non-zero. There is no local recovery, partial-result mode, or retry.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("{0}")]
    Config(String),

    #[error("cannot read report {path}: {err}")]
    Io { path: PathBuf, err: std::io::Error },

    #[error("cannot parse report {path}: {err}")]
    Parse {
        path: PathBuf,
        err: serde_json::Error,
    },

    #[error("telemetry backend: {0}")]
    Connection(String),

    #[error(
        "result for rule {rule_id:?} references rule index {index}, but the run catalogs {rules} rule(s)"
    )]
    RuleIndex {
        rule_id: String,
        index: i64,
        rules: usize,
    },
}
