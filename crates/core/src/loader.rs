//! Report loading — file read plus the two-pass parse
//!
//! Pass 1 probes the envelope (`version`, `$schema`); pass 2 parses the
//! same bytes against the full typed schema. The assembled `Report` is
//! seeded with the shell's envelope fields.

use std::path::Path;

use crate::error::RelayError;
use crate::report::{Report, ReportBody, ReportShell};

/// Reads and parses a SARIF report file.
///
/// Unreadable file ⇒ `RelayError::Io`; malformed or shape-mismatched JSON
/// at either pass ⇒ `RelayError::Parse`. Both are fatal, no retry.
pub fn load_report(path: &Path) -> Result<Report, RelayError> {
    let bytes = std::fs::read(path).map_err(|err| RelayError::Io {
        path: path.to_path_buf(),
        err,
    })?;

    parse_report(&bytes).map_err(|err| RelayError::Parse {
        path: path.to_path_buf(),
        err,
    })
}

/// Parses report bytes in two passes: envelope shell, then typed body.
pub fn parse_report(bytes: &[u8]) -> Result<Report, serde_json::Error> {
    let shell: ReportShell = serde_json::from_slice(bytes)?;
    let body: ReportBody = serde_json::from_slice(bytes)?;

    Ok(Report {
        version: shell.version,
        schema: shell.schema,
        runs: body.runs,
    })
}
