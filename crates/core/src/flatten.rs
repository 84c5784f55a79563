//! Flattens a parsed report into one event per (result, location) pair
//!
//! Events come out in document order: runs, then results within a run, then
//! locations within a result. A result with no locations contributes
//! nothing. A result whose `ruleIndex` falls outside the run's rule catalog
//! ends the stream with a `RuleIndex` error.

use serde::Serialize;

use crate::error::RelayError;
use crate::report::{Location, Report, ResultEntry, Run};

/// One flat record, ready to ship as a custom telemetry event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatEvent {
    pub tool: String,
    pub tool_version: String,
    pub rule_id: String,
    pub message: String,
    pub full_description: String,
    pub help_uri: String,
    pub help_text: String,
    pub location: String,
}

/// Returns a lazy iterator over the report's flattened events.
pub fn flatten(report: &Report) -> FlatEvents<'_> {
    FlatEvents {
        runs: report.runs.iter(),
        run: None,
        failed: false,
    }
}

/// Lazy, finite, non-restartable event stream. Once an error is yielded the
/// iterator is exhausted.
pub struct FlatEvents<'a> {
    runs: std::slice::Iter<'a, Run>,
    run: Option<RunCursor<'a>>,
    failed: bool,
}

struct RunCursor<'a> {
    run: &'a Run,
    results: std::slice::Iter<'a, ResultEntry>,
    pending: Option<PendingResult<'a>>,
}

struct PendingResult<'a> {
    base: FlatEvent,
    locations: std::slice::Iter<'a, Location>,
}

impl<'a> Iterator for FlatEvents<'a> {
    type Item = Result<FlatEvent, RelayError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            if let Some(cursor) = self.run.as_mut() {
                if let Some(pending) = cursor.pending.as_mut() {
                    if let Some(location) = pending.locations.next() {
                        // Fresh copy per location — sinks may retain events.
                        let mut event = pending.base.clone();
                        event.location = location.uri().to_string();
                        return Some(Ok(event));
                    }
                    cursor.pending = None;
                }

                if let Some(result) = cursor.results.next() {
                    match base_event(cursor.run, result) {
                        Ok(base) => {
                            cursor.pending = Some(PendingResult {
                                base,
                                locations: result.locations.iter(),
                            });
                            continue;
                        }
                        Err(err) => {
                            self.failed = true;
                            return Some(Err(err));
                        }
                    }
                }

                self.run = None;
            }

            match self.runs.next() {
                Some(run) => {
                    self.run = Some(RunCursor {
                        run,
                        results: run.results.iter(),
                        pending: None,
                    })
                }
                None => return None,
            }
        }
    }
}

/// Builds the location-less base record for one result, resolving its rule
/// through the run's catalog.
fn base_event(run: &Run, result: &ResultEntry) -> Result<FlatEvent, RelayError> {
    let rules = run.rules();
    let index = usize::try_from(result.rule_index)
        .ok()
        .filter(|i| *i < rules.len())
        .ok_or_else(|| RelayError::RuleIndex {
            rule_id: result.rule_id.clone(),
            index: result.rule_index,
            rules: rules.len(),
        })?;
    let rule = &rules[index];

    Ok(FlatEvent {
        tool: run.tool_name().to_string(),
        tool_version: run.tool_version().to_string(),
        rule_id: result.rule_id.clone(),
        message: result.message.text.clone(),
        full_description: rule.full_description.text.clone(),
        // helpUri carries the description text; downstream dashboards key
        // on the current contents.
        help_uri: rule.full_description.text.clone(),
        help_text: rule.help.text.clone(),
        location: String::new(),
    })
}
