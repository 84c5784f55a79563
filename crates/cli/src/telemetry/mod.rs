//! Telemetry sink — connection lifecycle and buffered event delivery
//!
//! State machine: `Unconnected → Connected → ShuttingDown → Closed`.
//! No retries or reconnection; a failed connect is terminal for the
//! process. Buffering and flushing are private to the sink — callers only
//! observe the two bounded waits (`connect`, `shutdown`).

pub mod client;

use std::time::{Duration, Instant};

use colored::Colorize;
use serde_json::json;

use sarel_core::{FlatEvent, RelayError};

use self::client::{Handshake, Transport};

/// Buffered events that trigger an eager flush.
const FLUSH_AT: usize = 100;

/// Bound on an eager mid-stream flush; the final flush uses the caller's
/// shutdown bound instead.
const EAGER_FLUSH_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause between handshake attempts while waiting for the backend.
const CONNECT_RETRY_PAUSE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkState {
    Unconnected,
    Connected,
    ShuttingDown,
    Closed,
}

pub struct TelemetryClient {
    transport: Transport,
    app_name: String,
    state: SinkState,
    buffer: Vec<serde_json::Value>,
}

impl TelemetryClient {
    pub fn new(endpoint: &str, app_name: &str, key: &str) -> Result<Self, RelayError> {
        Ok(Self {
            transport: Transport::new(endpoint, key)?,
            app_name: app_name.to_string(),
            state: SinkState::Unconnected,
            buffer: Vec::new(),
        })
    }

    /// Blocks until the backend acknowledges readiness, up to `timeout`.
    ///
    /// A rejected credential fails immediately; transient failures are
    /// retried until the deadline. Not reaching `Connected` is terminal.
    pub fn connect(&mut self, timeout: Duration) -> Result<(), RelayError> {
        let deadline = Instant::now() + timeout;
        let mut last_reason = "no handshake attempted".to_string();

        loop {
            match self.transport.handshake(&self.app_name)? {
                Handshake::Acknowledged => {
                    self.state = SinkState::Connected;
                    return Ok(());
                }
                Handshake::Retry(reason) => last_reason = reason,
            }

            if Instant::now() + CONNECT_RETRY_PAUSE >= deadline {
                break;
            }
            std::thread::sleep(CONNECT_RETRY_PAUSE);
        }

        Err(RelayError::Connection(format!(
            "backend not ready within {}s: {}",
            timeout.as_secs(),
            last_reason
        )))
    }

    /// Accepts one event for delivery and logs the emission.
    ///
    /// Fire-and-forget past this point: the event lands in the private
    /// buffer, and an eager flush that fails drops its batch with a warning
    /// rather than propagating.
    pub fn emit(&mut self, event_type: &str, event: &FlatEvent) -> Result<(), RelayError> {
        if self.state != SinkState::Connected {
            return Err(RelayError::Connection(format!(
                "emit in {:?} state",
                self.state
            )));
        }

        println!(
            "  publishing {} \u{00b7} {} @ {}",
            event_type, event.rule_id, event.location
        );
        self.buffer.push(envelope(event_type, event));

        if self.buffer.len() >= FLUSH_AT {
            self.flush(EAGER_FLUSH_TIMEOUT);
        }
        Ok(())
    }

    /// Flushes whatever is still buffered and closes the sink.
    ///
    /// Best-effort: a partial flush failure is logged, not surfaced.
    /// Idempotent — calling on a closed sink does nothing.
    pub fn shutdown(&mut self, timeout: Duration) {
        if self.state == SinkState::Closed {
            return;
        }
        self.state = SinkState::ShuttingDown;
        self.flush(timeout);
        self.state = SinkState::Closed;
    }

    pub fn state(&self) -> SinkState {
        self.state
    }

    /// Events accepted but not yet delivered.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    fn flush(&mut self, timeout: Duration) {
        if self.buffer.is_empty() {
            return;
        }
        let batch = std::mem::take(&mut self.buffer);
        if let Err(err) = self.transport.deliver(&batch, timeout) {
            eprintln!(
                "  {}: dropped {} event(s): {}",
                "warn".yellow(),
                batch.len(),
                err
            );
        }
    }
}

/// Stamps a flat record with its event type, producing the wire payload.
pub fn envelope(event_type: &str, event: &FlatEvent) -> serde_json::Value {
    json!({
        "eventType": event_type,
        "tool": event.tool,
        "toolVersion": event.tool_version,
        "ruleId": event.rule_id,
        "message": event.message,
        "fullDescription": event.full_description,
        "helpUri": event.help_uri,
        "helpText": event.help_text,
        "location": event.location,
    })
}
