//! HTTP transport for the telemetry ingest API

use std::time::Duration;

use serde::{Deserialize, Serialize};

use sarel_core::RelayError;

/// Per-request bound for handshake attempts. Delivery passes its own bound.
const HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Serialize)]
pub struct ConnectRequest<'a> {
    pub app_name: &'a str,
    pub key: &'a str,
}

#[derive(Deserialize)]
pub struct ConnectResponse {
    pub connected: bool,

    #[serde(default)]
    pub reason: Option<String>,
}

/// Outcome of one handshake attempt.
pub enum Handshake {
    Acknowledged,
    /// Transient — worth another attempt before the connect deadline.
    Retry(String),
}

pub struct Transport {
    http: reqwest::blocking::Client,
    endpoint: String,
    key: String,
}

impl Transport {
    pub fn new(endpoint: &str, key: &str) -> Result<Self, RelayError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| RelayError::Connection(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            key: key.to_string(),
        })
    }

    /// One handshake attempt against `/v1/connect`.
    ///
    /// A rejected credential is terminal (`Err`); unreachable backend,
    /// server errors, and a not-yet-ready answer are `Handshake::Retry`.
    pub fn handshake(&self, app_name: &str) -> Result<Handshake, RelayError> {
        let body = ConnectRequest {
            app_name,
            key: &self.key,
        };

        let resp = match self
            .http
            .post(format!("{}/v1/connect", self.endpoint))
            .json(&body)
            .send()
        {
            Ok(resp) => resp,
            Err(e) => return Ok(Handshake::Retry(e.to_string())),
        };

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(RelayError::Connection(format!(
                "license key rejected (HTTP {})",
                status
            )));
        }
        if !status.is_success() {
            return Ok(Handshake::Retry(format!("HTTP {}", status)));
        }

        let data: ConnectResponse = resp
            .json()
            .map_err(|e| RelayError::Connection(e.to_string()))?;

        if data.connected {
            Ok(Handshake::Acknowledged)
        } else {
            Ok(Handshake::Retry(
                data.reason.unwrap_or_else(|| "backend not ready".to_string()),
            ))
        }
    }

    /// Delivers a batch of events to `/v1/events` within `timeout`.
    pub fn deliver(
        &self,
        events: &[serde_json::Value],
        timeout: Duration,
    ) -> Result<(), RelayError> {
        let resp = self
            .http
            .post(format!("{}/v1/events", self.endpoint))
            .header("Api-Key", &self.key)
            .timeout(timeout)
            .json(&events)
            .send()
            .map_err(|e| RelayError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(RelayError::Connection(format!("HTTP {}", resp.status())));
        }
        Ok(())
    }
}
