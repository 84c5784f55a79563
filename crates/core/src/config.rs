//! Configuration file parsing for .sarel.toml

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RelayError;

/// Main configuration structure for .sarel.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarelConfig {
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Ingest endpoint base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Application name reported on connect
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Event type name stamped on every emitted event
    #[serde(default = "default_event_type")]
    pub event_type: String,
}

// Default functions
fn default_endpoint() -> String {
    "https://ingest.sarel.dev".to_string()
}

fn default_app_name() -> String {
    "sarel".to_string()
}

fn default_event_type() -> String {
    "VulnerabilityScanEvent".to_string()
}

impl Default for SarelConfig {
    fn default() -> Self {
        Self {
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            app_name: default_app_name(),
            event_type: default_event_type(),
        }
    }
}

impl SarelConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, RelayError> {
        let contents = std::fs::read_to_string(path).map_err(|err| RelayError::Io {
            path: path.to_path_buf(),
            err,
        })?;
        let config: SarelConfig = toml::from_str(&contents)
            .map_err(|e| RelayError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Find and load .sarel.toml from the given directory or ancestors
    pub fn find_and_load(start_dir: &Path) -> Result<Self, RelayError> {
        let mut current = start_dir;

        loop {
            let config_path = current.join(".sarel.toml");
            if config_path.exists() {
                return Self::from_file(&config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        // No config found, use defaults
        Ok(Self::default())
    }
}
