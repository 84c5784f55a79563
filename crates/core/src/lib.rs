//! Sarel Core - SARIF report model and event flattening
//!
//! This crate provides the transport-unaware half of sarel:
//! - A typed model for the consumed subset of SARIF 2.1.0
//! - Two-pass report loading (envelope probe, then full parse)
//! - Flattening of run/result/location trees into flat event records
//! - `.sarel.toml` configuration parsing

pub mod config;
pub mod error;
pub mod flatten;
pub mod loader;
pub mod report;

pub use config::{SarelConfig, TelemetryConfig};
pub use error::RelayError;
pub use flatten::{flatten, FlatEvent, FlatEvents};
pub use loader::{load_report, parse_report};
pub use report::{
    ArtifactLocation, Driver, Location, Message, PhysicalLocation, Report, ReportShell,
    ResultEntry, Rule, Run, Tool,
};

/// Sarel version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
