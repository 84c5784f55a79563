//! Sarel CLI library — exposed for integration tests

pub mod pipeline;
pub mod telemetry;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sarel")]
#[command(about = "Forward SARIF findings to a telemetry backend", long_about = None)]
#[command(version = sarel_core::VERSION)]
pub struct Cli {
    /// Path to SARIF report file
    #[arg(short = 'f', long = "file", default_value = "in.sarif")]
    pub file: PathBuf,

    /// Telemetry license key (required unless --dry-run)
    #[arg(short = 'k', long = "key", default_value = "")]
    pub key: String,

    /// Ingest endpoint base URL (overrides .sarel.toml)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Event type name for emitted events (overrides .sarel.toml)
    #[arg(long)]
    pub event_type: Option<String>,

    /// Flatten and print events without contacting the backend
    #[arg(long)]
    pub dry_run: bool,

    /// Print full event payloads as they are emitted
    #[arg(short, long)]
    pub verbose: bool,
}
