//! The forwarding pipeline — config, load, flatten, connect, emit, shutdown

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use colored::Colorize;
use sarel_core::{flatten, load_report, RelayError, SarelConfig};

use crate::telemetry::TelemetryClient;
use crate::Cli;

/// Bound on the wait for the backend to acknowledge readiness.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Bound on the final flush before exit.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5 * 60);

pub fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();

    // ── 1. Config ────────────────────────────────────────────────
    // Credential check comes first: before any file I/O, including the
    // config file lookup.
    if cli.key.is_empty() && !cli.dry_run {
        return Err(RelayError::Config("must specify a license key with -k".to_string()).into());
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = SarelConfig::find_and_load(&cwd)?;
    let endpoint = cli
        .endpoint
        .as_deref()
        .unwrap_or(&config.telemetry.endpoint);
    let event_type = cli
        .event_type
        .as_deref()
        .unwrap_or(&config.telemetry.event_type);

    println!(
        "{}",
        format!("  sarel v{} — forwarding SARIF findings", sarel_core::VERSION).bold()
    );
    println!();

    // ── 2. Load report ───────────────────────────────────────────
    let report = load_report(&cli.file)?;
    println!(
        "  Report: {} (SARIF {}) — {} run(s)",
        cli.file.display(),
        if report.version.is_empty() {
            "?"
        } else {
            report.version.as_str()
        },
        report.runs.len()
    );

    // ── 3. Dry run: print and exit ───────────────────────────────
    if cli.dry_run {
        let mut count = 0usize;
        for event in flatten(&report) {
            let event = event?;
            println!("{}", serde_json::to_string(&event)?);
            count += 1;
        }
        eprintln!(
            "  {} — {} event(s), nothing sent",
            "dry run".dimmed(),
            count
        );
        return Ok(());
    }

    // ── 4. Connect ───────────────────────────────────────────────
    print!("  Connecting to {}... ", endpoint);
    let mut client = TelemetryClient::new(endpoint, &config.telemetry.app_name, &cli.key)?;
    client.connect(CONNECT_TIMEOUT)?;
    println!("{}", "done".green());

    // ── 5. Emit ──────────────────────────────────────────────────
    let mut sent = 0usize;
    for event in flatten(&report) {
        let event = event?;
        client.emit(event_type, &event)?;
        if cli.verbose {
            println!("  {}", serde_json::to_string(&event)?.dimmed());
        }
        sent += 1;
    }

    // ── 6. Flush ─────────────────────────────────────────────────
    print!("  Flushing... ");
    client.shutdown(SHUTDOWN_TIMEOUT);
    println!("{}", "done".green());

    println!();
    println!(
        "  {} event(s) sent \u{00b7} {:.1}s",
        sent,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
