//! Sarel CLI - SARIF to telemetry forwarder

use clap::Parser;
use colored::Colorize;

use sarel_cli::{pipeline, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = pipeline::run(&cli) {
        eprintln!("{} {:#}", "fatal:".red().bold(), err);
        std::process::exit(1);
    }
}
