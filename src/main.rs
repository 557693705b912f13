//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `crawl_summary` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Writing the summary as JSON
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use crawl_summary::initialization::init_logger_with;
use crawl_summary::{export_json, run_summary, Config, ExportOptions};

fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let opts = ExportOptions {
        output: config.output.clone(),
        compact: config.compact,
    };

    match run_summary(&config).and_then(|report| {
        export_json(&report.summary, &opts)?;
        Ok(report)
    }) {
        Ok(report) => {
            // Stdout carries the JSON, so the recap goes to stderr
            eprintln!(
                "Summarised {} record{} from {} file{} ({} malformed line{} skipped) in {:.1}s",
                report.records,
                if report.records == 1 { "" } else { "s" },
                report.files,
                if report.files == 1 { "" } else { "s" },
                report.skipped(),
                if report.skipped() == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            if let Some(path) = &opts.output {
                eprintln!("Summary saved in {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("crawl_summary error: {:#}", e);
            process::exit(1);
        }
    }
}
