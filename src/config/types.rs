//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::domain::GroupBy;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and configuration.
///
/// Can be parsed from the command line or constructed directly.
///
/// # Examples
///
/// ```bash
/// # One summary for the whole crawl
/// crawl_summary crawl.log
///
/// # One summary per registered domain, across several logs
/// crawl_summary -g registered-domain crawl.log crawl.log.1
///
/// # Read from stdin, write compact JSON to a file
/// zcat crawl.log.gz | crawl_summary - --compact --output summary.json
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "crawl_summary",
    about = "Summarises a Heritrix crawl log by status code and MIME type, optionally per host or registered domain."
)]
pub struct Config {
    /// Crawl log files to read, in order (`-` reads stdin)
    #[arg(value_parser, required = true)]
    pub files: Vec<PathBuf>,

    /// Group summary by host or registered domain
    #[arg(short = 'g', long, value_enum, default_value_t = GroupBy::None)]
    pub group_by: GroupBy,

    /// Write the summary here instead of stdout
    #[arg(short, long, value_parser)]
    pub output: Option<PathBuf>,

    /// Write single-line JSON instead of indented JSON
    #[arg(long)]
    pub compact: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            files: Vec::new(),
            group_by: GroupBy::None,
            output: None,
            compact: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}
