//! Error type definitions.
//!
//! This module defines the error types used throughout the application, plus the
//! categories used to count malformed crawl-log lines.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors produced while reading a crawl log.
///
/// Only `Io` is fatal for a summary run; malformed lines are reported to the
/// reader's caller so it can count and skip them.
#[derive(Error, Debug)]
pub enum CrawlLogError {
    /// The underlying source failed. Record boundaries can no longer be trusted.
    #[error("Failed to read crawl log: {0}")]
    Io(#[from] std::io::Error),

    /// A single line could not be parsed into a record.
    #[error("Malformed crawl log line {line}: {kind}")]
    MalformedLine {
        /// 1-based line number in the source
        line: usize,
        /// What was wrong with the line
        kind: MalformedLineKind,
    },
}

/// Errors from deriving a registered domain for a URL or host.
///
/// Key functions never surface these; they map every failure to the empty
/// group key. The variants exist so lookups can be tested and logged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The URL could not be parsed.
    #[error("Failed to parse URL: {0}")]
    InvalidUrl(String),

    /// The URL parsed but has no host (e.g. `dns:example.com`, `file:///x`).
    #[error("URL '{0}' has no host component")]
    MissingHost(String),

    /// IP literals have no registered domain.
    #[error("IP addresses do not have registrable domains: {0}")]
    IpAddress(String),

    /// The host is not under a known public suffix, or is itself a suffix.
    #[error("No public suffix match for host: {0}")]
    NoPublicSuffix(String),
}

/// Categories of malformed crawl-log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum MalformedLineKind {
    /// Fewer whitespace-separated columns than a crawl log line requires
    TooFewFields,
    /// Log timestamp column is not an ISO-8601 instant
    BadTimestamp,
    /// Status column is not an integer
    BadStatusCode,
    /// Size column is neither `-` nor a non-negative integer
    BadSize,
}

impl std::fmt::Display for MalformedLineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MalformedLineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MalformedLineKind::TooFewFields => "too few fields",
            MalformedLineKind::BadTimestamp => "invalid timestamp",
            MalformedLineKind::BadStatusCode => "invalid status code",
            MalformedLineKind::BadSize => "invalid size",
        }
    }
}
