//! Error handling and read statistics.
//!
//! This module provides:
//! - Error type definitions (`CrawlLogError`, `DomainError`, `InitializationError`)
//! - Counters for malformed crawl-log lines, by category
//!
//! Only I/O failures on the input are fatal. Key-derivation failures, unknown
//! status codes and unusable MIME types are ordinary data, handled where they occur.

mod stats;
mod types;

// Re-export public API
pub use stats::ReadStats;
pub use types::{CrawlLogError, DomainError, InitializationError, MalformedLineKind};
