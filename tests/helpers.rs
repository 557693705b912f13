// Shared test helpers for crawl-log fixtures.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::{Path, PathBuf};

use crawl_summary::{Config, GroupBy, LogFormat, LogLevel};

/// Path to the bundled crawl.log fixture.
///
/// It holds 8 records from two registered domains (nla.gov.au and
/// google-analytics.com), two `dns:` lookups and one malformed line.
pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("crawl.log")
}

/// Writes `lines` to a crawl log named `name` inside `dir`.
#[allow(dead_code)] // Used by other test files
pub fn write_crawl_log(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut content = lines.join("\n");
    content.push('\n');
    std::fs::write(&path, content).expect("Failed to write crawl log");
    path
}

/// Creates a quiet config reading `files`.
#[allow(dead_code)] // Used by other test files
pub fn test_config(files: Vec<PathBuf>, group_by: GroupBy) -> Config {
    Config {
        files,
        group_by,
        output: None,
        compact: false,
        log_level: LogLevel::Error, // Reduce log noise
        log_format: LogFormat::Plain,
    }
}
