//! Export types and options.

use std::path::PathBuf;

/// Options for writing a summary.
#[derive(Clone, Debug, Default)]
pub struct ExportOptions {
    /// Output file path (or stdout if None)
    pub output: Option<PathBuf>,
    /// Single-line JSON instead of indented
    pub compact: bool,
}
