//! Main application modules.
//!
//! This module provides progress logging and end-of-run statistics used by the
//! summary run.

pub mod logging;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use statistics::{log_read_statistics, log_summary_statistics};
