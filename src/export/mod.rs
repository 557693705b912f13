//! Export of crawl summaries.
//!
//! This module renders a finished summary (single or grouped) as JSON, to a
//! file or to stdout.

mod json;
mod types;
mod writer;

pub use json::{export_json, write_json};
pub use types::ExportOptions;
pub use writer::ordered_map;
