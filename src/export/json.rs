//! JSON export of crawl summaries.
//!
//! A single summary is written as one object with `totals`, `status_codes`
//! and `mime_types`; a grouped summary as an object keyed by group. Map keys are
//! always sorted, absent optional fields are omitted, and timestamps are
//! RFC 3339 strings.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::summary::GroupedSummary;

use super::writer::IgnoreBrokenPipe;
use super::ExportOptions;

/// Writes `summary` as JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or the underlying write fails.
pub fn write_json<W: Write>(mut writer: W, summary: &GroupedSummary, compact: bool) -> Result<()> {
    if compact {
        serde_json::to_writer(&mut writer, summary)
    } else {
        serde_json::to_writer_pretty(&mut writer, summary)
    }
    .context("Failed to serialize summary")?;
    writeln!(writer).context("Failed to write summary")?;
    writer.flush().context("Failed to flush summary output")?;
    Ok(())
}

/// Writes `summary` to the file named in `opts`, or to stdout.
///
/// # Errors
///
/// Returns an error if the output file cannot be created or written.
pub fn export_json(summary: &GroupedSummary, opts: &ExportOptions) -> Result<()> {
    let writer: Box<dyn Write> = if let Some(output_path) = opts.output.as_ref() {
        let file = File::create(output_path).context(format!(
            "Failed to create output file: {}",
            output_path.display()
        ))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(IgnoreBrokenPipe::new(io::stdout().lock()))
    };

    write_json(writer, summary, opts.compact)
}
