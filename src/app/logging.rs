//! Progress logging utilities.

use log::info;
use std::path::Path;
use std::time::Instant;

/// Logs how far reading has got after finishing a crawl log.
///
/// # Arguments
///
/// * `path` - The crawl log just read
/// * `start_time` - When the run started
/// * `lines_read` - Lines read so far across all logs
pub fn log_progress(path: &Path, start_time: Instant, lines_read: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    #[allow(clippy::cast_precision_loss)]
    let rate = if elapsed_secs > 0.0 {
        lines_read as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Finished {}: {} lines in {:.2} seconds (~{:.2} lines/sec)",
        path.display(),
        lines_read,
        elapsed_secs,
        rate
    );
}
