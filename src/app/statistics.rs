//! End-of-run statistics logging.

use log::info;
use std::collections::HashMap;
use strum::IntoEnumIterator;

use crate::config::LOGGED_STATUS_CODES_LIMIT;
use crate::error_handling::{MalformedLineKind, ReadStats};
use crate::summary::{CrawlSummary, GroupedSummary, Stats};

/// Logs the headline numbers of a finished summary.
///
/// For a grouped summary the status breakdown is merged across groups, so the
/// log shows the same picture whatever the grouping.
pub fn log_summary_statistics(summary: &GroupedSummary) {
    match summary {
        GroupedSummary::Single(summary) => {
            log_totals(summary.totals());
            log_status_codes(status_counts(std::iter::once(summary)));
        }
        GroupedSummary::Grouped(groups) => {
            let records = summary.record_count();
            let bytes: u64 = groups.values().map(|s| s.totals().total_bytes()).sum();
            info!("Totals: {} records, {} bytes", records, bytes);
            info!(
                "{} groups ({} records without a group key)",
                groups.len(),
                groups.get("").map_or(0, |s| s.totals().count())
            );
            log_status_codes(status_counts(groups.values()));
        }
    }
}

/// Logs skipped-line counts, per category.
pub fn log_read_statistics(stats: &ReadStats) {
    let total = stats.total();
    if total > 0 {
        info!("Skipped malformed lines ({} total):", total);
        for kind in MalformedLineKind::iter() {
            let count = stats.get_count(kind);
            if count > 0 {
                info!("   {}: {}", kind.as_str(), count);
            }
        }
    }
}

fn log_totals(totals: &Stats) {
    info!(
        "Totals: {} records, {} bytes",
        totals.count(),
        totals.total_bytes()
    );
    if let (Some(first), Some(last)) = (totals.first_time(), totals.last_time()) {
        info!("Crawl window: {} to {}", first, last);
    }
}

/// (status code, description, count), most frequent first.
fn status_counts<'a>(
    summaries: impl Iterator<Item = &'a CrawlSummary>,
) -> Vec<(i32, String, u64)> {
    let mut merged: HashMap<i32, (String, u64)> = HashMap::new();
    for summary in summaries {
        for (code, stats) in summary.status_codes() {
            let entry = merged
                .entry(*code)
                .or_insert_with(|| (stats.description().unwrap_or_default().to_string(), 0));
            entry.1 += stats.count();
        }
    }

    let mut counts: Vec<(i32, String, u64)> = merged
        .into_iter()
        .map(|(code, (description, count))| (code, description, count))
        .collect();
    // Sort by descending count, then by status code
    counts.sort_unstable_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));
    counts
}

fn log_status_codes(counts: Vec<(i32, String, u64)>) {
    if counts.is_empty() {
        return;
    }
    info!("Status codes ({} distinct):", counts.len());
    for (code, description, count) in counts.iter().take(LOGGED_STATUS_CODES_LIMIT) {
        info!("   {} {}: {}", code, description, count);
    }
    if counts.len() > LOGGED_STATUS_CODES_LIMIT {
        let rest: u64 = counts[LOGGED_STATUS_CODES_LIMIT..].iter().map(|c| c.2).sum();
        info!("   ... {} more records with other status codes", rest);
    }
}
