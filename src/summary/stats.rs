//! Running count and byte totals for one slice of a crawl.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::record::CrawlRecord;

/// A running aggregate over the records folded into it.
///
/// All counters start at zero and only grow. The description is fixed at
/// construction; status-code buckets carry the status description, other
/// buckets have none.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stats {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    count: u64,
    total_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mean_fetch_duration_ms: Option<f64>,
    #[serde(skip)]
    timed_count: u64,
}

impl Stats {
    /// Creates an empty, unlabelled accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty accumulator labelled with `description`.
    pub fn with_description(description: impl Into<String>) -> Self {
        Stats {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    /// Folds one record in.
    ///
    /// A record without a size adds nothing to `total_bytes` but still counts.
    /// The fetch-duration mean is updated incrementally over the records that
    /// have a duration, so it stays accurate without keeping a running sum.
    pub fn add(&mut self, record: &CrawlRecord) {
        self.count += 1;
        self.total_bytes += record.size_or_zero();

        if let Some(ts) = record.timestamp {
            self.first_time = Some(self.first_time.map_or(ts, |t| t.min(ts)));
            self.last_time = Some(self.last_time.map_or(ts, |t| t.max(ts)));
        }

        if let Some(duration) = record.fetch_duration_ms {
            self.timed_count += 1;
            let mean = self.mean_fetch_duration_ms.unwrap_or(0.0);
            // Precision loss past 2^53 is acceptable for a mean
            #[allow(clippy::cast_precision_loss)]
            let next = mean + (duration as f64 - mean) / self.timed_count as f64;
            self.mean_fetch_duration_ms = Some(next);
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Number of records folded in.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of record sizes, absent sizes counting as zero.
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Earliest record timestamp seen.
    pub fn first_time(&self) -> Option<DateTime<Utc>> {
        self.first_time
    }

    /// Latest record timestamp seen.
    pub fn last_time(&self) -> Option<DateTime<Utc>> {
        self.last_time
    }

    /// Mean fetch duration over the records that logged one.
    pub fn mean_fetch_duration_ms(&self) -> Option<f64> {
        self.mean_fetch_duration_ms
    }

    /// Mean record size, or `None` when nothing has been counted.
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_bytes(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.total_bytes as f64 / self.count as f64)
        }
    }
}
