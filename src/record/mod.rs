//! Crawl-log record model and reader.
//!
//! A `CrawlRecord` is one line of a Heritrix `crawl.log`:
//!
//! ```text
//! 2008-02-13T01:59:21.191Z   200   1407 http://www.nla.gov.au/ L http://www.nla.gov.au/robots.txt text/html #042 20080213015920968+205 sha1:7CA... - -
//! ```
//!
//! Columns, in order: log timestamp, status code, size, URL, discovery path,
//! via, MIME type, worker thread, fetch begin time and duration, content digest,
//! source tag, annotations. Missing values are written as `-`.

mod parse;
mod reader;

use chrono::{DateTime, Utc};

pub use parse::parse_line;
pub use reader::{open_crawl_log, CrawlLogReader};

/// One crawl-log entry.
///
/// Records are produced by the reader and only read afterwards; the summary
/// engine borrows each one while folding it in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CrawlRecord {
    /// When the line was logged
    pub timestamp: Option<DateTime<Utc>>,
    /// HTTP status, or a negative crawler status for failed fetches
    pub status_code: i32,
    /// Content size in bytes; `None` when the log has `-`
    pub size: Option<u64>,
    /// The fetched URI
    pub url: String,
    /// Hop path from the seed (`L` = link, `E` = embed, ...); empty for seeds
    pub discovery_path: String,
    /// URI this one was discovered from
    pub via: Option<String>,
    /// Raw MIME type as logged, possibly with parameters
    pub mime_type: String,
    /// Worker thread tag, e.g. `#042`
    pub thread: Option<String>,
    /// When the fetch began
    pub fetch_began: Option<DateTime<Utc>>,
    /// How long the fetch took, in milliseconds
    pub fetch_duration_ms: Option<u64>,
    /// Content digest, e.g. `sha1:...`
    pub digest: Option<String>,
    /// Source (seed) tag
    pub source: Option<String>,
    /// Processor annotations
    pub annotations: Vec<String>,
}

impl CrawlRecord {
    /// Creates a record with the four fields the summary cares about most.
    /// Every other column is left empty.
    pub fn new(
        url: impl Into<String>,
        status_code: i32,
        mime_type: impl Into<String>,
        size: Option<u64>,
    ) -> Self {
        CrawlRecord {
            url: url.into(),
            status_code,
            mime_type: mime_type.into(),
            size,
            ..Default::default()
        }
    }

    /// Sets the log timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Sets the fetch duration.
    pub fn with_fetch_duration_ms(mut self, duration_ms: u64) -> Self {
        self.fetch_duration_ms = Some(duration_ms);
        self
    }

    /// Size in bytes, with an absent size counting as zero.
    pub fn size_or_zero(&self) -> u64 {
        self.size.unwrap_or(0)
    }
}
