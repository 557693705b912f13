//! crawl_summary library: summaries of Heritrix crawl logs
//!
//! This library folds the records of a crawl log into aggregate statistics:
//! record counts and byte totals overall, per HTTP (or crawler-internal) status
//! code and per canonical MIME type. Summaries can be built for the whole log
//! or broken down per host or per registered domain.
//!
//! # Example
//!
//! ```
//! use crawl_summary::{CrawlRecord, CrawlSummary};
//!
//! let records = vec![
//!     CrawlRecord::new("http://example.com/", 200, "text/html; charset=UTF-8", Some(1024)),
//!     CrawlRecord::new("http://example.com/logo.png", 200, "image/png", Some(2048)),
//!     CrawlRecord::new("http://example.com/missing", 404, "text/html", Some(120)),
//! ];
//!
//! let summary = CrawlSummary::build(&records);
//! assert_eq!(summary.totals().count(), 3);
//! assert_eq!(summary.totals().total_bytes(), 3192);
//! assert_eq!(summary.mime_types()["text/html"].count(), 2);
//! assert_eq!(summary.status_codes()[&404].description(), Some("Not Found"));
//! ```
//!
//! Reading straight from a log file:
//!
//! ```no_run
//! use crawl_summary::{open_crawl_log, CrawlSummary};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = open_crawl_log(Path::new("crawl.log"))?;
//! let by_host = CrawlSummary::try_grouped_by(reader, crawl_summary::host_key)?;
//! println!("{} hosts", by_host.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod app;
mod canonicalize;
pub mod config;
mod domain;
mod error_handling;
pub mod export;
pub mod initialization;
mod record;
mod summary;

// Re-export public API
pub use canonicalize::{canonicalize_mime_type, describe_status_code};
pub use config::{Config, LogFormat, LogLevel};
pub use domain::{
    extract_domain, extract_host, host_key, identity_key, registered_domain_key, GroupBy,
    PublicSuffixList, RegisteredDomainLookup,
};
pub use error_handling::{CrawlLogError, DomainError, MalformedLineKind, ReadStats};
pub use export::{export_json, write_json, ExportOptions};
pub use record::{open_crawl_log, parse_line, CrawlLogReader, CrawlRecord};
pub use run::{run_summary, SummaryReport};
pub use summary::{CrawlSummary, GroupedSummary, Stats};

// Internal run module (reads the configured logs and builds the summary)
mod run {
    use anyhow::{Context, Result};
    use std::io::BufRead;
    use std::path::{Path, PathBuf};
    use std::time::Instant;

    use log::info;

    use crate::app::{log_progress, log_read_statistics, log_summary_statistics};
    use crate::config::Config;
    use crate::error_handling::ReadStats;
    use crate::initialization::init_suffix_list;
    use crate::record::{open_crawl_log, CrawlLogReader, CrawlRecord};
    use crate::summary::{CrawlSummary, GroupedSummary};

    /// Results of a summary run.
    #[derive(Debug, Clone)]
    pub struct SummaryReport {
        /// The summary, shaped by the configured grouping
        pub summary: GroupedSummary,
        /// Number of records summarised
        pub records: u64,
        /// Lines read across all logs, including skipped ones
        pub lines_read: usize,
        /// Malformed lines skipped, per category
        pub read_stats: ReadStats,
        /// Number of crawl logs read
        pub files: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl SummaryReport {
        /// Total malformed lines skipped.
        pub fn skipped(&self) -> usize {
            self.read_stats.total()
        }
    }

    /// Reads the configured crawl logs, in order, and summarises them.
    ///
    /// All logs feed one summary: records from later files are folded in after
    /// those of earlier files. Malformed lines are skipped and counted.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - A crawl log cannot be opened
    /// - Reading a crawl log fails part way through
    ///
    /// # Example
    ///
    /// ```no_run
    /// use crawl_summary::{run_summary, Config, GroupBy};
    /// use std::path::PathBuf;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config {
    ///     files: vec![PathBuf::from("crawl.log")],
    ///     group_by: GroupBy::RegisteredDomain,
    ///     ..Default::default()
    /// };
    /// let report = run_summary(&config)?;
    /// println!("Summarised {} records", report.records);
    /// # Ok(())
    /// # }
    /// ```
    pub fn run_summary(config: &Config) -> Result<SummaryReport> {
        let start_time = Instant::now();
        let lookup = init_suffix_list();

        info!(
            "Summarising {} crawl log(s), grouped by {}",
            config.files.len(),
            config.group_by
        );

        let mut logs = CrawlLogChain::new(&config.files, start_time);
        let summary = CrawlSummary::try_summarise(&mut logs, config.group_by, &lookup)?;

        log_read_statistics(&logs.read_stats);
        log_summary_statistics(&summary);

        Ok(SummaryReport {
            records: summary.record_count(),
            summary,
            lines_read: logs.lines_read,
            read_stats: logs.read_stats,
            files: config.files.len(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }

    /// Reads several crawl logs back to back as one record stream.
    ///
    /// Each log is opened only once the previous one is exhausted.
    struct CrawlLogChain<'a> {
        paths: std::slice::Iter<'a, PathBuf>,
        current: Option<(&'a Path, CrawlLogReader<Box<dyn BufRead>>)>,
        start_time: Instant,
        lines_read: usize,
        read_stats: ReadStats,
    }

    impl<'a> CrawlLogChain<'a> {
        fn new(paths: &'a [PathBuf], start_time: Instant) -> Self {
            CrawlLogChain {
                paths: paths.iter(),
                current: None,
                start_time,
                lines_read: 0,
                read_stats: ReadStats::new(),
            }
        }
    }

    impl<'a> Iterator for CrawlLogChain<'a> {
        type Item = Result<CrawlRecord>;

        fn next(&mut self) -> Option<Self::Item> {
            loop {
                if let Some((path, reader)) = &mut self.current {
                    let path: &'a Path = *path;
                    match reader.next() {
                        Some(Ok(record)) => return Some(Ok(record)),
                        Some(Err(e)) => {
                            return Some(
                                Err(e).with_context(|| format!("Failed to read {}", path.display())),
                            )
                        }
                        None => {
                            self.lines_read += reader.lines_read();
                            self.read_stats.merge(reader.read_stats());
                            log_progress(path, self.start_time, self.lines_read);
                            self.current = None;
                        }
                    }
                }

                let path = self.paths.next()?;
                match open_crawl_log(path) {
                    Ok(reader) => {
                        info!("Reading {}", path.display());
                        self.current = Some((path.as_path(), reader));
                    }
                    Err(e) => {
                        return Some(
                            Err(e).with_context(|| format!("Failed to open {}", path.display())),
                        )
                    }
                }
            }
        }
    }
}
