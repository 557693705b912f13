//! Streaming crawl-log reader.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::error_handling::{CrawlLogError, ReadStats};

use super::{parse_line, CrawlRecord};

/// Lazily reads crawl-log records from a buffered source.
///
/// Yields `Ok(record)` for every parseable line and skips blank lines.
/// Malformed lines are logged, counted in [`CrawlLogReader::read_stats`] and
/// skipped. An I/O error is yielded once as `Err` and ends the iteration,
/// since record boundaries can't be recovered after a broken read.
pub struct CrawlLogReader<R: BufRead> {
    inner: R,
    line_number: usize,
    buf: Vec<u8>,
    stats: ReadStats,
    finished: bool,
}

impl<R: BufRead> CrawlLogReader<R> {
    /// Wraps a buffered source positioned at the start of a crawl log.
    pub fn new(inner: R) -> Self {
        CrawlLogReader {
            inner,
            line_number: 0,
            buf: Vec::new(),
            stats: ReadStats::new(),
            finished: false,
        }
    }

    /// Number of lines read so far, including skipped ones.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    /// Counts of malformed lines skipped so far.
    pub fn read_stats(&self) -> &ReadStats {
        &self.stats
    }

    /// Total malformed lines skipped so far.
    pub fn skipped(&self) -> usize {
        self.stats.total()
    }
}

impl<R: BufRead> Iterator for CrawlLogReader<R> {
    type Item = Result<CrawlRecord, CrawlLogError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            self.buf.clear();
            match self.inner.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.finished = true;
                    return None;
                }
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(CrawlLogError::Io(e)));
                }
            }
            self.line_number += 1;

            // Crawled URLs are not always valid UTF-8
            let line = String::from_utf8_lossy(&self.buf);
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match parse_line(line) {
                Ok(record) => return Some(Ok(record)),
                Err(kind) => {
                    let err = CrawlLogError::MalformedLine {
                        line: self.line_number,
                        kind,
                    };
                    warn!("Skipping {}", err);
                    debug!("Skipped line content: {}", line);
                    self.stats.increment(kind);
                }
            }
        }
    }
}

/// Opens a crawl log for reading. `-` reads from stdin.
///
/// # Errors
///
/// Returns `CrawlLogError::Io` if the file cannot be opened.
pub fn open_crawl_log(path: &Path) -> Result<CrawlLogReader<Box<dyn BufRead>>, CrawlLogError> {
    let inner: Box<dyn BufRead> = if path.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        Box::new(BufReader::new(File::open(path)?))
    };
    Ok(CrawlLogReader::new(inner))
}
