//! Crawl-log line parsing.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::config::{CRAWL_LOG_MIN_FIELDS, FETCH_TIMESTAMP_FORMAT, MISSING_FIELD};
use crate::error_handling::MalformedLineKind;

use super::CrawlRecord;

/// Parses one crawl-log line into a record.
///
/// Columns are separated by runs of whitespace. The first seven columns
/// (timestamp through MIME type) are required; later columns are optional so
/// truncated or older logs still parse.
///
/// # Errors
///
/// Returns the `MalformedLineKind` describing the first problem found. Optional
/// columns never cause an error: an unreadable fetch timestamp is simply absent.
pub fn parse_line(line: &str) -> Result<CrawlRecord, MalformedLineKind> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < CRAWL_LOG_MIN_FIELDS {
        return Err(MalformedLineKind::TooFewFields);
    }

    let timestamp = DateTime::parse_from_rfc3339(fields[0])
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| MalformedLineKind::BadTimestamp)?;

    let status_code = fields[1]
        .parse::<i32>()
        .map_err(|_| MalformedLineKind::BadStatusCode)?;

    let size = match fields[2] {
        MISSING_FIELD => None,
        s => Some(s.parse::<u64>().map_err(|_| MalformedLineKind::BadSize)?),
    };

    let (fetch_began, fetch_duration_ms) = fields
        .get(8)
        .map_or((None, None), |f| parse_fetch_timing(f));

    Ok(CrawlRecord {
        timestamp: Some(timestamp),
        status_code,
        size,
        url: fields[3].to_string(),
        discovery_path: optional(fields[4]).unwrap_or_default(),
        via: optional(fields[5]),
        mime_type: optional(fields[6]).unwrap_or_default(),
        thread: fields.get(7).copied().and_then(optional),
        fetch_began,
        fetch_duration_ms,
        digest: fields.get(9).copied().and_then(optional),
        source: fields.get(10).copied().and_then(optional),
        annotations: fields
            .get(11)
            .copied()
            .and_then(optional)
            .map(|a| a.split(',').map(str::to_string).collect())
            .unwrap_or_default(),
    })
}

fn optional(field: &str) -> Option<String> {
    if field == MISSING_FIELD {
        None
    } else {
        Some(field.to_string())
    }
}

/// Parses `20080213015920968+205` into a begin time and a duration.
///
/// Either half may be unreadable independently of the other.
fn parse_fetch_timing(field: &str) -> (Option<DateTime<Utc>>, Option<u64>) {
    if field == MISSING_FIELD {
        return (None, None);
    }
    let (began, duration) = match field.split_once('+') {
        Some((began, duration)) => (began, Some(duration)),
        None => (field, None),
    };
    let began = NaiveDateTime::parse_from_str(began, FETCH_TIMESTAMP_FORMAT)
        .ok()
        .map(|t| t.and_utc());
    let duration = duration.and_then(|d| d.parse::<u64>().ok());
    (began, duration)
}
