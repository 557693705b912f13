//! Configuration constants.
//!
//! This module defines the constants used when reading crawl logs and
//! describing their contents.

/// Minimum whitespace-separated columns in a crawl-log line
/// (timestamp, status, size, URL, discovery path, via, MIME type).
/// Later columns (thread, fetch timing, digest, source, annotations) are optional.
pub const CRAWL_LOG_MIN_FIELDS: usize = 7;

/// Placeholder the crawler writes for an absent column value.
pub const MISSING_FIELD: &str = "-";

/// Format of the fetch-begin half of the fetch timing column
/// (`20080213015920968` = 2008-02-13 01:59:20.968 UTC).
pub const FETCH_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S%3f";

/// Description given to status codes that are neither HTTP nor crawler codes.
pub const UNKNOWN_STATUS_DESCRIPTION: &str = "Unknown";

/// How many status codes the end-of-run log lists before summarising the rest.
pub const LOGGED_STATUS_CODES_LIMIT: usize = 10;
