//! Canonicalization of crawl-log values used as summary keys.
//!
//! - `canonicalize_mime_type()` - maps raw MIME types onto stable bucket keys
//! - `describe_status_code()` - human-readable labels for HTTP and crawler status codes
//!
//! Both functions are pure and total.

mod mime;
mod status;

pub use mime::canonicalize_mime_type;
pub use status::describe_status_code;
