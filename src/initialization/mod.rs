//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger
//! - Public Suffix List lookup
//!
//! All initialization functions return proper error types for error handling.

mod logger;

use crate::domain::PublicSuffixList;

// Re-export public API
pub use logger::init_logger_with;

/// Initializes the Public Suffix List lookup.
///
/// The list is compiled into the binary, so this cannot fail and needs no I/O.
/// It is used to reduce hosts to registered domains when grouping by
/// `registered-domain`.
pub fn init_suffix_list() -> PublicSuffixList {
    PublicSuffixList
}
