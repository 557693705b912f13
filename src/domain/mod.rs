//! Group keys derived from crawl-log records.
//!
//! This module provides the key functions used to partition a crawl summary:
//! - `identity_key()` - the single catch-all key (no partitioning)
//! - `host_key()` - the URL's host
//! - `registered_domain_key()` - the host reduced to its registered ("pay-level")
//!   domain using the Public Suffix List
//!
//! Key functions are total. Any failure (unparseable URL, missing host, IP
//! literal, no public suffix match) yields the empty key `""`, which collects
//! every record whose key could not be derived.

use clap::ValueEnum;
use log::debug;
use psl::Psl;
use strum_macros::{Display, EnumIter, EnumString};
use url::{Host, Url};

use crate::error_handling::DomainError;
use crate::record::CrawlRecord;

/// How a crawl summary is partitioned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum GroupBy {
    /// One summary for the whole log
    #[default]
    None,
    /// One summary per URL host
    Host,
    /// One summary per registered domain
    RegisteredDomain,
}

/// Resolves a hostname to its registered domain.
///
/// This is the seam for the public-suffix dataset: production code uses
/// [`PublicSuffixList`], tests can substitute a fixed mapping.
pub trait RegisteredDomainLookup {
    /// Returns the registered domain of `host`, e.g. `example.co.uk` for
    /// `www.example.co.uk`.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the host has no registered domain.
    fn registered_domain_of(&self, host: &str) -> Result<String, DomainError>;
}

impl<T: RegisteredDomainLookup + ?Sized> RegisteredDomainLookup for &T {
    fn registered_domain_of(&self, host: &str) -> Result<String, DomainError> {
        (**self).registered_domain_of(host)
    }
}

/// Registered-domain lookup backed by the compiled-in Public Suffix List.
///
/// Includes the private section of the list, so `foo.blogspot.com` is its own
/// registered domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicSuffixList;

impl RegisteredDomainLookup for PublicSuffixList {
    fn registered_domain_of(&self, host: &str) -> Result<String, DomainError> {
        let host = host.trim_end_matches('.').to_ascii_lowercase();

        // Reject IP addresses (they don't have registrable domains)
        if host.starts_with('[') || host.parse::<std::net::IpAddr>().is_ok() {
            return Err(DomainError::IpAddress(host));
        }

        let domain = psl::List
            .domain(host.as_bytes())
            .filter(|d| d.suffix().is_known())
            .ok_or_else(|| DomainError::NoPublicSuffix(host.clone()))?;

        Ok(String::from_utf8_lossy(domain.as_bytes()).into_owned())
    }
}

/// Extracts the host component of a URL.
///
/// IPv6 hosts keep their brackets (`[::1]`).
///
/// # Errors
///
/// Returns `DomainError::InvalidUrl` if the URL cannot be parsed and
/// `DomainError::MissingHost` if it has no host (`dns:`, `file:`, ...).
pub fn extract_host(url: &str) -> Result<String, DomainError> {
    let parsed = Url::parse(url).map_err(|e| DomainError::InvalidUrl(format!("{url}: {e}")))?;
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(host.to_string()),
        _ => Err(DomainError::MissingHost(url.to_string())),
    }
}

/// Extracts the registered domain of a URL.
///
/// # Arguments
///
/// * `lookup` - The public-suffix lookup to reduce the host with
/// * `url` - The URL to extract the domain from
///
/// # Returns
///
/// The registered domain (e.g., "example.com" from "https://www.example.com/path")
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed, has no host, has an IP
/// address as host, or if the lookup finds no registered domain.
pub fn extract_domain<L>(lookup: &L, url: &str) -> Result<String, DomainError>
where
    L: RegisteredDomainLookup + ?Sized,
{
    let parsed = Url::parse(url).map_err(|e| DomainError::InvalidUrl(format!("{url}: {e}")))?;
    match parsed.host() {
        Some(Host::Domain(host)) if !host.is_empty() => lookup.registered_domain_of(host),
        Some(Host::Ipv4(ip)) => Err(DomainError::IpAddress(ip.to_string())),
        Some(Host::Ipv6(ip)) => Err(DomainError::IpAddress(ip.to_string())),
        _ => Err(DomainError::MissingHost(url.to_string())),
    }
}

/// The key of the single partition used when no grouping is requested.
pub fn identity_key(_record: &CrawlRecord) -> String {
    String::new()
}

/// Groups by URL host. Returns `""` when the URL has no parseable host.
pub fn host_key(record: &CrawlRecord) -> String {
    extract_host(&record.url).unwrap_or_else(|e| {
        debug!("No host key: {}", e);
        String::new()
    })
}

/// Groups by registered domain. Returns `""` when the URL has no host, the
/// host is an IP address, or the host is not under a known public suffix.
pub fn registered_domain_key<L>(lookup: &L, record: &CrawlRecord) -> String
where
    L: RegisteredDomainLookup + ?Sized,
{
    extract_domain(lookup, &record.url).unwrap_or_else(|e| {
        debug!("No registered domain key: {}", e);
        String::new()
    })
}
