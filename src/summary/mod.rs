//! Crawl summary engine.
//!
//! Folds a sequence of crawl-log records, in a single forward pass, into:
//! - overall totals
//! - per status code totals (labelled with the status description)
//! - per canonical MIME type totals
//!
//! Optionally one such summary is built per group key (host or registered
//! domain). Records are borrowed only while they are folded in.
//!
//! Every record lands in exactly one status bucket and exactly one MIME bucket,
//! so `totals.count` always equals the sum of either breakdown.

mod stats;

use std::borrow::Borrow;
use std::collections::HashMap;

use log::debug;
use serde::{Serialize, Serializer};

use crate::canonicalize::{canonicalize_mime_type, describe_status_code};
use crate::domain::{
    host_key, registered_domain_key, GroupBy, PublicSuffixList, RegisteredDomainLookup,
};
use crate::export::ordered_map;
use crate::record::CrawlRecord;

pub use stats::Stats;

/// Aggregate statistics for a set of crawl-log records.
///
/// Created empty and filled by one of the builder functions; read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CrawlSummary {
    totals: Stats,
    #[serde(serialize_with = "ordered_map")]
    status_codes: HashMap<i32, Stats>,
    #[serde(serialize_with = "ordered_map")]
    mime_types: HashMap<String, Stats>,
}

/// Either one summary for the whole log or one summary per group key.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupedSummary {
    /// Every record in one summary.
    Single(CrawlSummary),
    /// One summary per group key; `""` holds records without a key.
    Grouped(HashMap<String, CrawlSummary>),
}

impl Serialize for GroupedSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GroupedSummary::Single(summary) => summary.serialize(serializer),
            GroupedSummary::Grouped(groups) => ordered_map(groups, serializer),
        }
    }
}

impl GroupedSummary {
    /// Number of records summarised, across all groups.
    pub fn record_count(&self) -> u64 {
        match self {
            GroupedSummary::Single(summary) => summary.totals.count(),
            GroupedSummary::Grouped(groups) => groups.values().map(|s| s.totals.count()).sum(),
        }
    }
}

impl CrawlSummary {
    /// Builds a global crawl summary (not broken down).
    ///
    /// Consumes `records` exactly once, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use crawl_summary::{CrawlRecord, CrawlSummary};
    ///
    /// let records = vec![
    ///     CrawlRecord::new("http://a.example.com/x", 200, "text/html", Some(100)),
    ///     CrawlRecord::new("not a url", 404, "", None),
    /// ];
    /// let summary = CrawlSummary::build(&records);
    /// assert_eq!(summary.totals().count(), 2);
    /// assert_eq!(summary.totals().total_bytes(), 100);
    /// assert_eq!(summary.status_codes()[&404].description(), Some("Not Found"));
    /// ```
    pub fn build<I>(records: I) -> CrawlSummary
    where
        I: IntoIterator,
        I::Item: Borrow<CrawlRecord>,
    {
        let mut summary = CrawlSummary::default();
        for record in records {
            let record: &CrawlRecord = record.borrow();
            summary.add(record);
        }
        debug!("Summarised {} records", summary.totals.count());
        summary
    }

    /// Like [`CrawlSummary::build`], over a fallible record source.
    ///
    /// # Errors
    ///
    /// Stops at the first `Err` from `records` and returns it; the partial
    /// summary is discarded.
    pub fn try_build<I, T, E>(records: I) -> Result<CrawlSummary, E>
    where
        I: IntoIterator<Item = Result<T, E>>,
        T: Borrow<CrawlRecord>,
    {
        let mut summary = CrawlSummary::default();
        for record in records {
            let record = record?;
            let record: &CrawlRecord = record.borrow();
            summary.add(record);
        }
        debug!("Summarised {} records", summary.totals.count());
        Ok(summary)
    }

    /// Builds one crawl summary per key produced by `key_function`.
    ///
    /// The map holds exactly the distinct keys seen, including `""` if any
    /// record's key could not be derived.
    pub fn grouped_by<I, F>(records: I, mut key_function: F) -> HashMap<String, CrawlSummary>
    where
        I: IntoIterator,
        I::Item: Borrow<CrawlRecord>,
        F: FnMut(&CrawlRecord) -> String,
    {
        let mut groups: HashMap<String, CrawlSummary> = HashMap::new();
        for record in records {
            let record: &CrawlRecord = record.borrow();
            groups.entry(key_function(record)).or_default().add(record);
        }
        debug!("Summarised records into {} groups", groups.len());
        groups
    }

    /// Like [`CrawlSummary::grouped_by`], over a fallible record source.
    ///
    /// # Errors
    ///
    /// Stops at the first `Err` from `records` and returns it.
    pub fn try_grouped_by<I, T, E, F>(
        records: I,
        mut key_function: F,
    ) -> Result<HashMap<String, CrawlSummary>, E>
    where
        I: IntoIterator<Item = Result<T, E>>,
        T: Borrow<CrawlRecord>,
        F: FnMut(&CrawlRecord) -> String,
    {
        let mut groups: HashMap<String, CrawlSummary> = HashMap::new();
        for record in records {
            let record = record?;
            let record: &CrawlRecord = record.borrow();
            groups.entry(key_function(record)).or_default().add(record);
        }
        debug!("Summarised records into {} groups", groups.len());
        Ok(groups)
    }

    /// One summary per URL host.
    pub fn by_host<I>(records: I) -> HashMap<String, CrawlSummary>
    where
        I: IntoIterator,
        I::Item: Borrow<CrawlRecord>,
    {
        Self::grouped_by(records, host_key)
    }

    /// One summary per registered domain, using the built-in Public Suffix List.
    pub fn by_registered_domain<I>(records: I) -> HashMap<String, CrawlSummary>
    where
        I: IntoIterator,
        I::Item: Borrow<CrawlRecord>,
    {
        Self::by_registered_domain_with(records, &PublicSuffixList)
    }

    /// One summary per registered domain, using the given lookup.
    pub fn by_registered_domain_with<I, L>(records: I, lookup: &L) -> HashMap<String, CrawlSummary>
    where
        I: IntoIterator,
        I::Item: Borrow<CrawlRecord>,
        L: RegisteredDomainLookup + ?Sized,
    {
        Self::grouped_by(records, |record| registered_domain_key(lookup, record))
    }

    /// Summarises `records` partitioned as `group_by` asks.
    pub fn summarise<I, L>(records: I, group_by: GroupBy, lookup: &L) -> GroupedSummary
    where
        I: IntoIterator,
        I::Item: Borrow<CrawlRecord>,
        L: RegisteredDomainLookup + ?Sized,
    {
        match group_by {
            GroupBy::None => GroupedSummary::Single(Self::build(records)),
            GroupBy::Host => GroupedSummary::Grouped(Self::by_host(records)),
            GroupBy::RegisteredDomain => {
                GroupedSummary::Grouped(Self::by_registered_domain_with(records, lookup))
            }
        }
    }

    /// Like [`CrawlSummary::summarise`], over a fallible record source.
    ///
    /// # Errors
    ///
    /// Stops at the first `Err` from `records` and returns it.
    pub fn try_summarise<I, T, E, L>(
        records: I,
        group_by: GroupBy,
        lookup: &L,
    ) -> Result<GroupedSummary, E>
    where
        I: IntoIterator<Item = Result<T, E>>,
        T: Borrow<CrawlRecord>,
        L: RegisteredDomainLookup + ?Sized,
    {
        Ok(match group_by {
            GroupBy::None => GroupedSummary::Single(Self::try_build(records)?),
            GroupBy::Host => GroupedSummary::Grouped(Self::try_grouped_by(records, host_key)?),
            GroupBy::RegisteredDomain => GroupedSummary::Grouped(Self::try_grouped_by(
                records,
                |record| registered_domain_key(lookup, record),
            )?),
        })
    }

    fn add(&mut self, record: &CrawlRecord) {
        let mime_type = canonicalize_mime_type(&record.mime_type);
        self.mime_types.entry(mime_type).or_default().add(record);
        self.status_codes
            .entry(record.status_code)
            .or_insert_with(|| Stats::with_description(describe_status_code(record.status_code)))
            .add(record);
        self.totals.add(record);
    }

    /// Every record.
    pub fn totals(&self) -> &Stats {
        &self.totals
    }

    /// Per status code; each bucket's description names the status.
    pub fn status_codes(&self) -> &HashMap<i32, Stats> {
        &self.status_codes
    }

    /// Per canonical MIME type; `""` holds records with no usable MIME type.
    pub fn mime_types(&self) -> &HashMap<String, Stats> {
        &self.mime_types
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
