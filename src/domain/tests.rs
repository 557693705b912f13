// Domain module tests.

use super::*;
use std::collections::HashMap;
use strum::IntoEnumIterator;

fn test_lookup() -> PublicSuffixList {
    PublicSuffixList
}

fn record(url: &str) -> CrawlRecord {
    CrawlRecord::new(url, 200, "text/html", Some(1))
}

#[test]
fn test_extract_domain_basic() {
    let lookup = test_lookup();
    assert_eq!(
        extract_domain(&lookup, "https://www.example.com/path").unwrap(),
        "example.com"
    );
}

#[test]
fn test_extract_domain_with_port() {
    let lookup = test_lookup();
    assert_eq!(
        extract_domain(&lookup, "https://www.example.com:8080/path").unwrap(),
        "example.com"
    );
}

#[test]
fn test_extract_domain_multiple_subdomains() {
    let lookup = test_lookup();
    assert_eq!(
        extract_domain(&lookup, "http://a.b.c.example.com/").unwrap(),
        "example.com"
    );
}

#[test]
fn test_extract_domain_uk_domain() {
    let lookup = test_lookup();
    // Should return "example.co.uk" (registrable domain), not "co.uk" (public suffix)
    assert_eq!(
        extract_domain(&lookup, "http://www.example.co.uk/").unwrap(),
        "example.co.uk"
    );
}

#[test]
fn test_extract_domain_gov_au() {
    let lookup = test_lookup();
    assert_eq!(
        extract_domain(&lookup, "http://www.nla.gov.au/").unwrap(),
        "nla.gov.au"
    );
    assert_eq!(
        extract_domain(&lookup, "http://pandora.nla.gov.au/tep/10").unwrap(),
        "nla.gov.au"
    );
}

#[test]
fn test_extract_domain_case_insensitive() {
    let lookup = test_lookup();
    assert_eq!(
        extract_domain(&lookup, "HTTP://WWW.Example.COM/").unwrap(),
        "example.com"
    );
}

#[test]
fn test_extract_domain_invalid_url() {
    let lookup = test_lookup();
    assert!(matches!(
        extract_domain(&lookup, "not a url"),
        Err(DomainError::InvalidUrl(_))
    ));
}

#[test]
fn test_extract_domain_url_without_host() {
    let lookup = test_lookup();
    assert!(matches!(
        extract_domain(&lookup, "dns:www.example.com"),
        Err(DomainError::MissingHost(_))
    ));
    assert!(matches!(
        extract_domain(&lookup, "file:///path/to/file"),
        Err(DomainError::MissingHost(_))
    ));
}

#[test]
fn test_extract_domain_ip_addresses() {
    let lookup = test_lookup();
    assert!(matches!(
        extract_domain(&lookup, "http://192.168.1.1/admin"),
        Err(DomainError::IpAddress(_))
    ));
    assert!(matches!(
        extract_domain(&lookup, "http://[2001:db8::1]:8080/"),
        Err(DomainError::IpAddress(_))
    ));
}

#[test]
fn test_lookup_rejects_public_suffix_itself() {
    let lookup = test_lookup();
    assert!(lookup.registered_domain_of("co.uk").is_err());
    assert!(lookup.registered_domain_of("com").is_err());
}

#[test]
fn test_lookup_rejects_unknown_suffix() {
    let lookup = test_lookup();
    assert!(matches!(
        lookup.registered_domain_of("intranet.invalidtldxyz"),
        Err(DomainError::NoPublicSuffix(_))
    ));
    assert!(lookup.registered_domain_of("localhost").is_err());
}

#[test]
fn test_lookup_rejects_ip_literals() {
    let lookup = test_lookup();
    assert!(matches!(
        lookup.registered_domain_of("10.0.0.1"),
        Err(DomainError::IpAddress(_))
    ));
    assert!(matches!(
        lookup.registered_domain_of("[::1]"),
        Err(DomainError::IpAddress(_))
    ));
}

#[test]
fn test_lookup_trailing_dot() {
    let lookup = test_lookup();
    assert_eq!(
        lookup.registered_domain_of("www.example.com.").unwrap(),
        "example.com"
    );
}

#[test]
fn test_extract_host() {
    assert_eq!(extract_host("http://a.example.com/x").unwrap(), "a.example.com");
    assert_eq!(extract_host("https://[::1]:8443/").unwrap(), "[::1]");
    assert!(extract_host("not a url").is_err());
    assert!(extract_host("dns:a.example.com").is_err());
}

#[test]
fn test_identity_key_is_constant() {
    assert_eq!(identity_key(&record("http://a.example.com/")), "");
    assert_eq!(identity_key(&record("garbage")), "");
}

#[test]
fn test_host_key() {
    assert_eq!(host_key(&record("http://a.example.com/x")), "a.example.com");
    assert_eq!(host_key(&record("not a url")), "");
    assert_eq!(host_key(&record("dns:a.example.com")), "");
    assert_eq!(host_key(&record("")), "");
}

#[test]
fn test_registered_domain_key() {
    let lookup = test_lookup();
    assert_eq!(
        registered_domain_key(&lookup, &record("http://a.example.com/x")),
        "example.com"
    );
    assert_eq!(
        registered_domain_key(&lookup, &record("http://www.google-analytics.com/urchin.js")),
        "google-analytics.com"
    );
    assert_eq!(registered_domain_key(&lookup, &record("not a url")), "");
    assert_eq!(registered_domain_key(&lookup, &record("http://127.0.0.1/")), "");
    assert_eq!(registered_domain_key(&lookup, &record("dns:www.nla.gov.au")), "");
}

/// Fixed mapping standing in for the public-suffix dataset.
struct FixedLookup(HashMap<&'static str, &'static str>);

impl RegisteredDomainLookup for FixedLookup {
    fn registered_domain_of(&self, host: &str) -> Result<String, DomainError> {
        self.0
            .get(host)
            .map(|d| d.to_string())
            .ok_or_else(|| DomainError::NoPublicSuffix(host.to_string()))
    }
}

#[test]
fn test_registered_domain_key_with_injected_lookup() {
    let lookup = FixedLookup(HashMap::from([("intranet.corp", "corp")]));
    assert_eq!(
        registered_domain_key(&lookup, &record("http://intranet.corp/wiki")),
        "corp"
    );
    assert_eq!(
        registered_domain_key(&lookup, &record("http://www.example.com/")),
        ""
    );
}

#[test]
fn test_lookup_through_reference_and_trait_object() {
    let lookup = test_lookup();
    let as_ref = &lookup;
    assert_eq!(
        extract_domain(&as_ref, "http://www.example.com/").unwrap(),
        "example.com"
    );
    let dynamic: &dyn RegisteredDomainLookup = &lookup;
    assert_eq!(
        registered_domain_key(dynamic, &record("http://www.example.com/")),
        "example.com"
    );
}

#[test]
fn test_group_by_names() {
    assert_eq!(GroupBy::None.to_string(), "none");
    assert_eq!(GroupBy::Host.to_string(), "host");
    assert_eq!(GroupBy::RegisteredDomain.to_string(), "registered-domain");
    assert_eq!(
        "registered-domain".parse::<GroupBy>().unwrap(),
        GroupBy::RegisteredDomain
    );
    assert!("domain".parse::<GroupBy>().is_err());
    assert_eq!(GroupBy::iter().count(), 3);
    assert_eq!(GroupBy::default(), GroupBy::None);
}

// Property-based tests using proptest
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_key_functions_never_panic(url in "\\PC{0,60}") {
        let r = record(&url);
        let lookup = test_lookup();
        let _ = host_key(&r);
        let _ = registered_domain_key(&lookup, &r);
    }

    #[test]
    fn test_registered_domain_idempotent(
        domain in "q[a-z]{5,12}x",
        tld in "(com|org|net|co\\.uk)"
    ) {
        let lookup = test_lookup();
        let url = format!("https://www.{}.{}", domain, tld);
        let extracted = extract_domain(&lookup, &url).unwrap();
        prop_assert_eq!(&extracted, &format!("{}.{}", domain, tld));

        let url2 = format!("https://{}", extracted);
        prop_assert_eq!(extract_domain(&lookup, &url2).unwrap(), extracted);
    }

    #[test]
    fn test_host_key_ignores_path_and_port(
        host in "[a-z]{3,10}\\.example\\.com",
        port in 1u16..65535,
        path in "[a-z0-9/]{0,20}",
    ) {
        let url = format!("http://{}:{}/{}", host, port, path);
        prop_assert_eq!(host_key(&record(&url)), host);
    }
}
