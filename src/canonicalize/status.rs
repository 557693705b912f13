//! Status code descriptions.

use http::StatusCode;

use crate::config::UNKNOWN_STATUS_DESCRIPTION;

/// Heritrix fetch status codes that are not HTTP statuses.
const CRAWLER_STATUS_DESCRIPTIONS: &[(i32, &str)] = &[
    (1, "Successful DNS lookup"),
    (0, "Fetch never tried (perhaps protocol unsupported or illegal URI)"),
    (-1, "DNS lookup failed"),
    (-2, "HTTP connect failed"),
    (-3, "HTTP connect broken"),
    (-4, "HTTP timeout"),
    (-5, "Unexpected runtime exception"),
    (-6, "Prerequisite domain-lookup failed, precluding fetch attempt"),
    (-7, "URI recognized as unsupported or illegal"),
    (-8, "Multiple retries failed, retry limit reached"),
    (-50, "Temporary status assigned to URIs awaiting preconditions"),
    (-60, "URIs assigned a failure status; could not be queued by the frontier"),
    (-61, "Prerequisite robots.txt fetch failed, precluding a fetch attempt"),
    (-62, "Some other prerequisite failed, precluding a fetch attempt"),
    (-63, "A prerequisite (of any type) could not be scheduled"),
    (-404, "Empty HTTP response interpreted as a 404"),
    (-3000, "Severe Java error condition occurred"),
    (-4000, "Chaff detection of traps/content with negligible value applied"),
    (-4001, "Too many link hops away from seed"),
    (-4002, "Too many embed/transitive hops away from last URI in scope"),
    (-5000, "Out of scope upon reexamination"),
    (-5001, "Blocked from fetch by user setting"),
    (-5002, "Blocked by a custom processor"),
    (-5003, "Blocked due to exceeding an established quota"),
    (-5004, "Blocked due to exceeding an established runtime"),
    (-6000, "Deleted from frontier by user"),
    (-7000, "Processing thread was killed by the operator"),
    (-9998, "Robots.txt rules precluded fetch"),
];

/// Describes a crawl-log status code.
///
/// Standard HTTP codes get their reason phrase ("OK", "Not Found"), crawler
/// sentinel codes get the crawler's description, and every other integer gets
/// `"Unknown"`. Never fails and never returns an empty string.
///
/// # Examples
///
/// ```
/// use crawl_summary::describe_status_code;
///
/// assert_eq!(describe_status_code(200), "OK");
/// assert_eq!(describe_status_code(-1), "DNS lookup failed");
/// assert_eq!(describe_status_code(-12345), "Unknown");
/// ```
pub fn describe_status_code(code: i32) -> String {
    if let Some((_, description)) = CRAWLER_STATUS_DESCRIPTIONS
        .iter()
        .find(|(crawler_code, _)| *crawler_code == code)
    {
        return (*description).to_string();
    }

    u16::try_from(code)
        .ok()
        .and_then(|c| StatusCode::from_u16(c).ok())
        .and_then(|status| status.canonical_reason())
        .unwrap_or(UNKNOWN_STATUS_DESCRIPTION)
        .to_string()
}
