//! MIME type canonicalization.

/// Placeholders crawlers log when no MIME type is known.
const MISSING_MIME_PLACEHOLDERS: &[&str] = &["-", "no-type", "unknown", "none"];

/// Noisy or legacy MIME types and the label they are counted under.
///
/// No alias target may itself appear as an alias, so canonicalization stays idempotent.
const MIME_ALIASES: &[(&str, &str)] = &[
    ("application/x-javascript", "application/javascript"),
    ("text/javascript", "application/javascript"),
    ("application/ecmascript", "application/javascript"),
    ("text/ecmascript", "application/javascript"),
    ("text/x-javascript", "application/javascript"),
    ("image/jpg", "image/jpeg"),
    ("image/pjpeg", "image/jpeg"),
    ("image/x-png", "image/png"),
    ("image/x-icon", "image/vnd.microsoft.icon"),
    ("application/x-font-woff", "font/woff"),
    ("application/font-woff", "font/woff"),
    ("application/font-woff2", "font/woff2"),
    ("application/x-font-ttf", "font/ttf"),
    ("application/x-shockwave-flash", "application/vnd.adobe.flash-movie"),
    ("text/x-json", "application/json"),
    ("application/x-json", "application/json"),
];

/// Maps a raw MIME type to the key it is counted under.
///
/// Drops parameters (everything from the first `;`), trims, lower-cases and
/// resolves known aliases. Returns `""` for missing MIME types, crawler
/// placeholders such as `no-type`, and anything that is not a `type/subtype`
/// pair of HTTP tokens. `""` is its own bucket, distinct from every real type.
///
/// # Examples
///
/// ```
/// use crawl_summary::canonicalize_mime_type;
///
/// assert_eq!(canonicalize_mime_type("text/HTML; charset=utf-8"), "text/html");
/// assert_eq!(canonicalize_mime_type("image/jpg"), "image/jpeg");
/// assert_eq!(canonicalize_mime_type("no-type"), "");
/// ```
pub fn canonicalize_mime_type(raw: &str) -> String {
    let essence = raw.split(';').next().unwrap_or_default().trim();
    let lowered = essence.to_ascii_lowercase();

    if MISSING_MIME_PLACEHOLDERS.contains(&lowered.as_str()) || !is_type_subtype(&lowered) {
        return String::new();
    }

    match MIME_ALIASES.iter().find(|(alias, _)| *alias == lowered) {
        Some((_, canonical)) => (*canonical).to_string(),
        None => lowered,
    }
}

fn is_type_subtype(s: &str) -> bool {
    match s.split_once('/') {
        Some((top, sub)) => is_token(top) && is_token(sub),
        None => false,
    }
}

// RFC 9110 token characters
fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(|b| {
            b.is_ascii_alphanumeric()
                || matches!(
                    b,
                    b'!' | b'#'
                        | b'$'
                        | b'%'
                        | b'&'
                        | b'\''
                        | b'*'
                        | b'+'
                        | b'-'
                        | b'.'
                        | b'^'
                        | b'_'
                        | b'`'
                        | b'|'
                        | b'~'
                )
        })
}
