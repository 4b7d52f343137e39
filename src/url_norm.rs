//! URL canonicalization for request comparison.
//!
//! A canonical URL is `<decoded-path>?<sorted-query>`: scheme and host are
//! dropped, ignored query keys are removed, the rest is sorted by key. The
//! `?` is always present, even with an empty query. Decoded characters that
//! would change the meaning of the output (`%`, `?`, `#` in the path; `%`,
//! `&`, `=`, `#`, `+` in the query) stay escaped, so canonicalizing a
//! canonical URL returns it unchanged.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::UrlError;

/// Leading scheme and host, or any leading run of non-slash characters.
static HOST_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?://)?[^/]+").expect("host prefix pattern is valid"));

/// Origin the host-less remainder is resolved against.
const DUMMY_ORIGIN: &str = "http://domain.com";

const PATH_RESERVED: &[char] = &['%', '?', '#'];
const QUERY_RESERVED: &[char] = &['%', '&', '=', '#', '+'];

/// Canonicalizes `url` for comparison, dropping every query key listed in
/// `ignore_params`.
///
/// # Errors
///
/// Returns [`UrlError::Malformed`] if the remainder cannot be parsed or the
/// path contains an invalid percent escape.
pub fn canonicalize(url: &str, ignore_params: &[String]) -> Result<String, UrlError> {
    let malformed = |reason: String| UrlError::Malformed { url: url.to_string(), reason };

    let without_host = HOST_PREFIX.replace(url, "");
    let parsed = Url::parse(&format!("{DUMMY_ORIGIN}{without_host}"))
        .map_err(|e| malformed(e.to_string()))?;

    let mut pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| !ignore_params.iter().any(|ignored| ignored == key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    // Stable: repeated keys keep their relative order.
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", query_component(key), query_component(value)))
        .collect::<Vec<_>>()
        .join("&");

    let path = decode_component(parsed.path()).map_err(malformed)?;
    Ok(format!("{}?{query}", escape_reserved(&path, PATH_RESERVED)))
}

/// Loose comparison: either URL contains the other.
///
/// Not used by the matcher, which treats a malformed URL as a mismatch.
/// Callers that want a best-effort answer for display can fall back to it.
#[must_use]
pub fn urls_loosely_match(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Compares two URLs canonically with one ignore list.
///
/// A URL that cannot be canonicalized matches nothing.
#[must_use]
pub fn urls_equivalent(a: &str, b: &str, ignore_params: &[String]) -> bool {
    match (canonicalize(a, ignore_params), canonicalize(b, ignore_params)) {
        (Ok(a), Ok(b)) => a == b,
        (Err(err), _) | (_, Err(err)) => {
            tracing::debug!(%err, "malformed URL never matches");
            false
        }
    }
}

/// Percent-decodes a URL component, rejecting bad escapes and invalid UTF-8.
fn decode_component(raw: &str) -> Result<String, String> {
    let bytes = raw.as_bytes();
    for (i, byte) in bytes.iter().enumerate() {
        if *byte == b'%' {
            let valid =
                bytes.get(i + 1..i + 3).is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(format!("invalid percent escape at byte {i}"));
            }
        }
    }
    urlencoding::decode(raw).map(std::borrow::Cow::into_owned).map_err(|e| e.to_string())
}

/// Decoded query key or value as written in the canonical form.
fn query_component(decoded: &str) -> String {
    escape_reserved(decoded, QUERY_RESERVED).replace(' ', "+")
}

fn escape_reserved(text: &str, reserved: &[char]) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if reserved.contains(&c) {
            out.push_str(&format!("%{:02X}", u32::from(c)));
        } else {
            out.push(c);
        }
    }
    out
}
