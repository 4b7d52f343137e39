//! Mock matching and duplicate detection.
//!
//! Two mocks describe "the same call" when their canonical URLs, methods and
//! (for non-`GET` requests) bodies agree. URL canonicalization always uses
//! the ignore list of the *first* operand, for both sides, so
//! [`requests_match`] is not symmetric when the ignore lists differ. A URL
//! that cannot be canonicalized matches nothing.

use serde_json::{Map, Value};

use crate::equality::deep_equal;
use crate::model::{LiveRequest, MockRecord, MockResponse};
use crate::url_norm::urls_equivalent;

/// Returns `true` if both mocks stub the same request.
#[must_use]
pub fn requests_match(m1: &MockRecord, m2: &MockRecord) -> bool {
    if !urls_equivalent(&m1.url, &m2.url, &m1.ignore_params) || m1.method != m2.method {
        return false;
    }

    let has_body = m1.post_data().is_some() || m2.post_data().is_some();
    if has_body && !m1.method.eq_ignore_ascii_case("GET") {
        let empty = Value::Object(Map::new());
        return deep_equal(m1.post_data().unwrap_or(&empty), m2.post_data().unwrap_or(&empty));
    }
    true
}

/// Returns `true` if both mocks answer with the same status and JSON body.
///
/// Bodies that are not valid JSON never match, not even each other.
#[must_use]
pub fn responses_match(m1: &MockRecord, m2: &MockRecord) -> bool {
    if m1.response.status != m2.response.status {
        return false;
    }
    match (parse_content(&m1.response), parse_content(&m2.response)) {
        (Ok(a), Ok(b)) => deep_equal(&a, &b),
        (Err(err), _) | (_, Err(err)) => {
            tracing::debug!(%err, m1 = %m1.id, m2 = %m2.id, "response body is not JSON");
            false
        }
    }
}

/// Request comparison, optionally extended to the response.
#[must_use]
pub fn mocks_match(m1: &MockRecord, m2: &MockRecord, match_response: bool) -> bool {
    requests_match(m1, m2) && (!match_response || responses_match(m1, m2))
}

/// Recomputes `is_duplicate` for a whole collection.
///
/// For each mock, the cluster of mocks it matches (itself included) is
/// collected; every member of a cluster with more than one entry is
/// flagged. All other flags are cleared.
#[must_use]
pub fn mark_duplicates(mut mocks: Vec<MockRecord>) -> Vec<MockRecord> {
    let mut flagged = vec![false; mocks.len()];
    for mock in &mocks {
        let cluster: Vec<usize> = mocks
            .iter()
            .enumerate()
            .filter(|(_, other)| requests_match(mock, other))
            .map(|(j, _)| j)
            .collect();
        if cluster.len() > 1 {
            for j in cluster {
                flagged[j] = true;
            }
        }
    }

    for (mock, duplicate) in mocks.iter_mut().zip(flagged) {
        mock.is_duplicate = duplicate.then_some(true);
    }
    mocks
}

/// Mocks other than `item` (by id) that stub the same request.
#[must_use]
pub fn find_duplicates_of<'a>(mocks: &'a [MockRecord], item: &MockRecord) -> Vec<&'a MockRecord> {
    mocks.iter().filter(|mock| mock.id != item.id && requests_match(mock, item)).collect()
}

/// Returns `true` if any member of `collection` stubs the same request as
/// `item`.
#[must_use]
pub fn exists_in(collection: &[MockRecord], item: &MockRecord) -> bool {
    collection.iter().any(|mock| requests_match(mock, item))
}

/// Returns `true` if `mock` would answer the intercepted request.
///
/// The mock's ignore list applies to both URLs; bodies are not compared.
#[must_use]
pub fn request_matches_mock(mock: &MockRecord, request: &LiveRequest) -> bool {
    mock.method == request.method
        && urls_equivalent(&mock.url, &request.original_url, &mock.ignore_params)
}

/// Splits mocks into those served during the last run and those never hit.
#[must_use]
pub fn partition_served(mocks: &[MockRecord]) -> (Vec<&MockRecord>, Vec<&MockRecord>) {
    mocks.iter().partition(|mock| mock.served == Some(true))
}

fn parse_content(response: &MockResponse) -> Result<Value, serde_json::Error> {
    let parsed = match response.content.as_deref() {
        None | Some("") => Value::Null,
        Some(text) => serde_json::from_str(text)?,
    };
    Ok(if parsed.is_null() { Value::Object(Map::new()) } else { parsed })
}
