//! Splits a recorded session into named scenario buckets.
//!
//! UI actions accumulate until a network mutation closes them off. Each
//! closed group is filed under the name of the existing test that already
//! mocks that mutation, or under a name derived from the HTTP verb and the
//! resource path (`POST /api/session` → `create session`). Every group is
//! led by the most recent navigation marker so that the generated test
//! knows where to start.

use crate::matcher::request_matches_mock;
use crate::model::{Buckets, EventKind, LiveRequest, RecordedEvent, TestCase};

/// Bucket that receives actions recorded after the last mutation.
pub const FALLBACK_BUCKET: &str = "basic render";

/// Partitions `events` into buckets, in first-creation order.
///
/// Trailing UI actions with no following mutation go to
/// [`FALLBACK_BUCKET`] unless a bucket of that name already exists, in
/// which case they are dropped.
#[must_use]
pub fn segment(events: &[RecordedEvent], tests: &[TestCase]) -> Buckets {
    let mut buckets = Buckets::new();
    let mut pending: Vec<RecordedEvent> = Vec::new();
    let mut last_navigation: Option<&RecordedEvent> = None;

    for event in events {
        if event.kind.is_ui_action() {
            pending.push(event.clone());
        } else if let Some(prefix) = mutation_prefix(&event.kind) {
            let name = bucket_name(event, prefix, tests);
            tracing::trace!(bucket = %name, actions = pending.len(), "closing action group");

            let actions = buckets.entry(&name);
            if let Some(navigation) = last_navigation {
                actions.push(navigation.clone());
            }
            actions.append(&mut pending);
        } else if event.kind == EventKind::Url {
            last_navigation = Some(event);
        }
    }

    if !pending.is_empty() {
        if buckets.contains(FALLBACK_BUCKET) {
            tracing::debug!(
                dropped = pending.len(),
                "trailing actions dropped; fallback bucket already exists"
            );
        } else {
            buckets.entry(FALLBACK_BUCKET).append(&mut pending);
        }
    }

    buckets
}

/// Semantic name prefix for a mutating HTTP verb.
#[must_use]
pub fn mutation_prefix(kind: &EventKind) -> Option<&'static str> {
    match kind {
        EventKind::Post => Some("create"),
        EventKind::Put => Some("update"),
        EventKind::Patch => Some("patch"),
        EventKind::Delete => Some("delete"),
        _ => None,
    }
}

/// Last path segment made only of ASCII letters, ignoring query and fragment.
#[must_use]
pub fn resource_noun(target: &str) -> Option<&str> {
    let path = target.split(['?', '#']).next().unwrap_or(target);
    path.split('/')
        .rfind(|segment| !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphabetic()))
}

fn bucket_name(event: &RecordedEvent, prefix: &str, tests: &[TestCase]) -> String {
    let request = LiveRequest::new(event.target.clone(), event.kind.as_str());
    let owner = tests
        .iter()
        .find(|test| test.mocks.iter().any(|mock| request_matches_mock(mock, &request)));
    if let Some(test) = owner {
        return test.name.clone();
    }

    match resource_noun(&event.target) {
        Some(noun) => format!("{prefix} {noun}"),
        None => prefix.to_string(),
    }
}
