//! Segmentation output and generated files.

use serde::{Deserialize, Serialize};

use super::event::RecordedEvent;

/// A named, ordered group of events that becomes one generated test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionBucket {
    /// Scenario name.
    pub name: String,
    /// Events in recorded order.
    pub actions: Vec<RecordedEvent>,
}

impl ActionBucket {
    /// The target of the first navigation marker, if the bucket has one.
    #[must_use]
    pub fn start_url(&self) -> Option<&str> {
        self.actions
            .iter()
            .find(|a| a.kind == super::EventKind::Url)
            .map(|a| {
                if a.target.is_empty() {
                    a.value.as_deref().unwrap_or("")
                } else {
                    a.target.as_str()
                }
            })
            .filter(|url| !url.is_empty())
    }
}

/// Insertion-ordered map from bucket name to bucket.
///
/// Iteration order is first-creation order; nothing here depends on hashing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Buckets {
    buckets: Vec<ActionBucket>,
}

impl Buckets {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a bucket by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ActionBucket> {
        self.buckets.iter().find(|b| b.name == name)
    }

    /// Returns `true` if a bucket with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the bucket's action list, creating an empty bucket at the end
    /// of the order on first use.
    pub fn entry(&mut self, name: &str) -> &mut Vec<RecordedEvent> {
        let index = match self.buckets.iter().position(|b| b.name == name) {
            Some(index) => index,
            None => {
                self.buckets.push(ActionBucket { name: name.to_string(), actions: Vec::new() });
                self.buckets.len() - 1
            }
        };
        &mut self.buckets[index].actions
    }

    /// Bucket names in creation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|b| b.name.as_str())
    }

    /// Iterates buckets in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, ActionBucket> {
        self.buckets.iter()
    }

    /// Number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `true` if there are no buckets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl IntoIterator for Buckets {
    type Item = ActionBucket;
    type IntoIter = std::vec::IntoIter<ActionBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

impl<'a> IntoIterator for &'a Buckets {
    type Item = &'a ActionBucket;
    type IntoIter = std::slice::Iter<'a, ActionBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

/// Rendered source for one bucket, ready for the caller to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedFile {
    /// Bucket name the test was generated from.
    pub test_name: String,
    /// Suggested file name, e.g. `create_session.spec.js`.
    pub file_name: String,
    /// Backend id that rendered the source.
    pub backend: String,
    /// The generated source text.
    pub source: String,
}
