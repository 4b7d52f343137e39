//! Mock records and the tests that own them.

use serde::{Deserialize, Serialize};

/// Request half of a stored mock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockRequest {
    /// Request body as captured (object, string, or absent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_data: Option<serde_json::Value>,
}

/// Response half of a stored mock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MockResponse {
    /// HTTP status code.
    #[serde(default)]
    pub status: u16,
    /// Raw response body; usually JSON text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A stored HTTP request/response pair used to stub a call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockRecord {
    /// Store-assigned identifier.
    #[serde(default)]
    pub id: String,
    /// Request URL, absolute or path-only.
    pub url: String,
    /// HTTP method, compared case-sensitively.
    pub method: String,
    /// Query keys excluded from comparisons involving this mock.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore_params: Vec<String>,
    /// Captured request details.
    #[serde(default)]
    pub request: MockRequest,
    /// Captured response details.
    #[serde(default)]
    pub response: MockResponse,
    /// Whether the mock server served this mock during the last run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub served: Option<bool>,
    /// Derived: another mock in the same collection matches this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_duplicate: Option<bool>,
}

impl MockRecord {
    /// Creates a mock with only a URL and method set.
    pub fn new(url: impl Into<String>, method: impl Into<String>) -> Self {
        Self { url: url.into(), method: method.into(), ..Self::default() }
    }

    /// The request body, treating `null` and `""` as absent.
    #[must_use]
    pub fn post_data(&self) -> Option<&serde_json::Value> {
        match &self.request.post_data {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) if s.is_empty() => None,
            Some(value) => Some(value),
        }
    }
}

/// An intercepted request, as seen by the mock server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveRequest {
    /// URL as received, path plus query.
    pub original_url: String,
    /// HTTP method.
    pub method: String,
}

impl LiveRequest {
    /// Creates a live request.
    pub fn new(original_url: impl Into<String>, method: impl Into<String>) -> Self {
        Self { original_url: original_url.into(), method: method.into() }
    }
}

/// A named test scenario and its mock set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Store-assigned identifier.
    #[serde(default)]
    pub id: String,
    /// Scenario name, also used as the generated test title.
    pub name: String,
    /// Mocks recorded for this scenario.
    #[serde(default)]
    pub mocks: Vec<MockRecord>,
}
