//! Recorded UI and network events.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a recorded event, parsed from the JSON `type` field.
///
/// Unrecognized kinds are kept verbatim in [`EventKind::Other`] so that
/// events survive a round trip through the core untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    /// Single click on an element.
    Click,
    /// Text typed into a field.
    Type,
    /// Per-keystroke input on a field.
    Input,
    /// Committed value change (selects, checkboxes, blurred inputs).
    Change,
    /// Double click.
    DblClick,
    /// Right click.
    ContextMenu,
    /// A single key press.
    KeyPress,
    /// Explicit pause recorded by the user.
    WaitForTimeout,
    /// Navigation marker; the target holds the page URL.
    Url,
    /// `POST` request observed by the recorder.
    Post,
    /// `PUT` request observed by the recorder.
    Put,
    /// `PATCH` request observed by the recorder.
    Patch,
    /// `DELETE` request observed by the recorder.
    Delete,
    /// Anything else the recorder emitted.
    Other(String),
}

impl EventKind {
    /// The wire name of this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Click => "click",
            Self::Type => "type",
            Self::Input => "input",
            Self::Change => "change",
            Self::DblClick => "dblclick",
            Self::ContextMenu => "contextmenu",
            Self::KeyPress => "keypress",
            Self::WaitForTimeout => "waitForTimeout",
            Self::Url => "url",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Other(raw) => raw,
        }
    }

    /// Returns `true` for user interactions that are buffered between
    /// network mutations.
    #[must_use]
    pub fn is_ui_action(&self) -> bool {
        matches!(
            self,
            Self::Click
                | Self::Type
                | Self::Input
                | Self::Change
                | Self::DblClick
                | Self::ContextMenu
                | Self::KeyPress
                | Self::WaitForTimeout
        )
    }

    /// Returns `true` for state-changing HTTP requests.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch | Self::Delete)
    }
}

impl From<String> for EventKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "click" => Self::Click,
            "type" => Self::Type,
            "input" => Self::Input,
            "change" => Self::Change,
            "dblclick" => Self::DblClick,
            "contextmenu" => Self::ContextMenu,
            "keypress" => Self::KeyPress,
            "waitForTimeout" => Self::WaitForTimeout,
            "url" => Self::Url,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "PATCH" => Self::Patch,
            "DELETE" => Self::Delete,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for EventKind {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An alternate selector captured for the same element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorCandidate {
    /// Selector flavor; `"locator"` marks a framework-style locator.
    #[serde(rename = "type")]
    pub kind: String,
    /// The selector text.
    pub value: String,
}

impl LocatorCandidate {
    /// Returns `true` if this candidate is a framework-style locator.
    #[must_use]
    pub fn is_locator(&self) -> bool {
        self.kind == "locator"
    }
}

/// One entry of a recorded session trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedEvent {
    /// Recorder-assigned identifier (string or number).
    #[serde(default)]
    pub id: serde_json::Value,
    /// What happened.
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// DOM locator, page URL, or request path depending on `kind`.
    #[serde(default)]
    pub target: String,
    /// Typed value, key name, or wait duration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Alternate selectors for the target element.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selectors: Vec<LocatorCandidate>,
    /// Recorder timestamp, kept opaque.
    #[serde(default)]
    pub time: serde_json::Value,
    /// Free-form description from the recorder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RecordedEvent {
    /// Creates an event with only a kind and target; mostly for tests and
    /// programmatic traces.
    pub fn new(kind: impl Into<EventKind>, target: impl Into<String>) -> Self {
        Self {
            id: serde_json::Value::Null,
            kind: kind.into(),
            target: target.into(),
            value: None,
            selectors: Vec::new(),
            time: serde_json::Value::Null,
            description: None,
        }
    }

    /// Sets the value, builder style.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Adds an alternate selector, builder style.
    #[must_use]
    pub fn with_selector(mut self, kind: impl Into<String>, value: impl Into<String>) -> Self {
        self.selectors.push(LocatorCandidate { kind: kind.into(), value: value.into() });
        self
    }

    /// The first framework-style locator among the alternates, if any.
    #[must_use]
    pub fn preferred_locator(&self) -> Option<&str> {
        self.selectors.iter().find(|s| s.is_locator()).map(|s| s.value.as_str())
    }
}
