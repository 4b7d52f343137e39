//! Test-code generation for several automation frameworks.
//!
//! Every backend maps one action to one statement and wraps the statement
//! list in its own boilerplate. The shared pipeline in [`render`] decides
//! *which* actions get rendered and with which target:
//!
//! 1. runs of `input` events on the same element collapse to the last one;
//! 2. deep, brittle paths are swapped for a recorded framework locator when
//!    the backend understands those;
//! 3. actions a backend has no statement for are dropped without error.

mod cypress;
mod literal;
mod playwright;
mod robot;
mod rtl;
mod testcafe;

pub use cypress::Cypress;
pub use playwright::Playwright;
pub use robot::RobotFramework;
pub use rtl::ReactTestingLibrary;
pub use testcafe::TestCafe;

use crate::config::EmitContext;
use crate::error::EmitError;
use crate::model::{ActionBucket, EventKind, GeneratedFile, RecordedEvent, TestCase};
use crate::segment::segment;

/// Targets with more path segments than this are considered brittle.
const MAX_STABLE_PATH_SEGMENTS: usize = 6;

/// A code generator for one test-automation framework.
pub trait Backend {
    /// Short identifier used on the command line, e.g. `playwright`.
    fn id(&self) -> &'static str;

    /// Human-readable framework name.
    fn label(&self) -> &'static str;

    /// File name suffix without the leading dot, e.g. `spec.js`.
    fn file_suffix(&self) -> &'static str;

    /// Indentation applied to every statement line inside the test body.
    fn indent(&self) -> &'static str {
        "  "
    }

    /// Whether recorded framework locators are usable as targets.
    fn prefers_locators(&self) -> bool {
        false
    }

    /// The statement for one action, or `None` if the backend has nothing
    /// to say about it. Multi-line statements are separated by `\n`.
    fn statement(&self, action: &RecordedEvent, target: &str) -> Option<String>;

    /// Wraps the indented statement body in the framework's boilerplate.
    fn wrap(&self, test_name: &str, start_url: &str, body: &str, ctx: &EmitContext) -> String;
}

/// Backends addressable by id, in registration order.
pub struct BackendRegistry {
    backends: Vec<Box<dyn Backend>>,
}

impl BackendRegistry {
    /// Creates a registry with no backends.
    #[must_use]
    pub fn empty() -> Self {
        Self { backends: Vec::new() }
    }

    /// Adds a backend, replacing any backend registered under the same id.
    pub fn register(&mut self, backend: Box<dyn Backend>) {
        match self.backends.iter().position(|b| b.id() == backend.id()) {
            Some(index) => self.backends[index] = backend,
            None => self.backends.push(backend),
        }
    }

    /// Looks up a backend by id.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::UnknownBackend`] if no backend has this id.
    pub fn get(&self, id: &str) -> Result<&dyn Backend, EmitError> {
        match self.backends.iter().find(|b| b.id() == id) {
            Some(backend) => Ok(&**backend),
            None => Err(EmitError::UnknownBackend {
                id: id.to_string(),
                available: self.ids().join(", "),
            }),
        }
    }

    /// Registered ids in registration order.
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        self.backends.iter().map(|b| b.id()).collect()
    }

    /// Iterates the registered backends.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Backend> {
        self.backends.iter().map(|b| -> &dyn Backend { b.as_ref() })
    }
}

impl Default for BackendRegistry {
    /// All built-in backends: rtl, playwright, cypress, testcafe, robot.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(ReactTestingLibrary));
        registry.register(Box::new(Playwright));
        registry.register(Box::new(Cypress));
        registry.register(Box::new(TestCafe));
        registry.register(Box::new(RobotFramework));
        registry
    }
}

/// Renders one bucket as a complete test file for `backend`.
#[must_use]
pub fn render(backend: &dyn Backend, bucket: &ActionBucket, ctx: &EmitContext) -> String {
    let actions = &bucket.actions;
    let mut lines: Vec<String> = Vec::new();

    for (i, action) in actions.iter().enumerate() {
        if is_superseded_keystroke(action, actions.get(i + 1)) {
            continue;
        }
        if needs_element(&action.kind) && action.target.is_empty() {
            continue;
        }
        let target = resolve_target(action, backend.prefers_locators());
        match backend.statement(action, target) {
            Some(statement) => {
                lines.extend(statement.lines().map(|line| indent_line(line, backend.indent())));
            }
            None => {
                tracing::trace!(
                    backend = backend.id(),
                    kind = %action.kind,
                    "no statement for action"
                );
            }
        }
    }

    let start_url = bucket.start_url().unwrap_or(ctx.app_url.as_str());
    backend.wrap(&bucket.name, start_url, &lines.join("\n"), ctx)
}

/// Segments `events` and renders every bucket with `backend`.
#[must_use]
pub fn generate(
    events: &[RecordedEvent],
    tests: &[TestCase],
    backend: &dyn Backend,
    ctx: &EmitContext,
) -> Vec<GeneratedFile> {
    segment(events, tests)
        .iter()
        .map(|bucket| GeneratedFile {
            test_name: bucket.name.clone(),
            file_name: suggested_file_name(&bucket.name, backend),
            backend: backend.id().to_string(),
            source: render(backend, bucket, ctx),
        })
        .collect()
}

/// Folder-safe form of a test name: spaces become underscores.
#[must_use]
pub fn name_to_folder(name: &str) -> String {
    name.replace(' ', "_")
}

/// File name for a generated test, e.g. `create_session.spec.js`.
#[must_use]
pub fn suggested_file_name(test_name: &str, backend: &dyn Backend) -> String {
    format!("{}.{}", name_to_folder(test_name).to_lowercase(), backend.file_suffix())
}

/// An `input` immediately followed by another `input` on the same element
/// is an intermediate keystroke.
fn is_superseded_keystroke(action: &RecordedEvent, next: Option<&RecordedEvent>) -> bool {
    action.kind == EventKind::Input
        && next.is_some_and(|next| next.kind == EventKind::Input && next.target == action.target)
}

fn needs_element(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Click
            | EventKind::Type
            | EventKind::Input
            | EventKind::Change
            | EventKind::DblClick
            | EventKind::ContextMenu
    )
}

fn resolve_target(action: &RecordedEvent, prefers_locators: bool) -> &str {
    if prefers_locators && path_depth(&action.target) > MAX_STABLE_PATH_SEGMENTS {
        if let Some(locator) = action.preferred_locator() {
            return locator;
        }
    }
    &action.target
}

fn path_depth(target: &str) -> usize {
    target.split('/').filter(|segment| !segment.is_empty()).count()
}

fn indent_line(line: &str, indent: &str) -> String {
    if line.is_empty() {
        String::new()
    } else {
        format!("{indent}{line}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend that echoes kind and target, to observe the pipeline.
    struct Echo;

    impl Backend for Echo {
        fn id(&self) -> &'static str {
            "echo"
        }
        fn label(&self) -> &'static str {
            "Echo"
        }
        fn file_suffix(&self) -> &'static str {
            "echo.txt"
        }
        fn prefers_locators(&self) -> bool {
            true
        }
        fn statement(&self, action: &RecordedEvent, target: &str) -> Option<String> {
            match action.kind {
                EventKind::Other(_) => None,
                _ => {
                    let value = action.value.as_deref().unwrap_or("");
                    Some(format!("{} {target} {value}", action.kind))
                }
            }
        }
        fn wrap(&self, test_name: &str, start_url: &str, body: &str, _: &EmitContext) -> String {
            format!("[{test_name} @ {start_url}]\n{body}")
        }
    }

    fn bucket(actions: Vec<RecordedEvent>) -> ActionBucket {
        ActionBucket { name: "create session".into(), actions }
    }

    #[test]
    fn keystrokes_collapse_to_last_input() {
        let b = bucket(vec![
            RecordedEvent::new("input", "#q").with_value("s"),
            RecordedEvent::new("input", "#q").with_value("sh"),
            RecordedEvent::new("input", "#q").with_value("sho"),
            RecordedEvent::new("click", "#go"),
            RecordedEvent::new("input", "#q").with_value("x"),
        ]);
        let out = render(&Echo, &b, &EmitContext::default());
        assert_eq!(out.matches("input #q").count(), 2);
        assert!(out.contains("  input #q sho"));
        assert!(!out.contains("input #q sh\n"));
        assert!(out.ends_with("  input #q x"));
    }

    #[test]
    fn inputs_on_different_elements_are_kept() {
        let b = bucket(vec![
            RecordedEvent::new("input", "#first").with_value("a"),
            RecordedEvent::new("input", "#last").with_value("b"),
        ]);
        let out = render(&Echo, &b, &EmitContext::default());
        assert!(out.contains("input #first a"));
        assert!(out.contains("input #last b"));
    }

    #[test]
    fn deep_paths_prefer_recorded_locator() {
        let deep = "/html/body/div[2]/div/main/form/div[3]/button";
        let b = bucket(vec![
            RecordedEvent::new("click", deep)
                .with_selector("css", "form button")
                .with_selector("locator", "getByRole('button', { name: 'Save' })"),
            RecordedEvent::new("click", "/html/body/main/button")
                .with_selector("locator", "unused"),
        ]);
        let out = render(&Echo, &b, &EmitContext::default());
        assert!(out.contains("click getByRole('button', { name: 'Save' })"));
        assert!(out.contains("click /html/body/main/button"));
        assert!(!out.contains("unused"));
    }

    #[test]
    fn deep_path_without_locator_keeps_raw_target() {
        let deep = "/a/b/c/d/e/f/g";
        let b = bucket(vec![RecordedEvent::new("click", deep).with_selector("css", "g")]);
        assert!(render(&Echo, &b, &EmitContext::default()).contains("click /a/b/c/d/e/f/g"));
    }

    #[test]
    fn unknown_actions_and_missing_targets_are_dropped() {
        let b = bucket(vec![
            RecordedEvent::new("hover", "#menu"),
            RecordedEvent::new("click", ""),
            RecordedEvent::new("waitForTimeout", "").with_value("500"),
        ]);
        let out = render(&Echo, &b, &EmitContext::default());
        assert_eq!(out, "[create session @ http://your-app-url]\n  waitForTimeout  500");
    }

    #[test]
    fn start_url_comes_from_bucket() {
        let b = bucket(vec![RecordedEvent::new("url", "http://x/login")]);
        let out = render(&Echo, &b, &EmitContext::default());
        assert!(out.starts_with("[create session @ http://x/login]"));
    }

    #[test]
    fn registry_lookup() {
        let registry = BackendRegistry::default();
        assert_eq!(registry.ids(), vec!["rtl", "playwright", "cypress", "testcafe", "robot"]);
        assert_eq!(registry.get("playwright").unwrap().label(), "Playwright");

        let err = registry.get("selenium").err().unwrap();
        assert!(err.to_string().contains("rtl, playwright"));
    }

    #[test]
    fn registering_new_backend_needs_no_other_change() {
        let mut registry = BackendRegistry::default();
        registry.register(Box::new(Echo));
        let echo = registry.get("echo").unwrap();
        let b = bucket(vec![RecordedEvent::new("click", "#a")]);
        let out = render(echo, &b, &EmitContext::default());
        assert!(out.contains("click #a"));
    }

    #[test]
    fn file_names_follow_backend_suffix() {
        assert_eq!(suggested_file_name("Create Session", &Playwright), "create_session.spec.js");
        assert_eq!(
            suggested_file_name("basic render", &ReactTestingLibrary),
            "basic_render.test.js"
        );
        assert_eq!(suggested_file_name("delete items", &RobotFramework), "delete_items.robot");
        assert_eq!(name_to_folder("a b  c"), "a_b__c");
    }

    #[test]
    fn multi_line_test_name_stays_in_header_comment() {
        let b = ActionBucket {
            name: "line one\nline two".into(),
            actions: vec![RecordedEvent::new("click", "#a")],
        };
        for backend in BackendRegistry::default().iter() {
            let out = render(backend, &b, &EmitContext::default());
            let header = out.lines().next().unwrap_or_default();
            assert!(header.ends_with(" line one line two test case"), "{}: {header}", backend.id());
            assert!(!out.lines().any(|line| line.starts_with("line two")), "{}", backend.id());
        }
    }

    #[test]
    fn generate_renders_every_bucket() {
        let events = vec![
            RecordedEvent::new("url", "http://app/"),
            RecordedEvent::new("click", "#add"),
            RecordedEvent::new("POST", "/api/items"),
            RecordedEvent::new("click", "#done"),
        ];
        let files = generate(&events, &[], &Echo, &EmitContext::default());
        let names: Vec<_> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["create_items.echo.txt", "basic_render.echo.txt"]);
        assert!(files[1].source.starts_with("[basic render @ http://your-app-url]"));
        assert_eq!(files[0].backend, "echo");
    }
}
