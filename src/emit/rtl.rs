use url::Url;

use super::literal::{comment_text, dq, field_kind, separator, sq, value_of, wait_millis, FieldKind};
use super::Backend;
use crate::config::EmitContext;
use crate::model::{EventKind, RecordedEvent};

/// Jest + React Testing Library tests that render `<App />` in jsdom.
pub struct ReactTestingLibrary;

fn node(target: &str) -> String {
    if target.is_empty() {
        "document.activeElement".to_string()
    } else {
        format!("getByXPath(dom.container, {})", dq(target))
    }
}

/// jsdom refuses cross-origin `pushState`, so only path and query survive.
fn route_of(start_url: &str) -> String {
    match Url::parse(start_url) {
        Ok(url) => match url.query() {
            Some(query) => format!("{}?{query}", url.path()),
            None => url.path().to_string(),
        },
        Err(_) => start_url.to_string(),
    }
}

impl Backend for ReactTestingLibrary {
    fn id(&self) -> &'static str {
        "rtl"
    }

    fn label(&self) -> &'static str {
        "React Testing Library"
    }

    fn file_suffix(&self) -> &'static str {
        "test.js"
    }

    fn statement(&self, action: &RecordedEvent, target: &str) -> Option<String> {
        let el = node(target);
        let value = sq(value_of(action));
        let text = match &action.kind {
            EventKind::Click => format!(
                "await waitFor(() => expect({el}).toBeInTheDocument());\nfireEvent.click({el});"
            ),
            EventKind::Type | EventKind::Input | EventKind::Change => {
                let event = match (field_kind(target), &action.kind) {
                    (FieldKind::Text, EventKind::Type | EventKind::Input) => "input",
                    _ => "change",
                };
                format!("fireEvent.{event}({el}, {{ target: {{ value: {value} }} }});")
            }
            EventKind::DblClick => format!("fireEvent.dblClick({el});"),
            EventKind::ContextMenu => format!("fireEvent.contextMenu({el});"),
            EventKind::KeyPress => format!("fireEvent.keyDown({el}, {{ key: {value} }});"),
            EventKind::WaitForTimeout => format!(
                "await new Promise((resolve) => setTimeout(resolve, {}));",
                wait_millis(action)?
            ),
            kind if kind.is_mutation() => format!("// {}", separator(action)),
            _ => return None,
        };
        Some(text)
    }

    fn wrap(&self, test_name: &str, start_url: &str, body: &str, ctx: &EmitContext) -> String {
        let name = sq(test_name);
        let title = comment_text(test_name);
        format!(
            "// {title} test case
import React from 'react';
import {{ render, fireEvent, waitFor }} from '@testing-library/react';
import {{ initiateJestFetch, getByXPath }} from {helper};
import App from './App';

it({name}, async () => {{
  await initiateJestFetch(
    jest,
    {{
      MOCK_DIR: {mock_dir},
      FALLBACK_DIR: {fallback_dir},
    }},
    {name}
  );
  window.history.pushState({{}}, '', {route});
  const dom = render(<App />);
{body}
  dom.unmount();
}});
",
            helper = sq(&ctx.helper_package),
            mock_dir = sq(&ctx.mock_dir),
            fallback_dir = sq(&ctx.fallback_dir),
            route = sq(&route_of(start_url)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::render;
    use crate::model::ActionBucket;

    #[test]
    fn click_waits_for_element_first() {
        let action = RecordedEvent::new("click", "//button[@id='go']");
        let out = ReactTestingLibrary.statement(&action, &action.target).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("await waitFor("));
        assert_eq!(
            lines[1],
            r#"fireEvent.click(getByXPath(dom.container, "//button[@id='go']"));"#
        );
    }

    #[test]
    fn typing_and_selecting() {
        let typed = RecordedEvent::new("type", "//input[@name='q']").with_value("shoes");
        assert_eq!(
            ReactTestingLibrary.statement(&typed, &typed.target).unwrap(),
            concat!(
                r#"fireEvent.input(getByXPath(dom.container, "//input[@name='q']")"#,
                ", { target: { value: 'shoes' } });",
            )
        );
        let picked = RecordedEvent::new("input", "//select").with_value("NL");
        let statement = ReactTestingLibrary.statement(&picked, &picked.target).unwrap();
        assert!(statement.starts_with("fireEvent.change("));
    }

    #[test]
    fn keypress_without_target_uses_focused_element() {
        let key = RecordedEvent::new("keypress", "").with_value("Enter");
        assert_eq!(
            ReactTestingLibrary.statement(&key, "").unwrap(),
            "fireEvent.keyDown(document.activeElement, { key: 'Enter' });"
        );
    }

    #[test]
    fn routes_to_start_path_and_indents_multiline_statements() {
        let bucket = ActionBucket {
            name: "create session".into(),
            actions: vec![
                RecordedEvent::new("url", "http://x/login?next=%2Fhome"),
                RecordedEvent::new("click", "//button"),
                RecordedEvent::new("DELETE", "/api/session"),
            ],
        };
        let out = render(&ReactTestingLibrary, &bucket, &EmitContext::default());
        assert!(out.contains("window.history.pushState({}, '', '/login?next=%2Fhome');"));
        assert!(out.contains("\n  await waitFor("));
        assert!(out.contains("\n  fireEvent.click("));
        assert!(out.contains("\n  // ---------- DELETE /api/session ----------"));
        assert!(out.contains("it('create session', async () => {"));
    }

    #[test]
    fn relative_start_url_is_kept() {
        assert_eq!(route_of("/dashboard"), "/dashboard");
        assert_eq!(route_of("http://your-app-url"), "/");
    }
}
