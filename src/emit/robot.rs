use super::literal::{comment_text, field_kind, robot_cell, value_of, wait_millis, FieldKind};
use super::Backend;
use crate::config::EmitContext;
use crate::model::{EventKind, RecordedEvent};

/// Robot Framework suites on the Browser library. Mutations are replayed
/// through `RequestsLibrary` against `${API_URL}`.
pub struct RobotFramework;

const SEP: &str = "    ";

fn row(cells: &[&str]) -> String {
    cells.join(SEP)
}

/// Absolute targets are used verbatim; paths are resolved against the API.
fn endpoint(target: &str) -> String {
    if target.starts_with("http://") || target.starts_with("https://") {
        robot_cell(target)
    } else {
        format!("${{API_URL}}{}", robot_cell(target))
    }
}

impl Backend for RobotFramework {
    fn id(&self) -> &'static str {
        "robot"
    }

    fn label(&self) -> &'static str {
        "Robot Framework"
    }

    fn file_suffix(&self) -> &'static str {
        "robot"
    }

    fn indent(&self) -> &'static str {
        SEP
    }

    fn statement(&self, action: &RecordedEvent, target: &str) -> Option<String> {
        let el = robot_cell(target);
        let value = robot_cell(value_of(action));
        let line = match &action.kind {
            EventKind::Click => row(&["Click", &el]),
            EventKind::Type | EventKind::Input | EventKind::Change => match field_kind(target) {
                FieldKind::Select => row(&["Select Options By", &el, "value", &value]),
                FieldKind::Text => row(&["Fill Text", &el, &value]),
            },
            EventKind::DblClick => row(&["Click", &el, "left", "2"]),
            EventKind::ContextMenu => row(&["Click", &el, "right"]),
            EventKind::KeyPress => row(&["Keyboard Key", "press", &value]),
            EventKind::WaitForTimeout => row(&["Sleep", &format!("{}ms", wait_millis(action)?)]),
            kind if kind.is_mutation() => {
                row(&[kind.as_str(), &endpoint(&action.target), "expected_status=any"])
            }
            _ => return None,
        };
        Some(line)
    }

    fn wrap(&self, test_name: &str, start_url: &str, body: &str, ctx: &EmitContext) -> String {
        let name = robot_cell(test_name);
        let settings = [
            row(&["Library", "Browser"]),
            row(&["Library", "RequestsLibrary"]),
            row(&["Resource", &format!("{}.resource", ctx.helper_package)]),
            row(&[
                "Test Setup",
                "Initiate Mock Routes",
                &robot_cell(&ctx.mock_dir),
                &robot_cell(&ctx.fallback_dir),
                &name,
            ]),
            row(&["Test Teardown", "Close Page"]),
        ]
        .join("\n");
        let api = row(&["${API_URL}", &robot_cell(&ctx.api_url)]);
        let open = row(&["", "New Page", &robot_cell(start_url)]);
        let title = comment_text(test_name);

        format!(
            "# {title} test case
*** Settings ***
{settings}

*** Variables ***
{api}

*** Test Cases ***
{name}
{open}
{body}
"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::render;
    use crate::model::ActionBucket;

    fn st(action: &RecordedEvent) -> String {
        RobotFramework.statement(action, &action.target).unwrap()
    }

    #[test]
    fn browser_keywords() {
        assert_eq!(
            st(&RecordedEvent::new("click", "//button[@id='go']")),
            "Click    //button[@id='go']"
        );
        assert_eq!(
            st(&RecordedEvent::new("type", "#q").with_value("red shoes")),
            "Fill Text    #q    red shoes"
        );
        assert_eq!(
            st(&RecordedEvent::new("change", "select#size").with_value("M")),
            "Select Options By    select#size    value    M"
        );
        assert_eq!(st(&RecordedEvent::new("dblclick", "#row")), "Click    #row    left    2");
        assert_eq!(
            st(&RecordedEvent::new("keypress", "").with_value("Enter")),
            "Keyboard Key    press    Enter"
        );
        assert_eq!(
            st(&RecordedEvent::new("waitForTimeout", "").with_value("200")),
            "Sleep    200ms"
        );
    }

    #[test]
    fn mutations_call_the_api() {
        assert_eq!(
            st(&RecordedEvent::new("POST", "/api/session")),
            "POST    ${API_URL}/api/session    expected_status=any"
        );
        assert_eq!(
            st(&RecordedEvent::new("DELETE", "https://api.example.com/items/1")),
            "DELETE    https://api.example.com/items/1    expected_status=any"
        );
    }

    #[test]
    fn suite_layout() {
        let bucket = ActionBucket {
            name: "create session".into(),
            actions: vec![
                RecordedEvent::new("url", "http://x/login"),
                RecordedEvent::new("click", "#go"),
            ],
        };
        let out = render(&RobotFramework, &bucket, &EmitContext::default());
        assert!(out.contains(
            "*** Test Cases ***\ncreate session\n    New Page    http://x/login\n    Click    #go\n"
        ));
        assert!(out.contains(
            "Test Setup    Initiate Mock Routes    ./ftmocks    ./public    create session"
        ));
        assert!(out.contains("${API_URL}    http://localhost:5000"));
    }
}
