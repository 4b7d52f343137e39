use super::literal::{comment_text, dq, field_kind, separator, sq, value_of, wait_millis, FieldKind};
use super::Backend;
use crate::config::EmitContext;
use crate::model::{EventKind, RecordedEvent};

/// `@playwright/test` specs driven through `page`.
pub struct Playwright;

impl Playwright {
    /// Recorded framework locators (`getByRole(...)`) are used as-is;
    /// anything else goes through `page.locator`.
    fn element(target: &str) -> String {
        if target.starts_with("getBy") || target.starts_with("locator(") {
            format!("page.{target}")
        } else {
            format!("page.locator({})", dq(target))
        }
    }
}

impl Backend for Playwright {
    fn id(&self) -> &'static str {
        "playwright"
    }

    fn label(&self) -> &'static str {
        "Playwright"
    }

    fn file_suffix(&self) -> &'static str {
        "spec.js"
    }

    fn prefers_locators(&self) -> bool {
        true
    }

    fn statement(&self, action: &RecordedEvent, target: &str) -> Option<String> {
        let el = Self::element(target);
        let value = sq(value_of(action));
        let line = match &action.kind {
            EventKind::Click => format!("await {el}.click();"),
            EventKind::Type | EventKind::Input => match field_kind(target) {
                FieldKind::Select => format!("await {el}.selectOption({value});"),
                FieldKind::Text => format!("await {el}.fill({value});"),
            },
            EventKind::Change => match field_kind(target) {
                FieldKind::Select => format!("await {el}.selectOption({value});"),
                FieldKind::Text => format!(
                    "await {el}.evaluate((node, value) => {{ node.value = value; }}, {value});"
                ),
            },
            EventKind::DblClick => format!("await {el}.dblclick();"),
            EventKind::ContextMenu => format!("await {el}.click({{ button: 'right' }});"),
            EventKind::KeyPress => format!("await page.keyboard.press({value});"),
            EventKind::WaitForTimeout => {
                format!("await page.waitForTimeout({});", wait_millis(action)?)
            }
            kind if kind.is_mutation() => format!("// {}", separator(action)),
            _ => return None,
        };
        Some(line)
    }

    fn wrap(&self, test_name: &str, start_url: &str, body: &str, ctx: &EmitContext) -> String {
        let name = sq(test_name);
        let title = comment_text(test_name);
        format!(
            "// {title} test case
import {{ test, expect }} from '@playwright/test';
import {{ initiatePlaywrightRoutes }} from {helper};

test({name}, async ({{ page }}) => {{
  await initiatePlaywrightRoutes(
    page,
    {{
      MOCK_DIR: {mock_dir},
      FALLBACK_DIR: {fallback_dir},
    }},
    {name}
  );
  await page.goto({url});
{body}
  await page.close();
}});
",
            helper = sq(&ctx.helper_package),
            mock_dir = sq(&ctx.mock_dir),
            fallback_dir = sq(&ctx.fallback_dir),
            url = sq(start_url),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::render;
    use crate::model::ActionBucket;

    fn st(kind: &str, target: &str, value: Option<&str>) -> Option<String> {
        let mut action = RecordedEvent::new(kind, target);
        action.value = value.map(Into::into);
        Playwright.statement(&action, target)
    }

    #[test]
    fn create_session_spec() {
        let bucket = ActionBucket {
            name: "create session".into(),
            actions: vec![
                RecordedEvent::new("url", "http://x/login"),
                RecordedEvent::new("click", "//button[@id='go']"),
            ],
        };
        let out = render(&Playwright, &bucket, &EmitContext::default());

        assert_eq!(out.matches(".click(").count(), 1);
        assert!(out.contains(r#"  await page.locator("//button[@id='go']").click();"#));
        assert!(out.contains("await page.goto('http://x/login');"));
        assert!(out.contains("MOCK_DIR: './ftmocks',"));
        assert!(out.contains("    'create session'\n  );"));
        assert!(out.starts_with("// create session test case\n"));
        assert!(out.contains("from 'ftmocks-utils';"));
        assert!(out.trim_end().ends_with("await page.close();\n});"));
    }

    #[test]
    fn statements_per_action_kind() {
        assert_eq!(
            st("type", "#email", Some("a@b.c")).unwrap(),
            r##"await page.locator("#email").fill('a@b.c');"##
        );
        assert_eq!(
            st("change", "//select[@id='c']", Some("NL")).unwrap(),
            r#"await page.locator("//select[@id='c']").selectOption('NL');"#
        );
        assert!(st("change", "#range", Some("5")).unwrap().contains(".evaluate((node, value)"));
        assert_eq!(
            st("dblclick", "#row", None).unwrap(),
            r##"await page.locator("#row").dblclick();"##
        );
        assert_eq!(
            st("contextmenu", "#row", None).unwrap(),
            r##"await page.locator("#row").click({ button: 'right' });"##
        );
        assert_eq!(
            st("keypress", "", Some("Enter")).unwrap(),
            "await page.keyboard.press('Enter');"
        );
        assert_eq!(
            st("waitForTimeout", "", Some("300")).unwrap(),
            "await page.waitForTimeout(300);"
        );
        assert_eq!(
            st("POST", "/api/session", None).unwrap(),
            "// ---------- POST /api/session ----------"
        );
        assert_eq!(st("hover", "#x", None), None);
        assert_eq!(st("waitForTimeout", "", Some("later")), None);
    }

    #[test]
    fn recorded_locator_is_called_on_page() {
        assert_eq!(
            st("click", "getByRole('button', { name: 'Save' })", None).unwrap(),
            "await page.getByRole('button', { name: 'Save' }).click();"
        );
    }

    #[test]
    fn basic_render_uses_app_url() {
        let bucket = ActionBucket {
            name: "basic render".into(),
            actions: vec![RecordedEvent::new("click", "#home")],
        };
        let ctx = EmitContext { app_url: "http://localhost:3000".into(), ..EmitContext::default() };
        let out = render(&Playwright, &bucket, &ctx);
        assert!(out.contains("await page.goto('http://localhost:3000');"));
    }
}
