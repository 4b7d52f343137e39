use super::literal::{comment_text, dq, field_kind, separator, sq, value_of, wait_millis, FieldKind};
use super::Backend;
use crate::config::EmitContext;
use crate::model::{EventKind, RecordedEvent};

/// TestCafe fixtures; navigation happens through `fixture.page`.
pub struct TestCafe;

/// TestCafe key names are lowercase (`enter`, `tab`).
fn key_name(key: &str) -> String {
    key.to_lowercase()
}

impl Backend for TestCafe {
    fn id(&self) -> &'static str {
        "testcafe"
    }

    fn label(&self) -> &'static str {
        "TestCafe"
    }

    fn file_suffix(&self) -> &'static str {
        "test.js"
    }

    fn statement(&self, action: &RecordedEvent, target: &str) -> Option<String> {
        let el = format!("Selector({})", dq(target));
        let value = sq(value_of(action));
        let line = match &action.kind {
            EventKind::Click => format!("await t.click({el});"),
            EventKind::Type | EventKind::Input | EventKind::Change => match field_kind(target) {
                FieldKind::Select => {
                    format!("await t.click({el}).click({el}.find('option').withText({value}));")
                }
                FieldKind::Text => format!("await t.typeText({el}, {value}, {{ replace: true }});"),
            },
            EventKind::DblClick => format!("await t.doubleClick({el});"),
            EventKind::ContextMenu => format!("await t.rightClick({el});"),
            EventKind::KeyPress => {
                format!("await t.pressKey({});", sq(&key_name(value_of(action))))
            }
            EventKind::WaitForTimeout => format!("await t.wait({});", wait_millis(action)?),
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
import {{ Selector }} from 'testcafe';
import {{ initiateTestcafeMocks }} from {helper};

fixture({name})
  .page({url})
  .beforeEach(async (t) => {{
    await initiateTestcafeMocks(
      t,
      {{
        MOCK_DIR: {mock_dir},
        FALLBACK_DIR: {fallback_dir},
      }},
      {name}
    );
  }})
  .afterEach(async (t) => {{
    await t.eval(() => window.localStorage.clear());
  }});

test({name}, async (t) => {{
{body}
}});
",
            helper = sq(&ctx.helper_package),
            mock_dir = sq(&ctx.mock_dir),
            fallback_dir = sq(&ctx.fallback_dir),
            url = sq(start_url),
        )
    }
}
