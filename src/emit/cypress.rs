use super::literal::{
    comment_text, dq, field_kind, is_xpath, separator, sq, value_of, wait_millis, FieldKind,
};
use super::Backend;
use crate::config::EmitContext;
use crate::model::{EventKind, RecordedEvent};

/// Cypress specs. XPath targets need the `cypress-xpath` plugin.
pub struct Cypress;

fn subject(target: &str) -> String {
    if is_xpath(target) {
        format!("cy.xpath({})", dq(target))
    } else {
        format!("cy.get({})", dq(target))
    }
}

/// Cypress spells named keys as `{enter}`; single characters type as-is.
fn key_sequence(key: &str) -> String {
    if key.chars().count() > 1 {
        format!("{{{}}}", key.to_lowercase())
    } else {
        key.to_string()
    }
}

impl Backend for Cypress {
    fn id(&self) -> &'static str {
        "cypress"
    }

    fn label(&self) -> &'static str {
        "Cypress"
    }

    fn file_suffix(&self) -> &'static str {
        "cy.js"
    }

    fn indent(&self) -> &'static str {
        "    "
    }

    fn statement(&self, action: &RecordedEvent, target: &str) -> Option<String> {
        let el = subject(target);
        let value = sq(value_of(action));
        let line = match &action.kind {
            EventKind::Click => format!("{el}.click();"),
            EventKind::Type | EventKind::Input => match field_kind(target) {
                FieldKind::Select => format!("{el}.select({value});"),
                FieldKind::Text if value_of(action).is_empty() => format!("{el}.clear();"),
                FieldKind::Text => format!("{el}.clear().type({value});"),
            },
            EventKind::Change => match field_kind(target) {
                FieldKind::Select => format!("{el}.select({value});"),
                FieldKind::Text => format!("{el}.invoke('val', {value}).trigger('change');"),
            },
            EventKind::DblClick => format!("{el}.dblclick();"),
            EventKind::ContextMenu => format!("{el}.rightclick();"),
            EventKind::KeyPress => {
                format!("cy.focused().type({});", sq(&key_sequence(value_of(action))))
            }
            EventKind::WaitForTimeout => format!("cy.wait({});", wait_millis(action)?),
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
import {{ initiateCypressIntercepts }} from {helper};

describe({name}, () => {{
  beforeEach(() => {{
    initiateCypressIntercepts(
      cy,
      {{
        MOCK_DIR: {mock_dir},
        FALLBACK_DIR: {fallback_dir},
      }},
      {name}
    );
  }});

  afterEach(() => {{
    cy.clearLocalStorage();
  }});

  it({name}, () => {{
    cy.visit({url});
{body}
  }});
}});
",
            helper = sq(&ctx.helper_package),
            mock_dir = sq(&ctx.mock_dir),
            fallback_dir = sq(&ctx.fallback_dir),
            url = sq(start_url),
        )
    }
}
