//! String literals and small inferences shared by the backends.

use crate::model::RecordedEvent;

/// The kind of form field a target most likely points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    Select,
    Text,
}

/// Infers the field kind from the last step of an XPath or CSS selector.
pub(crate) fn field_kind(target: &str) -> FieldKind {
    if target.contains("getByRole('combobox'") || target.contains("getByRole(\"combobox\"") {
        return FieldKind::Select;
    }
    let last_step = target.rsplit(['/', ' ', '>']).find(|step| !step.is_empty()).unwrap_or("");
    let tag: String = last_step.chars().take_while(char::is_ascii_alphabetic).collect();
    if tag.eq_ignore_ascii_case("select") {
        FieldKind::Select
    } else {
        FieldKind::Text
    }
}

/// Whether a target is an XPath expression rather than a CSS selector.
pub(crate) fn is_xpath(target: &str) -> bool {
    target.starts_with('/') || target.starts_with("(/")
}

/// JavaScript string literal with the given quote character.
pub(crate) fn js_string(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Single-quoted JavaScript literal.
pub(crate) fn sq(value: &str) -> String {
    js_string(value, '\'')
}

/// Double-quoted JavaScript literal. Used for selectors, which often
/// contain single quotes.
pub(crate) fn dq(value: &str) -> String {
    js_string(value, '"')
}

/// Text for a single-line comment: line breaks become spaces.
pub(crate) fn comment_text(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Robot Framework cell: escapes backslashes, variable syntax and line
/// breaks, and breaks up runs of spaces that would otherwise split the cell.
pub(crate) fn robot_cell(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace("${", "\\${").replace("@{", "\\@{");
    let escaped = escaped.replace('\n', "\\n").replace('\r', "\\r");
    let escaped = escaped.replace("  ", " \\ ");
    if escaped.is_empty() {
        "${EMPTY}".to_string()
    } else {
        escaped
    }
}

/// Wait duration in milliseconds for a `waitForTimeout` action.
pub(crate) fn wait_millis(action: &RecordedEvent) -> Option<u64> {
    action.value.as_deref()?.trim().parse().ok()
}

/// Value typed or selected by an action; empty when not recorded.
pub(crate) fn value_of(action: &RecordedEvent) -> &str {
    action.value.as_deref().unwrap_or("")
}

/// Comment body marking where a network mutation happened.
pub(crate) fn separator(action: &RecordedEvent) -> String {
    comment_text(&format!("---------- {} {} ----------", action.kind, action.target))
}
