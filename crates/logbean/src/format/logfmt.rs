//! Logfmt line encoding
//!
//! Values that would break tokenization (whitespace, `=`, `"`, control
//! characters, or the empty string) are written as JSON string literals.
//! Keys cannot be quoted, so offending characters are replaced with `_`.

use std::fmt::Write as _;

use super::{Record, Value};

pub(super) fn encode(record: &Record, buf: &mut Vec<u8>) {
    let mut line = String::with_capacity(64 * record.len());
    for (i, (key, value)) in record.fields().iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        push_key(&mut line, key);
        line.push('=');
        push_value(&mut line, value);
    }
    buf.extend_from_slice(line.as_bytes());
}

fn is_special(c: char) -> bool {
    c == '=' || c == '"' || c.is_whitespace() || c.is_control()
}

fn needs_quotes(s: &str) -> bool {
    s.is_empty() || s.chars().any(is_special)
}

fn push_key(line: &mut String, key: &str) {
    if key.is_empty() {
        line.push('_');
        return;
    }
    line.extend(key.chars().map(|c| if is_special(c) { '_' } else { c }));
}

fn push_value(line: &mut String, value: &Value) {
    match value {
        Value::String(s) => push_str(line, s),
        Value::Array(_) | Value::Object(_) => push_str(line, &value.to_string()),
        Value::Null | Value::Bool(_) | Value::Number(_) => {
            let _ = write!(line, "{value}");
        }
    }
}

fn push_str(line: &mut String, s: &str) {
    if !needs_quotes(s) {
        line.push_str(s);
        return;
    }
    // Serializing a str cannot fail.
    if let Ok(quoted) = serde_json::to_string(s) {
        line.push_str(&quoted);
    }
}
