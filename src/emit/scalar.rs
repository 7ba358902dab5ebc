//! YAML scalar styling: plain when unambiguous, otherwise quoted.

use std::borrow::Cow;

/// Where the scalar appears; flow sequences forbid flow indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Block,
    Flow,
}

/// Render a string scalar so it reads back as the same string.
pub fn scalar(value: &str, ctx: Context) -> Cow<'_, str> {
    if needs_double_quotes(value) {
        Cow::Owned(double_quoted(value))
    } else if is_plain_safe(value, ctx) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("'{}'", value.replace('\'', "''")))
    }
}

/// Render a flow sequence of strings, e.g. `[a, '0', b, '0']`.
pub fn flow_sequence<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let rendered: Vec<Cow<'_, str>> = items
        .into_iter()
        .map(|s| scalar(s, Context::Flow))
        .collect();
    format!("[{}]", rendered.join(", "))
}

/// Characters a YAML 1.1 reader treats as line breaks besides `\n` and `\r`.
const UNICODE_BREAKS: [(char, &str); 3] = [
    ('\u{85}', "\\N"),
    ('\u{2028}', "\\u2028"),
    ('\u{2029}', "\\u2029"),
];

fn needs_double_quotes(value: &str) -> bool {
    value
        .chars()
        .any(|c| c.is_control() || UNICODE_BREAKS.iter().any(|(b, _)| *b == c))
}

/// A JSON string is a valid double-quoted scalar once the extra breaks,
/// which JSON leaves raw, are escaped.
fn double_quoted(value: &str) -> String {
    let mut quoted = serde_json::Value::String(value.to_string()).to_string();
    for (raw, escape) in UNICODE_BREAKS {
        if quoted.contains(raw) {
            quoted = quoted.replace(raw, escape);
        }
    }
    quoted
}

fn is_plain_safe(value: &str, ctx: Context) -> bool {
    let Some(first) = value.chars().next() else {
        return false;
    };
    if value.starts_with([' ', '\t']) || value.ends_with([' ', '\t']) {
        return false;
    }

    // `-`, `?` and `:` may open a plain scalar only when followed by a non-space.
    let second = value[first.len_utf8()..].chars().next();
    match first {
        '-' | '?' | ':' => {
            if matches!(second, None | Some(' ')) {
                return false;
            }
        }
        ',' | '[' | ']' | '{' | '}' | '#' | '&' | '*' | '!' | '|' | '>' | '\'' | '"' | '%'
        | '@' | '`' => return false,
        _ => {}
    }

    if value.contains(": ") || value.contains(" #") || value.ends_with(':') {
        return false;
    }
    if ctx == Context::Flow && value.contains([',', '[', ']', '{', '}']) {
        return false;
    }

    !resolves_to_other_type(value)
}

/// True when a plain scalar would be read back as a bool, null or number.
fn resolves_to_other_type(value: &str) -> bool {
    const WORDS: &[&str] = &[
        "y", "Y", "yes", "Yes", "YES", "n", "N", "no", "No", "NO", "true", "True", "TRUE",
        "false", "False", "FALSE", "on", "On", "ON", "off", "Off", "OFF", "~", "null", "Null",
        "NULL", "<<", "=",
    ];
    if WORDS.contains(&value) {
        return true;
    }

    let unsigned = value.trim_start_matches(['+', '-']);
    let lower = unsigned.to_ascii_lowercase();
    if lower == ".inf" || lower == ".nan" {
        return true;
    }
    if lower.starts_with("0x") || lower.starts_with("0o") || lower.starts_with("0b") {
        return true;
    }

    // Ints, floats, sexagesimals and timestamps share this alphabet.
    value.chars().any(|c| c.is_ascii_digit())
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | '_' | ':' | 'e' | 'E'))
}
