//! TEXT value escaping (RFC 6350 §3.4, RFC 5545 §3.3.11).

/// Escapes a raw value for embedding as a single TEXT value.
///
/// Backslash, semicolon, comma and line breaks are escaped. CRLF, lone LF and
/// lone CR each become a single `\n`. Colons are left alone. Apply exactly
/// once per raw value: escaping already-escaped text doubles every backslash.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 8);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            '\r' => {
                chars.next_if_eq(&'\n');
                result.push_str("\\n");
            }
            _ => result.push(c),
        }
    }
    result
}

/// Escapes a parameter value if needed.
///
/// Returns the value quoted, with RFC 6868 caret encoding, if it contains
/// characters the parameter grammar reserves. Line breaks become `^n`; other
/// control characters except tab are dropped.
#[must_use]
pub fn escape_param_value(s: &str) -> String {
    if !needs_quoting(s) {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len() + 4);
    result.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '^' => result.push_str("^^"),
            '\n' => result.push_str("^n"),
            '\r' => {
                chars.next_if_eq(&'\n');
                result.push_str("^n");
            }
            '"' => result.push_str("^'"),
            c if is_disallowed_control(c) => {}
            _ => result.push(c),
        }
    }
    result.push('"');
    result
}

fn needs_quoting(s: &str) -> bool {
    s.chars()
        .any(|c| matches!(c, ':' | ';' | ',' | '"' | '^') || is_disallowed_control(c))
}

/// Controls a parameter value may not carry raw. Tab is whitespace and stays.
fn is_disallowed_control(c: char) -> bool {
    c.is_control() && c != '\t'
}
