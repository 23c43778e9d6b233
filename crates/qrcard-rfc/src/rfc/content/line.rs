//! Content lines and their values.

use super::escape::{escape_param_value, escape_text};

/// Value of a content line. Escaping is decided by the variant and applied
/// once, when the line is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Free text, TEXT-escaped on output.
    Text(String),
    /// Semicolon-separated structured value (N, ADR); every component is
    /// escaped on its own.
    Structured(Vec<String>),
    /// `mailto:` calendar user address.
    Mailto(String),
    /// Emitted verbatim: version markers, date tokens, URIs.
    Raw(String),
}

impl Value {
    /// Whether the value carries no user data.
    ///
    /// A structured value is empty only when every component is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) | Self::Mailto(s) | Self::Raw(s) => s.is_empty(),
            Self::Structured(parts) => parts.iter().all(String::is_empty),
        }
    }

    fn render(&self, out: &mut String) {
        match self {
            Self::Text(s) => out.push_str(&escape_text(s)),
            Self::Structured(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        out.push(';');
                    }
                    out.push_str(&escape_text(part));
                }
            }
            Self::Mailto(address) => {
                out.push_str("mailto:");
                push_verbatim(address, out);
            }
            Self::Raw(s) => push_verbatim(s, out),
        }
    }
}

/// Verbatim values still must not break the line structure.
fn push_verbatim(s: &str, out: &mut String) {
    out.extend(s.chars().filter(|c| !matches!(c, '\r' | '\n')));
}

/// A `NAME=value` property parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

/// One `NAME;PARAM=value:VALUE` content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    pub name: String,
    pub params: Vec<Parameter>,
    pub value: Value,
}

impl ContentLine {
    #[must_use]
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            value,
        }
    }

    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, Value::Text(value.into()))
    }

    #[must_use]
    pub fn raw(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, Value::Raw(value.into()))
    }

    #[must_use]
    pub fn structured<I, S>(name: impl Into<String>, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            Value::Structured(components.into_iter().map(Into::into).collect()),
        )
    }

    /// Adds a parameter. Parameters with an empty value are never rendered.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(Parameter {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Renders the line without its terminator.
    #[must_use]
    pub fn render(&self) -> String {
        let mut line = self.name.clone();
        for param in self.params.iter().filter(|p| !p.value.is_empty()) {
            line.push(';');
            line.push_str(&param.name);
            line.push('=');
            line.push_str(&escape_param_value(&param.value));
        }
        line.push(':');
        self.value.render(&mut line);
        line
    }
}
