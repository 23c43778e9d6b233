//! Ordered document assembly.

use std::fmt;

use qrcard_core::types::DocumentKind;

use super::line::ContentLine;

/// Line terminator mandated by both RFC 6350 and RFC 5545.
pub const CRLF: &str = "\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Inclusion {
    Always,
    WhenPresent,
}

/// Collects content lines in output order.
///
/// Optional lines are kept in place and filtered at [`build`](Self::build)
/// time, so the relative order of every emitted line is fixed by push order
/// alone.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    kind: DocumentKind,
    entries: Vec<(Inclusion, ContentLine)>,
}

impl DocumentBuilder {
    #[must_use]
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    /// Appends a line that is emitted even when its value is empty.
    pub fn push(&mut self, line: ContentLine) -> &mut Self {
        self.entries.push((Inclusion::Always, line));
        self
    }

    /// Appends a line that is omitted when its value is empty.
    pub fn push_optional(&mut self, line: ContentLine) -> &mut Self {
        self.entries.push((Inclusion::WhenPresent, line));
        self
    }

    /// Appends `BEGIN:<component>`.
    pub fn begin(&mut self, component: &str) -> &mut Self {
        self.push(ContentLine::raw("BEGIN", component))
    }

    /// Appends `END:<component>`.
    pub fn end(&mut self, component: &str) -> &mut Self {
        self.push(ContentLine::raw("END", component))
    }

    /// Renders every retained line, each terminated by CRLF.
    #[must_use]
    pub fn build(&self) -> SerializedDocument {
        let mut text = String::new();
        let mut omitted = 0_usize;
        for (inclusion, line) in &self.entries {
            if *inclusion == Inclusion::WhenPresent && line.value.is_empty() {
                omitted += 1;
                continue;
            }
            text.push_str(&line.render());
            text.push_str(CRLF);
        }
        tracing::trace!(
            kind = %self.kind,
            lines = self.entries.len() - omitted,
            omitted,
            "Document assembled"
        );
        SerializedDocument {
            kind: self.kind,
            text,
        }
    }
}

/// A finished vCard or iCalendar document.
///
/// Always CRLF-separated with a trailing CRLF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedDocument {
    kind: DocumentKind,
    text: String,
}

impl SerializedDocument {
    #[must_use]
    pub const fn kind(&self) -> DocumentKind {
        self.kind
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Lines without terminators, in document order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text
            .strip_suffix(CRLF)
            .unwrap_or(&self.text)
            .split(CRLF)
            .filter(|line| !line.is_empty())
    }

    /// Media type with charset, suitable for a `Content-Type` header.
    #[must_use]
    pub fn content_type(&self) -> String {
        format!("{}; charset=utf-8", self.kind.media_type())
    }
}

impl fmt::Display for SerializedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
