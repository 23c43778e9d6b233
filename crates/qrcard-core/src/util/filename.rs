//! Download filename derivation.
//!
//! ## Summary
//! Turns a free-text record name into a filesystem-safe base name. Whitespace
//! runs become a single underscore and anything outside `[A-Za-z0-9_-]` is
//! dropped; a name that ends up empty falls back to the document kind's
//! placeholder.

use crate::types::DocumentKind;

/// Derive the base filename (no extension) for a record name.
///
/// Examples:
/// - "Ada Lovelace" -> "Ada_Lovelace"
/// - "  Team   Sync! " -> "Team_Sync"
/// - "" -> "Contact" (vCard) / "Event" (iCalendar)
#[must_use]
pub fn base_name(name: &str, kind: DocumentKind) -> String {
    let mut base = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                base.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            base.push(c);
        }
    }

    if base.is_empty() {
        kind.placeholder_name().to_string()
    } else {
        base
    }
}

/// Derive a complete filename: base name, `suffix`, then `.extension`.
#[must_use]
pub fn derive_filename(name: &str, kind: DocumentKind, suffix: &str, extension: &str) -> String {
    format!("{}{suffix}.{extension}", base_name(name, kind))
}

/// Filename for the serialized document itself (`.vcf` / `.ics`).
#[must_use]
pub fn document_filename(name: &str, kind: DocumentKind) -> String {
    derive_filename(name, kind, "", kind.extension())
}
