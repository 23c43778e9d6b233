//! Immutable snapshot of form state.
//!
//! ## Summary
//! The UI hands over a flat mapping of field name to current value. The
//! snapshot is taken once per generation call and is the only input the
//! collectors read.

mod collect;
pub mod fields;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};

pub use collect::{collect_contact, collect_event};

/// A single form value: text inputs, checkboxes, numeric inputs some clients
/// send unquoted, and `null` for cleared inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(i64),
    Text(String),
    Empty,
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Field name to value. Absent fields read as empty text or `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState {
    fields: BTreeMap<String, FieldValue>,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Decodes a JSON object of field name to string, boolean or integer.
    ///
    /// ## Errors
    /// Returns `InvalidFormState` if the body is not such an object.
    pub fn from_json(body: &[u8]) -> ServiceResult<Self> {
        serde_json::from_slice(body).map_err(|e| ServiceError::InvalidFormState(e.to_string()))
    }

    /// Builder-style insert, mostly for tests and programmatic callers.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Trimmed text of `name`; empty when absent.
    #[must_use]
    pub fn text(&self, name: &str) -> String {
        match self.fields.get(name) {
            Some(FieldValue::Text(s)) => s.trim().to_string(),
            Some(FieldValue::Number(n)) => n.to_string(),
            Some(FieldValue::Flag(_) | FieldValue::Empty) | None => String::new(),
        }
    }

    /// Trimmed, lower-cased address of `name`.
    /// The local part is lower-cased as well.
    #[must_use]
    pub fn email(&self, name: &str) -> String {
        self.text(name).to_lowercase()
    }

    /// Checkbox state of `name`. Text values `true`, `on`, `yes` and `1`
    /// count as checked.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        match self.fields.get(name) {
            Some(FieldValue::Flag(b)) => *b,
            Some(FieldValue::Number(n)) => *n != 0,
            Some(FieldValue::Text(s)) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "true" | "on" | "yes" | "1"
            ),
            Some(FieldValue::Empty) | None => false,
        }
    }
}
