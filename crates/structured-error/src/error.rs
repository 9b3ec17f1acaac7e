use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::FieldError;

/// Error value carrying a code, a message and ordered field failures.
///
/// `Display` renders only the message, so the value reads naturally when it
/// is logged or wrapped as a plain error. `Debug` renders the full detail in
/// a stable form suitable for snapshot assertions:
///
/// ```text
/// StructuredError{Code: 422, Message: "validation failed", Fields: [{Field: "email", Message: "invalid format"}]}
/// ```
///
/// The zero value (`StructuredError::default()`) is only detectable through
/// [`StructuredError::is_empty`]; a constructed error with code 0 is a
/// legitimate value everywhere else.
#[derive(Error, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[error("{message}")]
pub struct StructuredError {
    code: i64,
    message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldError>,
}

impl StructuredError {
    /// Creates an error, copying `fields` so later changes to the caller's
    /// collection never reach the stored value.
    ///
    /// An empty slice leaves the error in the unallocated "no fields" state.
    pub fn new(code: i64, message: impl Into<String>, fields: &[FieldError]) -> Self {
        Self {
            code,
            message: message.into(),
            fields: fields.to_vec(),
        }
    }

    /// Creates an error taking ownership of `fields` in iteration order.
    pub fn from_fields(
        code: i64,
        message: impl Into<String>,
        fields: impl IntoIterator<Item = FieldError>,
    ) -> Self {
        let mut fields: Vec<FieldError> = fields.into_iter().collect();
        fields.shrink_to_fit();
        Self {
            code,
            message: message.into(),
            fields,
        }
    }

    /// Caller-defined classification, commonly an HTTP status.
    pub fn code(&self) -> i64 {
        self.code
    }

    /// Primary human-readable description.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Field failures in insertion order.
    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }

    /// Consumes the error, returning its field failures.
    pub fn into_fields(self) -> Vec<FieldError> {
        self.fields
    }

    /// First field failure recorded under `name` (exact, case-sensitive).
    pub fn first_field(&self, name: &str) -> Option<&FieldError> {
        self.fields.iter().find(|field| field.field() == name)
    }

    /// Returns true for the zero value: code 0, empty message, no fields.
    pub fn is_empty(&self) -> bool {
        self.code == 0 && self.message.is_empty() && self.fields.is_empty()
    }
}

impl fmt::Debug for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StructuredError{{Code: {}, Message: {:?}",
            self.code, self.message
        )?;
        if !self.fields.is_empty() {
            f.write_str(", Fields: [")?;
            for (idx, field) in self.fields.iter().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                write!(
                    f,
                    "{{Field: {:?}, Message: {:?}}}",
                    field.field(),
                    field.message()
                )?;
            }
            f.write_str("]")?;
        }
        f.write_str("}")
    }
}
