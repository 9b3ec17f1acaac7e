use serde::{Deserialize, Serialize};

/// A validation failure tied to one named input.
///
/// Both parts are stored exactly as given; empty strings are valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FieldError {
    field: String,
    message: String,
}

impl FieldError {
    /// Creates a field error for `field` explaining what went wrong.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the input that failed validation.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Human-readable explanation of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<F, M> From<(F, M)> for FieldError
where
    F: Into<String>,
    M: Into<String>,
{
    fn from((field, message): (F, M)) -> Self {
        Self::new(field, message)
    }
}
