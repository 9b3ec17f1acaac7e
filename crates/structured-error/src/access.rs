//! Queries over a generic error.
//!
//! Every function takes `Option<&(dyn Error + 'static)>`, with `None` standing
//! for "no error". Only an error whose concrete type is [`StructuredError`]
//! matches; wrappers that merely expose one through `source()` do not. On no
//! match each function returns its default (0, false, empty) instead of
//! failing, so handlers that only care about the effective code or fields
//! need not branch on where the error came from.

use std::error::Error;

use crate::error::StructuredError;
use crate::field::FieldError;

pub(crate) fn downcast<'a>(
    err: Option<&'a (dyn Error + 'static)>,
) -> Option<&'a StructuredError> {
    err?.downcast_ref::<StructuredError>()
}

/// Recovers the structured error behind `err`.
///
/// Returns the error's own code, message and fields with `true`, or the
/// zero value with `false` when `err` is absent or of another type.
///
/// ```
/// use structured_error::{parse, FieldError, StructuredError};
///
/// let err: Box<dyn std::error::Error> = Box::new(StructuredError::new(
///     400,
///     "bad request",
///     &[FieldError::new("name", "required")],
/// ));
/// let (parsed, ok) = parse(Some(&*err));
/// assert!(ok);
/// assert_eq!(parsed.code(), 400);
///
/// let (parsed, ok) = parse(None);
/// assert!(!ok && parsed.is_empty());
/// ```
pub fn parse(err: Option<&(dyn Error + 'static)>) -> (StructuredError, bool) {
    match downcast(err) {
        Some(structured) => (structured.clone(), true),
        None => (StructuredError::default(), false),
    }
}

/// Code of a structured error, 0 otherwise.
pub fn code_of(err: Option<&(dyn Error + 'static)>) -> i64 {
    downcast(err).map_or(0, StructuredError::code)
}

/// True only when `err` is a structured error whose code equals `code`.
pub fn is_code_equal(err: Option<&(dyn Error + 'static)>, code: i64) -> bool {
    downcast(err).is_some_and(|structured| structured.code() == code)
}

/// True when `err` is a structured error with at least one field failure.
pub fn has_fields(err: Option<&(dyn Error + 'static)>) -> bool {
    downcast(err).is_some_and(|structured| !structured.fields().is_empty())
}

/// Owned copy of the field failures; empty (and unallocated) when there are
/// none or `err` is not structured.
pub fn fields_of(err: Option<&(dyn Error + 'static)>) -> Vec<FieldError> {
    downcast(err)
        .map(|structured| structured.fields().to_vec())
        .unwrap_or_default()
}

/// True when some field failure is recorded under `name`.
pub fn has_field(err: Option<&(dyn Error + 'static)>, name: &str) -> bool {
    downcast(err).is_some_and(|structured| structured.first_field(name).is_some())
}

/// Message of the first field failure recorded under `name`, or an empty
/// string.
pub fn field_message(err: Option<&(dyn Error + 'static)>, name: &str) -> String {
    downcast(err)
        .and_then(|structured| structured.first_field(name))
        .map(|field| field.message().to_owned())
        .unwrap_or_default()
}

/// Number of field failures, 0 when `err` is not structured.
pub fn field_count(err: Option<&(dyn Error + 'static)>) -> usize {
    downcast(err).map_or(0, |structured| structured.fields().len())
}
