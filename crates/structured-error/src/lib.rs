//! Coded error values with field-level validation failures.
//!
//! A [`StructuredError`] carries a caller-defined integer code (usually an
//! HTTP status), a human-readable message and an ordered list of
//! [`FieldError`]s. It implements [`std::error::Error`], so it travels through
//! ordinary `?` propagation as a boxed or borrowed `dyn Error`; the free
//! functions in [`access`] recover the structured detail at a boundary
//! without the caller having to downcast.
//!
//! Core invariants:
//! - Values are immutable once built; every extraction hands out an owned copy
//! - Field order is preserved and lookups by name return the first match
//! - Accessors are total: a non-structured or absent error yields a default
//!
#![deny(missing_docs)]

/// Free functions that interrogate a generic error.
pub mod access;
/// The aggregate error value.
pub mod error;
/// Single field-level validation failure.
pub mod field;
/// Boundary logging through `tracing`.
pub mod report;

pub use access::{
    code_of, field_count, field_message, fields_of, has_field, has_fields, is_code_equal, parse,
};
pub use error::StructuredError;
pub use field::FieldError;
pub use report::report;

/// Builds a [`StructuredError`] from a code, a message and any number of
/// `(field, message)` pairs.
///
/// ```
/// use structured_error::structured_error;
///
/// let err = structured_error!(422, "validation failed";
///     ("email", "invalid format"),
///     ("age", "must be positive"),
/// );
/// assert_eq!(err.fields().len(), 2);
///
/// let plain = structured_error!(404, "not found");
/// assert!(plain.fields().is_empty());
/// ```
#[macro_export]
macro_rules! structured_error {
    ($code:expr, $message:expr $(,)?) => {
        $crate::StructuredError::new($code, $message, &[])
    };
    ($code:expr, $message:expr; $(($field:expr, $field_message:expr)),+ $(,)?) => {
        $crate::StructuredError::from_fields(
            $code,
            $message,
            [$($crate::FieldError::new($field, $field_message)),+],
        )
    };
}
