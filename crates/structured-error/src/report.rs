//! One-line `tracing` events for errors reaching a boundary.

use std::error::Error;

use crate::access::downcast;
use crate::field::FieldError;

/// Emits a single `tracing` event describing `err` and returns its
/// effective code (see [`crate::code_of`]).
///
/// Structured errors are logged with their code, field count and fields;
/// codes of 500 and above go out at `ERROR`, everything else at `WARN`.
/// Other errors are logged at `ERROR` with their display text. `None` logs
/// nothing.
pub fn report(err: Option<&(dyn Error + 'static)>) -> i64 {
    let Some(source) = err else {
        return 0;
    };

    match downcast(err) {
        Some(structured) => {
            let code = structured.code();
            let field_count = structured.fields().len();
            let fields = render_fields(structured.fields());
            if code >= 500 {
                tracing::error!(
                    code,
                    field_count,
                    fields = %fields,
                    "{}",
                    structured.message()
                );
            } else {
                tracing::warn!(
                    code,
                    field_count,
                    fields = %fields,
                    "{}",
                    structured.message()
                );
            }
            code
        }
        None => {
            tracing::error!(error = %source, "unstructured error");
            0
        }
    }
}

fn render_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|field| format!("{}: {}", field.field(), field.message()))
        .collect::<Vec<_>>()
        .join("; ")
}
