use serde_json::json;
use structured_error::{structured_error, FieldError, StructuredError};

#[test]
fn debug_without_fields() {
    let err = StructuredError::new(404, "not found", &[]);
    assert_eq!(
        format!("{:?}", err),
        r#"StructuredError{Code: 404, Message: "not found"}"#
    );
}

#[test]
fn debug_with_fields() {
    let err = structured_error!(422, "validation failed";
        ("email", "invalid format"),
        ("age", "must be positive"),
    );
    assert_eq!(
        format!("{:?}", err),
        r#"StructuredError{Code: 422, Message: "validation failed", Fields: [{Field: "email", Message: "invalid format"}, {Field: "age", Message: "must be positive"}]}"#
    );
}

#[test]
fn debug_escapes_quotes_and_backslashes() {
    let err = StructuredError::new(
        400,
        r#"bad "value""#,
        &[FieldError::new(r"path\to", "line\nbreak")],
    );
    assert_eq!(
        format!("{:?}", err),
        r#"StructuredError{Code: 400, Message: "bad \"value\"", Fields: [{Field: "path\\to", Message: "line\nbreak"}]}"#
    );
}

#[test]
fn debug_of_zero_value() {
    assert_eq!(
        format!("{:?}", StructuredError::default()),
        r#"StructuredError{Code: 0, Message: ""}"#
    );
    assert_eq!(
        format!("{:?}", StructuredError::new(-1, "negative", &[])),
        r#"StructuredError{Code: -1, Message: "negative"}"#
    );
}

#[test]
fn debug_is_deterministic() {
    let err = structured_error!(400, "bad"; ("a", "1"), ("b", "2"));
    assert_eq!(format!("{:?}", err), format!("{:?}", err.clone()));
}

#[test]
fn serializes_without_empty_fields() {
    let err = StructuredError::new(404, "not found", &[]);
    assert_eq!(
        serde_json::to_string(&err).unwrap(),
        r#"{"code":404,"message":"not found"}"#
    );
}

#[test]
fn serializes_fields_in_order() {
    let err = structured_error!(422, "validation failed";
        ("email", "invalid format"),
        ("age", "must be positive"),
    );
    let expected = json!({
        "code": 422,
        "message": "validation failed",
        "fields": [
            { "field": "email", "message": "invalid format" },
            { "field": "age", "message": "must be positive" }
        ]
    });
    assert_eq!(serde_json::to_value(&err).unwrap(), expected);
}

#[test]
fn deserializes_missing_fields_as_none() {
    let err: StructuredError =
        serde_json::from_str(r#"{"code":500,"message":"internal"}"#).unwrap();
    assert_eq!(err, StructuredError::new(500, "internal", &[]));

    let err: StructuredError =
        serde_json::from_str(r#"{"code":0,"message":"","fields":[]}"#).unwrap();
    assert!(err.is_empty());
}
