use std::error::Error;

use structured_error::{
    code_of, field_count, field_message, fields_of, has_field, has_fields, is_code_equal, parse,
    report, structured_error, FieldError, StructuredError,
};

const BAD_REQUEST: i64 = 400;

fn main() {
    tracing_subscriber::fmt::init();

    let basic = StructuredError::new(500, "Internal server error", &[]);
    println!("[new] {}", basic);

    let field = FieldError::new("username", "Username is required");
    println!("[field] {}: {}", field.field(), field.message());

    let multi = structured_error!(422, "Validation failed";
        ("email", "Invalid email format"),
        ("password", "Password too short"),
    );
    println!("[debug] {:?}", multi);

    let multi_ref: Option<&(dyn Error + 'static)> = Some(&multi);
    let basic_ref: Option<&(dyn Error + 'static)> = Some(&basic);
    let plain: Box<dyn Error + Send + Sync> = "not a structured error".into();
    let plain_ref: Option<&(dyn Error + 'static)> = Some(&*plain);

    if let (parsed, true) = parse(multi_ref) {
        println!("[parse] code {}, message {}", parsed.code(), parsed.message());
    }
    if let (_, false) = parse(plain_ref) {
        println!("[parse] not a structured error");
    }

    println!("[code_of] {} / {}", code_of(multi_ref), code_of(plain_ref));
    println!(
        "[is_code_equal] 422: {}, 400: {}",
        is_code_equal(multi_ref, 422),
        is_code_equal(multi_ref, 400)
    );
    println!(
        "[has_fields] multi: {}, basic: {}",
        has_fields(multi_ref),
        has_fields(basic_ref)
    );
    for field in fields_of(multi_ref) {
        println!("[fields_of] {}: {}", field.field(), field.message());
    }
    println!(
        "[has_field] email: {}, phone: {}",
        has_field(multi_ref, "email"),
        has_field(multi_ref, "phone")
    );
    println!(
        "[field_message] email: {:?}, phone: {:?}",
        field_message(multi_ref, "email"),
        field_message(multi_ref, "phone")
    );
    println!(
        "[field_count] multi: {}, basic: {}",
        field_count(multi_ref),
        field_count(basic_ref)
    );
    println!(
        "[is_empty] default: {}, multi: {}",
        StructuredError::default().is_empty(),
        multi.is_empty()
    );

    let request = structured_error!(BAD_REQUEST, "Request failed";
        ("username", "Username is required"),
        ("email", "Invalid email format"),
    );
    let request_ref: Option<&(dyn Error + 'static)> = Some(&request);
    if is_code_equal(request_ref, BAD_REQUEST) {
        println!("[request] bad request detected");
    }
    if has_field(request_ref, "email") {
        println!("[request] email: {}", field_message(request_ref, "email"));
    }
    report(request_ref);
    report(plain_ref);
}
