use super::*;

#[test]
fn error_body_passes_text_through() {
    let text: Result<String, String> = Ok("project not found".to_string());
    assert_eq!(error_body("fetch project", text), "project not found");
}

#[test]
fn unreadable_error_body_names_the_read_failure() {
    let text: Result<String, String> = Err("connection reset".to_string());
    assert_eq!(
        error_body("fetch project", text),
        "<unreadable response body: connection reset>"
    );
}
