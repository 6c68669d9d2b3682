use super::*;

#[test]
fn io_error_maps_to_io_code() {
    let err: JtpError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
    assert_eq!(err.code(), ErrorCode::Io001);
}

#[test]
fn json_error_maps_to_json_code() {
    let err: JtpError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
    assert_eq!(err.code(), ErrorCode::Jsn001);
    assert!(err.to_string().starts_with("JSON parse error"));
}

#[test]
fn display_with_code_prefixes_code() {
    let err = JtpError::UnknownColumn("age".to_string());
    assert_eq!(
        err.display_with_code(),
        "[COL001] Unknown column: age. Use a 0-based index or a header label"
    );
}
