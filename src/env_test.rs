use super::*;
use serial_test::serial;

#[test]
#[serial]
fn test_get_existing_var() {
    std::env::set_var("JTP_TEST_ENV_VAR", "test_value");
    assert_eq!(EnvVar::get("JTP_TEST_ENV_VAR"), Some("test_value".to_string()));
    std::env::remove_var("JTP_TEST_ENV_VAR");
}

#[test]
#[serial]
fn test_get_empty_var() {
    std::env::set_var("JTP_TEST_EMPTY_VAR", "");
    assert_eq!(EnvVar::get("JTP_TEST_EMPTY_VAR"), None);
    std::env::remove_var("JTP_TEST_EMPTY_VAR");
}

#[test]
fn test_get_nonexistent_var() {
    assert_eq!(EnvVar::get("JTP_NONEXISTENT_VAR_12345"), None);
}
