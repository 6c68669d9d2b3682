use super::*;
use serial_test::serial;

#[test]
fn default_values() {
    let config = Config::default();
    assert_eq!(config.page_size, 10);
    assert!(config.paginate);
    assert_eq!(config.debounce(), Duration::from_millis(120));
    assert_eq!(config.export_dir(), PathBuf::from("."));
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "page_size = 25\nexport_dir = \"/tmp/out\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.page_size, 25);
    assert!(config.paginate);
    assert_eq!(config.export_dir(), PathBuf::from("/tmp/out"));
}

#[test]
fn zero_page_size_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "page_size = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, JtpError::Config(_)));
}

#[test]
fn malformed_toml_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "page_size = \"many\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, JtpError::Toml(_)));
}

#[test]
#[serial]
fn env_var_overrides_default_path() {
    std::env::set_var(CONFIG_ENV, "/custom/jtp.toml");
    assert_eq!(Config::default_path(), Some(PathBuf::from("/custom/jtp.toml")));
    std::env::remove_var(CONFIG_ENV);
}
