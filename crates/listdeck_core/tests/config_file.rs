use listdeck_core::{AppConfig, ConfigError};
use std::fs;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn file_values_are_loaded_and_resolved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let db_path = dir.path().join("data.sqlite3");
    fs::write(
        &path,
        format!(
            "[storage]\ndb_path = {db:?}\n\n[logging]\nlevel = \"warn\"\n\n[dashboard]\npass_mark = 50.0\n\n[remote]\ntimeout_secs = 5\n",
            db = db_path.display().to_string()
        ),
    )
    .unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    assert_eq!(config.resolved_db_path(), db_path);
    assert_eq!(config.resolved_log_level(), "warn");
    assert_eq!(config.dashboard.pass_mark, 50.0);
    assert_eq!(config.remote_timeout().as_secs(), 5);
    assert_eq!(config.remote.endpoint, "https://randomuser.me/api/");
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[dashboard\npass_mark = ").unwrap();

    let err = AppConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn serialized_config_parses_back() {
    let mut config = AppConfig::default();
    config.logging.level = "error".to_string();
    let source = config.to_toml().unwrap();
    assert_eq!(AppConfig::from_toml(&source).unwrap(), config);
}

#[test]
fn empty_settings_resolve_to_platform_defaults() {
    let config = AppConfig::default();
    assert!(config.resolved_db_path().ends_with("listdeck/listdeck.sqlite3"));
    assert!(config.resolved_log_dir().ends_with("listdeck/logs"));
    assert!(!config.resolved_log_level().is_empty());
}

#[test]
fn invalid_key_is_reset_and_other_values_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[logging]\nlevel = \"error\"\n\n[dashboard]\npass_mark = 140\n\n[remote]\ntimeout_secs = 7\n",
    )
    .unwrap();

    assert!(matches!(
        AppConfig::load_from(&path).unwrap_err(),
        ConfigError::Invalid(_)
    ));

    let (config, rejected) = AppConfig::load_repaired(&path).unwrap();
    assert_eq!(rejected.len(), 1);
    assert!(rejected[0].contains("dashboard.pass_mark"));
    assert_eq!(config.dashboard.pass_mark, 40.0);
    assert_eq!(config.resolved_log_level(), "error");
    assert_eq!(config.remote_timeout().as_secs(), 7);
}

#[test]
fn repaired_load_of_missing_file_is_clean() {
    let dir = tempfile::tempdir().unwrap();
    let (config, rejected) = AppConfig::load_repaired(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
    assert!(rejected.is_empty());
}
