use std::path::PathBuf;

use clarifier_cli::config::{
    load_config_from, load_or_default, migrate, save_config_to, ClarifierConfig, CURRENT_VERSION,
    DEFAULT_LUNCH_BREAK_MINUTES,
};

#[test]
fn missing_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    assert!(load_config_from(&path).unwrap().is_none());
    let config = load_or_default(&path).unwrap();
    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.lunch_break_minutes, DEFAULT_LUNCH_BREAK_MINUTES);
    assert!(config.data_dir.is_none());
}

#[test]
fn v0_config_gains_lunch_break() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"data_dir": "/srv/slp", "created_at": "2026-01-05T15:00:00Z"}"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap().unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.lunch_break_minutes, 30);
    assert_eq!(config.data_dir, Some(PathBuf::from("/srv/slp")));
}

#[test]
fn migration_keeps_existing_values() {
    let json = serde_json::json!({
        "lunch_break_minutes": 45,
        "created_at": "2026-01-05T15:00:00Z",
    });
    let migrated = migrate(json, 0).unwrap();
    assert_eq!(migrated["lunch_break_minutes"], 45);
    assert_eq!(migrated["config_version"], 1);
}

#[test]
fn newer_config_is_rejected() {
    let json = serde_json::json!({ "config_version": 99 });
    assert!(migrate(json, 99).is_err());
    assert!(migrate(serde_json::json!([]), 0).is_err());
}

#[test]
fn saved_config_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = ClarifierConfig {
        config_version: 0,
        data_dir: Some(dir.path().join("data")),
        lunch_break_minutes: 60,
        ..ClarifierConfig::default()
    };
    save_config_to(&path, &config).unwrap();
    assert!(!path.with_extension("json.tmp").exists());

    let loaded = load_config_from(&path).unwrap().unwrap();
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.lunch_break_minutes, 60);
    assert_eq!(loaded.data_dir, config.data_dir);
    assert_eq!(loaded.created_at, config.created_at);
    assert_eq!(loaded.resolve_data_dir().unwrap(), dir.path().join("data"));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
