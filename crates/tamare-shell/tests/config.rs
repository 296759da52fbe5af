use serde_json::json;

use tamare_core::catalog::CLINIC_NAME;
use tamare_shell::config::{TamareConfig, load_config_from, migrate, save_config_to};

#[test]
fn migrate_v0_adds_clinic_name_and_version() {
    let migrated = migrate(json!({ "records_path": "/tmp/records.json" }), 0).unwrap();

    assert_eq!(migrated["config_version"], 1);
    assert_eq!(migrated["clinic_name"], CLINIC_NAME);
    assert!(migrated.get("created_at").is_some());
    assert_eq!(migrated["records_path"], "/tmp/records.json");
}

#[test]
fn migrate_v0_keeps_an_existing_clinic_name() {
    let migrated = migrate(json!({ "clinic_name": "Posta Norte" }), 0).unwrap();
    assert_eq!(migrated["clinic_name"], "Posta Norte");
}

#[test]
fn migrate_rejects_a_newer_version() {
    let err = migrate(json!({ "config_version": 99 }), 99).unwrap_err();
    assert!(err.to_string().contains("newer"));
}

#[test]
fn migrate_current_version_is_untouched() {
    let value = json!({
        "config_version": 1,
        "clinic_name": "X",
        "created_at": "2024-01-15T00:00:00Z",
    });
    assert_eq!(migrate(value.clone(), 1).unwrap(), value);
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let mut config = TamareConfig::default();
    config.clinic_name = "Posta Norte".to_string();
    config.records_path = Some(dir.path().join("records.json"));
    save_config_to(&config, &path).unwrap();

    assert!(!path.with_extension("json.tmp").exists());
    assert_eq!(load_config_from(&path).unwrap(), config);
}

#[cfg(unix)]
#[test]
fn saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config_to(&TamareConfig::default(), &path).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn load_migrates_a_pre_versioned_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "created_at": "2024-01-15T00:00:00Z" }"#).unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.clinic_name, CLINIC_NAME);
    assert_eq!(config.records_path, None);
}

#[test]
fn load_rejects_a_version_that_overflows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "config_version": 4294967296, "created_at": "2024-01-15T00:00:00Z" }"#,
    )
    .unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("invalid config_version"));
}

#[test]
fn load_rejects_a_non_numeric_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": "one" }"#).unwrap();

    assert!(load_config_from(&path).is_err());
}
