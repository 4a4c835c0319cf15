use blocksync_fs::{ConfigStore, Error, NormalizedPath};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct TestConfig {
    name: String,
    count: i32,
}

fn sample() -> TestConfig {
    TestConfig {
        name: "vehicle-form".into(),
        count: 2,
    }
}

#[test]
fn test_load_toml() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("config.toml");
    fs::write(&file_path, "name = \"vehicle-form\"\ncount = 2\n").unwrap();

    let config: TestConfig = ConfigStore::new()
        .load(&NormalizedPath::new(&file_path))
        .unwrap();
    assert_eq!(config, sample());
}

#[test]
fn test_load_json() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("config.json");
    fs::write(&file_path, r#"{"name": "vehicle-form", "count": 2}"#).unwrap();

    let config: TestConfig = ConfigStore::new()
        .load(&NormalizedPath::new(&file_path))
        .unwrap();
    assert_eq!(config, sample());
}

#[test]
fn test_load_yaml() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("config.yml");
    fs::write(&file_path, "name: vehicle-form\ncount: 2\n").unwrap();

    let config: TestConfig = ConfigStore::new()
        .load(&NormalizedPath::new(&file_path))
        .unwrap();
    assert_eq!(config, sample());
}

#[test]
fn test_save_then_load_toml() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("nested/config.toml"));
    let store = ConfigStore::new();

    store.save(&path, &sample()).unwrap();
    let loaded: TestConfig = store.load(&path).unwrap();
    assert_eq!(loaded, sample());
}

#[test]
fn test_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("config.ini");
    fs::write(&file_path, "name=x").unwrap();

    let result: Result<TestConfig, _> = ConfigStore::new().load(&NormalizedPath::new(&file_path));
    assert!(matches!(
        result,
        Err(Error::UnsupportedFormat { extension }) if extension == "ini"
    ));
}

#[test]
fn test_parse_error_names_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("config.toml");
    fs::write(&file_path, "name = ").unwrap();

    let err = ConfigStore::new()
        .load::<TestConfig>(&NormalizedPath::new(&file_path))
        .unwrap_err();
    assert!(matches!(err, Error::ConfigParse { ref format, .. } if format == "TOML"));
}
