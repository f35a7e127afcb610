//! Round trips of the common-value store through the filesystem

use sfm_config::{CommonValues, CommonValuesStore, ConfigError, ValueCategory, STORE_FILE_NAME};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = CommonValuesStore::new(dir.path());

    assert_eq!(store.load(), CommonValues::default());
    assert!(store.try_load().unwrap().is_empty());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let store = CommonValuesStore::new(dir.path());

    let mut values = CommonValues::default();
    values.add(ValueCategory::Label, "furnace");
    values.add(ValueCategory::Item, "iron_ore");
    values.add(ValueCategory::Fluid, "minecraft:lava");
    store.save(&values);

    assert!(dir.path().join(STORE_FILE_NAME).exists());
    assert_eq!(store.load(), values);
}

#[test]
fn test_saved_file_uses_pascal_case_keys() {
    let dir = TempDir::new().unwrap();
    let store = CommonValuesStore::new(dir.path());

    let mut values = CommonValues::default();
    values.add(ValueCategory::Energy, "forge:energy");
    store.save(&values);

    let content = fs::read_to_string(store.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["EnergyIds"][0], "forge:energy");
    assert!(json.get("Labels").is_some());
}

#[test]
fn test_save_creates_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("config").join("sfm");
    let store = CommonValuesStore::new(&nested);

    store.try_save(&CommonValues::default()).unwrap();
    assert!(nested.join(STORE_FILE_NAME).exists());
}

#[test]
fn test_corrupt_file_falls_back_to_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(STORE_FILE_NAME), "{ not json").unwrap();
    let store = CommonValuesStore::new(dir.path());

    assert!(matches!(store.try_load(), Err(ConfigError::Json { .. })));
    assert!(store.load().is_empty());
}

#[test]
fn test_save_failure_is_silent() {
    let dir = TempDir::new().unwrap();
    // A regular file where the store directory should be
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let store = CommonValuesStore::new(blocker.join("nested"));

    store.save(&CommonValues::default());
    assert!(matches!(
        store.try_save(&CommonValues::default()),
        Err(ConfigError::WriteFile { .. })
    ));
}
