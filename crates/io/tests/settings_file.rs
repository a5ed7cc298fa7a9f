//! Integration tests: the settings file on disk.

use std::fs;
use std::path::PathBuf;

use demeter_io::Settings;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let settings = Settings::load(&dir.path().join("settings.json"));
    assert_eq!(settings, Settings::default());
}

#[test]
fn corrupt_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").expect("write fixture");
    assert_eq!(Settings::load(&path), Settings::default());
}

#[test]
fn partial_file_overlays_defaults() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"period_days": 5}"#).expect("write fixture");

    let settings = Settings::load(&path);
    assert_eq!(settings.period_days, 5);
    assert_eq!(settings.threshold_mm, 10.0);
    assert_eq!(settings.data_file, PathBuf::from("rain_data.csv"));
}

#[test]
fn out_of_range_values_fall_back() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"threshold_mm": -3.0, "period_days": 0}"#).expect("write fixture");

    let settings = Settings::load(&path);
    assert_eq!(settings.threshold_mm, 10.0);
    assert_eq!(settings.period_days, 7);
    assert!(settings.params().is_ok());
}

#[test]
fn save_and_reload_round_trips() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("settings.json");

    let settings = Settings {
        data_file: PathBuf::from("lawn.csv"),
        threshold_mm: 14.0,
        period_days: 10,
    };
    settings.save(&path).expect("save succeeds");
    assert_eq!(Settings::load(&path), settings);
}

#[test]
fn saved_file_is_plain_json() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("settings.json");
    Settings::default().save(&path).expect("save succeeds");

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["threshold_mm"], 10.0);
    assert_eq!(value["period_days"], 7);
    assert_eq!(value["data_file"], "rain_data.csv");
}
