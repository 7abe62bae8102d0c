// Integration tests for the dataset preparation pipeline

mod common;

use common::{fixture, read_json};
use phonespec_core::ExErrorKind;
use phonespec_store::dataset::{load_dataset, prepare_dataset, PrepareReport};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_prepare_splits_and_merges() {
    // Given: a raw export with malformed records and a repeated brand
    let dir = TempDir::new().unwrap();
    let valid = dir.path().join("phones_fixed.json");
    let missing = dir.path().join("phones_missing.json");

    // When: we prepare it
    let report = prepare_dataset(&fixture("raw_export.json"), &valid, &missing).unwrap();

    // Then: malformed records are dropped and Acme is merged
    assert_eq!(
        report,
        PrepareReport {
            unusual_terminators: 0,
            valid_devices: 2,
            missing_devices: 2,
            valid_brands: 1,
            missing_brands: 2,
        }
    );

    let valid_json = read_json(&valid);
    assert_eq!(valid_json[0]["brand_name"], "Acme");
    assert_eq!(valid_json[0]["devices"][0]["model_name"], "Rocket 5");
    assert_eq!(valid_json[0]["devices"][1]["model_name"], "Rocket 6");

    let missing_json = read_json(&missing);
    assert_eq!(missing_json[0]["brand_name"], "Acme");
    assert_eq!(missing_json[0]["devices"][0]["model_name"], "Ghost");
    assert_eq!(missing_json[1]["brand_name"], "Zeta");
}

#[test]
fn test_prepared_output_is_pretty_and_loadable() {
    let dir = TempDir::new().unwrap();
    let valid = dir.path().join("valid.json");
    let missing = dir.path().join("missing.json");
    prepare_dataset(&fixture("raw_export.json"), &valid, &missing).unwrap();

    let text = fs::read_to_string(&valid).unwrap();
    assert!(text.contains("\n  {"), "output should be indented: {}", text);

    let loaded = load_dataset(&valid).unwrap();
    assert_eq!(loaded.dataset.device_count(), 2);
}

#[test]
fn test_prepare_counts_unusual_terminators() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("raw.json");
    let raw = "[{\"brand_name\": \"Acme\",\u{2028}\"devices\": [{\"model_name\": \"One\",\r\n\
               \"specifications\": {\"Misc\": {\"Colors\": \"Red\u{0085}Blue\"}}}]}]\u{2029}";
    fs::write(&input, raw).unwrap();

    let valid = dir.path().join("valid.json");
    let missing = dir.path().join("missing.json");
    let report = prepare_dataset(&input, &valid, &missing).unwrap();

    assert_eq!(report.unusual_terminators, 3);
    assert_eq!(report.valid_devices, 1);
    assert_eq!(
        read_json(&valid)[0]["devices"][0]["specifications"]["Misc"]["Colors"],
        "Red Blue"
    );
}

#[test]
fn test_prepare_rejects_non_array_root() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("raw.json");
    fs::write(&input, r#"{"brands": []}"#).unwrap();

    let err = prepare_dataset(
        &input,
        &dir.path().join("v.json"),
        &dir.path().join("m.json"),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidDataset);
    assert!(!dir.path().join("v.json").exists());
}

#[test]
fn test_prepare_invalid_json_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("raw.json");
    fs::write(&input, "[{").unwrap();

    let err = prepare_dataset(
        &input,
        &dir.path().join("v.json"),
        &dir.path().join("m.json"),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Serialization);
    assert_eq!(err.op(), Some("dataset_prepare"));
}

#[test]
fn test_prepare_keeps_every_device_verbatim() {
    // Given: devices with a null name, a numeric image and non-object specs
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("raw.json");
    fs::write(
        &input,
        r#"[{"brand_name": "Acme", "devices": [
            {"model_name": "Plain", "specifications": {"Misc": {"Colors": "Red"}}},
            {"model_name": null, "specifications": {"Body": {"Weight": "190 g"}}},
            {"model_name": "Pic", "imageUrl": 42, "specifications": {"Platform": {"OS": "Android"}}},
            {"model_name": "Odd", "specifications": "n/a"}
        ]}]"#,
    )
    .unwrap();
    let valid = dir.path().join("valid.json");
    let missing = dir.path().join("missing.json");

    // When: we prepare it
    let report = prepare_dataset(&input, &valid, &missing).unwrap();

    // Then: every device is counted and written as it was read
    assert_eq!(report.valid_devices, 3);
    assert_eq!(report.missing_devices, 1);

    let valid_json = read_json(&valid);
    assert!(valid_json[0]["devices"][1]["model_name"].is_null());
    assert_eq!(valid_json[0]["devices"][2]["imageUrl"], 42);

    let missing_json = read_json(&missing);
    assert_eq!(missing_json[0]["devices"][0]["specifications"], "n/a");

    let loaded = load_dataset(&valid).unwrap();
    assert_eq!(loaded.dataset.device_count(), 3);
}
