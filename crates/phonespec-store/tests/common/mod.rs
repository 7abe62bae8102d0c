// Shared helpers for store integration tests

use std::path::{Path, PathBuf};

#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

#[allow(dead_code)]
pub fn read_json(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}
