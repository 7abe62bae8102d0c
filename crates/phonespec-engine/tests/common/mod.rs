// Shared helpers for engine integration tests

use phonespec_core::{FilterDefaults, Theme};
use phonespec_engine::Session;
use std::path::PathBuf;

#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A session with the small fixture dataset loaded
#[allow(dead_code)]
pub fn loaded_session() -> Session {
    let mut session = Session::new(FilterDefaults::default(), Theme::Light);
    session.load(&fixture("phones_small.json")).unwrap();
    session
}

#[allow(dead_code)]
pub fn models(devices: &[phonespec_core::DeviceRef<'_>]) -> Vec<String> {
    devices.iter().map(|d| d.model_name().to_string()).collect()
}
