//! Dataset loader
//!
//! Reads the prepared dataset in one pass. There is no partial or
//! incremental loading: the caller gets a whole dataset or an error.

use phonespec_core::{Brand, Dataset};
use std::fs;
use std::path::Path;

use crate::dataset::digest::compute_dataset_digest;
use crate::errors::{dataset_parse, io_error, Result};

/// A dataset together with facts about the file it came from
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    /// SHA256 hex of the raw file bytes
    pub digest: String,
    pub byte_len: usize,
}

/// Load a dataset file
///
/// # Errors
///
/// Returns `Io` if the file cannot be read and `Serialization` if it is not
/// a JSON array of brand records.
pub fn load_dataset(path: &Path) -> Result<LoadedDataset> {
    let bytes = fs::read(path).map_err(|e| io_error("dataset_load", path, e))?;
    parse_dataset_bytes(&bytes, path)
}

/// Parse dataset bytes already in memory; `origin` is only used in errors
///
/// # Errors
///
/// Returns `Serialization` if the bytes are not a JSON array of brand records.
pub fn parse_dataset_bytes(bytes: &[u8], origin: &Path) -> Result<LoadedDataset> {
    let brands: Vec<Brand> =
        serde_json::from_slice(bytes).map_err(|e| dataset_parse("dataset_load", origin, e))?;
    let dataset = Dataset::new(brands);
    let digest = compute_dataset_digest(bytes);

    tracing::debug!(
        path = %origin.display(),
        brand_count = dataset.brand_count(),
        device_count = dataset.device_count(),
        digest = %digest,
        "dataset parsed"
    );

    Ok(LoadedDataset {
        dataset,
        digest,
        byte_len: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonespec_core::ExErrorKind;
    use std::path::PathBuf;

    #[test]
    fn test_parse_minimal() {
        let json = br#"[{"brand_name": "Acme", "devices": [{"model_name": "One"}]}]"#;
        let loaded = parse_dataset_bytes(json, &PathBuf::from("mem")).unwrap();
        assert_eq!(loaded.dataset.device_count(), 1);
        assert_eq!(loaded.byte_len, json.len());
    }

    #[test]
    fn test_parse_error_is_serialization() {
        let err = parse_dataset_bytes(b"{", &PathBuf::from("mem")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Serialization);
        assert_eq!(err.op(), Some("dataset_load"));
    }
}
