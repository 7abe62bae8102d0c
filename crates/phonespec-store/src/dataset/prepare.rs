//! Dataset preparation pipeline
//!
//! Turns a raw scraped export into the dataset the catalog loads:
//! sanitize terminators, parse, drop malformed brand records, then split
//! devices into those with specifications and those without. Both halves are
//! written as pretty-printed JSON.
//!
//! Devices are carried as raw JSON: whatever a device record holds is written
//! out as read, key order included.

use phonespec_core::analysis::{split_by_completeness, BrandRecord};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::dataset::sanitize::sanitize_terminators;
use crate::errors::{dataset_parse, dataset_shape, io_error, serialize_failed, Result};

const OP: &str = "dataset_prepare";

/// Counts produced by one preparation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrepareReport {
    pub unusual_terminators: usize,
    pub valid_devices: usize,
    pub missing_devices: usize,
    pub valid_brands: usize,
    pub missing_brands: usize,
}

/// Prepare `input` into `valid_out` and `missing_out`
///
/// The input is read lossily so stray invalid UTF-8 does not abort the run.
///
/// # Errors
///
/// Returns `Io` on read/write failures, `Serialization` if the sanitized text
/// is not JSON and `InvalidDataset` if the top level is not an array.
pub fn prepare_dataset(input: &Path, valid_out: &Path, missing_out: &Path) -> Result<PrepareReport> {
    let bytes = fs::read(input).map_err(|e| io_error(OP, input, e))?;
    let raw = String::from_utf8_lossy(&bytes);
    let sanitized = sanitize_terminators(&raw);

    let value: Value =
        serde_json::from_str(&sanitized.text).map_err(|e| dataset_parse(OP, input, e))?;
    let records = match value {
        Value::Array(records) => records,
        _ => return Err(dataset_shape(OP, input, "Top-level value must be an array of brands")),
    };

    let brands = collect_brands(records);
    let split = split_by_completeness(brands);

    write_pretty(valid_out, &split.valid)?;
    write_pretty(missing_out, &split.missing)?;

    let report = PrepareReport {
        unusual_terminators: sanitized.unusual_terminators,
        valid_devices: split.valid_device_count(),
        missing_devices: split.missing_device_count(),
        valid_brands: split.valid.len(),
        missing_brands: split.missing.len(),
    };
    tracing::debug!(?report, "dataset prepared");
    Ok(report)
}

/// Keep brand records that are objects with a non-empty name and a device list
fn collect_brands(records: Vec<Value>) -> Vec<BrandRecord> {
    let mut brands = Vec::new();

    for record in records {
        let Value::Object(mut fields) = record else {
            tracing::debug!("skipping non-object brand record");
            continue;
        };
        let brand_name = match fields.get("brand_name").and_then(Value::as_str) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                tracing::debug!("skipping brand record without brand_name");
                continue;
            }
        };
        let devices = match fields.remove("devices") {
            None => Vec::new(),
            Some(Value::Array(devices)) => devices,
            Some(_) => {
                tracing::debug!(brand = %brand_name, "skipping brand whose devices is not a list");
                continue;
            }
        };

        brands.push(BrandRecord::new(brand_name, devices));
    }

    brands
}

fn write_pretty(path: &Path, brands: &[BrandRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(brands).map_err(|e| serialize_failed(OP, e))?;
    fs::write(path, json).map_err(|e| io_error(OP, path, e))
}
