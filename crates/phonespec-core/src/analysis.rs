//! Dataset analysis
//!
//! Offline helpers used when preparing a dataset: which spec keys every
//! device shares, and which devices carry no specifications at all.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;

use crate::dataset::Dataset;
use crate::model::{SpecGroup, SpecValue};

/// Every dotted key path (categories and nested keys) present on every
/// device, sorted ascending
///
/// An empty dataset has no common keys.
pub fn common_spec_keys(dataset: &Dataset) -> Vec<String> {
    let mut devices = dataset.devices();
    let Some(first) = devices.next() else {
        return Vec::new();
    };

    let mut common = key_paths(&first.device.specifications);
    for device in devices {
        if common.is_empty() {
            break;
        }
        let keys = key_paths(&device.device.specifications);
        common.retain(|k| keys.contains(k));
    }

    common.into_iter().collect()
}

/// All dotted key paths of a spec group, at every depth
pub fn key_paths(specs: &SpecGroup) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    collect_key_paths(specs, "", &mut out);
    out
}

fn collect_key_paths(group: &SpecGroup, parent: &str, out: &mut BTreeSet<String>) {
    for (key, value) in group.iter() {
        let path = if parent.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", parent, key)
        };
        // Array elements are not keys
        match value {
            SpecValue::Group(child) if !child.is_sequence() => {
                collect_key_paths(child, &path, out);
            }
            _ => {}
        }
        out.insert(path);
    }
}

/// A brand record as it appears in a raw export, devices left untouched
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandRecord {
    pub brand_name: String,
    pub devices: Vec<Value>,
}

impl BrandRecord {
    pub fn new(brand_name: impl Into<String>, devices: Vec<Value>) -> Self {
        Self {
            brand_name: brand_name.into(),
            devices,
        }
    }
}

/// Brand records split into devices with specifications and devices without
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletenessSplit {
    pub valid: Vec<BrandRecord>,
    pub missing: Vec<BrandRecord>,
}

impl CompletenessSplit {
    pub fn valid_device_count(&self) -> usize {
        self.valid.iter().map(|b| b.devices.len()).sum()
    }

    pub fn missing_device_count(&self) -> usize {
        self.missing.iter().map(|b| b.devices.len()).sum()
    }
}

/// True when a raw device carries a non-empty `specifications` object
pub fn has_specifications(device: &Value) -> bool {
    device
        .get("specifications")
        .and_then(Value::as_object)
        .is_some_and(|specs| !specs.is_empty())
}

/// Separate devices with a non-empty specification object from the rest
///
/// Only `specifications` is inspected; every device lands in exactly one
/// output, unchanged. Brand records sharing a name are merged, in order of
/// first appearance. A brand appears in an output only if it has devices there.
pub fn split_by_completeness(brands: Vec<BrandRecord>) -> CompletenessSplit {
    let mut split = CompletenessSplit::default();

    for brand in brands {
        let (valid, missing): (Vec<_>, Vec<_>) =
            brand.devices.into_iter().partition(has_specifications);

        merge_into(&mut split.valid, &brand.brand_name, valid);
        merge_into(&mut split.missing, &brand.brand_name, missing);
    }

    split
}

fn merge_into(target: &mut Vec<BrandRecord>, brand_name: &str, devices: Vec<Value>) {
    if devices.is_empty() {
        return;
    }
    match target.iter_mut().find(|b| b.brand_name == brand_name) {
        Some(existing) => existing.devices.extend(devices),
        None => target.push(BrandRecord::new(brand_name, devices)),
    }
}
