//! Listing, search and structured filtering over a [`Dataset`]

use std::collections::BTreeSet;

use crate::dataset::Dataset;
use crate::model::{Device, DeviceRef, SpecValue};
use crate::query::extract::{extract_battery_mah, extract_memory, extract_screen_inches};
use crate::query::filter_spec::FilterSpec;

/// Cap on every visible result list
pub const MAX_RESULTS: usize = 30;

/// Cap on the candidate list shown when picking the right side of a comparison
pub const MAX_COMPARE_RESULTS: usize = 20;

/// Every device, capped at [`MAX_RESULTS`]
pub fn list_initial(dataset: &Dataset) -> Vec<DeviceRef<'_>> {
    dataset.devices().take(MAX_RESULTS).collect()
}

/// Case-insensitive substring search over model and brand names
///
/// A device is kept when the query occurs in its own model name or in its
/// own brand's name. An empty query keeps everything.
pub fn search<'a>(dataset: &'a Dataset, query: &str) -> Vec<DeviceRef<'a>> {
    search_capped(dataset, query, MAX_RESULTS)
}

/// Same predicate as [`search`], capped at [`MAX_COMPARE_RESULTS`]
pub fn search_for_compare<'a>(dataset: &'a Dataset, query: &str) -> Vec<DeviceRef<'a>> {
    search_capped(dataset, query, MAX_COMPARE_RESULTS)
}

fn search_capped<'a>(dataset: &'a Dataset, query: &str, cap: usize) -> Vec<DeviceRef<'a>> {
    let needle = query.to_lowercase();
    dataset
        .devices()
        .filter(|d| matches_query(d.brand_name, d.device, &needle))
        .take(cap)
        .collect()
}

/// Search predicate; `needle` must already be lowercase
pub fn matches_query(brand_name: &str, device: &Device, needle: &str) -> bool {
    device.model_name.to_lowercase().contains(needle)
        || brand_name.to_lowercase().contains(needle)
}

/// Devices passing every active constraint of `spec`, capped at [`MAX_RESULTS`]
pub fn filter<'a>(dataset: &'a Dataset, spec: &FilterSpec) -> Vec<DeviceRef<'a>> {
    dataset
        .devices()
        .filter(|d| matches_filter(d.brand_name, d.device, spec))
        .take(MAX_RESULTS)
        .collect()
}

/// Filter predicate for a single device
///
/// Thresholds are inclusive. RAM and storage are only checked when their
/// minimum is positive; battery and screen are always checked.
pub fn matches_filter(brand_name: &str, device: &Device, spec: &FilterSpec) -> bool {
    if let Some(brand) = spec.active_brand() {
        if brand_name != brand {
            return false;
        }
    }

    let specs = &device.specifications;

    let memory = extract_memory(specs.text_at("Memory", "Internal").unwrap_or_default());
    if spec.min_ram > 0 && memory.ram_gb < u64::from(spec.min_ram) {
        return false;
    }
    if spec.min_storage > 0 && memory.storage_gb < u64::from(spec.min_storage) {
        return false;
    }

    let battery = extract_battery_mah(specs.text_at("Battery", "Type").unwrap_or_default());
    if battery < u64::from(spec.min_battery) {
        return false;
    }

    let screen = extract_screen_inches(specs.text_at("Display", "Size").unwrap_or_default());
    if screen < spec.min_screen {
        return false;
    }

    if spec.need_5g && !is_present(specs.resolve(&["Network", "5G bands"])) {
        return false;
    }
    if spec.need_nfc && specs.text_at("Comms", "NFC") != Some("Yes") {
        return false;
    }
    if spec.need_headphone_jack && specs.text_at("Sound", "3.5mm jack") != Some("Yes") {
        return false;
    }

    true
}

/// Present and not an empty string; a group counts as present
fn is_present(value: Option<&SpecValue>) -> bool {
    value.is_some_and(|v| !v.is_empty_text())
}

/// Distinct brand names, sorted ascending, for the brand selector
pub fn brand_names(dataset: &Dataset) -> Vec<&str> {
    dataset
        .brands()
        .iter()
        .map(|b| b.brand_name.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
