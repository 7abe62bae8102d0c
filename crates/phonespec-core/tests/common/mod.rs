use phonespec_core::{Brand, Dataset, Device, SpecGroup};

/// Spec group for a typical device; empty arguments leave the field out
#[allow(dead_code)]
pub fn specs(memory: &str, battery: &str, display: &str) -> SpecGroup {
    let mut group = SpecGroup::new();
    if !memory.is_empty() {
        group.insert("Memory", SpecGroup::new().with("Internal", memory));
    }
    if !battery.is_empty() {
        group.insert("Battery", SpecGroup::new().with("Type", battery));
    }
    if !display.is_empty() {
        group.insert("Display", SpecGroup::new().with("Size", display));
    }
    group
}

/// Three brands, six devices, with enough variety for every filter
///
/// | Brand   | Model       | Storage/RAM | Battery | Screen | 5G | NFC | Jack |
/// |---------|-------------|-------------|---------|--------|----|-----|------|
/// | Samsung | Galaxy S24  | 256/8       | 4000    | 6.2    | y  | y   | n    |
/// | Samsung | Galaxy A15  | 128/4       | 5000    | 6.5    | n  | n   | y    |
/// | Google  | Pixel 8     | 128/8       | 4575    | 6.2    | y  | y   | n    |
/// | Google  | Pixel Fold  | 256/12      | 4821    | 7.6    | y  | y   | n    |
/// | Nokia   | 3310        | -           | 1200    | 2.4    | n  | n   | y    |
/// | Nokia   | G42 Galaxy  | 128/6       | 5000    | 6.56   | y  | n   | "Yes, 24-bit" |
#[allow(dead_code)]
pub fn sample_dataset() -> Dataset {
    Dataset::new(sample_brands())
}

#[allow(dead_code)]
pub fn sample_brands() -> Vec<Brand> {
    let s24 = specs("256GB 8GB RAM", "Li-Ion 4000 mAh", "6.2 inches, 94.4 cm2")
        .with("Network", SpecGroup::new().with("Technology", "GSM / LTE / 5G").with("5G bands", "1, 3, 78"))
        .with("Comms", SpecGroup::new().with("NFC", "Yes"))
        .with("Sound", SpecGroup::new().with("3.5mm jack", "No"));
    let a15 = specs("128GB 4GB RAM", "Li-Po 5000 mAh", "6.5 inches")
        .with("Network", SpecGroup::new().with("Technology", "GSM / LTE"))
        .with("Comms", SpecGroup::new().with("NFC", "No"))
        .with("Sound", SpecGroup::new().with("3.5mm jack", "Yes"));
    let pixel8 = specs("128GB 8GB RAM", "Li-Ion 4575 mAh", "6.2 inches")
        .with("Network", SpecGroup::new().with("5G bands", "1, 28, 78"))
        .with("Comms", SpecGroup::new().with("NFC", "Yes"));
    let fold = specs("256GB 12GB RAM", "Li-Po 4821 mAh", "7.6 inches")
        .with("Network", SpecGroup::new().with("5G bands", "n78"))
        .with("Comms", SpecGroup::new().with("NFC", "Yes"));
    let n3310 = specs("", "Removable 1200 mAh", "2.4 inches")
        .with("Sound", SpecGroup::new().with("3.5mm jack", "Yes"));
    let g42 = specs("128GB 6GB RAM", "5000mAh", "6.56 inches")
        .with("Network", SpecGroup::new().with("5G bands", "n1"))
        .with("Comms", SpecGroup::new().with("NFC", "Unspecified"))
        .with("Sound", SpecGroup::new().with("3.5mm jack", "Yes, 24-bit"));

    vec![
        Brand::new(
            "Samsung",
            vec![
                Device::new("Galaxy S24")
                    .with_image("https://img/s24.jpg")
                    .with_specifications(s24),
                Device::new("Galaxy A15").with_specifications(a15),
            ],
        ),
        Brand::new(
            "Google",
            vec![
                Device::new("Pixel 8").with_specifications(pixel8),
                Device::new("Pixel Fold").with_specifications(fold),
            ],
        ),
        Brand::new(
            "Nokia",
            vec![
                Device::new("3310").with_specifications(n3310),
                Device::new("G42 Galaxy").with_specifications(g42),
            ],
        ),
    ]
}

/// A dataset of `brands` brands with `per_brand` bare devices each
#[allow(dead_code)]
pub fn bulk_dataset(brands: usize, per_brand: usize) -> Dataset {
    Dataset::new(
        (0..brands)
            .map(|b| {
                Brand::new(
                    format!("Brand{}", b),
                    (0..per_brand)
                        .map(|d| Device::new(format!("Model {}", d)))
                        .collect(),
                )
            })
            .collect(),
    )
}

/// Titles of a result list, for readable assertions
#[allow(dead_code)]
pub fn titles(devices: &[phonespec_core::DeviceRef<'_>]) -> Vec<String> {
    devices.iter().map(|d| d.title()).collect()
}
