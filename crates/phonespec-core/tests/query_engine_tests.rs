mod common;

use common::{bulk_dataset, sample_dataset, specs, titles};
use phonespec_core::query::{
    brand_names, filter, list_initial, matches_filter, search, search_for_compare,
    FilterDefaults, FilterSpec, MAX_COMPARE_RESULTS, MAX_RESULTS,
};
use phonespec_core::{Dataset, Device};

#[test]
fn test_list_initial_keeps_dataset_order() {
    let dataset = sample_dataset();
    assert_eq!(
        titles(&list_initial(&dataset)),
        vec![
            "Samsung Galaxy S24",
            "Samsung Galaxy A15",
            "Google Pixel 8",
            "Google Pixel Fold",
            "Nokia 3310",
            "Nokia G42 Galaxy",
        ]
    );
}

#[test]
fn test_list_initial_caps_devices_not_brands() {
    // 4 brands x 10 devices: the cap cuts inside the fourth brand
    let dataset = bulk_dataset(4, 10);
    let list = list_initial(&dataset);
    assert_eq!(list.len(), MAX_RESULTS);
    assert_eq!(list.last().unwrap().title(), "Brand2 Model 9");
}

#[test]
fn test_empty_dataset_yields_empty_lists() {
    let dataset = Dataset::empty();
    assert!(list_initial(&dataset).is_empty());
    assert!(search(&dataset, "").is_empty());
    assert!(filter(&dataset, &FilterSpec::default()).is_empty());
}

#[test]
fn test_search_matches_model_case_insensitively() {
    let dataset = sample_dataset();
    assert_eq!(
        titles(&search(&dataset, "PIXEL")),
        vec!["Google Pixel 8", "Google Pixel Fold"]
    );
}

#[test]
fn test_search_brand_match_keeps_whole_brand() {
    let dataset = sample_dataset();
    assert_eq!(
        titles(&search(&dataset, "nokia")),
        vec!["Nokia 3310", "Nokia G42 Galaxy"]
    );
}

#[test]
fn test_search_is_per_device_across_brands() {
    // "galaxy" matches models under two brands but pulls in no siblings
    let dataset = sample_dataset();
    assert_eq!(
        titles(&search(&dataset, "galaxy")),
        vec![
            "Samsung Galaxy S24",
            "Samsung Galaxy A15",
            "Nokia G42 Galaxy"
        ]
    );
}

#[test]
fn test_search_empty_query_matches_all() {
    let dataset = sample_dataset();
    assert_eq!(search(&dataset, "").len(), 6);
    assert!(search(&dataset, "iphone").is_empty());
}

#[test]
fn test_search_caps() {
    let dataset = bulk_dataset(5, 10);
    assert_eq!(search(&dataset, "model").len(), MAX_RESULTS);
    assert_eq!(search_for_compare(&dataset, "model").len(), MAX_COMPARE_RESULTS);
}

#[test]
fn test_default_filter_equals_initial_list() {
    let dataset = sample_dataset();
    assert_eq!(filter(&dataset, &FilterSpec::default()), list_initial(&dataset));

    let dataset = bulk_dataset(4, 10);
    let defaults = FilterSpec::from_defaults(FilterDefaults::default());
    assert_eq!(filter(&dataset, &defaults), list_initial(&dataset));
}

#[test]
fn test_filter_brand_exact_match() {
    let dataset = sample_dataset();
    let spec = FilterSpec {
        brand: Some("Google".to_string()),
        ..FilterSpec::default()
    };
    assert_eq!(
        titles(&filter(&dataset, &spec)),
        vec!["Google Pixel 8", "Google Pixel Fold"]
    );

    let spec = FilterSpec {
        brand: Some("google".to_string()),
        ..FilterSpec::default()
    };
    assert!(filter(&dataset, &spec).is_empty());
}

#[test]
fn test_filter_ram_uses_second_gb_token() {
    let dataset = sample_dataset();
    let spec = FilterSpec {
        min_ram: 8,
        ..FilterSpec::default()
    };
    assert_eq!(
        titles(&filter(&dataset, &spec)),
        vec!["Samsung Galaxy S24", "Google Pixel 8", "Google Pixel Fold"]
    );
}

#[test]
fn test_filter_storage_uses_first_gb_token() {
    let dataset = sample_dataset();
    let spec = FilterSpec {
        min_storage: 256,
        ..FilterSpec::default()
    };
    assert_eq!(
        titles(&filter(&dataset, &spec)),
        vec!["Samsung Galaxy S24", "Google Pixel Fold"]
    );
}

#[test]
fn test_filter_battery_threshold_inclusive() {
    let dataset = sample_dataset();
    let spec = FilterSpec {
        min_battery: 5000,
        ..FilterSpec::default()
    };
    assert_eq!(
        titles(&filter(&dataset, &spec)),
        vec!["Samsung Galaxy A15", "Nokia G42 Galaxy"]
    );
}

#[test]
fn test_filter_battery_500_passes_6000_fails() {
    let dataset = sample_dataset();
    let a15 = |min_battery| {
        let spec = FilterSpec {
            brand: Some("Samsung".to_string()),
            min_battery,
            ..FilterSpec::default()
        };
        titles(&filter(&dataset, &spec)).contains(&"Samsung Galaxy A15".to_string())
    };
    assert!(a15(500));
    assert!(!a15(6000));
}

#[test]
fn test_filter_screen_threshold() {
    let dataset = sample_dataset();
    let spec = FilterSpec {
        min_screen: 6.5,
        ..FilterSpec::default()
    };
    assert_eq!(
        titles(&filter(&dataset, &spec)),
        vec!["Samsung Galaxy A15", "Google Pixel Fold", "Nokia G42 Galaxy"]
    );

    let spec = FilterSpec {
        min_screen: 7.0,
        ..FilterSpec::default()
    };
    assert_eq!(titles(&filter(&dataset, &spec)), vec!["Google Pixel Fold"]);
}

#[test]
fn test_filter_feature_flags() {
    let dataset = sample_dataset();

    let five_g = FilterSpec {
        need_5g: true,
        ..FilterSpec::default()
    };
    assert_eq!(
        titles(&filter(&dataset, &five_g)),
        vec![
            "Samsung Galaxy S24",
            "Google Pixel 8",
            "Google Pixel Fold",
            "Nokia G42 Galaxy"
        ]
    );

    let nfc = FilterSpec {
        need_nfc: true,
        ..FilterSpec::default()
    };
    assert_eq!(
        titles(&filter(&dataset, &nfc)),
        vec!["Samsung Galaxy S24", "Google Pixel 8", "Google Pixel Fold"]
    );

    let jack = FilterSpec {
        need_headphone_jack: true,
        ..FilterSpec::default()
    };
    assert_eq!(
        titles(&filter(&dataset, &jack)),
        vec!["Samsung Galaxy A15", "Nokia 3310"]
    );
}

#[test]
fn test_filter_all_constraints_combined() {
    let dataset = sample_dataset();
    let spec = FilterSpec {
        brand: Some("Google".to_string()),
        min_ram: 12,
        min_storage: 256,
        min_battery: 4500,
        min_screen: 7.0,
        need_5g: true,
        need_nfc: true,
        need_headphone_jack: false,
    };
    assert_eq!(titles(&filter(&dataset, &spec)), vec!["Google Pixel Fold"]);
}

#[test]
fn test_filter_is_deterministic() {
    let dataset = sample_dataset();
    let spec = FilterSpec {
        need_5g: true,
        min_battery: 4000,
        ..FilterSpec::default()
    };
    assert_eq!(filter(&dataset, &spec), filter(&dataset, &spec));
}

#[test]
fn test_brand_names_for_selector() {
    let dataset = sample_dataset();
    assert_eq!(brand_names(&dataset), vec!["Google", "Nokia", "Samsung"]);
}

#[test]
fn test_filter_ignores_non_ascii_digit_figures() {
    let device = Device::new("Arabic Digits")
        .with_specifications(specs("١٢٨GB ٨GB RAM", "Li-Po ٥٠٠٠ mAh", "٦.٥ inches"));

    let battery = FilterSpec {
        min_battery: 100_000,
        ..FilterSpec::default()
    };
    assert!(!matches_filter("Acme", &device, &battery));

    let ram = FilterSpec {
        min_ram: 1,
        ..FilterSpec::default()
    };
    assert!(!matches_filter("Acme", &device, &ram));

    // With no minimums the device still lists
    assert!(matches_filter("Acme", &device, &FilterSpec::default()));
}
