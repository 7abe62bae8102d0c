//! Query Engine
//!
//! Read-only operations that turn the dataset plus a search string or a
//! filter specification into the visible device list.
//!
//! Key principles:
//! - Results keep dataset order (brand order, then device order); nothing is sorted
//! - Every list is capped at [`MAX_RESULTS`] devices
//! - Same inputs, same output

pub mod engine;
pub mod extract;
pub mod filter_spec;

pub use engine::{
    brand_names, filter, list_initial, matches_filter, matches_query, search,
    search_for_compare, MAX_COMPARE_RESULTS, MAX_RESULTS,
};
pub use extract::{extract_battery_mah, extract_memory, extract_screen_inches, MemoryCapacity};
pub use filter_spec::{FilterDefaults, FilterSpec};
