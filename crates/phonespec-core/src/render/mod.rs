//! Presentation adapters
//!
//! Turn engine outputs into text for a terminal or Markdown viewer. Nothing
//! here computes results; it only formats what the Query Engine and Compare
//! Resolver produced.

pub mod card_render;
pub mod compare_render;
pub mod device_render;

pub use card_render::{render_cards, render_compare_candidates, render_pinned};
pub use compare_render::render_comparison_table;
pub use device_render::render_device_detail;

/// Shown wherever a spec value is missing or empty
pub const PLACEHOLDER_GLYPH: &str = "—";

/// Image used on cards and in the compare pane when a device has none
pub const CARD_IMAGE_PLACEHOLDER: &str = "https://via.placeholder.com/150?text=No+Image";

/// Image used in the device detail view when a device has none
pub const DETAIL_IMAGE_PLACEHOLDER: &str = "https://via.placeholder.com/300?text=No+Image";

/// Shown in place of results when the dataset load fails
pub const LOAD_ERROR_MESSAGE: &str = "Error loading data.";

/// Shown when a result list is empty
pub const NO_RESULTS_MESSAGE: &str = "No phones found";

/// Shown in the compare pane when nothing is pinned
pub const NO_SELECTION_MESSAGE: &str = "No phone selected";
