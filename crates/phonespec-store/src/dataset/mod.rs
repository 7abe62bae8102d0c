//! Dataset files
//!
//! Provides:
//! - Loader for the prepared dataset the catalog reads at startup
//! - Line-terminator sanitizer for raw scraped exports
//! - Preparation pipeline producing the prepared dataset
//! - Content fingerprint

pub mod digest;
pub mod loader;
pub mod prepare;
pub mod sanitize;

pub use digest::compute_dataset_digest;
pub use loader::{load_dataset, parse_dataset_bytes, LoadedDataset};
pub use prepare::{prepare_dataset, PrepareReport};
pub use sanitize::{sanitize_terminators, SanitizeOutcome};
