//! PhoneSpec Store - Everything that touches the filesystem
//!
//! Provides:
//! - Dataset loading (read, parse, fingerprint)
//! - The dataset preparation pipeline (sanitize, validate, split)
//! - Theme preference persistence
//! - TOML configuration

pub mod config;
pub mod dataset;
pub mod errors;
pub mod prefs;

// Re-export key types
pub use config::CatalogConfig;
pub use dataset::{load_dataset, prepare_dataset, LoadedDataset, PrepareReport};
pub use errors::Result;
pub use prefs::Preferences;
