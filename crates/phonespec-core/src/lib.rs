//! PhoneSpec Core - Catalog evaluation kernel
//!
//! This crate provides the in-memory pieces of the phone catalog:
//! - Brand/Device model with a recursive, order-preserving spec value type
//! - Dataset store with an id-keyed device lookup
//! - Query Engine: initial listing, search, structured filtering
//! - Compare Resolver: row-oriented comparison over known spec paths
//! - Text/Markdown presentation adapters
//! - Dataset analysis used by the preparation pipeline
//!
//! Nothing here performs I/O; loading lives in `phonespec-store` and session
//! state in `phonespec-engine`.

pub mod analysis;
pub mod compare;
pub mod dataset;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod query;
pub mod render;

#[doc(hidden)]
pub use phonespec_core_types as types;

// Re-export commonly used types
pub use compare::{resolve_comparison, CompareSelection, ComparisonMatrix};
pub use dataset::Dataset;
pub use errors::{CatalogError, ExError, ExErrorKind, Result};
pub use model::{Brand, Device, DeviceId, DeviceRef, SpecGroup, SpecPath, SpecValue, Theme};
pub use query::{FilterDefaults, FilterSpec};
