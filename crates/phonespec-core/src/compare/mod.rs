//! Compare Resolver
//!
//! Builds a row-oriented comparison of two devices over a fixed list of
//! known spec paths.

pub mod resolver;
pub mod selection;
pub mod spec_paths;

pub use resolver::{resolve_comparison, Cell, ComparisonMatrix, ComparisonRow};
pub use selection::CompareSelection;
pub use spec_paths::{known_spec_paths, KNOWN_SPEC_PATHS};
