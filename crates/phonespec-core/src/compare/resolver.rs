//! Comparison matrix construction
//!
//! For each known path, both devices' values are resolved. A row is kept
//! when at least one side has something to show: a group, or text that is
//! neither empty nor the em-dash placeholder. The stored value is never
//! altered; a stored em-dash still renders as itself.

use serde::Serialize;

use crate::compare::spec_paths::known_spec_paths;
use crate::errors::{CatalogError, Result};
use crate::model::{DeviceRef, SpecValue};
use crate::render::PLACEHOLDER_GLYPH;

/// One side of a comparison row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Cell {
    /// Missing path, empty text or empty group
    Placeholder,
    /// Leaf text, verbatim
    Text(String),
    /// A group, one `key: value` line per entry
    Lines(Vec<String>),
}

impl Cell {
    /// Build the cell for a resolved (or missing) value
    pub fn from_value(value: Option<&SpecValue>) -> Self {
        match value {
            None => Cell::Placeholder,
            Some(SpecValue::Text(text)) if text.is_empty() => Cell::Placeholder,
            Some(SpecValue::Text(text)) => Cell::Text(text.clone()),
            Some(SpecValue::Group(group)) if group.is_empty() => Cell::Placeholder,
            Some(SpecValue::Group(group)) => Cell::Lines(
                group
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, inline(value)))
                    .collect(),
            ),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Cell::Placeholder)
    }
}

/// Single-line form of a value nested inside a group
fn inline(value: &SpecValue) -> String {
    match value {
        SpecValue::Text(text) => text.clone(),
        SpecValue::Group(group) => group
            .iter()
            .map(|(k, v)| format!("{}={}", k, inline(v)))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Whether a resolved value makes its row worth showing
fn is_displayable(value: Option<&SpecValue>) -> bool {
    match value {
        None => false,
        Some(SpecValue::Text(text)) => !text.is_empty() && text != PLACEHOLDER_GLYPH,
        Some(SpecValue::Group(_)) => true,
    }
}

/// One row of the comparison, labeled by the path's leaf segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub label: String,
    pub path: String,
    pub left: Cell,
    pub right: Cell,
}

/// Presentational comparison of two devices
///
/// Zero rows is a valid matrix: neither device has any known value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonMatrix {
    pub left_title: String,
    pub right_title: String,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonMatrix {
    /// Row for a spec path leaf label, if it was emitted
    pub fn row(&self, label: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.label == label)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the comparison matrix for a left/right pair
///
/// # Errors
///
/// Returns `IncompleteSelection` if either side is absent; no partial
/// matrix is built.
pub fn resolve_comparison(
    left: Option<DeviceRef<'_>>,
    right: Option<DeviceRef<'_>>,
) -> Result<ComparisonMatrix> {
    let (Some(left), Some(right)) = (left, right) else {
        return Err(CatalogError::IncompleteSelection);
    };

    let mut rows = Vec::new();
    for path in known_spec_paths() {
        let left_value = left.device.specifications.resolve(path.segments());
        let right_value = right.device.specifications.resolve(path.segments());

        if !is_displayable(left_value) && !is_displayable(right_value) {
            continue;
        }

        rows.push(ComparisonRow {
            label: path.leaf().to_string(),
            path: path.to_string(),
            left: Cell::from_value(left_value),
            right: Cell::from_value(right_value),
        });
    }

    tracing::debug!(
        left = %left.id(),
        right = %right.id(),
        row_count = rows.len(),
        "comparison resolved"
    );

    Ok(ComparisonMatrix {
        left_title: left.title(),
        right_title: right.title(),
        rows,
    })
}
