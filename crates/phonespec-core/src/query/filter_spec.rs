use serde::{Deserialize, Serialize};

use crate::errors::{CatalogError, Result};

/// Initial values of the battery and screen controls
///
/// These minimums apply even when the user never touches the controls,
/// so they default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterDefaults {
    pub min_battery: u32,
    pub min_screen: f64,
}

/// Immutable snapshot of the filter controls, read once per query
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Exact brand name; `None` or an empty string matches every brand
    pub brand: Option<String>,
    /// Minimum RAM in GB; 0 disables the check
    pub min_ram: u32,
    /// Minimum storage in GB; 0 disables the check
    pub min_storage: u32,
    /// Minimum battery in mAh; always applied
    pub min_battery: u32,
    /// Minimum screen diagonal in inches; always applied
    pub min_screen: f64,
    pub need_5g: bool,
    pub need_nfc: bool,
    pub need_headphone_jack: bool,
}

impl FilterSpec {
    /// A spec with every control at its initial value
    pub fn from_defaults(defaults: FilterDefaults) -> Self {
        Self {
            min_battery: defaults.min_battery,
            min_screen: defaults.min_screen,
            ..Self::default()
        }
    }

    /// The brand constraint, if one is active
    pub fn active_brand(&self) -> Option<&str> {
        self.brand.as_deref().filter(|b| !b.is_empty())
    }

    /// Check ranges that the types alone do not enforce
    ///
    /// # Errors
    ///
    /// Returns `InvalidFilter` when `min_screen` is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.min_screen.is_finite() || self.min_screen < 0.0 {
            return Err(CatalogError::InvalidFilter {
                field: "min_screen".to_string(),
                reason: format!("must be a finite number >= 0, got {}", self.min_screen),
            });
        }
        Ok(())
    }
}
