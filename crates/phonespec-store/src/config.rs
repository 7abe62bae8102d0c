//! Catalog configuration
//!
//! Every field has a default, so a missing or empty `phonespec.toml` is a
//! valid configuration.
//!
//! ```toml
//! dataset_path = "data/phones_fixed.json"
//! preferences_path = ".phonespec/prefs.toml"
//! log_profile = "production"
//!
//! [filter_defaults]
//! min_battery = 3000
//! min_screen = 5.5
//! ```

use phonespec_core::logging_facility::Profile;
use phonespec_core::FilterDefaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::{io_error, toml_invalid, Result};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "phonespec.toml";
pub const DEFAULT_DATASET_PATH: &str = "data/phones_fixed.json";
pub const DEFAULT_PREFERENCES_PATH: &str = ".phonespec/prefs.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub dataset_path: PathBuf,
    pub preferences_path: PathBuf,
    pub filter_defaults: FilterDefaults,
    pub log_profile: Profile,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            preferences_path: PathBuf::from(DEFAULT_PREFERENCES_PATH),
            filter_defaults: FilterDefaults::default(),
            log_profile: Profile::default(),
        }
    }
}

impl CatalogConfig {
    /// Parse a configuration document; `origin` is only used in errors
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the document is not valid TOML for this shape.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| toml_invalid("config_load", origin, e))
    }

    /// Load configuration
    ///
    /// An explicit path must exist. Without one, `phonespec.toml` in the
    /// working directory is used if present, else the defaults.
    ///
    /// # Errors
    ///
    /// Returns `Io` if an explicit file cannot be read and `InvalidInput`
    /// for invalid TOML.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound && !required => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(io_error("config_load", &path, e)),
        };

        let config = Self::from_toml_str(&content, &path)?;
        tracing::debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }
}
