//! Theme preference file
//!
//! The only state the catalog persists between runs: a TOML file holding
//! `theme = "light" | "dark"`.

use phonespec_core::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::errors::{io_error, serialize_failed, toml_invalid, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl Preferences {
    /// Read preferences; a missing file yields the defaults
    ///
    /// # Errors
    ///
    /// Returns `Io` for unreadable files and `InvalidInput` for bad TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(io_error("prefs_load", path, e)),
        };
        toml::from_str(&content).map_err(|e| toml_invalid("prefs_load", path, e))
    }

    /// Write preferences, creating the parent directory if needed
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file or its directory cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_error("prefs_save", parent, e))?;
        }
        let content = toml::to_string(self).map_err(|e| serialize_failed("prefs_save", e))?;
        fs::write(path, content).map_err(|e| io_error("prefs_save", path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let prefs = Preferences::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(prefs.theme, None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.toml");
        Preferences {
            theme: Some(Theme::Dark),
        }
        .save(&path)
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim(), r#"theme = "dark""#);
        assert_eq!(Preferences::load(&path).unwrap().theme, Some(Theme::Dark));
    }

    #[test]
    fn test_unknown_theme_is_invalid_input() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, r#"theme = "sepia""#).unwrap();
        let err = Preferences::load(&path).unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_INPUT");
    }
}
