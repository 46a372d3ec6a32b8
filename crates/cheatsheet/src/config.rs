//! # Configuration
//!
//! Cheat sheet behaviour is configured through [`confique`], loaded from a TOML file.
//! Keys missing from the file fall back to the compiled defaults below.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default_search_mode` | `"or"` | Mode used by `CheatSheet::search` (`"and"` or `"or"`) |
//! | `validate_on_update` | `false` | Reject updates that would leave an entry invalid |
//!
//! With `validate_on_update = false`, `update_entry` writes whatever it is given and
//! leaves validation to whoever persists the sheet.

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::entry::SearchMode;
use crate::error::{CheatSheetError, Result};

/// Configuration for a cheat sheet, stored in `cheatsheet.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CheatSheetConfig {
    /// Search mode used when the caller does not pick one ("and" or "or").
    /// When absent, defaults to "or".
    pub default_search_mode: Option<SearchMode>,

    /// Validate the patched entry before applying an update, rejecting invalid ones.
    #[config(default = false)]
    pub validate_on_update: bool,
}

impl Default for CheatSheetConfig {
    fn default() -> Self {
        Self {
            default_search_mode: None,
            validate_on_update: false,
        }
    }
}

impl CheatSheetConfig {
    /// Get the default search mode, falling back to OR if not configured.
    pub fn default_search_mode(&self) -> SearchMode {
        self.default_search_mode.unwrap_or_default()
    }

    /// Loads the configuration from a TOML file, filling gaps with defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::builder()
            .file(path)
            .load()
            .map_err(|e| CheatSheetError::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// A commented TOML template listing every setting and its default.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = CheatSheetConfig::default();
        assert_eq!(config.default_search_mode(), SearchMode::Or);
        assert!(!config.validate_on_update);
    }

    #[test]
    fn test_load_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cheatsheet.toml");
        fs::write(
            &path,
            "default_search_mode = \"and\"\nvalidate_on_update = true\n",
        )
        .unwrap();

        let config = CheatSheetConfig::load(&path).unwrap();
        assert_eq!(config.default_search_mode(), SearchMode::And);
        assert!(config.validate_on_update);
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cheatsheet.toml");
        fs::write(&path, "validate_on_update = true\n").unwrap();

        let config = CheatSheetConfig::load(&path).unwrap();
        assert_eq!(config.default_search_mode, None);
        assert_eq!(config.default_search_mode(), SearchMode::Or);
        assert!(config.validate_on_update);
    }

    #[test]
    fn test_load_rejects_unknown_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cheatsheet.toml");
        fs::write(&path, "default_search_mode = \"xor\"\n").unwrap();

        let err = CheatSheetConfig::load(&path).unwrap_err();
        assert!(matches!(err, CheatSheetError::Config(_)));
    }

    #[test]
    fn test_serializes_to_toml() {
        let config = CheatSheetConfig {
            default_search_mode: Some(SearchMode::And),
            ..Default::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("default_search_mode = \"and\""));
        let parsed: CheatSheetConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_template_lists_settings() {
        let template = CheatSheetConfig::template();
        assert!(template.contains("default_search_mode"));
        assert!(template.contains("validate_on_update"));
    }
}
