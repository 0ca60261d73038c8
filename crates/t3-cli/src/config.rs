//! Application configuration.
//!
//! The persisted settings file doubles as the CLI's own configuration. The
//! store is opened once at startup; [`AppConfig`] is the typed view of the
//! few keys the CLI itself reads.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `--config FILE` / `T3_CONFIG` for the settings location
//! 3. Values in the settings file
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use tracing::debug;

use t3_adapters::JsonFileStorage;
use t3_core::application::{ConfigStore, services::DEFAULT_TEMPLATE};

/// Setting naming the template `init project` uses without `--template`.
pub const DEFAULT_TEMPLATE_KEY: &str = "init.template";

/// Setting that disables colour when truthy (`true`, `1`, `yes`, `on`).
pub const NO_COLOR_KEY: &str = "output.no_color";

/// Typed view of the settings the CLI consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Template used when `--template` is omitted.
    pub default_template: String,
    /// Disable ANSI colours regardless of terminal support.
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_template: DEFAULT_TEMPLATE.to_string(),
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Read the well-known keys from an opened store.
    pub fn from_store(store: &ConfigStore) -> Self {
        let defaults = Self::default();

        let default_template = store
            .get(DEFAULT_TEMPLATE_KEY)
            .map(|v| v.to_string())
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(defaults.default_template);

        let no_color = store
            .get(NO_COLOR_KEY)
            .and_then(|v| v.as_bool())
            .unwrap_or(defaults.no_color);

        Self {
            default_template,
            no_color,
        }
    }

    /// Open the settings store at `config_file`, or at the default location.
    pub fn open_store(config_file: Option<&Path>) -> ConfigStore {
        let path = Self::config_path(config_file);
        debug!(path = %path.display(), "opening settings");
        ConfigStore::new(Box::new(JsonFileStorage::new(path)))
    }

    /// Path of the settings file: the override if given, else
    /// `~/.t3/config.json`.
    pub fn config_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(JsonFileStorage::default_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(tmp: &TempDir) -> ConfigStore {
        AppConfig::open_store(Some(tmp.path().join("config.json").as_path()))
    }

    #[test]
    fn defaults_without_settings() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(AppConfig::from_store(&store_in(&tmp)), AppConfig::default());
        assert_eq!(AppConfig::default().default_template, "basic");
    }

    #[test]
    fn reads_default_template() {
        let tmp = TempDir::new().unwrap();
        let mut store = store_in(&tmp);
        store.set(DEFAULT_TEMPLATE_KEY, "web").unwrap();

        assert_eq!(AppConfig::from_store(&store).default_template, "web");
    }

    #[test]
    fn blank_default_template_is_ignored() {
        let tmp = TempDir::new().unwrap();
        let mut store = store_in(&tmp);
        store.set(DEFAULT_TEMPLATE_KEY, "  ").unwrap();

        assert_eq!(AppConfig::from_store(&store).default_template, "basic");
    }

    #[test]
    fn no_color_accepts_truthy_strings() {
        let tmp = TempDir::new().unwrap();
        let mut store = store_in(&tmp);

        store.set(NO_COLOR_KEY, "yes").unwrap();
        assert!(AppConfig::from_store(&store).no_color);

        store.set(NO_COLOR_KEY, "off").unwrap();
        assert!(!AppConfig::from_store(&store).no_color);

        store.set(NO_COLOR_KEY, "maybe").unwrap();
        assert!(!AppConfig::from_store(&store).no_color);
    }

    #[test]
    fn override_path_wins() {
        let p = Path::new("/tmp/custom.json");
        assert_eq!(AppConfig::config_path(Some(p)), p);
        assert!(AppConfig::config_path(None).ends_with(".t3/config.json"));
    }
}
