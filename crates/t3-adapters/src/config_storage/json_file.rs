//! JSON file-backed configuration storage.
//!
//! The document is a single JSON object written with two-space indentation,
//! e.g.
//!
//! ```json
//! {
//!   "editor": "vim",
//!   "init.template": "python"
//! }
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use t3_core::{
    application::{ApplicationError, ConfigLoadError, ports::ConfigStorage},
    domain::ConfigMap,
    error::{T3Error, T3Result},
};

/// Directory under the home directory holding T3 state.
pub const CONFIG_DIR: &str = ".t3";

/// File name of the configuration document.
pub const CONFIG_FILE: &str = "config.json";

/// Configuration persisted as a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Storage backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.t3/config.json`, or `.t3/config.json` relative to the working
    /// directory when no home directory can be determined.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_default()
            .join(CONFIG_DIR)
            .join(CONFIG_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, e: impl std::fmt::Display) -> T3Error {
        ApplicationError::ConfigWrite {
            location: self.location(),
            reason: e.to_string(),
        }
        .into()
    }
}

impl ConfigStorage for JsonFileStorage {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn read(&self) -> Result<Option<ConfigMap>, ConfigLoadError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no configuration file yet");
                return Ok(None);
            }
            Err(e) => {
                return Err(ConfigLoadError::Io {
                    location: self.location(),
                    reason: e.to_string(),
                });
            }
        };

        let config: ConfigMap =
            serde_json::from_str(&raw).map_err(|e| ConfigLoadError::Parse {
                location: self.location(),
                reason: e.to_string(),
            })?;

        debug!(keys = config.len(), "configuration file read");
        Ok(Some(config))
    }

    #[instrument(skip(self, config), fields(path = %self.path.display(), keys = config.len()))]
    fn write(&self, config: &ConfigMap) -> T3Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
            }
        }

        let mut body = serde_json::to_string_pretty(config).map_err(|e| self.write_error(e))?;
        body.push('\n');

        fs::write(&self.path, body).map_err(|e| self.write_error(e))?;
        debug!("configuration file written");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn remove(&self) -> T3Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("configuration file removed");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.write_error(e)),
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
