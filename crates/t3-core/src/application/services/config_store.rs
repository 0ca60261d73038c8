//! Config Store - persisted key/value user settings.
//!
//! The store keeps the whole mapping in memory and writes it through to the
//! [`ConfigStorage`] port on every mutation. Reading is forgiving (a missing
//! or corrupt document is an empty mapping); writing is not.
//!
//! Two processes mutating the same document are not coordinated: the last
//! writer wins.

use tracing::{debug, instrument, warn};

use crate::{
    application::{ApplicationError, ports::ConfigStorage},
    domain::{ConfigMap, ConfigValue},
    error::T3Result,
};

/// Persistent key/value configuration.
pub struct ConfigStore {
    storage: Box<dyn ConfigStorage>,
    data: ConfigMap,
}

impl ConfigStore {
    /// Create a store over `storage`, loading its current contents.
    pub fn new(storage: Box<dyn ConfigStorage>) -> Self {
        let mut store = Self {
            storage,
            data: ConfigMap::new(),
        };
        store.load();
        store
    }

    /// Re-read the backing document.
    ///
    /// Never fails: I/O and parse errors are logged and yield an empty mapping.
    #[instrument(skip_all, fields(location = %self.storage.location()))]
    pub fn load(&mut self) -> &ConfigMap {
        self.data = match self.storage.read() {
            Ok(Some(map)) => {
                debug!(keys = map.len(), "configuration loaded");
                map
            }
            Ok(None) => {
                debug!("no configuration stored yet");
                ConfigMap::new()
            }
            Err(e) => {
                warn!(
                    location = %self.storage.location(),
                    error = %e,
                    "ignoring unreadable configuration, the next change replaces it"
                );
                ConfigMap::new()
            }
        };
        &self.data
    }

    /// Value for `key`, if set.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.data.get(key)
    }

    /// Value for `key`, or `default` when unset.
    pub fn get_or(&self, key: &str, default: impl Into<ConfigValue>) -> ConfigValue {
        self.data.get(key).cloned().unwrap_or_else(|| default.into())
    }

    /// Value for `key`, failing with `KeyNotFound` when unset.
    pub fn require(&self, key: &str) -> T3Result<&ConfigValue> {
        self.data.get(key).ok_or_else(|| {
            ApplicationError::KeyNotFound {
                key: key.to_string(),
            }
            .into()
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Where the configuration is persisted.
    pub fn location(&self) -> String {
        self.storage.location()
    }

    /// Insert or overwrite `key` and persist the whole mapping.
    ///
    /// If the write fails the in-memory mapping is restored and the error is
    /// returned.
    #[instrument(skip(self, value))]
    pub fn set(&mut self, key: &str, value: impl Into<ConfigValue>) -> T3Result<()> {
        let key = key.to_string();
        let previous = self.data.insert(key.clone(), value.into());

        if let Err(e) = self.storage.write(&self.data) {
            match previous {
                Some(old) => {
                    self.data.insert(key, old);
                }
                None => {
                    self.data.shift_remove(&key);
                }
            }
            return Err(e);
        }

        debug!("configuration key set");
        Ok(())
    }

    /// Remove `key` and persist. Returns whether the key existed.
    ///
    /// An absent key is a no-op: nothing is written.
    #[instrument(skip(self))]
    pub fn delete(&mut self, key: &str) -> T3Result<bool> {
        let Some((index, key, value)) = self.data.shift_remove_full(key) else {
            debug!("key not present, nothing to delete");
            return Ok(false);
        };

        if let Err(e) = self.storage.write(&self.data) {
            self.data.shift_insert(index, key, value);
            return Err(e);
        }

        debug!("configuration key deleted");
        Ok(true)
    }

    /// Owned copy of every stored entry.
    pub fn get_all(&self) -> ConfigMap {
        self.data.clone()
    }

    /// Drop every entry and delete the backing document.
    #[instrument(skip_all, fields(location = %self.storage.location()))]
    pub fn reset(&mut self) -> T3Result<()> {
        self.storage.remove()?;
        self.data.clear();
        debug!("configuration reset");
        Ok(())
    }
}
