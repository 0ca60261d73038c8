//! In-memory configuration storage for testing.

use std::sync::{Arc, RwLock};

use t3_core::{
    application::{ApplicationError, ConfigLoadError, ports::ConfigStorage},
    domain::ConfigMap,
    error::T3Result,
};

const LOCATION: &str = "<memory>";

/// Holds the serialized document as text, so corrupt content can be seeded
/// and parsed through the same path as the file adapter.
///
/// Clones share the same document.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStorage {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    document: Option<String>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryConfigStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with raw document text.
    pub fn with_document(raw: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut inner) = storage.inner.write() {
            inner.document = Some(raw.into());
        }
        storage
    }

    /// Current raw document, if any.
    pub fn document(&self) -> Option<String> {
        self.inner.read().ok()?.document.clone()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.inner.read().map(|inner| inner.writes).unwrap_or(0)
    }

    /// Make subsequent writes and removals fail.
    pub fn fail_writes(&self, fail: bool) {
        if let Ok(mut inner) = self.inner.write() {
            inner.fail_writes = fail;
        }
    }
}

impl ConfigStorage for MemoryConfigStorage {
    fn read(&self) -> Result<Option<ConfigMap>, ConfigLoadError> {
        let inner = self.inner.read().map_err(|e| ConfigLoadError::Io {
            location: LOCATION.into(),
            reason: e.to_string(),
        })?;

        inner
            .document
            .as_deref()
            .map(|raw| {
                serde_json::from_str(raw).map_err(|e| ConfigLoadError::Parse {
                    location: LOCATION.into(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    }

    fn write(&self, config: &ConfigMap) -> T3Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned { resource: "configuration storage" })?;

        if inner.fail_writes {
            return Err(ApplicationError::ConfigWrite {
                location: LOCATION.into(),
                reason: "writes disabled".into(),
            }
            .into());
        }

        let raw = serde_json::to_string_pretty(config).map_err(|e| ApplicationError::ConfigWrite {
            location: LOCATION.into(),
            reason: e.to_string(),
        })?;
        inner.document = Some(raw);
        inner.writes += 1;
        Ok(())
    }

    fn remove(&self) -> T3Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned { resource: "configuration storage" })?;

        if inner.fail_writes {
            return Err(ApplicationError::ConfigWrite {
                location: LOCATION.into(),
                reason: "writes disabled".into(),
            }
            .into());
        }

        inner.document = None;
        Ok(())
    }

    fn location(&self) -> String {
        LOCATION.to_string()
    }
}
