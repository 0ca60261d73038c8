//! In-memory template store with built-in templates.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use t3_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{DomainValidator as validator, Template},
    error::T3Result,
};

use crate::builtin_templates;

/// Thread-safe in-memory template store keyed by template name.
#[derive(Debug, Clone)]
pub struct InMemoryTemplateStore {
    inner: Arc<RwLock<BTreeMap<String, Template>>>,
}

impl InMemoryTemplateStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> T3Result<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    /// Load built-in templates.
    pub fn load_builtin(&self) -> T3Result<()> {
        for template in builtin_templates::all_templates()? {
            self.insert(template)?;
        }
        Ok(())
    }

    /// Add or replace a template after validating it.
    pub fn insert(&self, template: Template) -> T3Result<()> {
        validator::validate_template(&template)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned { resource: "template store" })?;
        inner.insert(template.name.clone(), template);
        Ok(())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryTemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn get(&self, name: &str) -> T3Result<Option<Template>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned { resource: "template store" })?;
        Ok(inner.get(name).cloned())
    }

    fn list(&self) -> T3Result<Vec<Template>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned { resource: "template store" })?;
        Ok(inner.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_store_has_three_layouts() {
        let store = InMemoryTemplateStore::with_builtin().unwrap();
        assert_eq!(store.len(), 3);

        let names: Vec<_> = store.list().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["basic", "python", "web"]);
    }

    #[test]
    fn get_is_exact_match() {
        let store = InMemoryTemplateStore::with_builtin().unwrap();
        assert!(store.get("python").unwrap().is_some());
        assert!(store.get("Python").unwrap().is_none());
        assert!(store.get("rust").unwrap().is_none());
    }

    #[test]
    fn insert_rejects_empty_template() {
        let store = InMemoryTemplateStore::new();
        let empty = Template {
            name: "empty".into(),
            description: String::new(),
            nodes: Vec::new(),
        };
        assert!(store.insert(empty).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn insert_replaces_by_name() {
        let store = InMemoryTemplateStore::with_builtin().unwrap();
        let custom = Template::builder("basic")
            .description("custom")
            .directory("lib")
            .unwrap()
            .build()
            .unwrap();

        store.insert(custom).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.get("basic").unwrap().unwrap().description, "custom");
    }
}
