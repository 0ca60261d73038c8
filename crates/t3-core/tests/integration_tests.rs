//! Integration tests for t3-core's public API.
//!
//! Adapters here are minimal in-test fakes; the real ones are exercised in
//! `t3-adapters/tests`.

use std::sync::{Arc, Mutex};

use t3_core::{
    application::ApplicationError,
    domain::{DomainError, FsEntry, ProjectName},
    prelude::*,
};

/// Storage fake that records how many times it was written.
#[derive(Clone, Default)]
struct CountingStorage {
    doc: Arc<Mutex<Option<ConfigMap>>>,
    writes: Arc<Mutex<usize>>,
}

impl ConfigStorage for CountingStorage {
    fn read(&self) -> Result<Option<ConfigMap>, ConfigLoadError> {
        Ok(self.doc.lock().unwrap().clone())
    }

    fn write(&self, config: &ConfigMap) -> T3Result<()> {
        *self.doc.lock().unwrap() = Some(config.clone());
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }

    fn remove(&self) -> T3Result<()> {
        *self.doc.lock().unwrap() = None;
        Ok(())
    }

    fn location(&self) -> String {
        "fake".into()
    }
}

#[test]
fn values_survive_a_new_session() {
    let storage = CountingStorage::default();

    let mut first = ConfigStore::new(Box::new(storage.clone()));
    first.set("editor", "vim").unwrap();
    first.set("theme", "dark").unwrap();

    let second = ConfigStore::new(Box::new(storage.clone()));
    assert_eq!(second.get("editor"), Some(&ConfigValue::from("vim")));
    assert_eq!(second.len(), 2);
}

#[test]
fn empty_mapping_is_still_persisted() {
    let storage = CountingStorage::default();

    let mut store = ConfigStore::new(Box::new(storage.clone()));
    store.set("a", "1").unwrap();
    assert!(store.delete("a").unwrap());

    assert_eq!(*storage.writes.lock().unwrap(), 2);
    assert_eq!(storage.doc.lock().unwrap().as_ref().map(|m| m.len()), Some(0));
}

#[test]
fn reset_then_load_is_empty() {
    let storage = CountingStorage::default();

    let mut store = ConfigStore::new(Box::new(storage.clone()));
    store.set("a", "1").unwrap();
    store.reset().unwrap();

    assert!(store.load().is_empty());
    assert!(storage.doc.lock().unwrap().is_none());
}

#[test]
fn require_reports_missing_key() {
    let store = ConfigStore::new(Box::new(CountingStorage::default()));
    assert_eq!(
        store.require("ghost").unwrap_err(),
        T3Error::Application(ApplicationError::KeyNotFound {
            key: "ghost".into()
        })
    );
}

#[test]
fn project_name_rules() {
    assert!(ProjectName::parse("my-app").is_ok());
    assert!(matches!(
        ProjectName::parse("bad|name"),
        Err(DomainError::InvalidProjectName { .. })
    ));
}

#[test]
fn template_renders_against_context() {
    let template = Template::builder("tiny")
        .file("hello.txt", "hi {{PROJECT_NAME_SNAKE}}")
        .unwrap()
        .build()
        .unwrap();

    let structure = template
        .render(&RenderContext::new("Tiny App"), "out")
        .unwrap();
    let [FsEntry::File(file)] = structure.entries() else {
        panic!("expected a single file entry");
    };
    assert_eq!(file.content, "hi tiny_app");
}
