//! Theme flag persistence and toggle labels.

use eco_core::theme::DARK_THEME_CLASS;
use eco_core::{KeyValueStore, MemoryStore, StorageError, Theme, ThemeManager};
use pretty_assertions::assert_eq;

/// Store whose writes always fail.
struct ReadOnlyStore(Option<String>);

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.0.clone())
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}

#[test]
fn initialize_defaults_to_light_and_persists_it() {
    let mut store = MemoryStore::new();
    let mut manager = ThemeManager::new("theme");

    assert_eq!(manager.initialize(&mut store), Theme::Light);
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    assert_eq!(manager.toggle_label(), "🌙 Dark");
    assert_eq!(manager.root_class(), None);
}

#[test]
fn initialize_restores_saved_dark() {
    let mut store = MemoryStore::new();
    store.set("theme", "dark").unwrap();
    let mut manager = ThemeManager::new("theme");

    assert_eq!(manager.initialize(&mut store), Theme::Dark);
    assert_eq!(manager.toggle_label(), "☀️ Light");
    assert_eq!(manager.root_class(), Some(DARK_THEME_CLASS));
}

#[test]
fn unknown_flag_reads_as_light() {
    let mut store = MemoryStore::new();
    store.set("theme", "sepia").unwrap();
    let mut manager = ThemeManager::new("theme");

    assert_eq!(manager.initialize(&mut store), Theme::Light);
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
}

#[test]
fn toggle_twice_restores_label_and_flag() {
    let mut store = MemoryStore::new();
    let mut manager = ThemeManager::new("theme");
    manager.initialize(&mut store);
    let label = manager.toggle_label();
    let flag = store.get("theme").unwrap();

    assert_eq!(manager.toggle(&mut store), Theme::Dark);
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(manager.toggle(&mut store), Theme::Light);

    assert_eq!(manager.toggle_label(), label);
    assert_eq!(store.get("theme").unwrap(), flag);
}

#[test]
fn toggle_follows_the_persisted_flag() {
    let mut store = MemoryStore::new();
    let mut manager = ThemeManager::new("theme");
    manager.initialize(&mut store);

    store.set("theme", "dark").unwrap();
    assert_eq!(manager.toggle(&mut store), Theme::Light);
}

#[test]
fn failed_write_still_applies_theme() {
    let mut store = ReadOnlyStore(None);
    let mut manager = ThemeManager::new("theme");
    manager.initialize(&mut store);

    assert_eq!(manager.apply(&mut store, Theme::Dark), Theme::Dark);
    assert_eq!(manager.current(), Theme::Dark);
}

#[test]
fn theme_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    assert_eq!(Theme::Light.opposite(), Theme::Dark);
}
