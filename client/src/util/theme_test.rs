#![cfg(not(feature = "hydrate"))]

use std::cell::RefCell;

use super::*;

/// In-memory store recording every write.
#[derive(Default)]
struct MemoryStore {
    value: RefCell<Option<String>>,
    writes: RefCell<Vec<String>>,
}

impl MemoryStore {
    fn with(value: &str) -> Self {
        Self { value: RefCell::new(Some(value.to_owned())), writes: RefCell::default() }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        self.writes.borrow_mut().push(value.to_owned());
        *self.value.borrow_mut() = Some(value.to_owned());
        Ok(())
    }
}

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn load(&self) -> Option<String> {
        None
    }

    fn save(&self, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_without_stored_value_follows_system_dark() {
    assert_eq!(resolve(None, true), Theme::Dark);
}

#[test]
fn resolve_without_stored_value_follows_system_light() {
    assert_eq!(resolve(None, false), Theme::Light);
}

#[test]
fn resolve_stored_value_overrides_system() {
    assert_eq!(resolve(Some("light"), true), Theme::Light);
    assert_eq!(resolve(Some("dark"), false), Theme::Dark);
}

#[test]
fn resolve_unknown_stored_value_means_light() {
    assert_eq!(resolve(Some("sepia"), true), Theme::Light);
}

#[test]
fn resolve_blank_stored_value_defers_to_system() {
    assert_eq!(resolve(Some(""), true), Theme::Dark);
    assert_eq!(resolve(Some("  "), false), Theme::Light);
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn theme_storage_strings() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(resolve(Some(Theme::Dark.as_str()), false), Theme::Dark);
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn read_preference_from_uses_store() {
    let store = MemoryStore::with("dark");
    assert_eq!(read_preference_from(&store, false), Theme::Dark);
    let empty = MemoryStore::default();
    assert_eq!(read_preference_from(&empty, true), Theme::Dark);
}

#[test]
fn toggle_writes_exactly_once_per_toggle() {
    let store = MemoryStore::with("light");
    let next = toggle_with(&store, Theme::Light);
    assert_eq!(next, Theme::Dark);
    assert_eq!(*store.writes.borrow(), vec!["dark".to_owned()]);

    let next = toggle_with(&store, next);
    assert_eq!(next, Theme::Light);
    assert_eq!(*store.writes.borrow(), vec!["dark".to_owned(), "light".to_owned()]);
    assert_eq!(read_preference_from(&store, true), Theme::Light);
}

#[test]
fn toggle_survives_unavailable_storage() {
    assert_eq!(toggle_with(&BrokenStore, Theme::Dark), Theme::Light);
    assert_eq!(read_preference_from(&BrokenStore, false), Theme::Light);
}

#[test]
fn browser_helpers_are_inert_without_hydrate() {
    assert_eq!(read_preference(), Theme::Light);
    assert!(!system_prefers_dark());
    assert_eq!(LocalStorage.save("dark"), Err(StorageError::Unavailable));
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    apply(Theme::Dark);
}
