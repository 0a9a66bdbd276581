//! Light/dark theme initialization, toggle, and persistence.
//!
//! Reads the visitor's preference from `localStorage` (falling back to the
//! `prefers-color-scheme` media query) and applies the `dark` class to the
//! `<html>` element. Toggle writes back to `localStorage` and updates the
//! class. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. Storage failures are logged and dropped, and
//! SSR paths no-op so server rendering is deterministic (always light).

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on the document element.
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("local storage rejected write of {key}")]
    WriteRejected { key: &'static str },
}

/// Key-value slot holding the persisted theme.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage` under [`STORAGE_KEY`]. Inert outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(StorageError::Unavailable)?;
            storage
                .set_item(STORAGE_KEY, value)
                .map_err(|_| StorageError::WriteRejected { key: STORAGE_KEY })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
            Err(StorageError::Unavailable)
        }
    }
}

/// Pick the initial theme from a stored value and the system hint.
///
/// `"dark"` wins outright. Any other non-empty stored value means light.
/// Only an absent or blank value defers to the system.
pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    match stored.map(str::trim) {
        Some("dark") => Theme::Dark,
        Some(value) if !value.is_empty() => Theme::Light,
        _ => Theme::from_dark(system_prefers_dark),
    }
}

/// Whether the platform reports `prefers-color-scheme: dark`.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Read the preference from `store`, falling back to `system_prefers_dark`.
pub fn read_preference_from(store: &impl PreferenceStore, system_prefers_dark: bool) -> Theme {
    resolve(store.load().as_deref(), system_prefers_dark)
}

/// Read the theme preference from localStorage and the system hint.
pub fn read_preference() -> Theme {
    read_preference_from(&LocalStorage, system_prefers_dark())
}

/// Add or remove the `dark` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let class_list = el.class_list();
            let _ = if theme.is_dark() {
                class_list.add_1(DARK_CLASS)
            } else {
                class_list.remove_1(DARK_CLASS)
            };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip `current`, apply it, and persist it to `store` with a single write.
pub fn toggle_with(store: &impl PreferenceStore, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    if let Err(e) = store.save(next.as_str()) {
        log::debug!("theme preference not persisted: {e}");
    }
    next
}

/// Toggle the theme and persist the new preference to localStorage.
pub fn toggle(current: Theme) -> Theme {
    toggle_with(&LocalStorage, current)
}
