//! Configuration
//!
//! Build-time API location and the persisted UI settings.

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage as WebStorage, Storage as _};
use leptos::prelude::*;

/// Backend base path, overridable at build time with `PORTAL_API_BASE`
pub const DEFAULT_API_BASE: &str = "/portal_api";

/// Viewport width at which the desktop layout is used
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

const DARK_MODE_KEY: &str = "darkMode";

pub fn api_base() -> &'static str {
    option_env!("PORTAL_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Full URL for a backend endpoint name such as `save_user`
pub fn endpoint_url(base: &str, endpoint: &str) -> String {
    let path = format!("{}/{}.php", base.trim_end_matches('/'), endpoint);
    if path.starts_with("http://") || path.starts_with("https://") {
        return path;
    }
    // reqwest needs an absolute URL; resolve paths against the page origin
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{}{}", origin, path)
}

/// Whether the viewport selects the desktop route tree
pub fn is_desktop() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(|w| w >= DESKTOP_MIN_WIDTH)
        .unwrap_or(false)
}

// ========================
// Settings Persistence
// ========================

/// Persistence for boolean settings flags
pub trait SettingsStore {
    /// `None` when the key is absent or does not hold a boolean
    fn get_flag(&self, key: &str) -> Option<bool>;
    fn set_flag(&self, key: &str, value: bool);
}

/// `window.localStorage`, JSON-encoded through `gloo-storage`
pub struct BrowserStorage;

impl SettingsStore for BrowserStorage {
    fn get_flag(&self, key: &str) -> Option<bool> {
        match WebStorage::get::<bool>(key) {
            Ok(value) => Some(value),
            Err(StorageError::KeyNotFound(_)) => None,
            Err(e) => {
                log::warn!("[Config] Ignoring stored {}: {}", key, e);
                None
            }
        }
    }

    fn set_flag(&self, key: &str, value: bool) {
        if let Err(e) = WebStorage::set(key, value) {
            log::warn!("[Config] Could not persist {}: {}", key, e);
        }
    }
}

/// User-facing settings, loaded once at startup and saved on every change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub dark_mode: bool,
}

impl Settings {
    pub fn load(store: &impl SettingsStore) -> Self {
        Self {
            dark_mode: store.get_flag(DARK_MODE_KEY).unwrap_or(false),
        }
    }

    pub fn save(&self, store: &impl SettingsStore) {
        store.set_flag(DARK_MODE_KEY, self.dark_mode);
    }
}

/// Toggle the `dark` class on the document root
pub fn apply_theme(settings: Settings) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.class_list().toggle_with_force("dark", settings.dark_mode);
    }
}

/// Reactive settings handle provided via context
#[derive(Clone, Copy)]
pub struct SettingsContext {
    pub settings: ReadSignal<Settings>,
    set_settings: WriteSignal<Settings>,
}

impl SettingsContext {
    /// Load from local storage, apply the theme, and keep both in sync
    pub fn init() -> Self {
        let initial = Settings::load(&BrowserStorage);
        apply_theme(initial);
        let (settings, set_settings) = signal(initial);
        Self { settings, set_settings }
    }

    pub fn toggle_dark_mode(&self) {
        let mut next = self.settings.get_untracked();
        next.dark_mode = !next.dark_mode;
        next.save(&BrowserStorage);
        apply_theme(next);
        self.set_settings.set(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl MemoryStore {
        fn raw(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn put_raw(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    // Same JSON encoding localStorage gets
    impl SettingsStore for MemoryStore {
        fn get_flag(&self, key: &str) -> Option<bool> {
            serde_json::from_str(&self.raw(key)?).ok()
        }

        fn set_flag(&self, key: &str, value: bool) {
            self.put_raw(key, &value.to_string());
        }
    }

    #[test]
    fn test_missing_setting_defaults_to_light() {
        let store = MemoryStore::default();
        assert_eq!(Settings::load(&store), Settings { dark_mode: false });
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::default();
        Settings { dark_mode: true }.save(&store);
        assert_eq!(store.raw("darkMode").as_deref(), Some("true"));
        assert!(Settings::load(&store).dark_mode);
    }

    #[test]
    fn test_unrecognised_value_is_light() {
        let store = MemoryStore::default();
        store.put_raw("darkMode", "yes");
        assert!(!Settings::load(&store).dark_mode);
    }

    #[test]
    fn test_toggle_back_to_light_persists_false() {
        let store = MemoryStore::default();
        Settings { dark_mode: true }.save(&store);
        Settings { dark_mode: false }.save(&store);
        assert_eq!(store.get_flag("darkMode"), Some(false));
        assert!(!Settings::load(&store).dark_mode);
    }

    #[test]
    fn test_absolute_base_is_kept() {
        assert_eq!(
            endpoint_url("https://portal.example.com/portal_api/", "save_user"),
            "https://portal.example.com/portal_api/save_user.php"
        );
    }
}
