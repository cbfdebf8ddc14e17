//! Browser Storage
//!
//! `localStorage` as the session backend, so a reload keeps the user
//! signed in.

use taskdeck_client::{KeyValueStore, Session};
use tracing::warn;

/// Handle to `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

pub type BrowserSession = Session<BrowserStorage>;

impl BrowserStorage {
    #[cfg(target_arch = "wasm32")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    /// No browser window outside wasm
    #[cfg(not(target_arch = "wasm32"))]
    fn storage() -> Option<web_sys::Storage> {
        None
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    warn!("localStorage rejected write of {}", key);
                }
            }
            None => warn!("localStorage unavailable; {} not persisted", key),
        }
    }

    fn remove_item(&self, key: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.remove_item(key).is_err() {
                    warn!("localStorage rejected removal of {}", key);
                }
            }
            None => warn!("localStorage unavailable; {} not removed", key),
        }
    }
}
