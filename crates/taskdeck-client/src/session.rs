//! Session Store
//!
//! Holds the bearer token (and the cached user record) in a durable
//! key-value backend. The browser build backs it with `localStorage`;
//! tests use [`MemoryStore`]. There is no expiry tracking here: an expired
//! token is only discovered when a call using it fails.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::domain::User;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const USER_KEY: &str = "user";

/// Minimal string key-value storage (the shape of Web Storage)
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// In-process storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// The one session for a storage backend
#[derive(Debug, Clone)]
pub struct Session<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current token, read fresh from storage on every call
    pub fn token(&self) -> Option<String> {
        self.store
            .get_item(ACCESS_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        debug!("session token stored");
        self.store.set_item(ACCESS_TOKEN_KEY, token);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn user(&self) -> Option<User> {
        let raw = self.store.get_item(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("discarding unreadable cached user: {}", e);
                None
            }
        }
    }

    pub fn set_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(raw) => self.store.set_item(USER_KEY, &raw),
            Err(e) => warn!("failed to cache user record: {}", e),
        }
    }

    /// Forget the token and the cached user together
    pub fn clear(&self) {
        debug!("session cleared");
        self.store.remove_item(ACCESS_TOKEN_KEY);
        self.store.remove_item(USER_KEY);
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_set_get_clear() {
        let session = Session::new(MemoryStore::new());
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());

        session.set_token("abc");
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert!(session.is_authenticated());

        session.clear();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_survives_a_new_session_over_the_same_store() {
        // A page reload builds a fresh Session over the same storage
        let store = MemoryStore::new();
        Session::new(store.clone()).set_token("persisted");
        assert_eq!(Session::new(store).token().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_clear_removes_cached_user() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());
        session.set_token("abc");
        session.set_user(&User {
            id: "u-1".into(),
            email: "me@example.com".into(),
            created_at: Utc::now(),
        });
        assert_eq!(session.user().unwrap().email, "me@example.com");

        session.clear();
        assert!(session.user().is_none());
        assert!(store.get_item(USER_KEY).is_none());
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let store = MemoryStore::new();
        store.set_item(ACCESS_TOKEN_KEY, "");
        assert!(!Session::new(store).is_authenticated());
    }

    #[test]
    fn test_corrupt_user_record_is_ignored() {
        let store = MemoryStore::new();
        store.set_item(USER_KEY, "{not json");
        assert!(Session::new(store).user().is_none());
    }
}
