//! Persisted bearer credential.
//!
//! Same platform split as the rest of the app's storage: the browser build
//! keeps the token in `localStorage`, tests and native builds keep it in
//! memory.

use std::sync::{Arc, Mutex};

/// Where the raw bearer token lives between page loads.
pub trait CredentialStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// In-memory credential store for tests and the native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentials {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentials {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

/// `localStorage`-backed credential store for the web build.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
#[derive(Clone, Debug, Default)]
pub struct WebCredentials;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl WebCredentials {
    const KEY: &'static str = "liftdesk.token";

    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl CredentialStore for WebCredentials {
    fn load(&self) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(Self::KEY).ok().flatten())
    }

    fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(Self::KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(Self::KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_clears() {
        let store = MemoryCredentials::new();
        assert_eq!(store.load(), None);

        store.save("token-123");
        assert_eq!(store.load().as_deref(), Some("token-123"));

        // clones share the same backing slot
        let other = store.clone();
        other.clear();
        assert_eq!(store.load(), None);
    }
}
