//! Session-scoped bearer token storage. Pages reach the store through a
//! [`SessionContext`] handed down the component tree, never through a global,
//! so tests and alternative hosts can inject their own store.

use std::sync::{Arc, Mutex};

/// Holder of the current bearer token for the browser session.
///
/// At most one token is held; `save` replaces any previous value and performs
/// no validation.
pub trait TokenStore: Send + Sync {
    fn save(&self, token: &str);
    fn get(&self) -> Option<String>;
    fn clear(&self);
}

/// In-process store, used by tests and when browser storage is unavailable.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn get(&self) -> Option<String> {
        self.token.lock().ok().and_then(|slot| slot.clone())
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

/// Store backed by `window.sessionStorage`, scoped to the browser tab.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct BrowserTokenStore;

#[cfg(target_arch = "wasm32")]
impl BrowserTokenStore {
    /// Storage key holding the token.
    pub const KEY: &'static str = "tokenboard.access_token";

    fn storage() -> Option<web_sys::Storage> {
        let storage = web_sys::window()
            .and_then(|window| window.session_storage().ok())
            .flatten();
        if storage.is_none() {
            tracing::warn!("session storage is unavailable");
        }
        storage
    }

    /// Returns `true` when the browser exposes session storage.
    pub fn is_available() -> bool {
        web_sys::window()
            .and_then(|window| window.session_storage().ok())
            .flatten()
            .is_some()
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserTokenStore {
    fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(Self::KEY, token).is_err() {
                tracing::warn!("failed to persist session token");
            }
        }
    }

    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(Self::KEY).ok().flatten()
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(Self::KEY).is_err() {
                tracing::warn!("failed to clear session token");
            }
        }
    }
}

/// Shared handle to the session's token store.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn TokenStore>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Context backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    /// Context backed by session storage, or memory when storage is missing.
    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        if BrowserTokenStore::is_available() {
            Self::new(Arc::new(BrowserTokenStore))
        } else {
            tracing::warn!("falling back to in-memory token store");
            Self::in_memory()
        }
    }

    pub fn save_token(&self, token: &str) {
        self.store.save(token);
    }

    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    /// Drops the current token, typically on sign-out.
    pub fn clear(&self) {
        self.store.clear();
    }
}
