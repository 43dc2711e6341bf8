//! Bearer token storage
//!
//! The host picks the store when it builds the SDK: an interactive session
//! uses [`MemorySessionStore`], which lives exactly as long as the session
//! object that owns it and is never written to disk. Headless hosts use
//! [`NoopSessionStore`], where nothing is ever remembered.

use parking_lot::RwLock;

/// Storage for the current bearer credential
pub trait SessionStore: Send + Sync {
    /// Persist a token, replacing any previous one
    fn put(&self, token: &str);

    /// Read the stored token
    fn get(&self) -> Option<String>;

    /// Forget the stored token
    fn clear(&self);
}

/// Session-scoped, in-process token storage
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn put(&self, token: &str) {
        *self.token.write() = Some(token.to_string());
    }

    fn get(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn clear(&self) {
        self.token.write().take();
    }
}

/// Store for non-interactive hosts; remembers nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSessionStore;

impl SessionStore for NoopSessionStore {
    fn put(&self, _token: &str) {}

    fn get(&self) -> Option<String> {
        None
    }

    fn clear(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get(), None);

        store.put("first");
        store.put("second");
        assert_eq!(store.get(), Some("second".to_string()));

        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_noop_store_never_remembers() {
        let store = NoopSessionStore;
        store.put("token");
        assert_eq!(store.get(), None);
        store.clear();
        assert_eq!(store.get(), None);
    }
}
