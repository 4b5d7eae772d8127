use std::collections::HashMap;
use std::sync::Arc;

use async_lock::Mutex;

/// Key under which the remembered credential lives in the session store.
pub const CREDENTIAL_KEY: &str = "content-gate.credential";

/// Session-scoped key-value store, the shape of a browser's sessionStorage.
///
/// Entries live exactly as long as the store value itself; dropping the
/// store ends the "browsing session". The gate reads the credential entry
/// at most once per initialization and writes it at most once per
/// successful submission.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Option<String>;
    /// Stores `value` under `key`, replacing any previous entry.
    async fn put(&self, key: &str, value: &str);
    /// Removes the entry under `key`, if any.
    async fn delete(&self, key: &str);
}

/// In-memory [`SessionStore`], standing in for sessionStorage.
#[derive(Debug, Default)]
pub struct InMemorySessionStore(Mutex<HashMap<String, String>>);

impl InMemorySessionStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.0.lock().await.get(key).cloned()
    }

    async fn put(&self, key: &str, value: &str) {
        self.0.lock().await.insert(key.into(), value.into());
    }

    async fn delete(&self, key: &str) {
        self.0.lock().await.remove(key);
    }
}

// A shared store is how two page views of the same session see each other's
// credential.
#[async_trait::async_trait]
impl<S: SessionStore> SessionStore for Arc<S> {
    async fn get(&self, key: &str) -> Option<String> {
        (**self).get(key).await
    }

    async fn put(&self, key: &str, value: &str) {
        (**self).put(key, value).await
    }

    async fn delete(&self, key: &str) {
        (**self).delete(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[async_std::test]
    async fn put_get_delete_contract() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.get(CREDENTIAL_KEY).await, None);

        store.put(CREDENTIAL_KEY, "first").await;
        assert_eq!(store.get(CREDENTIAL_KEY).await.as_deref(), Some("first"));

        store.put(CREDENTIAL_KEY, "second").await;
        assert_eq!(store.get(CREDENTIAL_KEY).await.as_deref(), Some("second"));

        store.delete(CREDENTIAL_KEY).await;
        assert_eq!(store.get(CREDENTIAL_KEY).await, None);
    }

    #[async_std::test]
    async fn shared_store_is_visible_across_clones() {
        let store = Arc::new(InMemorySessionStore::new());
        let other = store.clone();

        store.put(CREDENTIAL_KEY, "remembered").await;
        assert_eq!(other.get(CREDENTIAL_KEY).await.as_deref(), Some("remembered"));
    }
}
