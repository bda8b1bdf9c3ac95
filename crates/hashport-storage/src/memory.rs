use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use hashport_core::{KeyValueStore, ShortKey, StoreError, UrlMapping};

type Result<T> = std::result::Result<T, StoreError>;

/// In-memory implementation of the [`KeyValueStore`] trait using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking. Its entry API makes `put_if_absent` a real
/// atomic check-and-insert rather than a check-then-act.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: DashMap<String, UrlMapping>,
}

impl InMemoryStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory store with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity),
        }
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &ShortKey) -> Result<Option<UrlMapping>> {
        Ok(self.entries.get(key.as_str()).map(|entry| entry.value().clone()))
    }

    async fn put(&self, key: &ShortKey, mapping: UrlMapping) -> Result<()> {
        self.entries.insert(key.as_str().to_owned(), mapping);
        Ok(())
    }

    async fn put_if_absent(&self, key: &ShortKey, mapping: UrlMapping) -> Result<()> {
        match self.entries.entry(key.as_str().to_owned()) {
            Entry::Occupied(_) => Err(StoreError::Occupied(key.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(mapping);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> ShortKey {
        ShortKey::new_unchecked(s)
    }

    #[tokio::test]
    async fn put_and_get() {
        let store = InMemoryStore::new();

        store
            .put(&key("cd69b81"), UrlMapping::new("https://example.com/a"))
            .await
            .unwrap();

        let mapping = store.get(&key("cd69b81")).await.unwrap().unwrap();
        assert_eq!(mapping.long_url, "https://example.com/a");
    }

    #[tokio::test]
    async fn get_unbound_key() {
        let store = InMemoryStore::new();

        let mapping = store.get(&key("cd69b81")).await.unwrap();
        assert!(mapping.is_none());
    }

    #[tokio::test]
    async fn put_overwrites() {
        let store = InMemoryStore::new();

        store
            .put(&key("cd69b81"), UrlMapping::new("https://old.example"))
            .await
            .unwrap();
        store
            .put(&key("cd69b81"), UrlMapping::new("https://new.example"))
            .await
            .unwrap();

        let mapping = store.get(&key("cd69b81")).await.unwrap().unwrap();
        assert_eq!(mapping.long_url, "https://new.example");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn put_if_absent_on_free_key() {
        let store = InMemoryStore::new();

        store
            .put_if_absent(&key("cd69b81"), UrlMapping::new("https://example.com/a"))
            .await
            .unwrap();

        let mapping = store.get(&key("cd69b81")).await.unwrap().unwrap();
        assert_eq!(mapping.long_url, "https://example.com/a");
    }

    #[tokio::test]
    async fn put_if_absent_on_bound_key() {
        let store = InMemoryStore::new();

        store
            .put(&key("cd69b81"), UrlMapping::new("https://example.com/a"))
            .await
            .unwrap();

        let err = store
            .put_if_absent(&key("cd69b81"), UrlMapping::new("https://example.com/b"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Occupied(_)));

        // The existing record is untouched.
        let mapping = store.get(&key("cd69b81")).await.unwrap().unwrap();
        assert_eq!(mapping.long_url, "https://example.com/a");
    }

    #[tokio::test]
    async fn concurrent_put_if_absent_single_winner() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryStore::new());
        let mut handles = Vec::new();

        for i in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .put_if_absent(
                        &key("cd69b81"),
                        UrlMapping::new(format!("https://example.com/{i}")),
                    )
                    .await
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(store.len(), 1);
    }
}
