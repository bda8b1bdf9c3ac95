use crate::error::StoreError;
use crate::mapping::UrlMapping;
use crate::shortkey::ShortKey;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, StoreError>;

/// The narrow key-value contract the allocator needs from a store.
///
/// An unbound key is `Ok(None)` from [`get`](KeyValueStore::get),
/// never an error; implementations fail only on transport or
/// availability problems.
#[async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    /// Retrieves the mapping bound to a short key.
    /// Returns `None` if the key is not bound.
    async fn get(&self, key: &ShortKey) -> Result<Option<UrlMapping>>;

    /// Binds a short key, unconditionally overwriting any existing
    /// record at that exact key.
    async fn put(&self, key: &ShortKey, mapping: UrlMapping) -> Result<()>;

    /// Binds a short key only if it is currently unbound.
    /// Returns `Err(Occupied)` if a record already exists at the key.
    async fn put_if_absent(&self, key: &ShortKey, mapping: UrlMapping) -> Result<()>;
}
