use crate::error::Result;
use async_trait::async_trait;
use hashport_core::{ShortKey, UrlMapping};
use serde::{Deserialize, Serialize};

/// The result of a successful allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortened {
    /// The allocated short key, a digest prefix of length >= 7.
    pub short_key: ShortKey,
    /// The long URL the key is bound to, echoed back unchanged.
    pub long_url: String,
}

#[async_trait]
pub trait Allocator: Send + Sync + 'static {
    /// Allocates a short key for a long URL and persists the binding.
    async fn shorten(&self, long_url: &str) -> Result<Shortened>;

    /// Resolves a short key to its stored mapping.
    /// Returns `None` if the key is not bound.
    async fn resolve(&self, key: &ShortKey) -> Result<Option<UrlMapping>>;
}
