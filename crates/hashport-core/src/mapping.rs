use serde::{Deserialize, Serialize};

/// A stored URL mapping in the key-value store.
///
/// The short key is the store key; the record carries the long URL the
/// key is bound to. Two distinct long URLs never share a key, but the
/// same long URL submitted twice overwrites its own record with
/// identical content, which is idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlMapping {
    /// The original URL the short key resolves to.
    pub long_url: String,
}

impl UrlMapping {
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
        }
    }
}
