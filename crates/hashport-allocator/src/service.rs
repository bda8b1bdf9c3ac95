use crate::allocator::{Allocator, Shortened};
use crate::error::{AllocError, Result};
use crate::settings::{AllocatorSettings, CommitMode, ProbeFailurePolicy};
use async_trait::async_trait;
use hashport_core::{KeyValueStore, ShortKey, StoreError, UrlDigest, UrlMapping};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// A concrete implementation of the [`Allocator`] trait.
///
/// This service wraps an injected [`KeyValueStore`] and drives the
/// digest-prefix probing protocol: the shortest prefix of the URL's
/// MD5 digest that is not bound to a different URL becomes the short
/// key. The service holds no mutable state of its own; every
/// invocation is a sequence of awaited store calls.
#[derive(Debug, Clone)]
pub struct AllocatorService<S> {
    store: Arc<S>,
    settings: AllocatorSettings,
}

impl<S: KeyValueStore> AllocatorService<S> {
    /// Creates an allocator over a store with the default settings
    /// (fail-open probing, overwrite commit).
    pub fn new(store: S) -> Self {
        Self::with_settings(store, AllocatorSettings::default())
    }

    /// Creates an allocator with explicit policy settings.
    pub fn with_settings(store: S, settings: AllocatorSettings) -> Self {
        Self {
            store: Arc::new(store),
            settings,
        }
    }

    /// Resolves a short key given as a raw string, validating it first.
    ///
    /// Convenience for request layers that receive the key as text; a
    /// missing or malformed key is rejected before the store is asked.
    pub async fn resolve_str(&self, key: &str) -> Result<Option<UrlMapping>> {
        let key = ShortKey::new(key)?;
        Allocator::resolve(self, &key).await
    }

    /// Probes the store for the shortest usable prefix of `digest`.
    ///
    /// The selected key starts as the full digest and is only replaced
    /// when a probe finds a usable shorter prefix; if every probed
    /// length is taken, the full digest stands. The probe range stops
    /// one short of the digest length, so the full digest is never
    /// probed itself and is reachable only through that fallback.
    async fn probe(&self, digest: &UrlDigest, long_url: &str) -> Result<ShortKey> {
        let mut key = digest.full_key();

        for len in self.settings.min_key_len..digest.len() {
            let candidate = digest.prefix_key(len);

            match self.store.get(&candidate).await {
                Ok(None) => {
                    trace!(key = %candidate, "prefix is free");
                    key = candidate;
                    break;
                }
                Ok(Some(existing)) if existing.long_url == long_url => {
                    // Resubmission of the same URL lands on its
                    // existing key instead of growing a longer one.
                    trace!(key = %candidate, "prefix already bound to this url");
                    key = candidate;
                    break;
                }
                Ok(Some(_)) => {
                    trace!(key = %candidate, "prefix taken, growing");
                }
                Err(err) => match self.settings.probe_failure {
                    ProbeFailurePolicy::AssumeFree => {
                        warn!(key = %candidate, error = %err, "probe failed, assuming prefix is free");
                        key = candidate;
                        break;
                    }
                    ProbeFailurePolicy::Abort => return Err(err.into()),
                },
            }
        }

        Ok(key)
    }

    /// Persists the binding at the selected key.
    async fn commit(&self, key: ShortKey, digest: &UrlDigest, long_url: &str) -> Result<ShortKey> {
        match self.settings.commit {
            CommitMode::Overwrite => {
                self.store.put(&key, UrlMapping::new(long_url)).await?;
                Ok(key)
            }
            CommitMode::Reserve => self.reserve(key, digest, long_url).await,
        }
    }

    /// Conditional-write commit: reserves the key atomically and grows
    /// the prefix when the reservation loses to a concurrent writer.
    ///
    /// Unlike the probe loop, this path does try the full digest as a
    /// candidate; a conflict there means every prefix of the digest is
    /// bound to another URL and allocation fails.
    async fn reserve(
        &self,
        first: ShortKey,
        digest: &UrlDigest,
        long_url: &str,
    ) -> Result<ShortKey> {
        let mut candidate = first;

        loop {
            match self
                .store
                .put_if_absent(&candidate, UrlMapping::new(long_url))
                .await
            {
                Ok(()) => return Ok(candidate),
                Err(StoreError::Occupied(_)) => {
                    // The occupant may be this very URL, written by a
                    // concurrent submission or an earlier one the probe
                    // could not see during a store error.
                    if let Some(existing) = self.store.get(&candidate).await? {
                        if existing.long_url == long_url {
                            return Ok(candidate);
                        }
                    }

                    if candidate.len() >= digest.len() {
                        return Err(AllocError::KeySpaceExhausted(digest.as_str().to_owned()));
                    }

                    let next_len = candidate.len() + 1;
                    trace!(len = next_len, "reservation lost, growing prefix");
                    candidate = digest.prefix_key(next_len);
                }
                Err(other) => return Err(other.into()),
            }
        }
    }
}

#[async_trait]
impl<S: KeyValueStore> Allocator for AllocatorService<S> {
    async fn shorten(&self, long_url: &str) -> Result<Shortened> {
        if long_url.is_empty() {
            return Err(AllocError::EmptyUrl);
        }

        let digest = UrlDigest::of(long_url);
        trace!(digest = %digest, url = %long_url, "probing for free prefix");

        let key = self.probe(&digest, long_url).await?;
        let key = self.commit(key, &digest, long_url).await?;

        debug!(key = %key, url = %long_url, "bound short key");

        Ok(Shortened {
            short_key: key,
            long_url: long_url.to_owned(),
        })
    }

    async fn resolve(&self, key: &ShortKey) -> Result<Option<UrlMapping>> {
        trace!(key = %key, "resolving short key");

        match self.store.get(key).await.map_err(AllocError::from)? {
            Some(mapping) => {
                debug!(key = %key, url = %mapping.long_url, "resolved short key");
                Ok(Some(mapping))
            }
            None => {
                trace!(key = %key, "short key not bound");
                Ok(None)
            }
        }
    }
}
