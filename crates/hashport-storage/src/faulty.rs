use async_trait::async_trait;
use hashport_core::{KeyValueStore, ShortKey, StoreError, UrlMapping};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, StoreError>;

/// A [`KeyValueStore`] wrapper that injects transport failures.
///
/// Clones share the inner store and the fault switches, so a test can
/// keep a handle and flip faults on and off after the wrapped store has
/// been handed to an allocator.
#[derive(Debug, Clone)]
pub struct FaultyStore<S> {
    inner: Arc<S>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl<S> FaultyStore<S> {
    /// Wraps a store with all faults disabled.
    pub fn new(inner: S) -> Self {
        Self {
            inner: Arc::new(inner),
            fail_reads: Arc::new(AtomicBool::new(false)),
            fail_writes: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Makes subsequent `get` calls fail with [`StoreError::Unavailable`].
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes subsequent `put` and `put_if_absent` calls fail with
    /// [`StoreError::Unavailable`].
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn unavailable(op: &str) -> StoreError {
        StoreError::Unavailable(format!("injected fault: {op}"))
    }
}

#[async_trait]
impl<S: KeyValueStore> KeyValueStore for FaultyStore<S> {
    async fn get(&self, key: &ShortKey) -> Result<Option<UrlMapping>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::unavailable("get"));
        }
        self.inner.get(key).await
    }

    async fn put(&self, key: &ShortKey, mapping: UrlMapping) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::unavailable("put"));
        }
        self.inner.put(key, mapping).await
    }

    async fn put_if_absent(&self, key: &ShortKey, mapping: UrlMapping) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::unavailable("put_if_absent"));
        }
        self.inner.put_if_absent(key, mapping).await
    }
}
