use hashport_core::ShortKey;
use typed_builder::TypedBuilder;

/// What to do when a store read fails while probing for a free prefix.
///
/// The deployed scheme treats an unreadable slot as free, which keeps
/// allocation available during a store outage but can hand out a key
/// that is already bound. The choice is an explicit policy rather than
/// a hard-coded behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeFailurePolicy {
    /// Treat the unreadable slot as free and allocate it.
    #[default]
    AssumeFree,
    /// Surface the store error to the caller instead of guessing.
    Abort,
}

/// How the selected key is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitMode {
    /// Unconditional upsert. Concurrent shortens of prefix-sharing
    /// URLs can silently overwrite each other; this is the accepted
    /// check-then-act window of the original scheme.
    #[default]
    Overwrite,
    /// Conditional write with grow-and-retry on conflict. Closes the
    /// check-then-act race at the cost of extra store round-trips.
    Reserve,
}

/// Configures an [`AllocatorService`](crate::AllocatorService) instance.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct AllocatorSettings {
    /// Shortest key the allocator will hand out.
    #[builder(default = ShortKey::MIN_LEN)]
    pub min_key_len: usize,
    /// Policy applied when a store read fails during probing.
    #[builder(default)]
    pub probe_failure: ProbeFailurePolicy,
    /// Commit strategy for the selected key.
    #[builder(default)]
    pub commit: CommitMode,
}

impl Default for AllocatorSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}
