//! Short-key allocation for the Hashport URL shortener.
//!
//! This crate implements the digest-prefix probing protocol: a long
//! URL's MD5 hex digest is probed against a key-value store with
//! progressively longer prefixes until one is found that is not bound
//! to a different URL, and that prefix becomes the short key.

pub mod allocator;
pub mod error;
pub mod service;
pub mod settings;

pub use allocator::{Allocator, Shortened};
pub use error::AllocError;
pub use service::AllocatorService;
pub use settings::{AllocatorSettings, CommitMode, ProbeFailurePolicy};
