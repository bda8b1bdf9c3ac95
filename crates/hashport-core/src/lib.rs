//! Core types and traits for the Hashport URL shortener.
//!
//! This crate provides the shared vocabulary used by the key allocator
//! and the store implementations: the URL digest, the validated short
//! key, the persisted mapping, and the key-value store contract.

pub mod digest;
pub mod error;
pub mod mapping;
pub mod shortkey;
pub mod store;

pub use digest::UrlDigest;
pub use error::{CoreError, StoreError};
pub use mapping::UrlMapping;
pub use shortkey::ShortKey;
pub use store::KeyValueStore;
