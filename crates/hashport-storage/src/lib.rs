//! Store implementations for the Hashport URL shortener.
//!
//! Provides the in-memory [`KeyValueStore`](hashport_core::KeyValueStore)
//! backend plus a fault-injection wrapper for exercising store-outage
//! behavior in tests.

pub mod faulty;
pub mod memory;

pub use faulty::FaultyStore;
pub use memory::InMemoryStore;
