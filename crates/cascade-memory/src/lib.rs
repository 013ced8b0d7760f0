//! # cascade-memory
//!
//! Bounded in-memory learning store. Incident records append into a
//! ring-buffer capped at a hard maximum, evicting the oldest slice on
//! overflow; pattern effectiveness counters update from outcome feedback.
//! A single `RwLock` serializes writers; readers take snapshots and may see
//! slightly stale data.

pub mod store;

pub use store::InMemoryStore;
