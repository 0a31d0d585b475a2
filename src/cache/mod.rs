//! Persisted record cache.
//!
//! Durable local copy of the last-known-good user roster, so the dashboard
//! has something to show before the network answers (or without a network
//! at all).

pub mod store;

pub use store::{JsonRecordCache, RecordCache};
