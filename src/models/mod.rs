//! Data models for directory entities.
//!
//! The only entity in this app is the `UserRecord` profile returned by the
//! remote directory service and mirrored in the persisted cache.

pub mod user;

pub use user::{Birthday, UserRecord};
