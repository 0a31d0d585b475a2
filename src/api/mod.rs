//! Remote directory service access.
//!
//! `DirectoryClient` talks to the uinames-style REST API; `DirectoryService`
//! is the seam the store depends on so tests can substitute a fake.

pub mod client;
pub mod error;

pub use client::{DirectoryClient, DirectoryService, DEFAULT_BASE_URL};
pub use error::ApiError;
