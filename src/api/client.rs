//! HTTP client for the remote user directory.
//!
//! A thin wrapper over `reqwest` that fetches batches of user profiles.
//! No authentication - the directory is a public read-only API.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::api::ApiError;
use crate::models::UserRecord;

/// Default base URL for the user directory API.
pub const DEFAULT_BASE_URL: &str = "https://uinames.com/api/";

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// The remote directory service, at the boundary the store depends on.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Fetch up to `count` user profiles with extended fields.
    async fn fetch_users(&self, count: u32) -> Result<Vec<UserRecord>, ApiError>;
}

/// Directory API client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct DirectoryClient {
    client: reqwest::Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl DirectoryService for DirectoryClient {
    async fn fetch_users(&self, count: u32) -> Result<Vec<UserRecord>, ApiError> {
        // `ext` asks for the extended profile (region, birthday, photo).
        let url = format!("{}?ext&amount={}", self.base_url, count);
        debug!(%url, "Fetching users from directory");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::UnsuccessfulResponse);
        }

        let users: Vec<UserRecord> = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        debug!(count = users.len(), "Directory fetch complete");
        Ok(users)
    }
}
