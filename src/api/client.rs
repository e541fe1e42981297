//! HTTP client for the user directory API.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::ApiError;

use super::types::{HealthSnapshot, NewUser, UserRecord};

/// The three remote operations the controller depends on.
///
/// Implemented by [`ApiClient`] for the real server and by
/// [`MockUserApi`](super::mock::MockUserApi) for tests.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Fetch the server health snapshot.
    async fn check_health(&self) -> Result<HealthSnapshot, ApiError>;

    /// Fetch all users, in server order.
    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError>;

    /// Create a user and return the server-assigned record.
    async fn create_user(&self, new_user: &NewUser) -> Result<UserRecord, ApiError>;
}

/// User directory API client over HTTP.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL for the API, no trailing slash.
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from config.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            .connect_timeout(std::time::Duration::from_millis(500))
            .pool_max_idle_per_host(config.http_pool_size)
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET and parse the JSON body, mapping non-2xx to an error.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status: response.status().as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("{}: {}", endpoint, e)))
    }
}

#[async_trait]
impl UserApi for ApiClient {
    #[instrument(skip(self))]
    async fn check_health(&self) -> Result<HealthSnapshot, ApiError> {
        let health: HealthSnapshot = self.get_json("/api/health").await?;
        debug!(message = %health.message, "Server health retrieved");
        Ok(health)
    }

    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let users: Vec<UserRecord> = self.get_json("/api/users").await?;
        debug!(count = users.len(), "Users retrieved");
        Ok(users)
    }

    #[instrument(skip(self, new_user), fields(name = %new_user.name))]
    async fn create_user(&self, new_user: &NewUser) -> Result<UserRecord, ApiError> {
        let endpoint = "/api/users";
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self.http.post(&url).json(new_user).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status: response.status().as_u16(),
            });
        }

        let created: UserRecord = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("{}: {}", endpoint, e)))?;

        debug!(id = created.id, "User created");
        Ok(created)
    }
}
