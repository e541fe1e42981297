//! Mock API implementation for unit testing.
//!
//! This module provides a mock that can be used in tests without making
//! real network requests. Every call is recorded so tests can assert
//! exact call counts and payloads.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::error::ApiError;

use super::client::UserApi;
use super::types::{HealthSnapshot, NewUser, UserRecord};

/// A single recorded API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    /// Health check was requested.
    CheckHealth,
    /// User list was requested.
    ListUsers,
    /// A create was requested with this payload.
    CreateUser {
        /// Submitted name.
        name: String,
        /// Submitted email.
        email: String,
    },
}

/// Configuration for mock behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Whether to fail health checks.
    pub fail_health: bool,
    /// Whether to fail list requests.
    pub fail_list: bool,
    /// Whether to fail create requests.
    pub fail_create: bool,
    /// Simulated latency in milliseconds.
    pub latency_ms: u64,
}

/// Mock user API for testing.
#[derive(Debug, Clone)]
pub struct MockUserApi {
    /// Mock configuration, mutable mid-test to flip failure modes.
    config: Arc<Mutex<MockConfig>>,
    /// Seeded user collection, grows on create.
    users: Arc<Mutex<Vec<UserRecord>>>,
    /// Health snapshot to return.
    health: Arc<Mutex<HealthSnapshot>>,
    /// Recorded calls, in order.
    calls: Arc<Mutex<Vec<ApiCall>>>,
    /// Next id to assign on create.
    next_id: Arc<AtomicI64>,
}

impl MockUserApi {
    /// Create a new mock with default configuration.
    pub fn new() -> Self {
        Self::with_config(MockConfig::default())
    }

    /// Create a mock with custom configuration.
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            config: Arc::new(Mutex::new(config)),
            users: Arc::new(Mutex::new(Vec::new())),
            health: Arc::new(Mutex::new(HealthSnapshot {
                message: "ok".to_string(),
                timestamp: OffsetDateTime::UNIX_EPOCH,
            })),
            calls: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Set the health snapshot to return.
    pub fn set_health(&self, health: HealthSnapshot) {
        *self.health.lock().unwrap() = health;
    }

    /// Toggle health-check failure.
    pub fn set_fail_health(&self, fail: bool) {
        self.config.lock().unwrap().fail_health = fail;
    }

    /// Toggle list failure.
    pub fn set_fail_list(&self, fail: bool) {
        self.config.lock().unwrap().fail_list = fail;
    }

    /// Toggle create failure.
    pub fn set_fail_create(&self, fail: bool) {
        self.config.lock().unwrap().fail_create = fail;
    }

    /// Seed the user collection.
    pub fn seed_users(&self, users: Vec<UserRecord>) {
        let max_id = users.iter().map(|u| u.id).max().unwrap_or(0);
        self.next_id.store(max_id + 1, Ordering::SeqCst);
        *self.users.lock().unwrap() = users;
    }

    /// Get the recorded calls, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Count recorded calls matching a predicate.
    pub fn call_count(&self, predicate: impl Fn(&ApiCall) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| predicate(c)).count()
    }

    /// Clear the recorded call log.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }

    async fn simulate_latency(&self) {
        let latency_ms = self.config.lock().unwrap().latency_ms;
        if latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(latency_ms)).await;
        }
    }

    fn failure(endpoint: &str) -> ApiError {
        ApiError::Status {
            endpoint: endpoint.to_string(),
            status: 500,
        }
    }
}

impl Default for MockUserApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserApi for MockUserApi {
    async fn check_health(&self) -> Result<HealthSnapshot, ApiError> {
        self.record(ApiCall::CheckHealth);
        self.simulate_latency().await;

        if self.config.lock().unwrap().fail_health {
            return Err(Self::failure("/api/health"));
        }

        Ok(self.health.lock().unwrap().clone())
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.record(ApiCall::ListUsers);
        self.simulate_latency().await;

        if self.config.lock().unwrap().fail_list {
            return Err(Self::failure("/api/users"));
        }

        Ok(self.users.lock().unwrap().clone())
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<UserRecord, ApiError> {
        self.record(ApiCall::CreateUser {
            name: new_user.name.clone(),
            email: new_user.email.clone(),
        });
        self.simulate_latency().await;

        if self.config.lock().unwrap().fail_create {
            return Err(Self::failure("/api/users"));
        }

        let record = UserRecord {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            created_at: OffsetDateTime::now_utc(),
        };

        self.users.lock().unwrap().push(record.clone());
        Ok(record)
    }
}
