//! View-model controller mediating between user actions and the API.
//!
//! Every remote failure is caught here, logged, and converted into a
//! [`StatusMessage`]; nothing propagates past the controller. Operations
//! are re-triggerable at any time and are not deduplicated: two rapid
//! submits issue two create calls, matching the behavior this client
//! replaces.

pub mod state;

use tracing::{debug, error};

use crate::api::{HealthSnapshot, NewUser, UserApi, UserRecord};
use crate::error::ApiError;

pub use state::{AppState, FormState, StatusKind, StatusMessage};

/// Owns the UI state and drives the three remote operations.
#[derive(Debug)]
pub struct Controller<A: UserApi> {
    api: A,
    state: AppState,
}

impl<A: UserApi> Controller<A> {
    /// Create a controller with empty state.
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: AppState::default(),
        }
    }

    /// Read the current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Mount-time initialization: health check and user list fetch run
    /// concurrently, with no ordering dependency, and their results are
    /// applied independently.
    pub async fn initialize(&mut self) {
        let (health, users) = tokio::join!(self.api.check_health(), self.api.list_users());
        self.apply_health(health);
        self.apply_users(users);
    }

    /// Check server health. On success the snapshot is replaced; on
    /// failure it is left untouched and the status reports the
    /// connectivity problem. No retry.
    pub async fn check_health(&mut self) {
        let result = self.api.check_health().await;
        self.apply_health(result);
    }

    /// Fetch the user list. On success the entire displayed collection
    /// is replaced; on failure the prior collection is left untouched.
    /// Also serves as the "Refresh" action.
    pub async fn list_users(&mut self) {
        let result = self.api.list_users().await;
        self.apply_users(result);
    }

    /// Update the name field.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state.form.name = name.into();
    }

    /// Update the email field.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.state.form.email = email.into();
    }

    /// Submit the form. An incomplete form produces an error status and
    /// no network call. On a successful create the form is cleared and
    /// the displayed collection resynchronized with one list fetch; on
    /// failure the form is preserved so the user can retry.
    pub async fn submit_user(&mut self) {
        if !self.state.form.is_complete() {
            self.state.status = StatusMessage::error("Please fill in all fields");
            return;
        }

        let new_user = NewUser::new(self.state.form.name.clone(), self.state.form.email.clone());

        match self.api.create_user(&new_user).await {
            Ok(created) => {
                debug!(id = created.id, "User added");
                self.state.form.clear();
                self.state.status = StatusMessage::success("User added successfully!");

                let result = self.api.list_users().await;
                self.apply_users(result);
            }
            Err(e) => {
                error!(error = %e, "Error adding user");
                self.state.status = StatusMessage::error("Failed to add user");
            }
        }
    }

    fn apply_health(&mut self, result: Result<HealthSnapshot, ApiError>) {
        match result {
            Ok(health) => {
                self.state.health = Some(health);
                self.state.status = StatusMessage::success("Connected to server successfully!");
            }
            Err(e) => {
                error!(error = %e, "Error checking server health");
                self.state.status = StatusMessage::error("Failed to connect to server");
            }
        }
    }

    fn apply_users(&mut self, result: Result<Vec<UserRecord>, ApiError>) {
        match result {
            Ok(users) => {
                // Full replacement, never a merge. List success does not
                // touch the status slot.
                self.state.users = users;
            }
            Err(e) => {
                error!(error = %e, "Error fetching users");
                self.state.status = StatusMessage::error("Failed to fetch users");
            }
        }
    }
}
