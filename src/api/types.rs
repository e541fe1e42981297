//! Wire types for the user directory API.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A registered user as returned by the server.
///
/// Records are created server-side and never mutated by this client;
/// the displayed collection is always replaced wholesale by a fresh
/// list fetch, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Server-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Creation time, ISO-8601 on the wire.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Server liveness report from the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSnapshot {
    /// Human-readable status message.
    pub message: String,
    /// Server-side time of the check, ISO-8601 on the wire.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Request body for creating a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl NewUser {
    /// Create a new-user payload.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
