//! User directory API: wire types, HTTP client, and test mock.

pub mod client;
pub mod mock;
pub mod types;

pub use client::{ApiClient, UserApi};
pub use types::{HealthSnapshot, NewUser, UserRecord};
