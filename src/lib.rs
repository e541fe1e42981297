//! Console client for the user directory demo API.
//!
//! The server is an external collaborator exposing three endpoints:
//! a health check, a user list, and a user create. This crate holds the
//! client side: a typed HTTP client, a view-model controller owning all
//! UI state, and a text renderer for the console front-end.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Wire types, HTTP client, and test mock
//! - [`controller`]: View-model controller and UI state
//! - [`view`]: Text rendering of the state

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod view;

pub use config::Config;
pub use controller::Controller;
pub use error::{AppError, Result};
