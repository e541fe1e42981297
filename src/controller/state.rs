//! UI state owned by the controller.

use strum::Display;

use crate::api::{HealthSnapshot, UserRecord};

/// Classification of the status slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum StatusKind {
    /// No message to show.
    #[default]
    Empty,
    /// Last action succeeded.
    Success,
    /// Last action failed.
    Error,
}

/// Ephemeral single-slot user feedback. The next action overwrites it;
/// there is no history or dismissal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusMessage {
    /// Message text.
    pub text: String,
    /// Success/error classification.
    pub kind: StatusKind,
}

impl StatusMessage {
    /// A success message.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    /// An error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }

    /// Whether there is anything to display.
    pub fn is_empty(&self) -> bool {
        self.kind == StatusKind::Empty
    }
}

/// The add-user form, mutable per keystroke.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    /// Name field.
    pub name: String,
    /// Email field.
    pub email: String,
}

impl FormState {
    /// Pass-through emptiness check on both fields. Whitespace is not
    /// trimmed; a field of spaces counts as filled.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }

    /// Reset both fields.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
    }
}

/// Full view-model state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// Displayed user collection, replaced wholesale by each list fetch.
    pub users: Vec<UserRecord>,
    /// Add-user form fields.
    pub form: FormState,
    /// Single-slot status message.
    pub status: StatusMessage,
    /// Last-known server liveness report, if any check succeeded.
    pub health: Option<HealthSnapshot>,
}
