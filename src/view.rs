//! Text rendering of the view-model state.
//!
//! Pure functions of `&AppState`; nothing here mutates state or talks
//! to the network.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::controller::AppState;

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Format a timestamp for display.
pub fn format_timestamp(ts: OffsetDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| ts.to_string())
}

/// Render the full console view: health panel, status line, user list.
pub fn render(state: &AppState) -> String {
    let mut out = String::new();

    out.push_str("=== User Directory ===\n");

    if let Some(health) = &state.health {
        out.push_str(&format!(
            "Server Status: {}\nLast Check: {}\n",
            health.message,
            format_timestamp(health.timestamp)
        ));
    }

    if !state.status.is_empty() {
        out.push_str(&format!("[{}] {}\n", state.status.kind, state.status.text));
    }

    out.push_str(&format!("\nUsers ({})\n", state.users.len()));

    if state.users.is_empty() {
        out.push_str("No users found. Add some users to see them here!\n");
    } else {
        for user in &state.users {
            out.push_str(&format!(
                "  {} - {}\n    ID: {} | Created: {}\n",
                user.name,
                user.email,
                user.id,
                format_timestamp(user.created_at)
            ));
        }
    }

    out
}
