//! CLI-specific error formatting for user-facing messages.

use crate::config::CLIENT_ID_VAR;
use crate::error::Error;

/// Map an [`Error`] to a user-facing help string with actionable guidance.
pub fn format_error_help(err: &Error) -> String {
    match err {
        Error::Configuration(msg) if msg.contains(CLIENT_ID_VAR) => {
            format!("{msg}. Set {CLIENT_ID_VAR} in your environment or .env file")
        }
        Error::Configuration(msg) => format!("Configuration error: {msg}. Check your .env"),
        other => format!("{other}"),
    }
}
