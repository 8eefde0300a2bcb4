use std::fmt;

use super::profile::UserProfile;

/// What the sign-in component shows for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Greeting, email, and a logout control.
    Authenticated { name: String, email: String },
    /// A "Login with Google" control.
    Anonymous,
}

impl View {
    pub fn from_user(user: Option<&UserProfile>) -> Self {
        match user {
            Some(profile) => Self::Authenticated {
                name: profile.display_name(),
                email: profile.email.clone(),
            },
            None => Self::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authenticated { name, email } => {
                writeln!(f, "Welcome, {name}")?;
                writeln!(f, "Email: {email}")?;
                write!(f, "[Logout]")
            }
            Self::Anonymous => write!(f, "[Login with Google]"),
        }
    }
}
