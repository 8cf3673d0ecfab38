//! Login session lifecycle
//!
//! The session is an explicit object created at login and consumed at
//! logout; consumers receive `&Session` instead of reading ambient state.
//! Authentication is simulated: credentials are checked by exact match
//! against the configured pair.

use chrono::{DateTime, Utc};
use tracing::info;
use vita_domain::User;

use crate::config::AuthConfig;

/// Errors from login.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing email or password")]
    MissingCredentials,

    #[error("invalid email or password")]
    InvalidCredentials,
}

/// An authenticated session.
#[derive(Clone, Debug)]
pub struct Session {
    user: User,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Check credentials against the configured pair and open a session
    /// for the configured profile owner.
    pub fn login(config: &AuthConfig, email: &str, password: &str) -> Result<Self, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        if email != config.email || password != config.password {
            return Err(AuthError::InvalidCredentials);
        }

        info!(email = %email, "session started");
        Ok(Self {
            user: config.profile.clone(),
            started_at: Utc::now(),
        })
    }

    /// The profile owner for this session.
    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Replace the profile after an edit.
    pub fn update_profile(&mut self, user: User) {
        info!(name = %user.name, "profile updated");
        self.user = user;
    }

    /// End the session.
    pub fn logout(self) {
        info!(email = %self.user.email, "session ended");
    }
}
