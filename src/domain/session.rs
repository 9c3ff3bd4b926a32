//! Explicit session value replacing the "logged in" storage flag.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::types::SessionToken;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// The single demo account accepted by the login form.
#[derive(Clone, Debug, Deserialize)]
pub struct DemoCredentials {
    pub email: String,
    pub password: String,
}

impl DemoCredentials {
    fn accepts(&self, email: &str, password: &str) -> bool {
        self.email.trim().eq_ignore_ascii_case(email.trim()) && self.password == password
    }
}

/// Authentication state of the current browser session.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct Session {
    pub is_authenticated: bool,
    pub token: Option<SessionToken>,
}

impl Session {
    /// A session that has not logged in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Rebuilds an authenticated session from a stored token.
    pub fn restore(token: SessionToken) -> Self {
        Self {
            is_authenticated: true,
            token: Some(token),
        }
    }

    /// Checks the submitted credentials and issues a fresh token.
    pub fn login(
        credentials: &DemoCredentials,
        email: &str,
        password: &str,
    ) -> Result<Self, SessionError> {
        if credentials.accepts(email, password) {
            Ok(Self::restore(SessionToken::generate()))
        } else {
            Err(SessionError::InvalidCredentials)
        }
    }

    /// Drops the token and returns to the anonymous state.
    pub fn logout(self) -> Self {
        Self::anonymous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> DemoCredentials {
        DemoCredentials {
            email: "demo@radar.com".to_string(),
            password: "123456".to_string(),
        }
    }

    #[test]
    fn login_with_demo_credentials_issues_token() {
        let session = Session::login(&demo(), " Demo@Radar.com ", "123456").unwrap();

        assert!(session.is_authenticated);
        assert!(session.token.is_some());
    }

    #[test]
    fn login_rejects_wrong_password() {
        assert_eq!(
            Session::login(&demo(), "demo@radar.com", "654321"),
            Err(SessionError::InvalidCredentials)
        );
    }

    #[test]
    fn logout_returns_to_anonymous() {
        let session = Session::login(&demo(), "demo@radar.com", "123456").unwrap();

        let session = session.logout();

        assert_eq!(session, Session::anonymous());
        assert!(!session.is_authenticated);
    }
}
