//! User and session entities

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::RegistrationError;

const NAME_PATTERN: &str = r"^[a-zA-Z\s]*$";
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// The signed-in user's record, sent back as the booking's requester snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Opaque bearer credential identifying a user session
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// An authenticated session: the token plus the user record once fetched
#[derive(Debug, Clone)]
pub struct Session {
    pub token: AuthToken,
    pub user: Option<User>,
}

impl Session {
    pub fn new(token: AuthToken) -> Self {
        Self { token, user: None }
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }
}

/// Sign-up details
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    /// Check the fields before they are sent
    ///
    /// Fields are checked in form order and the first failure is returned.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        static NAME: OnceLock<Option<Regex>> = OnceLock::new();
        static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();

        if self.name.is_empty() {
            return Err(RegistrationError::MissingName);
        }
        if !matches_pattern(&NAME, NAME_PATTERN, &self.name) {
            return Err(RegistrationError::InvalidName);
        }
        if self.email.is_empty() {
            return Err(RegistrationError::MissingEmail);
        }
        if !matches_pattern(&EMAIL, EMAIL_PATTERN, &self.email) {
            return Err(RegistrationError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(RegistrationError::MissingPassword);
        }
        Ok(())
    }
}

fn matches_pattern(cell: &OnceLock<Option<Regex>>, pattern: &str, value: &str) -> bool {
    cell.get_or_init(|| Regex::new(pattern).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

/// Sign-in details
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
