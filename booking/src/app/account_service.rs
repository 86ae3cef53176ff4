//! Account service
//!
//! Sign-up and sign-in. Both hand back a [`Session`] that the caller passes
//! explicitly to every later call; nothing is stored here.

use std::sync::Arc;

use crate::app::pending::LoadingGuard;
use crate::domain::entities::{AuthToken, Credentials, Registration, Session, User};
use crate::domain::ports::{Acknowledgement, BookingApi, Notification, Notifier};
use crate::error::{ApiError, BookingError, GENERIC_FAILURE_MESSAGE};

pub const REGISTER_SUCCESS_MESSAGE: &str = "Register Successfully";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login Successfully";

/// Service for user accounts
pub struct AccountService<A, N>
where
    A: BookingApi,
    N: Notifier,
{
    api: Arc<A>,
    notifier: Arc<N>,
}

impl<A, N> AccountService<A, N>
where
    A: BookingApi,
    N: Notifier,
{
    pub fn new(api: Arc<A>, notifier: Arc<N>) -> Self {
        Self { api, notifier }
    }

    /// Create an account and start a session for it
    ///
    /// Details failing [`Registration::validate`] never reach the backend.
    pub async fn register(&self, details: Registration) -> Result<Session, BookingError> {
        if let Err(e) = details.validate() {
            tracing::debug!(email = %details.email, "Registration rejected locally: {}", e);
            self.notifier.notify(Notification::error(e.to_string()));
            return Err(e.into());
        }

        let response = {
            let _loading = LoadingGuard::show(self.notifier.as_ref());
            self.api.register(&details).await
        };
        self.open_session(response, REGISTER_SUCCESS_MESSAGE, &details.email)
    }

    /// Sign in with email and password
    pub async fn login(&self, credentials: Credentials) -> Result<Session, BookingError> {
        let response = {
            let _loading = LoadingGuard::show(self.notifier.as_ref());
            self.api.login(&credentials).await
        };
        self.open_session(response, LOGIN_SUCCESS_MESSAGE, &credentials.email)
    }

    /// Fetch the signed-in user's record
    pub async fn current_user(&self, token: &AuthToken) -> Result<User, BookingError> {
        let envelope = self.api.current_user(token).await.map_err(|e| {
            tracing::error!("Failed to fetch current user: {}", e);
            BookingError::TransportFailure(e)
        })?;

        match envelope.data {
            Some(user) if envelope.success => Ok(user),
            _ => {
                let message = envelope
                    .message
                    .unwrap_or_else(|| "User not found".to_string());
                tracing::warn!("Current user unavailable: {}", message);
                Err(BookingError::RemoteFailure(message))
            }
        }
    }

    fn open_session(
        &self,
        response: Result<Acknowledgement, ApiError>,
        success_message: &str,
        email: &str,
    ) -> Result<Session, BookingError> {
        let envelope = match response {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::error!(email = %email, "Account request failed: {}", e);
                self.notifier
                    .notify(Notification::error(GENERIC_FAILURE_MESSAGE));
                return Err(BookingError::TransportFailure(e));
            }
        };

        if !envelope.success {
            let message = envelope.message.unwrap_or_default();
            tracing::warn!(email = %email, "Account request rejected: {}", message);
            self.notifier.notify(Notification::error(message.clone()));
            return Err(BookingError::RemoteFailure(message));
        }

        match envelope.token {
            Some(token) => {
                tracing::info!(email = %email, "Session opened");
                self.notifier.notify(Notification::success(success_message));
                Ok(Session::new(AuthToken::new(token)))
            }
            None => {
                let message = "Server did not return a session token".to_string();
                tracing::error!(email = %email, "{}", message);
                self.notifier.notify(Notification::error(message.clone()));
                Err(BookingError::RemoteFailure(message))
            }
        }
    }
}
