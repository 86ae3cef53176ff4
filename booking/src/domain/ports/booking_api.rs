//! Booking backend port trait
//!
//! Defines the interface to the remote booking API. Implementations only deal
//! with transport: they return the parsed envelope and leave interpretation of
//! the `success` flag to the application services.

use async_trait::async_trait;
use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::domain::entities::{
    AuthToken, AvailabilityQuery, BookingRequest, Credentials, Doctor, Registration, User,
};
use crate::error::ApiError;

/// Response envelope shared by every backend endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
    /// Only present on register/login
    pub token: Option<String>,
}

/// Envelope of endpoints whose payload the client does not read
pub type Acknowledgement = ApiEnvelope<IgnoredAny>;

impl<T> ApiEnvelope<T> {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            token: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            token: None,
        }
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn message_or_default(&self) -> String {
        self.message.clone().unwrap_or_default()
    }
}

/// Remote booking API
#[async_trait]
pub trait BookingApi: Send + Sync {
    // Accounts
    async fn register(&self, details: &Registration) -> Result<Acknowledgement, ApiError>;
    async fn login(&self, credentials: &Credentials) -> Result<Acknowledgement, ApiError>;
    async fn current_user(&self, token: &AuthToken) -> Result<ApiEnvelope<User>, ApiError>;

    // Doctor directory
    async fn list_doctors(&self, token: &AuthToken) -> Result<ApiEnvelope<Vec<Doctor>>, ApiError>;
    async fn doctor_by_id(
        &self,
        doctor_id: &str,
        token: &AuthToken,
    ) -> Result<ApiEnvelope<Doctor>, ApiError>;

    // Booking
    async fn check_availability(
        &self,
        query: &AvailabilityQuery,
        token: &AuthToken,
    ) -> Result<Acknowledgement, ApiError>;
    async fn book_appointment(
        &self,
        request: &BookingRequest,
        token: &AuthToken,
    ) -> Result<Acknowledgement, ApiError>;
}
