//! Error types for the booking client
//!
//! This module defines error types for each layer:
//! - `BookingError`: outcome of a user action (validation, remote and transport failures)
//! - `RegistrationError`: sign-up details rejected before reaching the backend
//! - `ApiError`: HTTP adapter errors talking to the booking backend
//! - `ParseError`: wire-format parse failures for dates and times
//! - `ConfigError`: invalid environment configuration

use thiserror::Error;

/// Generic message shown to the user when a call fails below the application level
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Failures of a single booking interaction
///
/// Display strings are the user-facing messages.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Please select both date and time.")]
    MissingInput,

    #[error("Selected date cannot be in the past.")]
    PastDate,

    #[error("Selected time is not within doctor's working hours.")]
    OutsideWorkingHours,

    /// The doctor record carries no `timings` pair
    #[error("Doctor's working hours are not available.")]
    WorkingHoursUnavailable,

    #[error("{0}")]
    InvalidRegistration(#[from] RegistrationError),

    /// The backend answered with `success: false`
    #[error("{0}")]
    RemoteFailure(String),

    /// The call never produced an application-level answer
    #[error("Something went wrong")]
    TransportFailure(#[source] ApiError),
}

impl From<ApiError> for BookingError {
    fn from(e: ApiError) -> Self {
        BookingError::TransportFailure(e)
    }
}

/// Sign-up field errors, in the order the fields are checked
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Please enter your name")]
    MissingName,

    #[error("Please enter a valid name")]
    InvalidName,

    #[error("Please enter your email address")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter your password")]
    MissingPassword,
}

/// Booking backend HTTP errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized - invalid or expired token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Token cannot be sent as a header value")]
    InvalidToken,
}

/// Date/time wire-format errors
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Invalid date '{0}', expected DD-MM-YYYY")]
    InvalidDate(String),

    #[error("Invalid time '{0}', expected hh:mm AM/PM")]
    InvalidTime(String),
}

/// Environment configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
