//! MediBook booking client
//!
//! Client side of a doctor-appointment booking service: validates a requested
//! slot against the doctor's working hours, checks availability and creates
//! bookings against the REST backend.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;

pub use config::{AvailabilityPolicy, Config};
pub use error::{ApiError, BookingError, RegistrationError};
