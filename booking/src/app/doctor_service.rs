//! Doctor directory service
//!
//! Lookups that seed the booking view. Failures here are logged only; the
//! view simply has no doctor to show.

use std::sync::Arc;

use crate::domain::entities::{AuthToken, BookingForm, Doctor};
use crate::domain::ports::BookingApi;
use crate::error::BookingError;

/// Service for browsing doctors
pub struct DoctorService<A: BookingApi> {
    api: Arc<A>,
}

impl<A: BookingApi> DoctorService<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// All doctors the backend lists for booking
    pub async fn list_doctors(&self, token: &AuthToken) -> Result<Vec<Doctor>, BookingError> {
        let envelope = self.api.list_doctors(token).await.map_err(|e| {
            tracing::error!("Failed to list doctors: {}", e);
            BookingError::TransportFailure(e)
        })?;

        if !envelope.success {
            let message = envelope.message.unwrap_or_default();
            tracing::warn!("Doctor listing rejected: {}", message);
            return Err(BookingError::RemoteFailure(message));
        }

        Ok(envelope.data.unwrap_or_default())
    }

    pub async fn doctor_by_id(
        &self,
        doctor_id: &str,
        token: &AuthToken,
    ) -> Result<Doctor, BookingError> {
        let envelope = self.api.doctor_by_id(doctor_id, token).await.map_err(|e| {
            tracing::error!(doctor_id = %doctor_id, "Failed to fetch doctor: {}", e);
            BookingError::TransportFailure(e)
        })?;

        match envelope.data {
            Some(doctor) if envelope.success => Ok(doctor),
            _ => {
                let message = envelope
                    .message
                    .unwrap_or_else(|| format!("Doctor {} not found", doctor_id));
                tracing::warn!(doctor_id = %doctor_id, "Doctor lookup rejected: {}", message);
                Err(BookingError::RemoteFailure(message))
            }
        }
    }

    /// Fetch a doctor and start an empty booking form for them
    pub async fn open_booking_form(
        &self,
        doctor_id: &str,
        token: &AuthToken,
    ) -> Result<BookingForm, BookingError> {
        let doctor = self.doctor_by_id(doctor_id, token).await?;
        if doctor.working_hours().is_none() {
            tracing::warn!(
                doctor_id = %doctor_id,
                timings = ?doctor.timings,
                "Doctor has no usable working hours"
            );
        }
        Ok(BookingForm::new(doctor))
    }
}
