//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::entities::{
    AuthToken, AvailabilityQuery, BookingRequest, Credentials, Doctor, Registration, User,
};
use crate::domain::ports::{Acknowledgement, ApiEnvelope, BookingApi};
use crate::error::ApiError;

type Queue<T> = Mutex<VecDeque<Result<ApiEnvelope<T>, ApiError>>>;

/// Scripted booking backend
///
/// Each endpoint pops its next queued response; an empty queue answers with
/// `success: true` and no message.
#[derive(Default)]
pub struct MockBookingApi {
    register_responses: Queue<serde::de::IgnoredAny>,
    login_responses: Queue<serde::de::IgnoredAny>,
    user_responses: Queue<User>,
    doctors_responses: Queue<Vec<Doctor>>,
    doctor_responses: Queue<Doctor>,
    availability_responses: Queue<serde::de::IgnoredAny>,
    booking_responses: Queue<serde::de::IgnoredAny>,

    registrations: Mutex<Vec<Registration>>,
    logins: Mutex<Vec<Credentials>>,
    tokens_seen: Mutex<Vec<AuthToken>>,
    doctor_lookups: Mutex<Vec<String>>,
    availability_calls: Mutex<Vec<AvailabilityQuery>>,
    booking_calls: Mutex<Vec<BookingRequest>>,
}

impl MockBookingApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_register_response(self, response: Result<Acknowledgement, ApiError>) -> Self {
        self.register_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn with_login_response(self, response: Result<Acknowledgement, ApiError>) -> Self {
        self.login_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn with_user_response(self, response: Result<ApiEnvelope<User>, ApiError>) -> Self {
        self.user_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn with_doctors_response(
        self,
        response: Result<ApiEnvelope<Vec<Doctor>>, ApiError>,
    ) -> Self {
        self.doctors_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn with_doctor_response(self, response: Result<ApiEnvelope<Doctor>, ApiError>) -> Self {
        self.doctor_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn with_availability_response(self, response: Result<Acknowledgement, ApiError>) -> Self {
        self.availability_responses
            .lock()
            .unwrap()
            .push_back(response);
        self
    }

    pub fn with_booking_response(self, response: Result<Acknowledgement, ApiError>) -> Self {
        self.booking_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn registrations(&self) -> Vec<Registration> {
        self.registrations.lock().unwrap().clone()
    }

    pub fn logins(&self) -> Vec<Credentials> {
        self.logins.lock().unwrap().clone()
    }

    pub fn tokens_seen(&self) -> Vec<AuthToken> {
        self.tokens_seen.lock().unwrap().clone()
    }

    pub fn doctor_lookups(&self) -> Vec<String> {
        self.doctor_lookups.lock().unwrap().clone()
    }

    pub fn availability_calls(&self) -> Vec<AvailabilityQuery> {
        self.availability_calls.lock().unwrap().clone()
    }

    pub fn booking_calls(&self) -> Vec<BookingRequest> {
        self.booking_calls.lock().unwrap().clone()
    }

    fn seen(&self, token: &AuthToken) {
        self.tokens_seen.lock().unwrap().push(token.clone());
    }
}

fn next<T>(queue: &Queue<T>) -> Result<ApiEnvelope<T>, ApiError> {
    queue.lock().unwrap().pop_front().unwrap_or_else(|| {
        Ok(ApiEnvelope {
            success: true,
            message: None,
            data: None,
            token: None,
        })
    })
}

#[async_trait]
impl BookingApi for MockBookingApi {
    async fn register(&self, details: &Registration) -> Result<Acknowledgement, ApiError> {
        self.registrations.lock().unwrap().push(details.clone());
        next(&self.register_responses)
    }

    async fn login(&self, credentials: &Credentials) -> Result<Acknowledgement, ApiError> {
        self.logins.lock().unwrap().push(credentials.clone());
        next(&self.login_responses)
    }

    async fn current_user(&self, token: &AuthToken) -> Result<ApiEnvelope<User>, ApiError> {
        self.seen(token);
        next(&self.user_responses)
    }

    async fn list_doctors(&self, token: &AuthToken) -> Result<ApiEnvelope<Vec<Doctor>>, ApiError> {
        self.seen(token);
        next(&self.doctors_responses)
    }

    async fn doctor_by_id(
        &self,
        doctor_id: &str,
        token: &AuthToken,
    ) -> Result<ApiEnvelope<Doctor>, ApiError> {
        self.seen(token);
        self.doctor_lookups.lock().unwrap().push(doctor_id.to_string());
        next(&self.doctor_responses)
    }

    async fn check_availability(
        &self,
        query: &AvailabilityQuery,
        token: &AuthToken,
    ) -> Result<Acknowledgement, ApiError> {
        self.seen(token);
        self.availability_calls.lock().unwrap().push(query.clone());
        next(&self.availability_responses)
    }

    async fn book_appointment(
        &self,
        request: &BookingRequest,
        token: &AuthToken,
    ) -> Result<Acknowledgement, ApiError> {
        self.seen(token);
        self.booking_calls.lock().unwrap().push(request.clone());
        next(&self.booking_responses)
    }
}
