//! Booking domain entities
//!
//! Everything here lives for one user action at most: the form state of the
//! current view, the payloads built from it, and the outcome of the call.

use serde::Serialize;

use super::doctor::Doctor;
use super::schedule::{BookingDate, BookingTime};
use super::user::User;
use crate::error::BookingError;

/// In-memory state of the booking view for one doctor
#[derive(Debug, Clone)]
pub struct BookingForm {
    doctor: Doctor,
    pub date: Option<BookingDate>,
    pub time: Option<BookingTime>,
    is_available: bool,
}

impl BookingForm {
    /// Start a form for a doctor record fetched from the directory
    pub fn new(doctor: Doctor) -> Self {
        Self {
            doctor,
            date: None,
            time: None,
            is_available: false,
        }
    }

    pub fn with_date(mut self, date: BookingDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_time(mut self, time: BookingTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn doctor(&self) -> &Doctor {
        &self.doctor
    }

    pub fn doctor_id(&self) -> &str {
        &self.doctor.id
    }

    /// Whether the last remote availability check reported the slot as free
    pub fn is_available(&self) -> bool {
        self.is_available
    }

    pub(crate) fn set_available(&mut self, available: bool) {
        self.is_available = available;
    }
}

/// Payload of the availability check
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub doctor_id: String,
    pub date: BookingDate,
    pub time: BookingTime,
}

/// Payload of the booking creation call
///
/// Built fresh for each attempt and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub doctor_id: String,
    pub user_id: String,
    pub doctor_info: Doctor,
    pub user_info: User,
    pub date: BookingDate,
    pub time: BookingTime,
}

impl BookingRequest {
    pub fn new(doctor: &Doctor, requester: &User, date: BookingDate, time: BookingTime) -> Self {
        Self {
            doctor_id: doctor.id.clone(),
            user_id: requester.id.clone(),
            doctor_info: doctor.clone(),
            user_info: requester.clone(),
            date,
            time,
        }
    }
}

/// Outcome of an availability check
#[derive(Debug)]
pub enum AvailabilityResult {
    /// Local checks passed and the time falls inside working hours.
    /// Informational only: the backend was not asked.
    WithinWorkingHours,
    /// The backend reported the slot as free
    Available { message: String },
    /// The backend reported the slot as taken
    Unavailable { message: String },
    /// The request could not be evaluated
    Invalid(BookingError),
}

impl AvailabilityResult {
    pub fn is_available(&self) -> bool {
        matches!(self, AvailabilityResult::Available { .. })
    }

    /// Whether the backend was consulted for this result
    pub fn reached_backend(&self) -> bool {
        match self {
            AvailabilityResult::Available { .. } | AvailabilityResult::Unavailable { .. } => true,
            AvailabilityResult::Invalid(BookingError::TransportFailure(_)) => true,
            _ => false,
        }
    }
}

/// Server confirmation of a created booking
#[derive(Debug, Clone, PartialEq)]
pub struct BookingConfirmation {
    pub message: String,
}

/// Lifecycle of one remote call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Succeeded | SubmissionState::Failed)
    }
}

impl std::fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionState::Idle => write!(f, "idle"),
            SubmissionState::Pending => write!(f, "pending"),
            SubmissionState::Succeeded => write!(f, "succeeded"),
            SubmissionState::Failed => write!(f, "failed"),
        }
    }
}

/// One submission: `Idle -> Pending -> {Succeeded, Failed}`
///
/// Transitions out of order are ignored; a terminal submission stays terminal.
/// A new user action always starts from a fresh `Submission`.
#[derive(Debug, Default)]
pub struct Submission {
    state: SubmissionState,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Returns false if the submission was not idle
    pub fn start(&mut self) -> bool {
        self.transition(SubmissionState::Idle, SubmissionState::Pending)
    }

    pub fn succeed(&mut self) -> bool {
        self.transition(SubmissionState::Pending, SubmissionState::Succeeded)
    }

    pub fn fail(&mut self) -> bool {
        self.transition(SubmissionState::Pending, SubmissionState::Failed)
    }

    fn transition(&mut self, from: SubmissionState, to: SubmissionState) -> bool {
        if self.state != from {
            return false;
        }
        self.state = to;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doctor() -> Doctor {
        serde_json::from_value(json!({
            "_id": "d1",
            "firstName": "Ada",
            "lastName": "Byron",
            "feesPerCunsaltation": 500,
            "timings": ["10:00 AM", "05:00 PM"]
        }))
        .unwrap()
    }

    fn user() -> User {
        serde_json::from_value(json!({"_id": "u1", "name": "Sam", "email": "sam@example.com"}))
            .unwrap()
    }

    #[test]
    fn test_booking_request_payload_shape() {
        let date = BookingDate::from_ymd(2026, 10, 20).unwrap();
        let time = BookingTime::from_hm(11, 0).unwrap();
        let request = BookingRequest::new(&doctor(), &user(), date, time);

        let payload = serde_json::to_value(&request).unwrap();
        assert_eq!(
            payload,
            json!({
                "doctorId": "d1",
                "userId": "u1",
                "doctorInfo": {
                    "_id": "d1",
                    "firstName": "Ada",
                    "lastName": "Byron",
                    "feesPerCunsaltation": 500,
                    "timings": ["10:00 AM", "05:00 PM"]
                },
                "userInfo": {"_id": "u1", "name": "Sam", "email": "sam@example.com"},
                "date": "20-10-2026",
                "time": "11:00 AM"
            })
        );
    }

    #[test]
    fn test_availability_query_payload_shape() {
        let query = AvailabilityQuery {
            doctor_id: "d1".to_string(),
            date: BookingDate::from_ymd(2026, 1, 2).unwrap(),
            time: BookingTime::from_hm(15, 30).unwrap(),
        };
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(
            json,
            r#"{"doctorId":"d1","date":"02-01-2026","time":"03:30 PM"}"#
        );
    }

    #[test]
    fn test_form_starts_empty_and_unavailable() {
        let form = BookingForm::new(doctor());
        assert_eq!(form.doctor_id(), "d1");
        assert!(form.date.is_none());
        assert!(form.time.is_none());
        assert!(!form.is_available());
    }

    #[test]
    fn test_submission_happy_path() {
        let mut submission = Submission::new();
        assert_eq!(submission.state(), SubmissionState::Idle);
        assert!(submission.start());
        assert_eq!(submission.state(), SubmissionState::Pending);
        assert!(submission.succeed());
        assert_eq!(submission.state(), SubmissionState::Succeeded);
        assert!(submission.state().is_terminal());
    }

    #[test]
    fn test_submission_terminal_states_are_final() {
        let mut submission = Submission::new();
        submission.start();
        assert!(submission.fail());
        assert!(!submission.succeed());
        assert!(!submission.start());
        assert_eq!(submission.state(), SubmissionState::Failed);
    }

    #[test]
    fn test_submission_cannot_settle_before_start() {
        let mut submission = Submission::new();
        assert!(!submission.succeed());
        assert!(!submission.fail());
        assert_eq!(submission.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_result_reached_backend() {
        assert!(!AvailabilityResult::WithinWorkingHours.reached_backend());
        assert!(!AvailabilityResult::Invalid(BookingError::PastDate).reached_backend());
        assert!(AvailabilityResult::Unavailable {
            message: "taken".to_string()
        }
        .reached_backend());
        assert!(AvailabilityResult::Available {
            message: "free".to_string()
        }
        .is_available());
    }
}
