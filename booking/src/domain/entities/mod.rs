//! Domain entities
//!
//! Core types of a booking interaction. None of them outlives one user action.

pub mod booking;
pub mod doctor;
pub mod schedule;
pub mod user;

pub use booking::{
    AvailabilityQuery, AvailabilityResult, BookingConfirmation, BookingForm, BookingRequest,
    Submission, SubmissionState,
};
pub use doctor::Doctor;
pub use schedule::{BookingDate, BookingTime, DoctorHours, WorkingHours, DATE_FORMAT, TIME_FORMAT};
pub use user::{AuthToken, Credentials, Registration, Session, User};
