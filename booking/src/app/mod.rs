//! Application layer
//!
//! Services that run one user action each against the domain ports.

pub mod account_service;
pub mod booking_service;
pub mod doctor_service;
pub mod pending;
pub mod validator;

pub use account_service::AccountService;
pub use booking_service::BookingService;
pub use doctor_service::DoctorService;
pub use pending::LoadingGuard;
pub use validator::{validate_slot, BookingValidator, SlotCheck};
