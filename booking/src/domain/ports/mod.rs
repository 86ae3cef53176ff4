//! Domain ports (traits)
//!
//! Port traits define interfaces that the application services require.
//! Adapters provide concrete implementations of these traits.

pub mod booking_api;
pub mod clock;
pub mod notifier;

pub use booking_api::{Acknowledgement, ApiEnvelope, BookingApi};
pub use clock::Clock;
pub use notifier::{Notification, NotificationLevel, Notifier};
