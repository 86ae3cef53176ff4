//! Adapters layer
//!
//! Concrete implementations of the domain ports.
//! - `http`: reqwest client for the booking backend
//! - `clock`: system and fixed clocks
//! - `notify`: in-memory notifier

pub mod clock;
pub mod http;
pub mod notify;

pub use clock::{FixedClock, SystemClock};
pub use http::HttpBookingApi;
pub use notify::MessageLog;
