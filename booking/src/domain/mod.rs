//! Domain layer
//!
//! Contains pure booking logic with no I/O.
//! - `entities`: values of a booking interaction
//! - `ports`: Trait definitions for the backend, notifications and the clock

pub mod entities;
pub mod ports;
