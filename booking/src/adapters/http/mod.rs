//! Booking backend HTTP adapter

mod client;

pub use client::HttpBookingApi;
