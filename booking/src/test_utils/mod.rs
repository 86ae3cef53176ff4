//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Mocks queue canned backend responses per endpoint and record every
//! request they receive so tests can assert on call counts and payloads.

pub mod fixtures;
pub mod mocks;

pub use crate::adapters::FixedClock;
pub use fixtures::*;
pub use mocks::*;
