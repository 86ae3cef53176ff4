//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::NaiveDate;
use serde_json::json;

use crate::domain::entities::{Doctor, User};

/// The day every test treats as "today"
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

/// Doctor working 10:00 AM - 05:00 PM
pub fn test_doctor() -> Doctor {
    test_doctor_with_timings(&["10:00 AM", "05:00 PM"])
}

pub fn test_doctor_with_timings(timings: &[&str]) -> Doctor {
    serde_json::from_value(json!({
        "_id": "d1",
        "userId": "u-doc",
        "firstName": "Ada",
        "lastName": "Byron",
        "specialization": "Cardiology",
        "feesPerCunsaltation": 500,
        "timings": timings,
        "status": "approved"
    }))
    .unwrap()
}

/// Create a test doctor with a specific id and name
pub fn test_doctor_named(id: &str, first_name: &str, last_name: &str) -> Doctor {
    serde_json::from_value(json!({
        "_id": id,
        "firstName": first_name,
        "lastName": last_name,
        "feesPerCunsaltation": 300,
        "timings": ["09:00 AM", "01:00 PM"]
    }))
    .unwrap()
}

pub fn test_user() -> User {
    serde_json::from_value(json!({
        "_id": "u1",
        "name": "Sam Patient",
        "email": "sam@example.com",
        "isAdmin": false,
        "isDoctor": false
    }))
    .unwrap()
}
