//! Doctor domain entity
//!
//! A doctor record as served by the backend. Fields the client does not
//! interpret are kept verbatim so the record can be sent back as the
//! booking's doctor snapshot.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::schedule::{DoctorHours, WorkingHours};

/// Doctor record returned by the directory endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// The backend's field name is misspelled; both spellings are accepted
    #[serde(
        rename = "feesPerCunsaltation",
        alias = "feesPerConsultation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub fees_per_consultation: Option<Value>,
    /// `[start, end]` in `hh:mm A` form
    #[serde(default)]
    pub timings: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Doctor {
    pub fn full_name(&self) -> String {
        format!("Dr. {} {}", self.first_name, self.last_name)
            .trim_end()
            .to_string()
    }

    /// Parsed working hours, if the record carries a usable `timings` pair
    pub fn working_hours(&self) -> Option<WorkingHours> {
        WorkingHours::from_timings(self.timings.as_slice())
    }

    pub fn hours(&self) -> DoctorHours {
        DoctorHours::from_timings(self.timings.as_slice())
    }

    /// Fees as displayed to the user
    pub fn fees_display(&self) -> String {
        match &self.fees_per_consultation {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => "-".to_string(),
            Some(other) => other.to_string(),
        }
    }
}
