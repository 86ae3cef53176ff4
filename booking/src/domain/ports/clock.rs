//! Clock port

use chrono::NaiveDate;

/// Source of the current calendar day
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
