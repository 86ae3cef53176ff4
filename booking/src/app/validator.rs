//! Booking validator
//!
//! Local checks run before any network call:
//! 1. both date and time are present
//! 2. the date is not before today (day granularity)
//! 3. the time is not outside the doctor's working hours
//!
//! A time inside the inclusive window yields an informational confirmation.
//! A doctor without timings fails the check. When the timings are present but
//! cannot be parsed the window check cannot decide and the slot is left to the
//! backend.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::{BookingDate, BookingTime, DoctorHours};
use crate::domain::ports::Clock;
use crate::error::BookingError;

/// Shown when a slot falls inside the doctor's working hours
pub const WITHIN_WORKING_HOURS_MESSAGE: &str =
    "Selected time matches with doctor's working hours.";

/// A slot that passed the local checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotCheck {
    /// Inside `[start, end]` of the doctor's working hours
    WithinWorkingHours { date: BookingDate, time: BookingTime },
    /// Working hours unreadable, only the backend can decide
    NeedsRemoteCheck { date: BookingDate, time: BookingTime },
}

impl SlotCheck {
    pub fn date(&self) -> BookingDate {
        match self {
            SlotCheck::WithinWorkingHours { date, .. } | SlotCheck::NeedsRemoteCheck { date, .. } => {
                *date
            }
        }
    }

    pub fn time(&self) -> BookingTime {
        match self {
            SlotCheck::WithinWorkingHours { time, .. } | SlotCheck::NeedsRemoteCheck { time, .. } => {
                *time
            }
        }
    }
}

/// Validate a candidate slot against `today`
pub fn validate_slot(
    date: Option<BookingDate>,
    time: Option<BookingTime>,
    hours: &DoctorHours,
    today: NaiveDate,
) -> Result<SlotCheck, BookingError> {
    let (Some(date), Some(time)) = (date, time) else {
        return Err(BookingError::MissingInput);
    };

    if date.is_before(today) {
        return Err(BookingError::PastDate);
    }

    match hours {
        DoctorHours::Missing => Err(BookingError::WorkingHoursUnavailable),
        DoctorHours::Unreadable => Ok(SlotCheck::NeedsRemoteCheck { date, time }),
        DoctorHours::Known(hours) if hours.contains(time) => {
            Ok(SlotCheck::WithinWorkingHours { date, time })
        }
        DoctorHours::Known(_) => Err(BookingError::OutsideWorkingHours),
    }
}

/// Validator bound to a clock
pub struct BookingValidator<C: Clock> {
    clock: Arc<C>,
}

impl<C: Clock> BookingValidator<C> {
    pub fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    pub fn validate(
        &self,
        date: Option<BookingDate>,
        time: Option<BookingTime>,
        hours: &DoctorHours,
    ) -> Result<SlotCheck, BookingError> {
        validate_slot(date, time, hours, self.clock.today())
    }
}
