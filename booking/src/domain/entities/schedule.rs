//! Calendar day, time-of-day and working-hours values
//!
//! The backend exchanges dates as `DD-MM-YYYY` and times as `hh:mm A`
//! (12-hour clock with meridiem). Both newtypes format and parse exactly
//! those strings, including through serde.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;

/// Wire format of a calendar day
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Wire format of a time-of-day
pub const TIME_FORMAT: &str = "%I:%M %p";

/// A calendar day chosen for an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookingDate(pub NaiveDate);

impl BookingDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Day-granularity comparison; the time of day never matters
    pub fn is_before(&self, day: NaiveDate) -> bool {
        self.0 < day
    }
}

impl From<NaiveDate> for BookingDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl std::fmt::Display for BookingDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl std::str::FromStr for BookingDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| ParseError::InvalidDate(s.to_string()))
    }
}

impl Serialize for BookingDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BookingDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A time-of-day chosen for an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookingTime(pub NaiveTime);

impl BookingTime {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl From<NaiveTime> for BookingTime {
    fn from(time: NaiveTime) -> Self {
        Self(time)
    }
}

impl std::fmt::Display for BookingTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl std::str::FromStr for BookingTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), TIME_FORMAT)
            .map(Self)
            .map_err(|_| ParseError::InvalidTime(s.to_string()))
    }
}

impl Serialize for BookingTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BookingTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Inclusive daily window in which a doctor accepts appointments
///
/// No cross-midnight handling: a window with `start > end` contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingHours {
    pub start: BookingTime,
    pub end: BookingTime,
}

impl WorkingHours {
    pub fn new(start: BookingTime, end: BookingTime) -> Self {
        Self { start, end }
    }

    /// Build from a doctor record's `timings` pair
    ///
    /// Returns `None` when fewer than two entries exist or either fails to parse.
    pub fn from_timings<S: AsRef<str>>(timings: &[S]) -> Option<Self> {
        match timings {
            [start, end, ..] => Some(Self {
                start: start.as_ref().parse().ok()?,
                end: end.as_ref().parse().ok()?,
            }),
            _ => None,
        }
    }

    pub fn contains(&self, time: BookingTime) -> bool {
        self.start <= time && time <= self.end
    }
}

impl std::fmt::Display for WorkingHours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// What a doctor record tells about its working hours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoctorHours {
    /// Fewer than two `timings` entries
    Missing,
    /// Both entries present but not in `hh:mm A` form
    Unreadable,
    Known(WorkingHours),
}

impl DoctorHours {
    pub fn from_timings<S: AsRef<str>>(timings: &[S]) -> Self {
        if timings.len() < 2 {
            return DoctorHours::Missing;
        }
        match WorkingHours::from_timings(timings) {
            Some(hours) => DoctorHours::Known(hours),
            None => DoctorHours::Unreadable,
        }
    }

    pub fn known(&self) -> Option<WorkingHours> {
        match self {
            DoctorHours::Known(hours) => Some(*hours),
            _ => None,
        }
    }
}
