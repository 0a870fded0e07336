// src/event.rs

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::FragmentError;

/// Monday of the displayed week. Resolved once per snapshot; every event
/// decoded from that snapshot uses it as its date origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekAnchor(pub NaiveDate);

impl WeekAnchor {
    /// Absolute start timestamp for a decoded (day, half-hour) grid position.
    pub fn at(&self, day_offset: u32, time_offset_hours: f64) -> NaiveDateTime {
        let date = self.0 + Duration::days(day_offset as i64);
        let minutes = (time_offset_hours * 60.0).round() as i64;
        date.and_time(NaiveTime::MIN) + Duration::minutes(minutes)
    }
}

/// One scheduled item, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    pub location: String,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Event {
    /// Sole constructor; rejects non-positive durations.
    pub fn new(
        name: String,
        location: String,
        description: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, FragmentError> {
        if end <= start {
            return Err(FragmentError::InvalidTimes);
        }
        Ok(Self { name, location, description, start, end })
    }
}
