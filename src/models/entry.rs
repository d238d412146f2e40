use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Literal timestamp layout downstream readers of the journal sheet parse.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%y %I:%M %p";

pub const MIN_DURATION_MINUTES: u32 = 1;
pub const MAX_DURATION_MINUTES: u32 = 1440;

/// Journal worksheet columns, in wire order. Rows are positional: never reorder.
pub const JOURNAL_COLUMNS: [&str; 17] = [
    "status",
    "user_name",
    "user_email",
    "timestamp",
    "n_duration",
    "end_timestamp",
    "n_Name",
    "City",
    "State",
    "Zip",
    "Country",
    "n_place",
    "latitude",
    "longitude",
    "park_number",
    "activities",
    "notes",
];

/// When the visit happened, in the reference time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
}

impl Timing {
    pub fn new(date: NaiveDate, time: NaiveTime, duration_minutes: u32) -> AppResult<Self> {
        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&duration_minutes) {
            return Err(AppError::Validation(format!(
                "Duration must be between {MIN_DURATION_MINUTES} and {MAX_DURATION_MINUTES} minutes (got {duration_minutes})."
            )));
        }

        Ok(Self {
            date,
            time,
            duration_minutes,
        })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// One journal row. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    pub status: String,
    pub user_name: String,
    pub user_email: String,
    pub timestamp: NaiveDateTime,
    pub duration_minutes: u32,
    pub end_timestamp: NaiveDateTime,
    pub place_name: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub composite_place: String,
    pub latitude: String,
    pub longitude: String,
    pub park_number: String,
    pub activities: String,
    pub notes: String,
}

impl JournalEntry {
    /// The 17 cells to append, in [`JOURNAL_COLUMNS`] order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.status.clone(),
            self.user_name.clone(),
            self.user_email.clone(),
            format_timestamp(&self.timestamp),
            self.duration_minutes.to_string(),
            format_timestamp(&self.end_timestamp),
            self.place_name.clone(),
            self.city.clone(),
            self.state.clone(),
            self.zip.clone(),
            self.country.clone(),
            self.composite_place.clone(),
            self.latitude.clone(),
            self.longitude.clone(),
            self.park_number.clone(),
            self.activities.clone(),
            self.notes.clone(),
        ]
    }
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).ok()
}
