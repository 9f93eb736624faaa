//! Error types for lunar-calendar operations.

use thiserror::Error;

use crate::date::CalendarKind;

#[derive(Error, Debug)]
pub enum CalendarError {
    /// Month or day-of-month outside the valid bounds of the owning calendar.
    ///
    /// Expected during month/year rollover probing; callers catch it.
    #[error("{calendar} date {year}/{month}/{day} is out of range")]
    OutOfRange {
        calendar: CalendarKind,
        year: i32,
        month: u32,
        day: u32,
    },

    /// The official event dataset could not be parsed.
    #[error("Malformed event dataset: {0}")]
    MalformedDataset(#[from] serde_json::Error),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// A date string that is not `YYYY-MM-DD` (or `YYYY/MM/DD`).
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
