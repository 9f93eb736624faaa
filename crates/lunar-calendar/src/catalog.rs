//! The official event catalog and its JSON dataset.
//!
//! The dataset holds three arrays, one per calendar system the events are
//! authored in:
//!
//! ```json
//! {
//!   "lunarCalendar":     [{"month": 1, "day": 10, "title": "...", "description": "",
//!                          "type": "Islamic Iran", "holiday": true, "obit": true}],
//!   "persianCalendar":   [...],
//!   "gregorianCalendar": [...]
//! }
//! ```
//!
//! Every entry becomes a recurring event (year -1). Catalog order is lunar,
//! then Persian, then Gregorian, each in dataset order.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::date::{AnyDate, CivilDate, IslamicDate, PersianDate};
use crate::error::Result;
use crate::event::{CalendarEvent, EventCategory};

/// The dataset shipped with the crate.
pub const BUNDLED_EVENTS_JSON: &str = include_str!("../data/events.json");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Dataset {
    #[serde(default)]
    lunar_calendar: Vec<DatasetEntry>,
    #[serde(default)]
    persian_calendar: Vec<DatasetEntry>,
    #[serde(default)]
    gregorian_calendar: Vec<DatasetEntry>,
}

#[derive(Debug, Deserialize)]
struct DatasetEntry {
    month: u32,
    day: u32,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "type")]
    category: String,
    #[serde(default)]
    holiday: bool,
    #[serde(default)]
    obit: bool,
}

impl DatasetEntry {
    fn into_event(self, date: AnyDate) -> CalendarEvent {
        CalendarEvent {
            date,
            title: self.title,
            description: self.description,
            category: EventCategory::from(self.category),
            holiday: self.holiday,
            obit: self.obit,
        }
    }
}

/// Immutable list of official, annually recurring events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventCatalog {
    events: Vec<CalendarEvent>,
}

impl EventCatalog {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self { events }
    }

    /// An empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a dataset document.
    ///
    /// Entries whose month/day do not exist in their calendar are skipped with
    /// a warning.
    ///
    /// # Errors
    /// Returns `CalendarError::MalformedDataset` if the document is not valid
    /// JSON or does not match the dataset schema.
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        let mut events = Vec::with_capacity(
            dataset.lunar_calendar.len()
                + dataset.persian_calendar.len()
                + dataset.gregorian_calendar.len(),
        );

        for entry in dataset.lunar_calendar {
            match IslamicDate::recurring(entry.month, entry.day) {
                Ok(date) => events.push(entry.into_event(date.into())),
                Err(e) => warn!(title = %entry.title, error = %e, "skipping lunar event"),
            }
        }
        for entry in dataset.persian_calendar {
            match PersianDate::recurring(entry.month, entry.day) {
                Ok(date) => events.push(entry.into_event(date.into())),
                Err(e) => warn!(title = %entry.title, error = %e, "skipping persian event"),
            }
        }
        for entry in dataset.gregorian_calendar {
            match CivilDate::recurring(entry.month, entry.day) {
                Ok(date) => events.push(entry.into_event(date.into())),
                Err(e) => warn!(title = %entry.title, error = %e, "skipping gregorian event"),
            }
        }

        debug!(count = events.len(), "loaded official event catalog");
        Ok(Self { events })
    }

    /// Parse a dataset, degrading to an empty catalog on failure.
    ///
    /// Month grids stay usable without annotations, so a broken dataset is
    /// logged rather than propagated.
    pub fn from_json_or_empty(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|e| {
            warn!(error = %e, "official event dataset unusable, continuing without events");
            Self::empty()
        })
    }

    /// The catalog built from [`BUNDLED_EVENTS_JSON`].
    pub fn bundled() -> Self {
        Self::from_json_or_empty(BUNDLED_EVENTS_JSON)
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
