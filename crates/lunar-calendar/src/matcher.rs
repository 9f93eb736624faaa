//! Match events authored in any calendar against an Islamic query date.
//!
//! The query is converted once into each system (through the civil calendar,
//! with the lunar offset applied) and every event is compared in its own
//! native system: month and day always, year only when neither side carries
//! the recurring sentinel.

use crate::converter;
use crate::date::{AnyDate, CalendarDate, CivilDate, IslamicDate, PersianDate};
use crate::event::CalendarEvent;

/// A query day expressed in all three systems.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryDay {
    pub islamic: IslamicDate,
    /// `None` when the day is outside the civil range.
    pub civil: Option<CivilDate>,
    pub persian: Option<PersianDate>,
}

impl QueryDay {
    /// Resolve `islamic` into the other two systems using `offset`.
    pub fn new(islamic: IslamicDate, offset: i32) -> Self {
        let civil = converter::islamic_to_civil(&islamic, offset).ok();
        let persian = civil.and_then(|c| converter::civil_to_persian(&c).ok());
        Self {
            islamic,
            civil,
            persian,
        }
    }

    /// Whether `event` falls on this day.
    pub fn matches(&self, event: &CalendarEvent) -> bool {
        match &event.date {
            AnyDate::Islamic(d) => d.matches(&self.islamic),
            AnyDate::Civil(d) => self.civil.is_some_and(|c| d.matches(&c)),
            AnyDate::Persian(d) => self.persian.is_some_and(|p| d.matches(&p)),
        }
    }

    /// All events from `events` that fall on this day, in input order.
    pub fn filter<'a>(&self, events: &'a [CalendarEvent]) -> Vec<&'a CalendarEvent> {
        events.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Events from `events` falling on the Islamic day `day`.
pub fn events_for_day<'a>(
    day: &IslamicDate,
    events: &'a [CalendarEvent],
    offset: i32,
) -> Vec<&'a CalendarEvent> {
    QueryDay::new(*day, offset).filter(events)
}

/// Titles of `events` whose holiday flag equals `holiday`, one per line.
pub fn join_titles<'a>(
    events: impl IntoIterator<Item = &'a CalendarEvent>,
    holiday: bool,
) -> String {
    events
        .into_iter()
        .filter(|e| e.holiday == holiday)
        .map(|e| e.title.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
