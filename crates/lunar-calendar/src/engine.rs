//! The host-facing calendar engine.
//!
//! A `CalendarEngine` owns the configuration, the official catalog (built once
//! at construction), the append-only list of local events and the source of
//! "today". It is `Send + Sync`: the catalog is immutable and local events sit
//! behind a `RwLock`, so grid builds may run concurrently with appends.

use std::borrow::Cow;
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::catalog::EventCatalog;
use crate::config::{EngineConfig, HighlightToggles};
use crate::converter;
use crate::date::{CalendarDate, IslamicDate};
use crate::digits::DigitScript;
use crate::error::Result;
use crate::event::CalendarEvent;
use crate::grid::{self, Day, GridContext};
use crate::matcher::{self, QueryDay};
use crate::month_length;
use crate::names::{Names, PERSIAN_COMMA};
use crate::today::{SystemClock, TodaySource};

#[derive(Debug)]
pub struct CalendarEngine {
    config: EngineConfig,
    names: Names,
    catalog: EventCatalog,
    local_events: RwLock<Vec<CalendarEvent>>,
    today_source: Box<dyn TodaySource>,
}

impl CalendarEngine {
    /// Build an engine reading today from the system clock in the configured
    /// observation zone.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidTimezone` if `observation_time_zone` is
    /// not a valid IANA identifier.
    pub fn new(config: EngineConfig, catalog: EventCatalog) -> Result<Self> {
        let clock = SystemClock::new(config.time_zone()?);
        debug!(
            official_events = catalog.len(),
            lunar_offset = config.lunar_offset,
            "calendar engine ready"
        );
        Ok(Self {
            config,
            names: Names::default(),
            catalog,
            local_events: RwLock::new(Vec::new()),
            today_source: Box::new(clock),
        })
    }

    /// Build an engine over the bundled official dataset.
    pub fn with_bundled_events(config: EngineConfig) -> Result<Self> {
        Self::new(config, EventCatalog::bundled())
    }

    pub fn with_today_source(mut self, source: impl TodaySource + 'static) -> Self {
        self.today_source = Box::new(source);
        self
    }

    pub fn with_names(mut self, names: Names) -> Self {
        self.names = names;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn names(&self) -> &Names {
        &self.names
    }

    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    pub fn set_highlight(&mut self, highlight: HighlightToggles) {
        self.config.highlight = highlight;
    }

    pub fn set_lunar_offset(&mut self, offset: i32) {
        self.config.lunar_offset = offset;
    }

    pub fn set_digits(&mut self, digits: DigitScript) {
        self.config.digits = digits;
    }

    /// Today's Islamic date, with the lunar offset applied.
    pub fn today(&self) -> Result<IslamicDate> {
        converter::civil_to_islamic(&self.today_source.today(), self.config.lunar_offset)
    }

    /// The grid for the month `offset` months before the current one.
    ///
    /// `0` is the current month, `1` the previous one, `-1` the next one.
    pub fn get_days(&self, offset: i32) -> Result<Vec<Day>> {
        let today = self.today()?;
        let local = self
            .local_events
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let ctx = GridContext {
            config: &self.config,
            official: self.catalog.events(),
            local: &local,
        };
        grid::build_month(&ctx, &today, offset)
    }

    pub fn get_month_length(&self, year: i32, month: u32) -> Result<u32> {
        month_length::islamic_month_length(year, month)
    }

    pub fn get_official_events_for_day(&self, day: &IslamicDate) -> Vec<CalendarEvent> {
        matcher::events_for_day(day, self.catalog.events(), self.config.lunar_offset)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn get_local_events_for_day(&self, day: &IslamicDate) -> Vec<CalendarEvent> {
        let local = self
            .local_events
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        matcher::events_for_day(day, &local, self.config.lunar_offset)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Official matches followed by local matches.
    pub fn get_all_events_for_day(&self, day: &IslamicDate) -> Vec<CalendarEvent> {
        let query = QueryDay::new(*day, self.config.lunar_offset);
        let local = self
            .local_events
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        query
            .filter(self.catalog.events())
            .into_iter()
            .chain(query.filter(&local))
            .cloned()
            .collect()
    }

    /// Titles of the day's events whose holiday flag equals `holiday`, one per
    /// line. Empty when nothing matches.
    pub fn get_events_title(&self, day: &IslamicDate, holiday: bool) -> String {
        matcher::join_titles(&self.get_all_events_for_day(day), holiday)
    }

    pub fn add_local_event(&self, event: CalendarEvent) {
        debug!(title = %event.title, date = %event.date, "adding local event");
        self.local_events
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    /// Snapshot of the local events in insertion order.
    pub fn local_events(&self) -> Vec<CalendarEvent> {
        self.local_events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn format_number<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.config.digits.format_number(text)
    }

    /// `"{day} {month name} {year}"` in the configured digit script, for a
    /// date of any calendar.
    pub fn date_to_string(&self, date: &impl CalendarDate) -> String {
        self.names.date_to_string(date, self.config.digits)
    }

    pub fn month_name<D: CalendarDate>(&self, date: &D) -> &str {
        self.names.month_name_in(D::KIND, date.month())
    }

    /// Weekday index of `date` as observed with the lunar offset.
    pub fn day_of_week(&self, date: &IslamicDate) -> Result<u32> {
        Ok(converter::islamic_to_civil(date, self.config.lunar_offset)?.day_of_week())
    }

    pub fn week_day_name(&self, date: &IslamicDate) -> Result<&str> {
        Ok(self.names.weekday_name(self.day_of_week(date)?))
    }

    /// `"{weekday}، {date}"`, e.g. `"دوشنبه، ۱ رمضان ۱۴۴۵"`.
    pub fn day_title_summary(&self, date: &IslamicDate) -> Result<String> {
        Ok(format!(
            "{}{} {}",
            self.week_day_name(date)?,
            PERSIAN_COMMA,
            self.date_to_string(date)
        ))
    }
}
