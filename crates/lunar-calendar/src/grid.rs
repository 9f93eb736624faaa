//! Month grid construction.
//!
//! A grid is the ordered list of [`Day`] records for one Islamic month, each
//! annotated with its weekday, holiday status, event flags and whether it is
//! today. Grids are rebuilt from scratch on every request.

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::converter;
use crate::date::{CalendarDate, CivilDate, IslamicDate, REST_DAY};
use crate::error::{CalendarError, Result};
use crate::event::CalendarEvent;
use crate::matcher::QueryDay;
use crate::month_length::islamic_month_length;

/// One cell of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Day {
    /// Day of month, already rendered in the configured digit script.
    pub num: String,
    /// 0 = Saturday, ..., 6 = Friday.
    pub day_of_week: u32,
    pub islamic_date: IslamicDate,
    pub is_holiday: bool,
    pub has_local_event: bool,
    pub has_highlighted_official_event: bool,
    pub is_today: bool,
}

/// Inputs a grid build reads from.
#[derive(Debug, Clone, Copy)]
pub struct GridContext<'a> {
    pub config: &'a EngineConfig,
    pub official: &'a [CalendarEvent],
    pub local: &'a [CalendarEvent],
}

/// Day 1 of the month `month_offset` months before `today`'s month.
///
/// Negative offsets move forward. Year borrow uses floor division so any
/// offset lands on a valid month.
pub fn shift_month(today: &IslamicDate, month_offset: i32) -> Result<IslamicDate> {
    let month = i64::from(today.month()) - i64::from(month_offset) - 1;
    let year = i64::from(today.year()) + month.div_euclid(12);
    let month = (month.rem_euclid(12) + 1) as u32;
    let year = i32::try_from(year).map_err(|_| CalendarError::OutOfRange {
        calendar: IslamicDate::KIND,
        year: today.year(),
        month,
        day: 1,
    })?;
    IslamicDate::first_of_month(year, month)
}

/// Build the grid for the month `month_offset` months before `today`'s month.
///
/// `today` is both the anchor month and the date flagged `is_today`.
///
/// # Errors
/// Fails only when the target month itself cannot be represented. A day that
/// fails to convert mid-month is logged and skipped.
pub fn build_month(
    ctx: &GridContext<'_>,
    today: &IslamicDate,
    month_offset: i32,
) -> Result<Vec<Day>> {
    let first = shift_month(today, month_offset)?;
    let length = islamic_month_length(first.year(), first.month())?;
    let lunar_offset = ctx.config.lunar_offset;
    let mut day_of_week = converter::islamic_to_civil(&first, lunar_offset)?.day_of_week();

    debug!(
        year = first.year(),
        month = first.month(),
        length,
        month_offset,
        "building month grid"
    );

    let mut days = Vec::with_capacity(length as usize);
    for num in 1..=length {
        match build_day(ctx, &first, num, day_of_week, today) {
            Ok(day) => days.push(day),
            Err(e) => warn!(
                year = first.year(),
                month = first.month(),
                day = num,
                error = %e,
                "skipping day that failed to convert"
            ),
        }
        day_of_week = (day_of_week + 1) % 7;
    }
    Ok(days)
}

fn build_day(
    ctx: &GridContext<'_>,
    first: &IslamicDate,
    num: u32,
    day_of_week: u32,
    today: &IslamicDate,
) -> Result<Day> {
    let date = first.with_day(num)?;
    let query = QueryDay::new(date, ctx.config.lunar_offset);
    if query.civil.is_none() {
        // The civil form is what every non-Islamic event matches against.
        return Err(CalendarError::OutOfRange {
            calendar: CivilDate::KIND,
            year: date.year(),
            month: date.month(),
            day: num,
        });
    }

    let official = query.filter(ctx.official);
    let local = query.filter(ctx.local);
    let toggles = &ctx.config.highlight;

    let is_holiday =
        day_of_week == REST_DAY || official.iter().chain(local.iter()).any(|e| e.holiday);
    let has_local_event = toggles.local && !local.is_empty();
    let has_highlighted_official_event =
        toggles.official && official.iter().any(|e| e.category.is_highlighted(toggles));

    Ok(Day {
        num: ctx.config.digits.format_int(i64::from(num)),
        day_of_week,
        islamic_date: date,
        is_holiday,
        has_local_event,
        has_highlighted_official_event,
        is_today: date == *today,
    })
}
