//! Month lengths and leap-year rules for the three calendar systems.
//!
//! The Islamic calendar follows the tabular 30-year cycle: months alternate
//! 30/29 days and month 12 gains a day in the 11 leap years of each cycle.
//! The Persian calendar uses the 33-year arithmetic cycle, which agrees with
//! the astronomical Nowruz for the current era.

use crate::date::{CalendarDate, CalendarKind, IslamicDate};
use crate::error::{CalendarError, Result};

/// Canonical Islamic month lengths, indexed by month - 1.
pub const ISLAMIC_MONTH_DAYS: [u32; 12] = [30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29];

/// Islamic leap years: 2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29 of each 30-year cycle.
pub fn is_islamic_leap_year(year: i32) -> bool {
    (14 + 11 * i64::from(year)).rem_euclid(30) < 11
}

/// Persian leap years under the 33-year rule.
pub fn is_persian_leap_year(year: i32) -> bool {
    (25 * i64::from(year) + 11).rem_euclid(33) < 8
}

/// Proleptic Gregorian leap years.
pub fn is_civil_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn month_out_of_range(calendar: CalendarKind, year: i32, month: u32) -> CalendarError {
    CalendarError::OutOfRange {
        calendar,
        year,
        month,
        day: 1,
    }
}

/// Number of days in an Islamic month.
///
/// Month 12 has 30 days when the year is a leap year, 29 otherwise. Every
/// other month follows [`ISLAMIC_MONTH_DAYS`] regardless of year.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` when `month` is outside 1-12.
pub fn islamic_month_length(year: i32, month: u32) -> Result<u32> {
    let probe = IslamicDate::first_of_month(year, month)?;
    let base = ISLAMIC_MONTH_DAYS[month as usize - 1];
    if month == 12 && probe.is_leap_year() {
        Ok(base + 1)
    } else {
        Ok(base)
    }
}

/// Number of days in a Persian month.
pub fn persian_month_length(year: i32, month: u32) -> Result<u32> {
    match month {
        1..=6 => Ok(31),
        7..=11 => Ok(30),
        12 if is_persian_leap_year(year) => Ok(30),
        12 => Ok(29),
        _ => Err(month_out_of_range(CalendarKind::Persian, year, month)),
    }
}

/// Number of days in a Gregorian month.
pub fn civil_month_length(year: i32, month: u32) -> Result<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_civil_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(month_out_of_range(CalendarKind::Civil, year, month)),
    }
}

/// Number of days in a month of any of the three systems.
pub fn month_length(kind: CalendarKind, year: i32, month: u32) -> Result<u32> {
    match kind {
        CalendarKind::Islamic => islamic_month_length(year, month),
        CalendarKind::Persian => persian_month_length(year, month),
        CalendarKind::Civil => civil_month_length(year, month),
    }
}
