//! Calendar date value types for the Hijri, Solar Hijri and Gregorian systems.
//!
//! All three are small `Copy` values holding year/month/day-of-month. Every
//! constructor validates against the owning system's month lengths, so a
//! date that exists is always convertible. Day-of-week is derived from the
//! Julian Day Number with one shared anchor: 0 is Saturday and
//! [`REST_DAY`] (6) is Friday.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::converter;
use crate::error::{CalendarError, Result};
use crate::month_length;

/// Year value marking a date as recurring every year.
pub const RECURRING_YEAR: i32 = -1;

/// Weekday index of the weekly rest day (Friday).
pub const REST_DAY: u32 = 6;

/// The three supported calendar systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    Islamic,
    Persian,
    Civil,
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CalendarKind::Islamic => "islamic",
            CalendarKind::Persian => "persian",
            CalendarKind::Civil => "civil",
        };
        f.write_str(name)
    }
}

impl FromStr for CalendarKind {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "islamic" | "hijri" | "lunar" => Ok(CalendarKind::Islamic),
            "persian" | "jalali" | "solar" => Ok(CalendarKind::Persian),
            "civil" | "gregorian" => Ok(CalendarKind::Civil),
            other => Err(CalendarError::InvalidDate(format!(
                "unknown calendar '{}'",
                other
            ))),
        }
    }
}

/// Capability shared by the three date types.
pub trait CalendarDate: Copy + PartialEq + fmt::Debug {
    /// The calendar system this type belongs to.
    const KIND: CalendarKind;

    fn year(&self) -> i32;
    fn month(&self) -> u32;
    fn day_of_month(&self) -> u32;
    fn is_leap_year(&self) -> bool;

    /// Julian Day Number of this date.
    fn to_jdn(&self) -> i64;

    /// Day of week, 0 (Saturday) to 6 (Friday).
    fn day_of_week(&self) -> u32 {
        converter::day_of_week(self.to_jdn())
    }

    /// Whether this date carries the [`RECURRING_YEAR`] sentinel.
    fn is_recurring(&self) -> bool {
        self.year() == RECURRING_YEAR
    }

    /// Month and day equal, and year equal unless either side recurs.
    fn matches(&self, other: &Self) -> bool {
        self.month() == other.month()
            && self.day_of_month() == other.day_of_month()
            && (self.is_recurring() || other.is_recurring() || self.year() == other.year())
    }
}

fn check(kind: CalendarKind, year: i32, month: u32, day: u32, max_day: u32) -> Result<()> {
    if day == 0 || day > max_day {
        return Err(CalendarError::OutOfRange {
            calendar: kind,
            year,
            month,
            day,
        });
    }
    Ok(())
}

fn check_month(kind: CalendarKind, year: i32, month: u32, day: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::OutOfRange {
            calendar: kind,
            year,
            month,
            day,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Islamic
// ---------------------------------------------------------------------------

/// A date in the tabular lunar Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawDate", into = "RawDate")]
pub struct IslamicDate {
    year: i32,
    month: u32,
    day: u32,
}

impl IslamicDate {
    /// Build a validated Islamic date.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` when the month is outside 1-12 or the
    /// day exceeds the month length for that year.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        check_month(CalendarKind::Islamic, year, month, day)?;
        let max = month_length::islamic_month_length(year, month)?;
        check(CalendarKind::Islamic, year, month, day, max)?;
        Ok(Self { year, month, day })
    }

    /// Day 1 of the given month. Only the month is validated.
    pub fn first_of_month(year: i32, month: u32) -> Result<Self> {
        check_month(CalendarKind::Islamic, year, month, 1)?;
        Ok(Self {
            year,
            month,
            day: 1,
        })
    }

    /// A month/day recurring every year. Day 30 of month 12 is accepted.
    pub fn recurring(month: u32, day: u32) -> Result<Self> {
        check_month(CalendarKind::Islamic, RECURRING_YEAR, month, day)?;
        let max = month_length::ISLAMIC_MONTH_DAYS[month as usize - 1] + u32::from(month == 12);
        check(CalendarKind::Islamic, RECURRING_YEAR, month, day, max)?;
        Ok(Self {
            year: RECURRING_YEAR,
            month,
            day,
        })
    }

    /// Same year and month, different day.
    pub fn with_day(&self, day: u32) -> Result<Self> {
        Self::new(self.year, self.month, day)
    }
}

impl CalendarDate for IslamicDate {
    const KIND: CalendarKind = CalendarKind::Islamic;

    fn year(&self) -> i32 {
        self.year
    }
    fn month(&self) -> u32 {
        self.month
    }
    fn day_of_month(&self) -> u32 {
        self.day
    }
    fn is_leap_year(&self) -> bool {
        month_length::is_islamic_leap_year(self.year)
    }
    fn to_jdn(&self) -> i64 {
        converter::islamic_to_jdn(self.year, self.month, self.day)
    }
}

// ---------------------------------------------------------------------------
// Persian
// ---------------------------------------------------------------------------

/// A date in the Solar Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawDate", into = "RawDate")]
pub struct PersianDate {
    year: i32,
    month: u32,
    day: u32,
}

impl PersianDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        check_month(CalendarKind::Persian, year, month, day)?;
        let max = month_length::persian_month_length(year, month)?;
        check(CalendarKind::Persian, year, month, day, max)?;
        Ok(Self { year, month, day })
    }

    /// A month/day recurring every year. Day 30 of Esfand is accepted.
    pub fn recurring(month: u32, day: u32) -> Result<Self> {
        check_month(CalendarKind::Persian, RECURRING_YEAR, month, day)?;
        let max = match month {
            1..=6 => 31,
            _ => 30,
        };
        check(CalendarKind::Persian, RECURRING_YEAR, month, day, max)?;
        Ok(Self {
            year: RECURRING_YEAR,
            month,
            day,
        })
    }
}

impl CalendarDate for PersianDate {
    const KIND: CalendarKind = CalendarKind::Persian;

    fn year(&self) -> i32 {
        self.year
    }
    fn month(&self) -> u32 {
        self.month
    }
    fn day_of_month(&self) -> u32 {
        self.day
    }
    fn is_leap_year(&self) -> bool {
        month_length::is_persian_leap_year(self.year)
    }
    fn to_jdn(&self) -> i64 {
        converter::persian_to_jdn(self.year, self.month, self.day)
    }
}

// ---------------------------------------------------------------------------
// Civil
// ---------------------------------------------------------------------------

/// A proleptic Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawDate", into = "RawDate")]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        check_month(CalendarKind::Civil, year, month, day)?;
        let max = month_length::civil_month_length(year, month)?;
        check(CalendarKind::Civil, year, month, day, max)?;
        Ok(Self { year, month, day })
    }

    /// A month/day recurring every year. February 29 is accepted.
    pub fn recurring(month: u32, day: u32) -> Result<Self> {
        check_month(CalendarKind::Civil, RECURRING_YEAR, month, day)?;
        let max = match month {
            2 => 29,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        };
        check(CalendarKind::Civil, RECURRING_YEAR, month, day, max)?;
        Ok(Self {
            year: RECURRING_YEAR,
            month,
            day,
        })
    }

    /// The equivalent `chrono` date, or `None` outside chrono's range or for
    /// a recurring date.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        if self.is_recurring() {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for CivilDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl CalendarDate for CivilDate {
    const KIND: CalendarKind = CalendarKind::Civil;

    fn year(&self) -> i32 {
        self.year
    }
    fn month(&self) -> u32 {
        self.month
    }
    fn day_of_month(&self) -> u32 {
        self.day
    }
    fn is_leap_year(&self) -> bool {
        month_length::is_civil_leap_year(self.year)
    }
    fn to_jdn(&self) -> i64 {
        converter::civil_to_jdn(self.year, self.month, self.day)
    }
}

// ---------------------------------------------------------------------------
// Serde bridge, text form
// ---------------------------------------------------------------------------

/// Unvalidated wire form shared by the three date types.
#[derive(Serialize, Deserialize)]
struct RawDate {
    year: i32,
    month: u32,
    day: u32,
}

macro_rules! raw_date_bridge {
    ($ty:ty) => {
        impl TryFrom<RawDate> for $ty {
            type Error = CalendarError;

            fn try_from(raw: RawDate) -> Result<Self> {
                if raw.year == RECURRING_YEAR {
                    <$ty>::recurring(raw.month, raw.day)
                } else {
                    <$ty>::new(raw.year, raw.month, raw.day)
                }
            }
        }

        impl From<$ty> for RawDate {
            fn from(date: $ty) -> Self {
                RawDate {
                    year: date.year,
                    month: date.month,
                    day: date.day,
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_recurring() {
                    write!(f, "--{:02}-{:02}", self.month, self.day)
                } else {
                    write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
                }
            }
        }

        impl FromStr for $ty {
            type Err = CalendarError;

            fn from_str(s: &str) -> Result<Self> {
                match parse_ymd(s)? {
                    (None, month, day) => <$ty>::recurring(month, day),
                    (Some(year), month, day) => <$ty>::new(year, month, day),
                }
            }
        }
    };
}

raw_date_bridge!(IslamicDate);
raw_date_bridge!(PersianDate);
raw_date_bridge!(CivilDate);

/// Parse `YYYY-MM-DD`, `YYYY/MM/DD` or the recurring form `--MM-DD`.
fn parse_ymd(s: &str) -> Result<(Option<i32>, u32, u32)> {
    let invalid = || CalendarError::InvalidDate(s.to_string());
    let trimmed = s.trim();

    if let Some(rest) = trimmed.strip_prefix("--") {
        let (month, day) = rest.split_once(['-', '/']).ok_or_else(invalid)?;
        let month = month.parse().map_err(|_| invalid())?;
        let day = day.parse().map_err(|_| invalid())?;
        return Ok((None, month, day));
    }

    let parts: Vec<&str> = trimmed.split(['-', '/']).collect();
    if parts.len() != 3 {
        return Err(invalid());
    }
    let year = parts[0].parse().map_err(|_| invalid())?;
    let month = parts[1].parse().map_err(|_| invalid())?;
    let day = parts[2].parse().map_err(|_| invalid())?;
    Ok((Some(year), month, day))
}

// ---------------------------------------------------------------------------
// AnyDate
// ---------------------------------------------------------------------------

/// A date in exactly one of the three systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "calendar", rename_all = "lowercase")]
pub enum AnyDate {
    Islamic(IslamicDate),
    Persian(PersianDate),
    Civil(CivilDate),
}

impl AnyDate {
    pub fn kind(&self) -> CalendarKind {
        match self {
            AnyDate::Islamic(_) => CalendarKind::Islamic,
            AnyDate::Persian(_) => CalendarKind::Persian,
            AnyDate::Civil(_) => CalendarKind::Civil,
        }
    }

    /// Parse a date string in the given system.
    pub fn parse(kind: CalendarKind, s: &str) -> Result<Self> {
        Ok(match kind {
            CalendarKind::Islamic => AnyDate::Islamic(s.parse()?),
            CalendarKind::Persian => AnyDate::Persian(s.parse()?),
            CalendarKind::Civil => AnyDate::Civil(s.parse()?),
        })
    }

    pub fn year(&self) -> i32 {
        match self {
            AnyDate::Islamic(d) => d.year(),
            AnyDate::Persian(d) => d.year(),
            AnyDate::Civil(d) => d.year(),
        }
    }

    pub fn month(&self) -> u32 {
        match self {
            AnyDate::Islamic(d) => d.month(),
            AnyDate::Persian(d) => d.month(),
            AnyDate::Civil(d) => d.month(),
        }
    }

    pub fn day_of_month(&self) -> u32 {
        match self {
            AnyDate::Islamic(d) => d.day_of_month(),
            AnyDate::Persian(d) => d.day_of_month(),
            AnyDate::Civil(d) => d.day_of_month(),
        }
    }

    pub fn day_of_week(&self) -> u32 {
        match self {
            AnyDate::Islamic(d) => d.day_of_week(),
            AnyDate::Persian(d) => d.day_of_week(),
            AnyDate::Civil(d) => d.day_of_week(),
        }
    }

    pub fn is_recurring(&self) -> bool {
        self.year() == RECURRING_YEAR
    }
}

impl fmt::Display for AnyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyDate::Islamic(d) => write!(f, "{} ({})", d, CalendarKind::Islamic),
            AnyDate::Persian(d) => write!(f, "{} ({})", d, CalendarKind::Persian),
            AnyDate::Civil(d) => write!(f, "{} ({})", d, CalendarKind::Civil),
        }
    }
}

impl From<IslamicDate> for AnyDate {
    fn from(d: IslamicDate) -> Self {
        AnyDate::Islamic(d)
    }
}

impl From<PersianDate> for AnyDate {
    fn from(d: PersianDate) -> Self {
        AnyDate::Persian(d)
    }
}

impl From<CivilDate> for AnyDate {
    fn from(d: CivilDate) -> Self {
        AnyDate::Civil(d)
    }
}
