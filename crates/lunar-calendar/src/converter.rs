//! Date conversion between the Islamic, Persian and civil calendars.
//!
//! Every conversion routes through the Julian Day Number (JDN), a plain day
//! count shared by all three systems. Islamic↔civil conversions take a signed
//! day `offset` modelling the observed lag or lead of the announced lunar month
//! start against the arithmetic calendar: `civil_to_islamic` adds it to the
//! JDN and `islamic_to_civil` subtracts it, so the two are exact inverses for
//! any fixed offset.

use crate::date::{AnyDate, CalendarDate, CalendarKind, CivilDate, IslamicDate, PersianDate};
use crate::error::{CalendarError, Result};

/// JDN of 1 Muharram 1 AH (Friday 16 July 622 Julian, 19 July 622 Gregorian).
pub const ISLAMIC_EPOCH: i64 = 1_948_440;

/// JDN of 1 Farvardin 1 AP.
pub const PERSIAN_EPOCH: i64 = 1_948_320;

/// JDN of 1 March of Gregorian year 0; the origin of the 400-year era math.
const CIVIL_MARCH_EPOCH: i64 = 1_721_120;

const DAYS_PER_400_YEARS: i64 = 146_097;
const DAYS_PER_30_ISLAMIC_YEARS: i64 = 10_631;
const DAYS_PER_33_PERSIAN_YEARS: i64 = 12_053;

/// Day of week for a JDN: 0 = Saturday, ..., 6 = Friday.
pub fn day_of_week(jdn: i64) -> u32 {
    (jdn + 2).rem_euclid(7) as u32
}

fn year_from(kind: CalendarKind, year: i64, month: i64, day: i64) -> Result<i32> {
    i32::try_from(year).map_err(|_| CalendarError::OutOfRange {
        calendar: kind,
        year: if year < 0 { i32::MIN } else { i32::MAX },
        month: month as u32,
        day: day as u32,
    })
}

// ---------------------------------------------------------------------------
// JDN arithmetic
// ---------------------------------------------------------------------------

/// JDN of a proleptic Gregorian date.
pub fn civil_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    // Months counted from March so the leap day falls at the end of the year.
    let mp = (i64::from(month) + 9) % 12;
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_400_YEARS + doe + CIVIL_MARCH_EPOCH
}

/// Proleptic Gregorian date of a JDN.
pub fn jdn_to_civil(jdn: i64) -> Result<CivilDate> {
    let z = jdn - CIVIL_MARCH_EPOCH;
    let era = z.div_euclid(DAYS_PER_400_YEARS);
    let doe = z - era * DAYS_PER_400_YEARS;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    let year = year_from(CalendarKind::Civil, year, month, day)?;
    CivilDate::new(year, month as u32, day as u32)
}

/// JDN of a tabular Islamic date.
pub fn islamic_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    islamic_new_year(i64::from(year)) + (59 * (i64::from(month) - 1) + 1) / 2 + i64::from(day) - 1
}

/// JDN of 1 Muharram of `year`. Takes `i64` so year searches may step past
/// the `i32` range.
fn islamic_new_year(year: i64) -> i64 {
    (year - 1) * 354 + (3 + 11 * year).div_euclid(30) + ISLAMIC_EPOCH
}

/// Tabular Islamic date of a JDN.
pub fn jdn_to_islamic(jdn: i64) -> Result<IslamicDate> {
    let mut year = (30 * (jdn - ISLAMIC_EPOCH) + 10646).div_euclid(DAYS_PER_30_ISLAMIC_YEARS);
    while islamic_new_year(year + 1) <= jdn {
        year += 1;
    }
    while islamic_new_year(year) > jdn {
        year -= 1;
    }
    let doy = jdn - islamic_new_year(year);
    let month = ((2 * doy) / 59 + 1).min(12);
    let year = year_from(CalendarKind::Islamic, year, month, 1)?;
    let day = jdn - islamic_to_jdn(year, month as u32, 1) + 1;
    IslamicDate::new(year, month as u32, day as u32)
}

/// JDN of a Persian date.
pub fn persian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let m = i64::from(month);
    let month_offset = if m <= 7 { 31 * (m - 1) } else { 30 * (m - 1) + 6 };
    persian_new_year(i64::from(year)) + month_offset + i64::from(day) - 1
}

/// JDN of 1 Farvardin of `year`.
fn persian_new_year(year: i64) -> i64 {
    PERSIAN_EPOCH + 365 * (year - 1) + (8 * year + 21).div_euclid(33)
}

/// Persian date of a JDN.
pub fn jdn_to_persian(jdn: i64) -> Result<PersianDate> {
    let mut year = (33 * (jdn - PERSIAN_EPOCH) + 3).div_euclid(DAYS_PER_33_PERSIAN_YEARS) + 1;
    while persian_new_year(year + 1) <= jdn {
        year += 1;
    }
    while persian_new_year(year) > jdn {
        year -= 1;
    }
    let doy = jdn - persian_new_year(year);
    let month = if doy < 186 { doy / 31 + 1 } else { (doy - 6) / 30 + 1 };
    let year = year_from(CalendarKind::Persian, year, month, 1)?;
    let day = jdn - persian_to_jdn(year, month as u32, 1) + 1;
    PersianDate::new(year, month as u32, day as u32)
}

// ---------------------------------------------------------------------------
// Pairwise conversions
// ---------------------------------------------------------------------------

/// Convert an Islamic date to civil, undoing the observational `offset`.
pub fn islamic_to_civil(date: &IslamicDate, offset: i32) -> Result<CivilDate> {
    jdn_to_civil(date.to_jdn() - i64::from(offset))
}

/// Convert a civil date to Islamic, applying the observational `offset`.
pub fn civil_to_islamic(date: &CivilDate, offset: i32) -> Result<IslamicDate> {
    jdn_to_islamic(date.to_jdn() + i64::from(offset))
}

pub fn persian_to_civil(date: &PersianDate) -> Result<CivilDate> {
    jdn_to_civil(date.to_jdn())
}

pub fn civil_to_persian(date: &CivilDate) -> Result<PersianDate> {
    jdn_to_persian(date.to_jdn())
}

pub fn islamic_to_persian(date: &IslamicDate) -> Result<PersianDate> {
    jdn_to_persian(date.to_jdn())
}

pub fn persian_to_islamic(date: &PersianDate) -> Result<IslamicDate> {
    jdn_to_islamic(date.to_jdn())
}

/// Convert a date of any system into `target`.
///
/// `offset` applies when exactly one side of the conversion is Islamic, in the
/// same direction as [`civil_to_islamic`] / [`islamic_to_civil`].
pub fn convert(date: AnyDate, target: CalendarKind, offset: i32) -> Result<AnyDate> {
    let shift = |kind: CalendarKind| match kind {
        CalendarKind::Islamic => i64::from(offset),
        _ => 0,
    };
    // Move into the "observed" day count of the source, then out of the target's.
    let jdn = match date {
        AnyDate::Islamic(d) => d.to_jdn() - shift(CalendarKind::Islamic),
        AnyDate::Persian(d) => d.to_jdn(),
        AnyDate::Civil(d) => d.to_jdn(),
    } + shift(target);

    Ok(match target {
        CalendarKind::Islamic => AnyDate::Islamic(jdn_to_islamic(jdn)?),
        CalendarKind::Persian => AnyDate::Persian(jdn_to_persian(jdn)?),
        CalendarKind::Civil => AnyDate::Civil(jdn_to_civil(jdn)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epochs_land_on_expected_civil_dates() {
        assert_eq!(
            jdn_to_civil(ISLAMIC_EPOCH).unwrap(),
            CivilDate::new(622, 7, 19).unwrap()
        );
        assert_eq!(
            jdn_to_civil(PERSIAN_EPOCH).unwrap(),
            CivilDate::new(622, 3, 21).unwrap()
        );
    }

    #[test]
    fn islamic_epoch_is_a_friday() {
        assert_eq!(day_of_week(ISLAMIC_EPOCH), 6);
    }

    #[test]
    fn convert_to_same_kind_is_identity() {
        let d = AnyDate::Islamic(IslamicDate::new(1445, 9, 1).unwrap());
        assert_eq!(convert(d, CalendarKind::Islamic, 2).unwrap(), d);
    }
}
