//! Property-based tests for calendar conversion using proptest.
//!
//! These tests verify invariants that should hold for *any* valid date,
//! not just the specific examples in `converter_tests.rs`.

use lunar_calendar::converter::{
    civil_to_islamic, civil_to_persian, day_of_week, islamic_to_civil, islamic_to_persian,
    jdn_to_civil, jdn_to_islamic, jdn_to_persian, persian_to_civil, persian_to_islamic,
};
use lunar_calendar::month_length::{
    is_islamic_leap_year, islamic_month_length, persian_month_length, ISLAMIC_MONTH_DAYS,
};
use lunar_calendar::{CalendarDate, CivilDate, IslamicDate, PersianDate};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Any valid Islamic date from year 1 to 3000.
fn arb_islamic() -> impl Strategy<Value = IslamicDate> {
    (1i32..=3000, 1u32..=12, 1u32..=30)
        .prop_filter_map("day exists", |(y, m, d)| IslamicDate::new(y, m, d).ok())
}

fn arb_persian() -> impl Strategy<Value = PersianDate> {
    (1i32..=3000, 1u32..=12, 1u32..=31)
        .prop_filter_map("day exists", |(y, m, d)| PersianDate::new(y, m, d).ok())
}

fn arb_civil() -> impl Strategy<Value = CivilDate> {
    (623i32..=4000, 1u32..=12, 1u32..=31)
        .prop_filter_map("day exists", |(y, m, d)| CivilDate::new(y, m, d).ok())
}

fn arb_offset() -> impl Strategy<Value = i32> {
    -3i32..=3
}

/// JDNs spanning several millennia either side of the Islamic epoch.
fn arb_jdn() -> impl Strategy<Value = i64> {
    0i64..=4_000_000
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn islamic_civil_roundtrip(d in arb_islamic(), offset in arb_offset()) {
        let c = islamic_to_civil(&d, offset).unwrap();
        prop_assert_eq!(civil_to_islamic(&c, offset).unwrap(), d);
    }

    #[test]
    fn civil_islamic_roundtrip(c in arb_civil(), offset in arb_offset()) {
        let i = civil_to_islamic(&c, offset).unwrap();
        prop_assert_eq!(islamic_to_civil(&i, offset).unwrap(), c);
    }

    #[test]
    fn persian_civil_roundtrip(p in arb_persian()) {
        let c = persian_to_civil(&p).unwrap();
        prop_assert_eq!(civil_to_persian(&c).unwrap(), p);
    }

    #[test]
    fn islamic_persian_roundtrip(d in arb_islamic()) {
        let p = islamic_to_persian(&d).unwrap();
        prop_assert_eq!(persian_to_islamic(&p).unwrap(), d);
    }

    #[test]
    fn jdn_roundtrip_in_every_system(jdn in arb_jdn()) {
        prop_assert_eq!(jdn_to_civil(jdn).unwrap().to_jdn(), jdn);
        prop_assert_eq!(jdn_to_islamic(jdn).unwrap().to_jdn(), jdn);
        prop_assert_eq!(jdn_to_persian(jdn).unwrap().to_jdn(), jdn);
    }
}

// ---------------------------------------------------------------------------
// Structure
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn conversion_preserves_the_weekday(jdn in arb_jdn()) {
        let expected = day_of_week(jdn);
        prop_assert_eq!(jdn_to_civil(jdn).unwrap().day_of_week(), expected);
        prop_assert_eq!(jdn_to_islamic(jdn).unwrap().day_of_week(), expected);
        prop_assert_eq!(jdn_to_persian(jdn).unwrap().day_of_week(), expected);
    }

    #[test]
    fn next_day_advances_weekday_by_one(jdn in arb_jdn()) {
        let today = jdn_to_islamic(jdn).unwrap().day_of_week();
        let tomorrow = jdn_to_islamic(jdn + 1).unwrap().day_of_week();
        prop_assert_eq!(tomorrow, (today + 1) % 7);
    }

    #[test]
    fn converted_days_never_exceed_month_length(jdn in arb_jdn()) {
        let i = jdn_to_islamic(jdn).unwrap();
        prop_assert!(i.day_of_month() <= islamic_month_length(i.year(), i.month()).unwrap());
        let p = jdn_to_persian(jdn).unwrap();
        prop_assert!(p.day_of_month() <= persian_month_length(p.year(), p.month()).unwrap());
    }

    #[test]
    fn islamic_month_length_follows_pattern(year in -2000i32..=5000, month in 1u32..=12) {
        let len = islamic_month_length(year, month).unwrap();
        if month == 12 && is_islamic_leap_year(year) {
            prop_assert_eq!(len, 30);
        } else {
            prop_assert_eq!(len, ISLAMIC_MONTH_DAYS[month as usize - 1]);
        }
    }

    #[test]
    fn islamic_year_length_is_354_or_355(year in 1i32..=3000) {
        let start = IslamicDate::new(year, 1, 1).unwrap().to_jdn();
        let next = IslamicDate::new(year + 1, 1, 1).unwrap().to_jdn();
        let expected = if is_islamic_leap_year(year) { 355 } else { 354 };
        prop_assert_eq!(next - start, expected);
    }
}
