//! End-to-end tests through the `CalendarEngine` facade.

use std::sync::Arc;
use std::thread;

use lunar_calendar::{
    CalendarEngine, CalendarError, CalendarEvent, CivilDate, DigitScript, EngineConfig,
    EventCatalog, EventCategory, FixedToday, IslamicDate, Names, PersianDate,
};

fn islamic(y: i32, m: u32, d: u32) -> IslamicDate {
    IslamicDate::new(y, m, d).unwrap()
}

/// Engine pinned to 11 March 2024 (1 Ramadan 1445).
fn engine(config: EngineConfig) -> CalendarEngine {
    CalendarEngine::with_bundled_events(config)
        .unwrap()
        .with_today_source(FixedToday(CivilDate::new(2024, 3, 11).unwrap()))
}

// ---------------------------------------------------------------------------
// Today and grids
// ---------------------------------------------------------------------------

#[test]
fn today_is_first_of_ramadan() {
    let engine = engine(EngineConfig::default());
    assert_eq!(engine.today().unwrap(), islamic(1445, 9, 1));
}

#[test]
fn today_respects_lunar_offset() {
    let engine = engine(EngineConfig::default().with_lunar_offset(-1));
    assert_eq!(engine.today().unwrap(), islamic(1445, 8, 29));
}

#[test]
fn get_days_is_idempotent() {
    let engine = engine(EngineConfig::default());
    let first = engine.get_days(0).unwrap();
    let second = engine.get_days(0).unwrap();
    assert_eq!(first.len(), 30);
    assert_eq!(first, second);
    assert!(first[0].is_today);
}

#[test]
fn get_days_navigates_months() {
    let engine = engine(EngineConfig::default());
    let next = engine.get_days(-1).unwrap();
    assert_eq!(next[0].islamic_date, islamic(1445, 10, 1));
    assert_eq!(next.len(), 29);
    // Eid al-Fitr.
    assert!(next[0].is_holiday);

    let previous = engine.get_days(1).unwrap();
    assert_eq!(previous[0].islamic_date, islamic(1445, 8, 1));
}

#[test]
fn get_month_length_delegates_to_leap_rule() {
    let engine = engine(EngineConfig::default());
    assert_eq!(engine.get_month_length(1445, 12).unwrap(), 30);
    assert_eq!(engine.get_month_length(1444, 12).unwrap(), 29);
    assert!(matches!(
        engine.get_month_length(1445, 13),
        Err(CalendarError::OutOfRange { .. })
    ));
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[test]
fn local_events_appear_on_their_day() {
    let engine = engine(EngineConfig::default());
    engine.add_local_event(CalendarEvent::new(
        CivilDate::new(2024, 3, 25).unwrap(),
        "Birthday",
    ));
    engine.add_local_event(
        CalendarEvent::new(PersianDate::new(1403, 1, 20).unwrap(), "Trip").with_holiday(true),
    );

    let days = engine.get_days(0).unwrap();
    assert!(days[14].has_local_event);
    assert!(!days[14].is_holiday);
    assert!(days[28].has_local_event);
    assert!(days[28].is_holiday);
    assert_eq!(days[28].day_of_week, 2);

    let local = engine.get_local_events_for_day(&islamic(1445, 9, 15));
    assert_eq!(local.len(), 1);
    assert_eq!(local[0].title, "Birthday");
    assert_eq!(local[0].category, EventCategory::Personal);
}

#[test]
fn local_events_keep_insertion_order() {
    let engine = engine(EngineConfig::default());
    for title in ["a", "b", "c"] {
        engine.add_local_event(CalendarEvent::new(IslamicDate::recurring(9, 27).unwrap(), title));
    }
    let titles: Vec<String> = engine.local_events().into_iter().map(|e| e.title).collect();
    assert_eq!(titles, vec!["a", "b", "c"]);
}

#[test]
fn official_and_local_events_for_day() {
    let engine = engine(EngineConfig::default());
    engine.add_local_event(CalendarEvent::new(islamic(1445, 9, 21), "Vigil").with_holiday(true));
    let day = islamic(1445, 9, 21);

    let official = engine.get_official_events_for_day(&day);
    assert_eq!(official.len(), 2);

    let all: Vec<String> = engine
        .get_all_events_for_day(&day)
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(all, vec!["Martyrdom of Imam Ali", "Islamic Republic Day", "Vigil"]);
}

#[test]
fn events_title_splits_on_holiday_flag() {
    let engine = engine(EngineConfig::default());
    let day_11 = islamic(1445, 9, 11);
    assert_eq!(engine.get_events_title(&day_11, true), "Nowruz holiday");
    assert_eq!(engine.get_events_title(&day_11, false), "International Nowruz Day");

    let day_10 = islamic(1445, 9, 10);
    assert_eq!(engine.get_events_title(&day_10, true), "Nowruz\nNowruz");
    assert_eq!(engine.get_events_title(&day_10, false), "");
}

#[test]
fn events_title_lists_local_after_official() {
    let engine = engine(EngineConfig::default());
    let day = islamic(1445, 9, 21);
    engine.add_local_event(CalendarEvent::new(day, "Vigil").with_holiday(true));
    assert_eq!(
        engine.get_events_title(&day, true),
        "Martyrdom of Imam Ali\nIslamic Republic Day\nVigil"
    );
}

#[test]
fn day_without_events_has_empty_titles() {
    let engine = engine(EngineConfig::default());
    let day = islamic(1445, 9, 2);
    assert!(engine.get_all_events_for_day(&day).is_empty());
    assert_eq!(engine.get_events_title(&day, true), "");
}

#[test]
fn international_nowruz_day_every_year() {
    let engine = engine(EngineConfig::default());
    let expected = [
        (2000, (1420, 12, 15)),
        (2004, (1425, 1, 29)),
        (2015, (1436, 5, 30)),
        (2024, (1445, 9, 11)),
        (2025, (1446, 9, 21)),
        (2030, (1451, 11, 16)),
    ];
    for (year, (y, m, d)) in expected {
        let titles = engine.get_events_title(&islamic(y, m, d), false);
        assert!(
            titles.contains("International Nowruz Day"),
            "March 21 {year}: {titles:?}"
        );
    }
}

#[test]
fn lunar_offset_moves_nowruz() {
    let engine = CalendarEngine::with_bundled_events(EngineConfig::default().with_lunar_offset(1))
        .unwrap()
        .with_today_source(FixedToday(CivilDate::new(2024, 3, 10).unwrap()));
    assert_eq!(engine.today().unwrap(), islamic(1445, 9, 1));

    let days = engine.get_days(0).unwrap();
    assert_eq!(days[0].day_of_week, 1);
    assert_eq!(engine.get_events_title(&islamic(1445, 9, 11), true), "Nowruz\nNowruz");
}

#[test]
fn empty_catalog_leaves_only_fridays() {
    let engine = CalendarEngine::new(EngineConfig::default(), EventCatalog::empty())
        .unwrap()
        .with_today_source(FixedToday(CivilDate::new(2024, 3, 11).unwrap()));
    let days = engine.get_days(0).unwrap();
    let holidays: Vec<usize> = days
        .iter()
        .enumerate()
        .filter(|(_, d)| d.is_holiday)
        .map(|(i, _)| i + 1)
        .collect();
    assert_eq!(holidays, vec![5, 12, 19, 26]);
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

#[test]
fn date_text_in_persian_digits() {
    let engine = engine(EngineConfig::default());
    let day = islamic(1445, 9, 1);
    assert_eq!(engine.date_to_string(&day), "۱ رمضان ۱۴۴۵");
    assert_eq!(engine.month_name(&day), "رمضان");
    assert_eq!(engine.week_day_name(&day).unwrap(), "دوشنبه");
    assert_eq!(engine.day_title_summary(&day).unwrap(), "دوشنبه، ۱ رمضان ۱۴۴۵");
}

#[test]
fn date_text_in_english() {
    let engine = engine(EngineConfig::default().with_digits(DigitScript::Latin))
        .with_names(Names::english());
    let day = islamic(1445, 12, 30);
    assert_eq!(engine.date_to_string(&day), "30 Dhu al-Hijjah 1445");
    assert_eq!(engine.format_number("12:30"), "12:30");
}

#[test]
fn date_text_for_every_calendar() {
    let persian = engine(EngineConfig::default());
    let nowruz = PersianDate::new(1403, 1, 1).unwrap();
    assert_eq!(persian.date_to_string(&nowruz), "۱ فروردین ۱۴۰۳");
    assert_eq!(persian.month_name(&nowruz), "فروردین");

    let english = engine(EngineConfig::default().with_digits(DigitScript::Latin))
        .with_names(Names::english());
    let civil = CivilDate::new(2024, 3, 11).unwrap();
    assert_eq!(english.date_to_string(&civil), "11 March 2024");
    assert_eq!(english.date_to_string(&nowruz), "1 Farvardin 1403");
}

#[test]
fn format_number_follows_config() {
    let mut engine = engine(EngineConfig::default());
    assert_eq!(engine.format_number("1403/01/20"), "۱۴۰۳/۰۱/۲۰");
    engine.set_digits(DigitScript::ArabicIndic);
    assert_eq!(engine.format_number("25"), "٢٥");
}

// ---------------------------------------------------------------------------
// Configuration and concurrency
// ---------------------------------------------------------------------------

#[test]
fn invalid_time_zone_is_rejected() {
    let config = EngineConfig::default().with_observation_time_zone("Mars/Olympus");
    let err = CalendarEngine::with_bundled_events(config).unwrap_err();
    assert!(matches!(err, CalendarError::InvalidTimezone(name) if name == "Mars/Olympus"));
}

#[test]
fn valid_time_zone_is_accepted() {
    let config = EngineConfig::default().with_observation_time_zone("Asia/Tehran");
    assert!(CalendarEngine::with_bundled_events(config).is_ok());
}

#[test]
fn concurrent_appends_and_reads() {
    let engine = Arc::new(engine(EngineConfig::default()));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                engine.add_local_event(CalendarEvent::new(
                    IslamicDate::recurring(9, 3).unwrap(),
                    format!("event {i}"),
                ));
                engine.get_days(0).unwrap().len()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 30);
    }
    assert_eq!(engine.local_events().len(), 4);
    assert!(engine.get_days(0).unwrap()[2].has_local_event);
}
