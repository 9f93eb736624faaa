//! WASM bindings for lunar-calendar.
//!
//! Exposes month grids, calendar conversion and event lookup to JavaScript via
//! `wasm-bindgen`. Configuration, events and results cross the boundary as
//! JSON strings; dates are `YYYY-MM-DD` strings.
//!
//! The host supplies "today" as a civil date on every call, since there is no
//! portable clock or time zone database on `wasm32-unknown-unknown`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p lunar-calendar-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/lunar_calendar_wasm.wasm
//! ```

use lunar_calendar::converter;
use lunar_calendar::{
    AnyDate, CalendarDate, CalendarEngine, CalendarEvent, CalendarKind, CivilDate, Day,
    EngineConfig, EventCatalog, FixedToday, IslamicDate,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DayDto {
    num: String,
    day_of_week: u32,
    date: String,
    is_holiday: bool,
    has_local_event: bool,
    has_highlighted_official_event: bool,
    is_today: bool,
}

impl From<&Day> for DayDto {
    fn from(d: &Day) -> Self {
        Self {
            num: d.num.clone(),
            day_of_week: d.day_of_week,
            date: d.islamic_date.to_string(),
            is_holiday: d.is_holiday,
            has_local_event: d.has_local_event,
            has_highlighted_official_event: d.has_highlighted_official_event,
            is_today: d.is_today,
        }
    }
}

#[derive(Serialize)]
struct EventDto<'a> {
    calendar: CalendarKind,
    date: String,
    title: &'a str,
    description: &'a str,
    category: &'a str,
    holiday: bool,
    obit: bool,
}

impl<'a> From<&'a CalendarEvent> for EventDto<'a> {
    fn from(e: &'a CalendarEvent) -> Self {
        let date = match e.date {
            AnyDate::Islamic(d) => d.to_string(),
            AnyDate::Persian(d) => d.to_string(),
            AnyDate::Civil(d) => d.to_string(),
        };
        Self {
            calendar: e.date.kind(),
            date,
            title: &e.title,
            description: &e.description,
            category: e.category.label(),
            holiday: e.holiday,
            obit: e.obit,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse an engine configuration. An empty string means defaults.
fn parse_config(json: &str) -> Result<EngineConfig, String> {
    if json.trim().is_empty() {
        return Ok(EngineConfig::default());
    }
    serde_json::from_str(json).map_err(|e| format!("Invalid config JSON: {}", e))
}

fn parse_local_events(json: Option<&str>) -> Result<Vec<CalendarEvent>, String> {
    match json {
        Some(json) if !json.trim().is_empty() => {
            serde_json::from_str(json).map_err(|e| format!("Invalid events JSON: {}", e))
        }
        _ => Ok(Vec::new()),
    }
}

/// Engine over the bundled dataset, pinned to `today`, with `local` appended.
fn build_engine(
    config_json: &str,
    today: &str,
    local: Option<&str>,
) -> Result<CalendarEngine, String> {
    let config = parse_config(config_json)?;
    let today: CivilDate = today
        .parse()
        .map_err(|e| format!("Invalid today '{}': {}", today, e))?;
    if today.is_recurring() {
        return Err(format!("Invalid today '{}': no year", today));
    }
    let engine = CalendarEngine::new(config, EventCatalog::bundled())
        .map_err(|e| e.to_string())?
        .with_today_source(FixedToday(today));
    for event in parse_local_events(local)? {
        engine.add_local_event(event);
    }
    Ok(engine)
}

fn parse_islamic(date: &str) -> Result<IslamicDate, String> {
    date.parse()
        .map_err(|e| format!("Invalid islamic date '{}': {}", date, e))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn days_json(
    config_json: &str,
    today: &str,
    offset: i32,
    local: Option<&str>,
) -> Result<String, String> {
    let engine = build_engine(config_json, today, local)?;
    let days = engine.get_days(offset).map_err(|e| e.to_string())?;
    let dtos: Vec<DayDto> = days.iter().map(DayDto::from).collect();
    to_json(&dtos)
}

fn convert_date_str(date: &str, from: &str, to: &str, offset: i32) -> Result<String, String> {
    let from = from.parse::<CalendarKind>().map_err(|e| e.to_string())?;
    let to = to.parse::<CalendarKind>().map_err(|e| e.to_string())?;
    let date = AnyDate::parse(from, date).map_err(|e| e.to_string())?;
    let converted = converter::convert(date, to, offset).map_err(|e| e.to_string())?;
    Ok(match converted {
        AnyDate::Islamic(d) => d.to_string(),
        AnyDate::Persian(d) => d.to_string(),
        AnyDate::Civil(d) => d.to_string(),
    })
}

fn events_json(config_json: &str, date: &str, local: Option<&str>) -> Result<String, String> {
    // Event matching never reads today; any valid date will do.
    let engine = build_engine(config_json, "2000-01-01", local)?;
    let events = engine.get_all_events_for_day(&parse_islamic(date)?);
    let dtos: Vec<EventDto<'_>> = events.iter().map(EventDto::from).collect();
    to_json(&dtos)
}

fn summary_str(config_json: &str, date: &str) -> Result<String, String> {
    let engine = build_engine(config_json, "2000-01-01", None)?;
    engine
        .day_title_summary(&parse_islamic(date)?)
        .map_err(|e| e.to_string())
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Build the grid of the month `offset` months before the current one.
///
/// Returns a JSON array of day objects (`num`, `dayOfWeek`, `date`,
/// `isHoliday`, `hasLocalEvent`, `hasHighlightedOfficialEvent`, `isToday`).
///
/// # Arguments
/// - `config_json` -- engine configuration as JSON (empty for defaults)
/// - `today` -- today's civil date, `YYYY-MM-DD`
/// - `offset` -- months before the current one; negative moves forward
/// - `local_events_json` -- optional JSON array of personal events
#[wasm_bindgen(js_name = "getDays")]
pub fn get_days(
    config_json: &str,
    today: &str,
    offset: i32,
    local_events_json: Option<String>,
) -> Result<String, JsValue> {
    days_json(config_json, today, offset, local_events_json.as_deref())
        .map_err(|e| JsValue::from_str(&e))
}

/// Convert `date` from one calendar system to another.
///
/// `from` and `to` are `islamic`, `persian` or `civil`. The lunar `offset`
/// applies on the Islamic side.
#[wasm_bindgen(js_name = "convertDate")]
pub fn convert_date(date: &str, from: &str, to: &str, offset: i32) -> Result<String, JsValue> {
    convert_date_str(date, from, to, offset).map_err(|e| JsValue::from_str(&e))
}

/// Number of days in an Islamic month.
#[wasm_bindgen(js_name = "getMonthLength")]
pub fn get_month_length(year: i32, month: u32) -> Result<u32, JsValue> {
    lunar_calendar::islamic_month_length(year, month).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Official then personal events falling on an Islamic date, as a JSON array.
#[wasm_bindgen(js_name = "getEventsForDay")]
pub fn get_events_for_day(
    config_json: &str,
    date: &str,
    local_events_json: Option<String>,
) -> Result<String, JsValue> {
    events_json(config_json, date, local_events_json.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// `"{weekday}، {day} {month} {year}"` for an Islamic date.
#[wasm_bindgen(js_name = "dayTitleSummary")]
pub fn day_title_summary(config_json: &str, date: &str) -> Result<String, JsValue> {
    summary_str(config_json, date).map_err(|e| JsValue::from_str(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_json_for_ramadan_1445() {
        let json = days_json(r#"{"digits": "latin"}"#, "2024-03-11", 0, None).unwrap();
        let days: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(days.len(), 30);
        assert_eq!(days[0]["num"], "1");
        assert_eq!(days[0]["date"], "1445-09-01");
        assert_eq!(days[0]["dayOfWeek"], 2);
        assert_eq!(days[0]["isToday"], true);
        assert_eq!(days[4]["isHoliday"], true);
    }

    #[test]
    fn empty_config_means_defaults() {
        let json = days_json("", "2024-03-11", 0, None).unwrap();
        let days: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(days[0]["num"], "۱");
    }

    #[test]
    fn local_events_are_flagged() {
        let local = r#"[{"date": {"calendar": "civil", "year": 2024, "month": 3, "day": 25},
                         "title": "Birthday", "category": "Personal"}]"#;
        let json = days_json("{}", "2024-03-11", 0, Some(local)).unwrap();
        let days: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(days[14]["hasLocalEvent"], true);
        assert_eq!(days[13]["hasLocalEvent"], false);
    }

    #[test]
    fn bad_inputs_are_reported() {
        assert!(days_json("{", "2024-03-11", 0, None)
            .unwrap_err()
            .starts_with("Invalid config JSON"));
        assert!(days_json("{}", "2024-02-30", 0, None)
            .unwrap_err()
            .starts_with("Invalid today"));
        assert!(days_json("{}", "--03-21", 0, None)
            .unwrap_err()
            .ends_with("no year"));
        assert!(days_json("{}", "2024-03-11", 0, Some("[{}]"))
            .unwrap_err()
            .starts_with("Invalid events JSON"));
    }

    #[test]
    fn convert_between_systems() {
        assert_eq!(convert_date_str("1403-01-01", "persian", "civil", 0).unwrap(), "2024-03-20");
        assert_eq!(convert_date_str("2024-03-10", "civil", "islamic", 1).unwrap(), "1445-09-01");
        assert!(convert_date_str("2024-03-11", "mayan", "civil", 0).is_err());
    }

    #[test]
    fn events_for_nowruz() {
        let json = events_json("", "1445-09-10", None).unwrap();
        let events: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["title"], "Nowruz");
        assert_eq!(events[0]["calendar"], "persian");
        assert_eq!(events[0]["date"], "--01-01");
        assert_eq!(events[0]["category"], "Iran");
    }

    #[test]
    fn summary_in_persian() {
        assert_eq!(summary_str("", "1445-09-01").unwrap(), "دوشنبه، ۱ رمضان ۱۴۴۵");
    }
}
