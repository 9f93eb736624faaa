//! Subcommand runners.

use anyhow::{ensure, Context, Result};
use lunar_calendar::converter;
use lunar_calendar::{AnyDate, CalendarDate, CalendarEngine, Day, EngineConfig, IslamicDate};
use tracing::{info, info_span};

use crate::cli::{ConvertArgs, EventsArgs, MonthArgs, MonthLengthArgs};

/// Print a month grid, one line per day or as JSON.
pub fn month(engine: &CalendarEngine, args: &MonthArgs) -> Result<()> {
    let _cmd = info_span!("month", offset = args.offset).entered();
    let days = engine
        .get_days(args.offset)
        .context("failed to build month grid")?;
    info!(days = days.len(), "month grid built");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&days)?);
        return Ok(());
    }

    if let Some(first) = days.first() {
        let date = &first.islamic_date;
        println!(
            "{} {}",
            engine.month_name(date),
            engine.format_number(&date.year().to_string())
        );
    }
    for day in &days {
        println!("{}", render_day(engine, day));
    }
    Ok(())
}

/// `num  weekday  [flags]  titles`, tab separated.
fn render_day(engine: &CalendarEngine, day: &Day) -> String {
    let weekday = engine.names().weekday_name(day.day_of_week);
    let flags: Vec<&str> = [
        (day.is_holiday, "holiday"),
        (day.has_local_event, "local"),
        (day.has_highlighted_official_event, "official"),
        (day.is_today, "today"),
    ]
    .into_iter()
    .filter_map(|(set, name)| set.then_some(name))
    .collect();
    let titles: Vec<String> = engine
        .get_all_events_for_day(&day.islamic_date)
        .into_iter()
        .map(|e| e.title)
        .collect();
    format!(
        "{}\t{}\t[{}]\t{}",
        day.num,
        weekday,
        flags.join(" "),
        titles.join("; ")
    )
    .trim_end()
    .to_string()
}

/// Convert one date and print it in the target system.
pub fn convert(config: &EngineConfig, args: &ConvertArgs) -> Result<()> {
    let offset = args.offset.unwrap_or(config.lunar_offset);
    let date = AnyDate::parse(args.from, &args.date)
        .with_context(|| format!("invalid {} date: {}", args.from, args.date))?;
    ensure!(!date.is_recurring(), "cannot convert a date without a year: {}", args.date);
    let converted = converter::convert(date, args.to, offset)
        .with_context(|| format!("failed to convert {date} to {}", args.to))?;
    info!(from = %date, to = %converted, offset, "converted");

    match converted {
        AnyDate::Islamic(d) => println!("{d}"),
        AnyDate::Persian(d) => println!("{d}"),
        AnyDate::Civil(d) => println!("{d}"),
    }
    Ok(())
}

/// List the events of one Islamic day.
pub fn events(engine: &CalendarEngine, args: &EventsArgs) -> Result<()> {
    let date: IslamicDate = args
        .date
        .parse()
        .with_context(|| format!("invalid islamic date: {}", args.date))?;
    ensure!(!date.is_recurring(), "events need a date with a year: {}", args.date);

    if args.holiday {
        let titles = engine.get_events_title(&date, true);
        if !titles.is_empty() {
            println!("{titles}");
        }
        return Ok(());
    }

    let events = engine.get_all_events_for_day(&date);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    println!("{}", engine.day_title_summary(&date)?);
    for event in &events {
        let marker = if event.holiday { " (holiday)" } else { "" };
        println!("{} [{}]{}", event.title, event.category, marker);
    }
    Ok(())
}

pub fn month_length(engine: &CalendarEngine, args: &MonthLengthArgs) -> Result<()> {
    let length = engine
        .get_month_length(args.year, args.month)
        .with_context(|| format!("no such islamic month: {}/{}", args.year, args.month))?;
    println!("{length}");
    Ok(())
}
