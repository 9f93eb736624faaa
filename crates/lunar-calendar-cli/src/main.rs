//! `lunarcal`: Islamic month grids, conversion between the Islamic, Persian
//! and civil calendars, and official/personal event lookup.
//!
//! ## Usage
//!
//! ```sh
//! # Grid of the current Islamic month
//! lunarcal month
//!
//! # Next month, as JSON, with "today" pinned
//! lunarcal --today 2024-03-11 month --offset -1 --json
//!
//! # Convert 1 Farvardin 1403 to the civil calendar
//! lunarcal convert 1403-01-01 --from persian --to civil
//!
//! # Events on 21 Ramadan 1445
//! lunarcal events 1445-09-21
//!
//! # Length of Dhu al-Hijjah 1445
//! lunarcal month-length 1445 12
//! ```

mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use lunar_calendar::{CalendarEngine, FixedToday, Names};

use crate::cli::{Cli, Command, NameTable};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = config::load_engine_config(cli.config.as_deref())?;
    if let Some(digits) = cli.digits {
        config = config.with_digits(digits.into());
    }

    // Conversion needs no catalog.
    if let Command::Convert(args) = &cli.command {
        return commands::convert(&config, args);
    }

    let catalog = config::load_catalog(cli.events.as_deref())?;
    let local = config::load_local_events(cli.local_events.as_deref())?;

    let names = match cli.names {
        NameTable::Persian => Names::persian(),
        NameTable::English => Names::english(),
    };
    let mut engine = CalendarEngine::new(config, catalog)
        .context("invalid engine configuration")?
        .with_names(names);
    if let Some(today) = cli.today {
        engine = engine.with_today_source(FixedToday(today));
    }
    for event in local {
        engine.add_local_event(event);
    }

    match &cli.command {
        Command::Month(args) => commands::month(&engine, args),
        Command::Events(args) => commands::events(&engine, args),
        Command::MonthLength(args) => commands::month_length(&engine, args),
        Command::Convert(args) => commands::convert(engine.config(), args),
    }
}
