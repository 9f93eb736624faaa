use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use lunar_calendar::{CalendarDate, CalendarKind, CivilDate, DigitScript};

/// Islamic, Persian and civil calendar tool.
#[derive(Parser)]
#[command(
    name = "lunarcal",
    version,
    about = "Islamic month grids, calendar conversion and event lookup"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML engine configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Official event dataset (JSON). The bundled dataset is used if omitted.
    #[arg(long, global = true)]
    pub events: Option<PathBuf>,

    /// Personal events (JSON array) added on top of the official ones.
    #[arg(long, global = true)]
    pub local_events: Option<PathBuf>,

    /// Pin "today" to a civil date (YYYY-MM-DD) instead of reading the clock.
    #[arg(long, global = true, value_parser = parse_today)]
    pub today: Option<CivilDate>,

    /// Language of month and weekday names.
    #[arg(long, global = true, value_enum, default_value_t = NameTable::Persian)]
    pub names: NameTable,

    /// Digit glyphs for day numbers. Overrides the configured value.
    #[arg(long, global = true, value_enum)]
    pub digits: Option<Digits>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// `--today` must name a concrete day; `--MM-DD` recurs every year.
fn parse_today(s: &str) -> Result<CivilDate, String> {
    let date = s.parse::<CivilDate>().map_err(|e| e.to_string())?;
    if date.is_recurring() {
        return Err(format!("'{s}' has no year"));
    }
    Ok(date)
}

#[derive(Clone, Copy, ValueEnum)]
pub enum NameTable {
    Persian,
    English,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Digits {
    Latin,
    Persian,
    ArabicIndic,
}

impl From<Digits> for DigitScript {
    fn from(d: Digits) -> Self {
        match d {
            Digits::Latin => DigitScript::Latin,
            Digits::Persian => DigitScript::Persian,
            Digits::ArabicIndic => DigitScript::ArabicIndic,
        }
    }
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the grid of an Islamic month.
    Month(MonthArgs),
    /// Convert a date between calendar systems.
    Convert(ConvertArgs),
    /// List the events falling on an Islamic date.
    Events(EventsArgs),
    /// Print the number of days in an Islamic month.
    MonthLength(MonthLengthArgs),
}

#[derive(clap::Args)]
pub struct MonthArgs {
    /// Months before the current one (negative moves forward).
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,

    /// Emit the grid as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Date to convert, as YYYY-MM-DD.
    pub date: String,

    /// Source calendar (islamic, persian, civil).
    #[arg(long)]
    pub from: CalendarKind,

    /// Target calendar (islamic, persian, civil).
    #[arg(long)]
    pub to: CalendarKind,

    /// Lunar offset in days. Overrides the configured value.
    #[arg(long, allow_negative_numbers = true)]
    pub offset: Option<i32>,
}

#[derive(clap::Args)]
pub struct EventsArgs {
    /// Islamic date, as YYYY-MM-DD.
    pub date: String,

    /// Print only the titles of holiday events.
    #[arg(long, conflicts_with = "json")]
    pub holiday: bool,

    /// Emit the matched events as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args)]
pub struct MonthLengthArgs {
    /// Islamic year.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Islamic month (1-12).
    pub month: u32,
}
