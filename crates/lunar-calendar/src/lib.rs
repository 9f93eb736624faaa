//! # lunar-calendar
//!
//! Hijri (Islamic), Solar Hijri (Persian) and Gregorian date conversion, with
//! event-annotated month grids for a lunar calendar.
//!
//! The three systems are reconciled through the Julian Day Number. Islamic
//! dates follow the tabular 30-year cycle, shifted by a configurable
//! observational offset when converting to and from civil dates. Events may be
//! authored in any of the three systems and are matched against a day by
//! converting the day into the event's own system.
//!
//! ## Quick start
//!
//! ```rust
//! use lunar_calendar::{converter, CivilDate, IslamicDate};
//!
//! let ramadan = IslamicDate::new(1445, 9, 1).unwrap();
//! let civil = converter::islamic_to_civil(&ramadan, 0).unwrap();
//! assert_eq!(civil, CivilDate::new(2024, 3, 11).unwrap());
//! assert_eq!(converter::civil_to_islamic(&civil, 0).unwrap(), ramadan);
//! ```
//!
//! ## Modules
//!
//! - [`date`]: `IslamicDate`, `PersianDate`, `CivilDate` and the `CalendarDate` trait
//! - [`converter`]: JDN arithmetic and pairwise conversions
//! - [`month_length`]: month lengths and leap-year rules
//! - [`event`]: `CalendarEvent` and highlight categories
//! - [`catalog`]: the official event dataset
//! - [`matcher`]: matching events against a day
//! - [`grid`]: month grid construction
//! - [`digits`]: digit-script formatting
//! - [`names`]: month and weekday names
//! - [`config`]: engine configuration
//! - [`engine`]: `CalendarEngine`, the host-facing surface
//! - [`today`]: where the current date comes from
//! - [`error`]: Error types

pub mod catalog;
pub mod config;
pub mod converter;
pub mod date;
pub mod digits;
pub mod engine;
pub mod error;
pub mod event;
pub mod grid;
pub mod matcher;
pub mod month_length;
pub mod names;
pub mod today;

pub use catalog::EventCatalog;
pub use config::{EngineConfig, HighlightToggles};
pub use date::{AnyDate, CalendarDate, CalendarKind, CivilDate, IslamicDate, PersianDate};
pub use digits::DigitScript;
pub use engine::CalendarEngine;
pub use error::CalendarError;
pub use event::{CalendarEvent, EventCategory};
pub use grid::{build_month, Day};
pub use month_length::islamic_month_length;
pub use names::Names;
pub use today::{FixedToday, SystemClock, TodaySource};
