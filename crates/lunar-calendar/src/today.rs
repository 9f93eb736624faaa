//! Where "today" comes from.

use std::fmt;

use chrono::{Local, Utc};
use chrono_tz::Tz;

use crate::date::CivilDate;

/// Supplies the current civil date.
pub trait TodaySource: Send + Sync + fmt::Debug {
    fn today(&self) -> CivilDate;
}

/// Wall clock, read in an optional fixed time zone.
///
/// Without a zone the host's local zone is used.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SystemClock {
    pub time_zone: Option<Tz>,
}

impl SystemClock {
    pub fn new(time_zone: Option<Tz>) -> Self {
        Self { time_zone }
    }
}

impl TodaySource for SystemClock {
    fn today(&self) -> CivilDate {
        let now = Utc::now();
        let date = match self.time_zone {
            Some(tz) => now.with_timezone(&tz).date_naive(),
            None => now.with_timezone(&Local).date_naive(),
        };
        CivilDate::from(date)
    }
}

/// A pinned date, for reproducible grids and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedToday(pub CivilDate);

impl TodaySource for FixedToday {
    fn today(&self) -> CivilDate {
        self.0
    }
}
