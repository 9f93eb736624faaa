//! Month and weekday name tables.
//!
//! Defaults are the Persian-script month names of each calendar and the
//! Saturday-first Persian weekday names. Weekday tables are indexed by
//! day-of-week, so index 0 is Saturday and index 6 is Friday.

use serde::{Deserialize, Serialize};

use crate::date::{CalendarDate, CalendarKind};
use crate::digits::DigitScript;

/// Arabic comma, used between the weekday and the date.
pub const PERSIAN_COMMA: char = '،';

const ISLAMIC_MONTHS_FA: [&str; 12] = [
    "محرم",
    "صفر",
    "ربیع‌الاول",
    "ربیع‌الثانی",
    "جمادی‌الاول",
    "جمادی‌الثانی",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذی‌القعده",
    "ذی‌الحجه",
];

const PERSIAN_MONTHS_FA: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

const CIVIL_MONTHS_FA: [&str; 12] = [
    "ژانویه",
    "فوریه",
    "مارس",
    "آوریل",
    "مه",
    "ژوئن",
    "ژوئیه",
    "اوت",
    "سپتامبر",
    "اکتبر",
    "نوامبر",
    "دسامبر",
];

const WEEKDAYS_FA: [&str; 7] = [
    "شنبه",
    "یک‌شنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنج‌شنبه",
    "جمعه",
];

const ISLAMIC_MONTHS_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Shaban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qadah",
    "Dhu al-Hijjah",
];

const PERSIAN_MONTHS_EN: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

const CIVIL_MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS_EN: [&str; 7] = [
    "Saturday",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
];

/// Replaceable month and weekday names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Names {
    months: [String; 12],
    persian_months: [String; 12],
    civil_months: [String; 12],
    weekdays: [String; 7],
}

impl Default for Names {
    fn default() -> Self {
        Self::persian()
    }
}

impl Names {
    pub fn persian() -> Self {
        Self {
            months: ISLAMIC_MONTHS_FA.map(String::from),
            persian_months: PERSIAN_MONTHS_FA.map(String::from),
            civil_months: CIVIL_MONTHS_FA.map(String::from),
            weekdays: WEEKDAYS_FA.map(String::from),
        }
    }

    pub fn english() -> Self {
        Self {
            months: ISLAMIC_MONTHS_EN.map(String::from),
            persian_months: PERSIAN_MONTHS_EN.map(String::from),
            civil_months: CIVIL_MONTHS_EN.map(String::from),
            weekdays: WEEKDAYS_EN.map(String::from),
        }
    }

    pub fn with_month_names(mut self, months: [String; 12]) -> Self {
        self.months = months;
        self
    }

    pub fn with_weekday_names(mut self, weekdays: [String; 7]) -> Self {
        self.weekdays = weekdays;
        self
    }

    pub fn month_names(&self) -> &[String; 12] {
        &self.months
    }

    /// Name of Islamic month `month` (1-12). Out-of-range months wrap.
    pub fn month_name(&self, month: u32) -> &str {
        self.month_name_in(CalendarKind::Islamic, month)
    }

    /// Name of month `month` (1-12) of `calendar`.
    pub fn month_name_in(&self, calendar: CalendarKind, month: u32) -> &str {
        let table = match calendar {
            CalendarKind::Islamic => &self.months,
            CalendarKind::Persian => &self.persian_months,
            CalendarKind::Civil => &self.civil_months,
        };
        &table[(month.max(1) as usize - 1) % 12]
    }

    /// Name of weekday `day_of_week` (0 = Saturday).
    pub fn weekday_name(&self, day_of_week: u32) -> &str {
        &self.weekdays[day_of_week as usize % 7]
    }

    /// `"{day} {month} {year}"` with digits in `digits`, named from the
    /// date's own calendar. Recurring dates drop the year.
    pub fn date_to_string<D: CalendarDate>(&self, date: &D, digits: DigitScript) -> String {
        let day = digits.format_int(i64::from(date.day_of_month()));
        let month = self.month_name_in(D::KIND, date.month());
        if date.is_recurring() {
            return format!("{day} {month}");
        }
        format!("{day} {month} {}", digits.format_int(i64::from(date.year())))
    }
}
