//! Calendar events and their highlight categories.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::HighlightToggles;
use crate::date::AnyDate;

/// Category label attached to an official event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventCategory {
    Afghanistan,
    Iran,
    AncientIran,
    IslamicIran,
    IslamicAfghanistan,
    Gregorian,
    Ad,
    /// User-added events.
    Personal,
    /// Any label outside the known set. Never highlighted.
    Other(String),
}

impl EventCategory {
    /// Whether an official event of this category is highlighted under `toggles`.
    ///
    /// "Islamic Afghanistan" needs both the Islamic and the Afghanistan toggle.
    pub fn is_highlighted(&self, toggles: &HighlightToggles) -> bool {
        match self {
            EventCategory::Afghanistan => toggles.afghanistan,
            EventCategory::Iran => toggles.iran,
            EventCategory::AncientIran => toggles.ancient_iran,
            EventCategory::IslamicIran => toggles.islamic,
            EventCategory::IslamicAfghanistan => toggles.islamic && toggles.afghanistan,
            EventCategory::Gregorian => toggles.gregorian,
            EventCategory::Ad => toggles.ad,
            EventCategory::Personal | EventCategory::Other(_) => false,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            EventCategory::Afghanistan => "Afghanistan",
            EventCategory::Iran => "Iran",
            EventCategory::AncientIran => "Ancient Iran",
            EventCategory::IslamicIran => "Islamic Iran",
            EventCategory::IslamicAfghanistan => "Islamic Afghanistan",
            EventCategory::Gregorian => "Gregorian",
            EventCategory::Ad => "Ad",
            EventCategory::Personal => "Personal",
            EventCategory::Other(label) => label,
        }
    }
}

impl From<&str> for EventCategory {
    fn from(label: &str) -> Self {
        match label {
            "Afghanistan" => EventCategory::Afghanistan,
            "Iran" => EventCategory::Iran,
            "Ancient Iran" => EventCategory::AncientIran,
            "Islamic Iran" => EventCategory::IslamicIran,
            "Islamic Afghanistan" => EventCategory::IslamicAfghanistan,
            "Gregorian" => EventCategory::Gregorian,
            "Ad" => EventCategory::Ad,
            "Personal" => EventCategory::Personal,
            other => EventCategory::Other(other.to_string()),
        }
    }
}

impl From<String> for EventCategory {
    fn from(label: String) -> Self {
        EventCategory::from(label.as_str())
    }
}

impl From<EventCategory> for String {
    fn from(category: EventCategory) -> Self {
        category.label().to_string()
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An event pinned to a date in exactly one calendar system.
///
/// Official events carry a recurring date (year -1); local events usually
/// carry a concrete year and only match that year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub date: AnyDate,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: EventCategory,
    #[serde(default)]
    pub holiday: bool,
    /// Commemorates a death anniversary.
    #[serde(default)]
    pub obit: bool,
}

impl CalendarEvent {
    /// A personal event with no description and no flags set.
    pub fn new(date: impl Into<AnyDate>, title: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            title: title.into(),
            description: String::new(),
            category: EventCategory::Personal,
            holiday: false,
            obit: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: EventCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_holiday(mut self, holiday: bool) -> Self {
        self.holiday = holiday;
        self
    }

    pub fn with_obit(mut self, obit: bool) -> Self {
        self.obit = obit;
        self
    }
}
