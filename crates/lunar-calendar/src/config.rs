//! Engine configuration.
//!
//! Everything the host persists (lunar offset, digit script, observation time
//! zone and highlight toggles) lives in one serde struct, so a host can load
//! it from TOML or JSON. Every field has a default.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::digits::DigitScript;
use crate::error::{CalendarError, Result};

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Signed day correction applied to Islamic↔civil conversion.
    #[serde(default)]
    pub lunar_offset: i32,

    /// Digit glyphs used for day numbers and date text.
    #[serde(default)]
    pub digits: DigitScript,

    /// IANA zone in which "today" is observed (e.g. `Asia/Tehran`).
    /// `None` uses the host's local zone.
    #[serde(default)]
    pub observation_time_zone: Option<String>,

    /// Highlighting switches.
    #[serde(default)]
    pub highlight: HighlightToggles,
}

impl EngineConfig {
    pub fn with_lunar_offset(mut self, offset: i32) -> Self {
        self.lunar_offset = offset;
        self
    }

    pub fn with_digits(mut self, digits: DigitScript) -> Self {
        self.digits = digits;
        self
    }

    pub fn with_observation_time_zone(mut self, tz: impl Into<String>) -> Self {
        self.observation_time_zone = Some(tz.into());
        self
    }

    pub fn with_highlight(mut self, highlight: HighlightToggles) -> Self {
        self.highlight = highlight;
        self
    }

    /// Parse the configured observation zone.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidTimezone` if the name is not a valid IANA
    /// identifier.
    pub fn time_zone(&self) -> Result<Option<Tz>> {
        self.observation_time_zone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| CalendarError::InvalidTimezone(name.to_string()))
            })
            .transpose()
    }
}

/// Independent highlight switches. All default to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightToggles {
    /// Mark days carrying user-added events.
    pub local: bool,
    /// Mark days carrying official events (subject to the category switches).
    pub official: bool,
    pub afghanistan: bool,
    pub iran: bool,
    pub ancient_iran: bool,
    pub islamic: bool,
    pub gregorian: bool,
    pub ad: bool,
}

impl HighlightToggles {
    pub fn all() -> Self {
        Self {
            local: true,
            official: true,
            afghanistan: true,
            iran: true,
            ancient_iran: true,
            islamic: true,
            gregorian: true,
            ad: true,
        }
    }

    pub fn none() -> Self {
        Self {
            local: false,
            official: false,
            afghanistan: false,
            iran: false,
            ancient_iran: false,
            islamic: false,
            gregorian: false,
            ad: false,
        }
    }
}

impl Default for HighlightToggles {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.lunar_offset, 0);
        assert_eq!(config.digits, DigitScript::Persian);
        assert!(config.highlight.official);
    }

    #[test]
    fn partial_highlight_table_keeps_other_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"lunar_offset":-1,"highlight":{"iran":false}}"#).unwrap();
        assert_eq!(config.lunar_offset, -1);
        assert!(!config.highlight.iran);
        assert!(config.highlight.afghanistan);
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(serde_json::from_str::<EngineConfig>(r#"{"colour":"red"}"#).is_err());
    }

    #[test]
    fn time_zone_validation() {
        let ok = EngineConfig::default().with_observation_time_zone("Asia/Tehran");
        assert_eq!(ok.time_zone().unwrap(), Some(chrono_tz::Asia::Tehran));

        let bad = EngineConfig::default().with_observation_time_zone("Mars/Olympus");
        assert!(matches!(
            bad.time_zone(),
            Err(CalendarError::InvalidTimezone(_))
        ));
        assert_eq!(EngineConfig::default().time_zone().unwrap(), None);
    }
}
