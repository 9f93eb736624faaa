//! Digit-script mapping for date text.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// The glyph set used when rendering numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigitScript {
    /// ASCII `0`-`9`; formatting is a no-op.
    Latin,
    /// Extended Arabic-Indic digits as used in Persian and Dari.
    #[default]
    Persian,
    /// Arabic-Indic digits.
    ArabicIndic,
}

impl DigitScript {
    fn table(self) -> Option<&'static [char; 10]> {
        match self {
            DigitScript::Latin => None,
            DigitScript::Persian => Some(&PERSIAN_DIGITS),
            DigitScript::ArabicIndic => Some(&ARABIC_INDIC_DIGITS),
        }
    }

    /// Replace every ASCII digit in `text` with this script's glyph.
    ///
    /// Non-digit characters pass through. For [`DigitScript::Latin`] the input
    /// is returned borrowed, without allocating.
    pub fn format_number<'a>(self, text: &'a str) -> Cow<'a, str> {
        let Some(table) = self.table() else {
            return Cow::Borrowed(text);
        };
        if !text.bytes().any(|b| b.is_ascii_digit()) {
            return Cow::Borrowed(text);
        }
        Cow::Owned(
            text.chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) if c.is_ascii_digit() => table[d as usize],
                    _ => c,
                })
                .collect(),
        )
    }

    pub fn format_int(self, number: i64) -> String {
        self.format_number(&number.to_string()).into_owned()
    }
}
