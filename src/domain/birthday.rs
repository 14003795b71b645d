//! Birthday value object.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// `chrono` accepts unpadded and signed numbers; the stored format does not.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birthday pattern is valid"));

/// Format used both for input and for the persisted value.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A birthday entered as `dd.mm.yyyy`.
///
/// The original text is kept for display and persistence, alongside the
/// parsed calendar date.
///
/// # Example
///
/// ```
/// use address_book::domain::{Birthday, Field};
///
/// let birthday = Birthday::parse("05.06.1990").unwrap();
/// assert_eq!(birthday.as_str(), "05.06.1990");
/// assert!(!Birthday::validate("31.02.1990"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Field for Birthday {
    const KIND: FieldKind = FieldKind::Birthday;

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_SHAPE.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }
        let date = NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))?;
        Ok(Self {
            raw: raw.to_string(),
            date,
        })
    }

    fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Birthday {
    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// This birthday's day and month placed in `year`.
    ///
    /// 29 February falls back to 28 February in non-leap years.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.date)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
