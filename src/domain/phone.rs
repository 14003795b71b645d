//! Phone value object.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ukrainian mobile format: `+380` followed by exactly nine digits.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+380[0-9]{9}$").expect("phone pattern is valid"));

/// A validated Ukrainian phone number.
///
/// # Example
///
/// ```
/// use address_book::domain::{Field, Phone};
///
/// let phone = Phone::parse("+380501234567").unwrap();
/// assert_eq!(phone.as_str(), "+380501234567");
/// assert!(!Phone::validate("0501234567"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Field for Phone {
    const KIND: FieldKind = FieldKind::Phone;

    /// # Validation Rules
    ///
    /// - Must start with `+380`
    /// - Must be followed by exactly 9 ASCII digits and nothing else
    fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !PHONE_PATTERN.is_match(raw) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl Phone {
    /// Substring match used by phone search.
    pub fn contains(&self, fragment: &str) -> bool {
        self.0.contains(fragment)
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::parse("+380501234567").unwrap();
        assert_eq!(phone.as_str(), "+380501234567");
        assert_eq!(phone.as_str().len(), 13);
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(Phone::validate("+380000000000"));
        assert!(Phone::validate("+380999999999"));
        assert!(!Phone::validate(""));
        assert!(!Phone::validate("380501234567"));
        assert!(!Phone::validate("+38050123456"));
        assert!(!Phone::validate("+3805012345678"));
        assert!(!Phone::validate("+381501234567"));
        assert!(!Phone::validate("+380 50 123 45 67"));
        assert!(!Phone::validate("+38050123456a"));
        assert!(!Phone::validate(" +380501234567"));
        assert!(!Phone::validate("+380501234567\n"));
        // Non-ASCII digits do not count
        assert!(!Phone::validate("+380٥٠١٢٣٤٥٦٧"));
    }

    #[test]
    fn test_phone_rejection_carries_value() {
        assert_eq!(
            Phone::parse("12345"),
            Err(ValidationError::InvalidPhone("12345".to_string()))
        );
    }

    #[test]
    fn test_phone_contains() {
        let phone = Phone::parse("+380501234567").unwrap();
        assert!(phone.contains("501234"));
        assert!(!phone.contains("999"));
    }

    #[test]
    fn test_phone_serialization() {
        let phone = Phone::parse("+380501234567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+380501234567\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
