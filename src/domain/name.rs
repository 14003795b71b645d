//! Name value object.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact name.
///
/// Names carry no format rule beyond being present. The value is kept as
/// entered (case included) since it doubles as the address book key.
///
/// # Example
///
/// ```
/// use address_book::domain::{Field, Name};
///
/// let name = Name::parse("oleg").unwrap();
/// assert_eq!(name.as_str(), "oleg");
/// assert!(Name::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Field for Name {
    const KIND: FieldKind = FieldKind::Name;

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(raw.to_string()))
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_keeps_case() {
        let name = Name::parse("Anna").unwrap();
        assert_eq!(name.as_str(), "Anna");
    }

    #[test]
    fn test_name_rejects_blank() {
        assert_eq!(Name::parse(""), Err(ValidationError::EmptyName));
        assert_eq!(Name::parse(" \t"), Err(ValidationError::EmptyName));
        assert!(!Name::validate(""));
        assert!(Name::validate("x"));
    }

    #[test]
    fn test_name_deserialization_empty_fails() {
        let result: Result<Name, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
