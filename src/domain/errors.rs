//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field value validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number does not match `+380` followed by 9 digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `dd.mm.yyyy` date.
    InvalidBirthday(String),
}

impl ValidationError {
    /// The kind of field that rejected the value.
    pub fn kind(&self) -> super::FieldKind {
        match self {
            Self::EmptyName => super::FieldKind::Name,
            Self::InvalidPhone(_) => super::FieldKind::Phone,
            Self::InvalidBirthday(_) => super::FieldKind::Birthday,
        }
    }

    /// The rejected input, empty for a blank name.
    pub fn value(&self) -> &str {
        match self {
            Self::EmptyName => "",
            Self::InvalidPhone(value) | Self::InvalidBirthday(value) => value,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidBirthday(date) => write!(f, "Invalid birthday: {}", date),
        }
    }
}

impl std::error::Error for ValidationError {}
