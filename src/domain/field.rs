//! The capability shared by every self-validating field.

use super::errors::ValidationError;
use std::fmt;

/// Which field a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Birthday,
}

impl FieldKind {
    /// Get display name for the field kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone number",
            Self::Birthday => "birthday",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A typed scalar that owns its validation rule.
///
/// Implementors only ever hold values that passed [`Field::parse`], so a
/// constructed field is always valid. `validate` is the predicate form of
/// the same rule.
pub trait Field: Sized + fmt::Display {
    /// The kind reported in validation failures.
    const KIND: FieldKind;

    /// Parse a raw value, rejecting it if the field's rule does not hold.
    fn parse(raw: &str) -> Result<Self, ValidationError>;

    /// The stored value exactly as it was entered.
    fn as_str(&self) -> &str;

    /// Check a raw value against the field's rule without keeping it.
    fn validate(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }
}
