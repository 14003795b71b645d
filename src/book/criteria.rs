//! Search criteria for [`AddressBook::find_records`](super::AddressBook::find_records).

use crate::domain::Field;
use crate::models::Record;

/// Shortest name fragment that takes part in a search.
pub const MIN_NAME_QUERY_LEN: usize = 2;

/// Shortest phone fragment that takes part in a search.
pub const MIN_PHONE_QUERY_LEN: usize = 5;

/// Substring criteria, OR'ed together.
///
/// Names are compared case-insensitively; phones are compared as typed.
/// A criterion shorter than its minimum length is ignored, so a search with
/// only short criteria matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Fragment of the contact name
    pub name: Option<String>,

    /// Fragment of any of the contact's phones
    pub phone: Option<String>,
}

impl SearchCriteria {
    /// Search by name fragment only.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            phone: None,
        }
    }

    /// Search by phone fragment only.
    pub fn by_phone(phone: impl Into<String>) -> Self {
        Self {
            name: None,
            phone: Some(phone.into()),
        }
    }

    /// Add a phone fragment to the criteria.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    fn usable_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|name| name.chars().count() >= MIN_NAME_QUERY_LEN)
    }

    fn usable_phone(&self) -> Option<&str> {
        self.phone
            .as_deref()
            .filter(|phone| phone.chars().count() >= MIN_PHONE_QUERY_LEN)
    }

    /// Whether at least one criterion is long enough to be applied.
    pub fn is_usable(&self) -> bool {
        self.usable_name().is_some() || self.usable_phone().is_some()
    }

    /// Check a single record against the criteria.
    pub fn matches(&self, record: &Record) -> bool {
        let by_name = self.usable_name().is_some_and(|name| {
            record
                .name()
                .as_str()
                .to_lowercase()
                .contains(&name.to_lowercase())
        });
        let by_phone = self
            .usable_phone()
            .is_some_and(|fragment| record.phones().iter().any(|p| p.contains(fragment)));
        by_name || by_phone
    }
}
