//! Persisted shape of a record.

use super::record::Record;
use crate::domain::{Birthday, Field, Name, Phone};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// A record as it appears in the store file.
///
/// ```json
/// {"name": "oleg", "phones": ["+380501234567"], "birthday": "05.06.1990"}
/// ```
///
/// An unset birthday is written as `null`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RecordDocument {
    /// Contact name
    pub name: Name,

    /// Phone numbers in record order
    pub phones: Vec<Phone>,

    /// Birthday as `dd.mm.yyyy`
    pub birthday: Option<Birthday>,
}

impl From<&Record> for RecordDocument {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().clone(),
            phones: record.phones().to_vec(),
            birthday: record.birthday().cloned(),
        }
    }
}

impl From<RecordDocument> for Record {
    fn from(doc: RecordDocument) -> Self {
        Record::from_parts(doc.name, doc.phones, doc.birthday)
    }
}

impl RecordDocument {
    /// Rebuild a stored entry, applying the same field rules as live input.
    ///
    /// Each phone and the birthday are checked on their own: a value that is
    /// invalid or not a string is dropped with a warning and the rest of the
    /// contact is kept. A missing, `null` or unusable name falls back to
    /// `key`. Returns `None` only when the entry is not an object or no name
    /// can be found at all.
    pub fn from_stored(key: &str, value: Value) -> Option<Self> {
        let Value::Object(mut fields) = value else {
            warn!(key = %key, "Skipping stored entry that is not a contact");
            return None;
        };

        let name = Self::stored_name(key, &mut fields)?;

        let phones = match fields.remove("phones") {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match serde_json::from_value::<Phone>(item) {
                    Ok(phone) => Some(phone),
                    Err(e) => {
                        warn!(contact = %name, error = %e, "Dropping stored phone");
                        None
                    }
                })
                .collect(),
            None | Some(Value::Null) => Vec::new(),
            Some(other) => {
                warn!(contact = %name, value = %other, "Dropping stored phones that are not a list");
                Vec::new()
            }
        };

        let birthday = match fields.remove("birthday") {
            None | Some(Value::Null) => None,
            Some(raw) => match serde_json::from_value::<Birthday>(raw) {
                Ok(birthday) => Some(birthday),
                Err(e) => {
                    warn!(contact = %name, error = %e, "Dropping stored birthday");
                    None
                }
            },
        };

        Some(Self {
            name,
            phones,
            birthday,
        })
    }

    fn stored_name(key: &str, fields: &mut Map<String, Value>) -> Option<Name> {
        match fields.remove("name").map(serde_json::from_value::<Name>) {
            Some(Ok(name)) => return Some(name),
            Some(Err(e)) => debug!(key = %key, error = %e, "Stored name unusable, using key"),
            None => {}
        }

        match Name::parse(key) {
            Ok(name) => Some(name),
            Err(e) => {
                warn!(key = %key, error = %e, "Skipping stored contact without a name");
                None
            }
        }
    }
}
