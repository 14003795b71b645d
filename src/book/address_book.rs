//! Keyed, insertion-ordered collection of contact records.

use super::criteria::SearchCriteria;
use crate::domain::{Birthday, Field, Phone};
use crate::error::{BookError, BookResult};
use crate::models::Record;
use std::collections::HashMap;
use std::fmt;
use std::slice;
use tracing::{debug, info, warn};

/// Column widths of the contact table.
const NAME_WIDTH: usize = 20;
const PHONE_WIDTH: usize = 15;
const BIRTHDAY_WIDTH: usize = 15;

/// Row shown by [`AddressBook::get_all_records`] when the book has no records.
pub const EMPTY_BOOK_NOTICE: &str = "Address book is empty";

/// Column headers and empty-book row of a rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLabels {
    pub name: &'static str,
    pub phone: &'static str,
    pub birthday: &'static str,
    pub empty: &'static str,
}

impl TableLabels {
    pub const ENGLISH: TableLabels = TableLabels {
        name: "Name",
        phone: "Phone",
        birthday: "Birthday",
        empty: EMPTY_BOOK_NOTICE,
    };
}

/// The address book: one record per contact name.
///
/// Records keep their insertion order. Re-adding a name replaces the stored
/// record in place. Validation happens only in [`AddressBook::add_record`];
/// records mutated afterwards are not re-checked.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    /// Name to position in `records`.
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a record and store it under its name.
    ///
    /// An existing record with the same name is overwritten, keeping its
    /// position.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidRecord` listing every value the record
    /// dropped during construction.
    pub fn add_record(&mut self, record: Record) -> BookResult<()> {
        if let Err(reasons) = record.validate() {
            for reason in &reasons {
                warn!(contact = %record.name(), field = %reason.kind(), "{}", reason);
            }
            return Err(BookError::InvalidRecord {
                name: record.name().as_str().to_string(),
                reasons,
            });
        }

        let key = record.name().as_str().to_string();
        match self.index.get(&key) {
            Some(&position) => {
                info!(contact = %key, "Contact replaced");
                self.records[position] = record;
            }
            None => {
                info!(contact = %key, "Contact added");
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
        Ok(())
    }

    /// Remove the record stored under exactly `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::RecordNotFound` if no record has that name.
    pub fn remove_record(&mut self, name: &str) -> BookResult<Record> {
        let position = self
            .index
            .remove(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;

        let record = self.records.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        info!(contact = %name, "Contact removed");
        Ok(record)
    }

    /// Find records matching any usable criterion, in book order.
    ///
    /// A record matching several criteria appears once.
    pub fn find_records(&self, criteria: &SearchCriteria) -> Vec<&Record> {
        let found: Vec<&Record> = self
            .records
            .iter()
            .filter(|record| criteria.matches(record))
            .collect();

        if found.is_empty() {
            info!(?criteria, "No contact matches the search criteria");
        } else {
            debug!(?criteria, count = found.len(), "Search completed");
        }
        found
    }

    /// Look up a record by its exact name.
    pub fn get_record_by_name(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    /// Look up a record by its exact name for phone management.
    pub fn get_record_by_name_mut(&mut self, name: &str) -> Option<&mut Record> {
        let position = *self.index.get(name)?;
        self.records.get_mut(position)
    }

    /// Render every record as a table.
    pub fn get_all_records(&self) -> String {
        render_table(&self.records, &TableLabels::ENGLISH)
    }

    /// Whether a record is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contact names in book order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name().as_str())
    }

    /// All records in book order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate over all records in book order.
    ///
    /// Every call starts a fresh pass.
    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Iterate over the records in batches of `size`; the last may be shorter.
    ///
    /// Each call yields a new lazy sequence over the current records.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidChunkSize` if `size` is zero.
    pub fn iter_chunks(&self, size: usize) -> BookResult<slice::Chunks<'_, Record>> {
        if size == 0 {
            return Err(BookError::InvalidChunkSize);
        }
        Ok(self.records.chunks(size))
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Record> for AddressBook {
    /// Collect records through [`AddressBook::add_record`], skipping invalid ones.
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            let _ = book.add_record(record);
        }
        book
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .records
            .iter()
            .map(|record| format!("{}: {}", record.name(), record))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Render records as a fixed-width table with a header and separator.
///
/// An empty slice renders the header followed by `labels.empty`.
pub fn render_table(records: &[Record], labels: &TableLabels) -> String {
    let header = format!(
        "{:<NAME_WIDTH$} {:<PHONE_WIDTH$} {:<BIRTHDAY_WIDTH$}",
        labels.name, labels.phone, labels.birthday
    );
    let separator = "-".repeat(header.chars().count());

    let mut lines = vec![header, separator];
    if records.is_empty() {
        lines.push(labels.empty.to_string());
    }
    for record in records {
        let phones = record
            .phones()
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let birthday = record.birthday().map_or("-", Birthday::as_str);
        lines.push(format!(
            "{:<NAME_WIDTH$} {:<PHONE_WIDTH$} {:<BIRTHDAY_WIDTH$}",
            record.name().as_str(),
            phones,
            birthday
        ));
    }
    lines.join("\n")
}
