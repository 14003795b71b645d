use crate::book::AddressBook;
use crate::error::{StorageError, StorageResult};
use crate::models::{Record, RecordDocument};
use crate::repositories::traits::AddressBookRepository;
use serde::de::{MapAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default store file name, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "address_book.json";

/// Address book repository backed by a pretty-printed JSON file.
///
/// The file holds one object keyed by contact name:
///
/// ```json
/// {
///     "oleg": {
///         "name": "oleg",
///         "phones": ["+380501234567"],
///         "birthday": "05.06.1990"
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the store file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_STORE_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Serialize the book with four-space indentation.
    fn encode(book: &AddressBook) -> StorageResult<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        BookDocument(book).serialize(&mut serializer)?;
        Ok(buf)
    }

    /// Parse file contents into records, in file order.
    fn decode(contents: &str) -> StorageResult<Vec<Record>> {
        let entries: OrderedEntries = serde_json::from_str(contents)?;
        let records = entries
            .0
            .into_iter()
            .filter_map(|(key, value)| RecordDocument::from_stored(&key, value))
            .map(Record::from)
            .collect();
        Ok(records)
    }
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

impl AddressBookRepository for JsonFileRepository {
    /// Write to a sibling temp file, sync it, then rename over the target.
    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let bytes = Self::encode(book)?;
        let temp_path = self.temp_path();

        let written = write_synced(&temp_path, &bytes)
            .and_then(|()| fs::rename(&temp_path, &self.path).map_err(io_error(&self.path)));
        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                debug!(path = %temp_path.display(), error = %cleanup, "Temp file not removed");
            }
            return Err(e);
        }

        info!(path = %self.path.display(), records = book.len(), "Address book saved");
        Ok(())
    }

    /// Load the book, bootstrapping an empty store on first run.
    ///
    /// - Missing file: created as `{}`, empty book returned
    /// - Empty or whitespace-only file: empty book returned
    /// - Malformed JSON: `StorageError::Parse`
    fn load(&self) -> StorageResult<AddressBook> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "Store file not found, creating an empty one");
            fs::write(&self.path, "{}").map_err(io_error(&self.path))?;
            return Ok(AddressBook::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(io_error(&self.path))?;
        if contents.trim().is_empty() {
            debug!(path = %self.path.display(), "Store file is empty");
            return Ok(AddressBook::new());
        }

        let records = Self::decode(&contents)?;
        let mut book = AddressBook::new();
        for record in records {
            if let Err(e) = book.add_record(record) {
                warn!(error = %e, "Skipping stored contact");
            }
        }

        info!(path = %self.path.display(), records = book.len(), "Address book loaded");
        Ok(book)
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> StorageResult<()> {
    let mut file = File::create(path).map_err(io_error(path))?;
    file.write_all(bytes).map_err(io_error(path))?;
    file.sync_all().map_err(io_error(path))
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError {
    let path = path.to_path_buf();
    move |source| StorageError::Io { path, source }
}

/// Serializes a book as a name-keyed object, preserving book order.
struct BookDocument<'a>(&'a AddressBook);

impl Serialize for BookDocument<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(
            self.0
                .iter()
                .map(|record| (record.name().to_string(), RecordDocument::from(record))),
        )
    }
}

/// Top-level object entries in the order they appear in the file.
struct OrderedEntries(Vec<(String, serde_json::Value)>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object of contacts keyed by name")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, serde_json::Value>()? {
                    entries.push(entry);
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}
