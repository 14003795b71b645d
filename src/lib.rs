//! Address Book - a console contact manager with validated fields and JSON persistence.
//!
//! Contacts carry a name, any number of Ukrainian mobile numbers and an
//! optional birthday. Every field validates itself on construction, the book
//! gates records on insertion, and the whole book is snapshotted to a
//! pretty-printed JSON file on demand.
//!
//! # Architecture
//!
//! - **domain**: Self-validating field values (name, phone, birthday)
//! - **models**: The contact record and its persisted document shape
//! - **book**: The keyed, ordered address book and its search criteria
//! - **repositories**: Saving and loading the book (JSON file adapter)
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **cli**: Interactive command loop, command table and localized prompts

pub mod book;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

// Re-export commonly used types
pub use book::{AddressBook, SearchCriteria};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{BookError, ConfigError, StorageError};
pub use models::{Record, RecordDocument};
pub use repositories::{AddressBookRepository, JsonFileRepository};
