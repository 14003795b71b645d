//! Data models for the address book.
//!
//! This module contains the contact record and the document shape it takes
//! in the store file.

pub mod document;
pub mod record;

pub use document::RecordDocument;
pub use record::Record;
