use crate::book::AddressBook;
use crate::error::StorageResult;

/// Repository for persisting the whole address book.
///
/// Provides abstraction over where the book is kept, enabling different
/// implementations (JSON file, in-memory mock).
pub trait AddressBookRepository {
    /// Replace the stored snapshot with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;

    /// Read the stored snapshot into a new address book.
    fn load(&self) -> StorageResult<AddressBook>;
}
