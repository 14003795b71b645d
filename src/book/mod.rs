//! The address book and its search criteria.

pub mod address_book;
pub mod criteria;

pub use address_book::{render_table, AddressBook, TableLabels, EMPTY_BOOK_NOTICE};
pub use criteria::{SearchCriteria, MIN_NAME_QUERY_LEN, MIN_PHONE_QUERY_LEN};
