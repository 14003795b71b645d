mod json_file_repository;
mod traits;

pub use json_file_repository::{JsonFileRepository, DEFAULT_STORE_FILE};
pub use traits::AddressBookRepository;
