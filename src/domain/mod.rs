//! Domain value objects and types.
//!
//! Each contact field is a value object that validates itself at
//! construction time, so an invalid name, phone or birthday can never be
//! held by a record.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::{Field, FieldKind};
pub use name::Name;
pub use phone::Phone;
