//! Interactive console front end.
//!
//! - **commands**: command words, aliases and the menu
//! - **messages**: prompts and notices per locale
//! - **session**: the read-dispatch loop over any `BufRead`/`Write` pair

pub mod commands;
pub mod messages;
pub mod session;

pub use commands::{render_menu, Command};
pub use messages::{Locale, Messages};
pub use session::Session;
