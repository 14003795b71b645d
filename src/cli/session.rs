//! The interactive command loop.

use super::commands::{render_menu, Command};
use super::messages::Messages;
use crate::book::{render_table, AddressBook, SearchCriteria};
use crate::config::Config;
use crate::domain::ValidationError;
use crate::error::BookError;
use crate::models::Record;
use crate::repositories::AddressBookRepository;
use std::io::{self, BufRead, Write};
use tracing::{debug, error};

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One interactive session over a line-oriented input and an output.
///
/// The session owns the address book. `save` and `load` go through the
/// repository; a failed load keeps the current book.
pub struct Session<R, W> {
    book: AddressBook,
    repository: Box<dyn AddressBookRepository>,
    messages: Messages,
    page_size: usize,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session starting with an empty book.
    pub fn new(
        repository: Box<dyn AddressBookRepository>,
        config: &Config,
        input: R,
        output: W,
    ) -> Self {
        Self {
            book: AddressBook::new(),
            repository,
            messages: Messages::new(config.locale),
            page_size: config.page_size.max(1),
            input,
            output,
        }
    }

    /// Start from an existing book instead of an empty one.
    pub fn with_book(mut self, book: AddressBook) -> Self {
        self.book = book;
        self
    }

    /// The current address book.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Finish the session, returning the book and the output sink.
    pub fn into_parts(self) -> (AddressBook, W) {
        (self.book, self.output)
    }

    /// Run commands until `exit` or the end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let menu = render_menu(self.messages.locale());
        writeln!(self.output, "{}", menu)?;

        loop {
            let prompt = self.messages.command_prompt();
            let Some(line) = self.ask(prompt)? else {
                debug!("Input closed, ending session");
                break;
            };

            let flow = match Command::parse(&line) {
                Some(command) => {
                    debug!(command = command.name(), "Running command");
                    self.dispatch(command)?
                }
                None => {
                    let notice = self.messages.unknown_command();
                    let menu = render_menu(self.messages.locale());
                    writeln!(self.output, "{} \n{}", notice, menu)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }
        self.output.flush()
    }

    fn dispatch(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::ListAll => self.list_all()?,
            Command::AddContact => self.add_contact()?,
            Command::RemoveContact => self.remove_contact()?,
            Command::Find => self.find()?,
            Command::AddPhone => self.add_phone()?,
            Command::RemovePhone => self.remove_phone()?,
            Command::ChangePhone => self.change_phone()?,
            Command::DaysToBirthday => self.days_to_birthday()?,
            Command::Save => self.save()?,
            Command::Load => self.load()?,
            Command::Exit => {
                writeln!(self.output, "{}", self.messages.goodbye())?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Print a prompt and read one trimmed line; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Read an answer, treating end of input as a blank answer.
    fn answer(&mut self, prompt: &str) -> io::Result<String> {
        Ok(self.ask(prompt)?.unwrap_or_default())
    }

    /// Read a contact name; names are stored lowercased.
    fn ask_contact_name(&mut self, prompt: &str) -> io::Result<String> {
        Ok(self.answer(prompt)?.to_lowercase())
    }

    fn table(&self) -> String {
        render_table(self.book.records(), &self.messages.table_labels())
    }

    fn print_with_table(&mut self, notice: &str) -> io::Result<()> {
        let table = self.table();
        writeln!(self.output, "{} \n{}", notice, table)
    }

    fn list_all(&mut self) -> io::Result<()> {
        let labels = self.messages.table_labels();
        if self.book.len() <= self.page_size {
            let table = self.table();
            return writeln!(self.output, "{}", table);
        }

        let total = self.book.len().div_ceil(self.page_size);
        let chunks = self
            .book
            .iter_chunks(self.page_size)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        for (number, chunk) in chunks.enumerate() {
            writeln!(self.output, "{}", self.messages.page(number + 1, total))?;
            writeln!(self.output, "{}", render_table(chunk, &labels))?;
        }
        Ok(())
    }

    fn add_contact(&mut self) -> io::Result<()> {
        let name = self.ask_contact_name(self.messages.ask_name())?;
        let phone = self.answer(self.messages.ask_contact_phone())?;
        let birthday = self.answer(self.messages.ask_contact_birthday())?;

        let record = match Record::with_fields(
            &name,
            Some(phone.as_str()).filter(|p| !p.is_empty()),
            Some(birthday.as_str()).filter(|b| !b.is_empty()),
        ) {
            Ok(record) => record,
            Err(reason) => return self.report_invalid(&[reason]),
        };

        match self.book.add_record(record) {
            Ok(()) => self.print_with_table(self.messages.contact_added()),
            Err(BookError::InvalidRecord { reasons, .. }) => self.report_invalid(&reasons),
            Err(other) => {
                error!(error = %other, "Unexpected failure adding contact");
                self.report_invalid(&[])
            }
        }
    }

    fn report_invalid(&mut self, reasons: &[ValidationError]) -> io::Result<()> {
        for reason in reasons {
            writeln!(self.output, "{}", self.messages.field_invalid(reason))?;
        }
        writeln!(self.output, "{}", self.messages.contact_invalid())
    }

    fn remove_contact(&mut self) -> io::Result<()> {
        let name = self.ask_contact_name(self.messages.ask_name_to_remove())?;
        match self.book.remove_record(&name) {
            Ok(_) => {
                let notice = self.messages.contact_removed(&name);
                self.print_with_table(&notice)
            }
            Err(_) => writeln!(self.output, "{}", self.messages.contact_not_removed(&name)),
        }
    }

    fn find(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", self.messages.find_options())?;
        let option = self.answer(self.messages.ask_find_option())?;

        let (criteria, too_short) = match option.as_str() {
            "1" => {
                let name = self.ask_contact_name(self.messages.ask_search_name())?;
                (SearchCriteria::by_name(name), self.messages.search_name_too_short())
            }
            "2" => {
                let phone = self.answer(self.messages.ask_search_phone())?;
                (SearchCriteria::by_phone(phone), self.messages.search_phone_too_short())
            }
            _ => return writeln!(self.output, "{}", self.messages.invalid_find_option()),
        };

        if !criteria.is_usable() {
            return writeln!(self.output, "{}", too_short);
        }

        let found = self.book.find_records(&criteria);
        match found.as_slice() {
            [] => writeln!(self.output, "{}", self.messages.nothing_found()),
            [record] => writeln!(self.output, "{} {}", self.messages.found_one(), record),
            records => {
                writeln!(self.output, "{}", self.messages.found_many())?;
                for record in records {
                    writeln!(self.output, "{}", record)?;
                }
                Ok(())
            }
        }
    }

    /// Ask for a contact name and confirm it exists.
    fn ask_existing_contact(&mut self) -> io::Result<Option<String>> {
        let name = self.ask_contact_name(self.messages.ask_name())?;
        if self.book.contains(&name) {
            Ok(Some(name))
        } else {
            writeln!(self.output, "{}", self.messages.contact_not_found(&name))?;
            Ok(None)
        }
    }

    fn add_phone(&mut self) -> io::Result<()> {
        let Some(name) = self.ask_existing_contact()? else {
            return Ok(());
        };
        let phone = self.answer(self.messages.ask_new_phone())?;

        let added = self
            .book
            .get_record_by_name_mut(&name)
            .map(|record| record.add_phone_number(&phone));
        match added {
            Some(Ok(())) => self.print_with_table(self.messages.phone_added()),
            _ => writeln!(self.output, "{}", self.messages.phone_invalid()),
        }
    }

    fn remove_phone(&mut self) -> io::Result<()> {
        let Some(name) = self.ask_existing_contact()? else {
            return Ok(());
        };
        let phone = self.answer(self.messages.ask_phone_to_remove())?;

        let removed = self
            .book
            .get_record_by_name_mut(&name)
            .is_some_and(|record| record.remove_phone_number(&phone));
        if removed {
            self.print_with_table(self.messages.phone_removed())
        } else {
            writeln!(self.output, "{}", self.messages.phone_not_found())
        }
    }

    fn change_phone(&mut self) -> io::Result<()> {
        let Some(name) = self.ask_existing_contact()? else {
            return Ok(());
        };
        let old = self.answer(self.messages.ask_old_phone())?;
        let new = self.answer(self.messages.ask_new_phone())?;

        let changed = self
            .book
            .get_record_by_name_mut(&name)
            .map(|record| record.change_phone_number(&old, &new));
        match changed {
            Some(Ok(())) => self.print_with_table(self.messages.phone_changed()),
            Some(Err(BookError::Validation(_))) => {
                writeln!(self.output, "{}", self.messages.new_phone_invalid())
            }
            _ => writeln!(self.output, "{}", self.messages.old_phone_missing()),
        }
    }

    fn days_to_birthday(&mut self) -> io::Result<()> {
        let Some(name) = self.ask_existing_contact()? else {
            return Ok(());
        };

        let days = self
            .book
            .get_record_by_name(&name)
            .and_then(Record::days_to_birthday);
        match days {
            Some(days) => writeln!(self.output, "{}", self.messages.days_to_birthday(days)),
            None => writeln!(self.output, "{}", self.messages.no_birthday()),
        }
    }

    fn save(&mut self) -> io::Result<()> {
        match self.repository.save(&self.book) {
            Ok(()) => writeln!(self.output, "{}", self.messages.saved()),
            Err(e) => {
                error!(error = %e, "Failed to save address book");
                writeln!(self.output, "{}", self.messages.save_failed(&e.to_string()))
            }
        }
    }

    fn load(&mut self) -> io::Result<()> {
        match self.repository.load() {
            Ok(book) => {
                self.book = book;
                writeln!(self.output, "{}", self.messages.loaded())
            }
            Err(e) => {
                error!(error = %e, "Failed to load address book");
                writeln!(self.output, "{}", self.messages.load_failed(&e.to_string()))
            }
        }
    }
}
