//! Command words, aliases and menu rendering.

use super::messages::Locale;

/// Width of the alias and description columns in the menu.
const MENU_COLUMN_WIDTH: usize = 25;

/// Menu entries per row.
const MENU_COLUMNS: usize = 3;

/// One interactive command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    ListAll,
    AddContact,
    RemoveContact,
    Find,
    AddPhone,
    RemovePhone,
    ChangePhone,
    DaysToBirthday,
    Save,
    Load,
    Exit,
}

impl Command {
    /// Every command in menu order. Prefix resolution follows this order.
    pub const ALL: [Command; 11] = [
        Command::ListAll,
        Command::AddContact,
        Command::RemoveContact,
        Command::Find,
        Command::AddPhone,
        Command::RemovePhone,
        Command::ChangePhone,
        Command::DaysToBirthday,
        Command::Save,
        Command::Load,
        Command::Exit,
    ];

    /// Canonical command word.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListAll => "list-all",
            Self::AddContact => "add-contact",
            Self::RemoveContact => "remove-contact",
            Self::Find => "find",
            Self::AddPhone => "add-phone",
            Self::RemovePhone => "remove-phone",
            Self::ChangePhone => "change-phone",
            Self::DaysToBirthday => "days-to-birthday",
            Self::Save => "save",
            Self::Load => "load",
            Self::Exit => "exit",
        }
    }

    /// Short alias shown in the menu.
    pub fn alias(&self) -> &'static str {
        match self {
            Self::ListAll => "all",
            Self::AddContact => "add",
            Self::RemoveContact => "remove",
            Self::Find => "find",
            Self::AddPhone => "add_phone",
            Self::RemovePhone => "remove_phone",
            Self::ChangePhone => "change_phone",
            Self::DaysToBirthday => "when_birthday",
            Self::Save => "save",
            Self::Load => "load",
            Self::Exit => "exit",
        }
    }

    /// Menu description in the given locale.
    pub fn description(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Uk, Self::ListAll) => "Вивести всі контакти",
            (Locale::Uk, Self::AddContact) => "Додати контакт",
            (Locale::Uk, Self::RemoveContact) => "Видалити контакт",
            (Locale::Uk, Self::Find) => "Знайти контакт",
            (Locale::Uk, Self::AddPhone) => "Додати номер телефону",
            (Locale::Uk, Self::RemovePhone) => "Видалити номер телефону",
            (Locale::Uk, Self::ChangePhone) => "Змінити номер телефону",
            (Locale::Uk, Self::DaysToBirthday) => "Дні до дня народження",
            (Locale::Uk, Self::Save) => "Зберегти до файлу",
            (Locale::Uk, Self::Load) => "Завантажити з файлу",
            (Locale::Uk, Self::Exit) => "Вийти",
            (Locale::En, Self::ListAll) => "Show all contacts",
            (Locale::En, Self::AddContact) => "Add a contact",
            (Locale::En, Self::RemoveContact) => "Remove a contact",
            (Locale::En, Self::Find) => "Find contacts",
            (Locale::En, Self::AddPhone) => "Add a phone number",
            (Locale::En, Self::RemovePhone) => "Remove a phone number",
            (Locale::En, Self::ChangePhone) => "Change a phone number",
            (Locale::En, Self::DaysToBirthday) => "Days to birthday",
            (Locale::En, Self::Save) => "Save to file",
            (Locale::En, Self::Load) => "Load from file",
            (Locale::En, Self::Exit) => "Exit",
        }
    }

    /// Resolve the first word of a line to a command.
    ///
    /// Matching is case-insensitive. An exact name or alias wins; otherwise
    /// the first command whose alias, then whose name, starts with the word.
    pub fn parse(line: &str) -> Option<Command> {
        let word = line.split_whitespace().next()?.to_lowercase();

        Self::ALL
            .into_iter()
            .find(|cmd| cmd.name() == word || cmd.alias() == word)
            .or_else(|| Self::ALL.into_iter().find(|cmd| cmd.alias().starts_with(&word)))
            .or_else(|| Self::ALL.into_iter().find(|cmd| cmd.name().starts_with(&word)))
    }
}

/// Render the command menu, three entries per row.
pub fn render_menu(locale: Locale) -> String {
    let mut menu = String::from(match locale {
        Locale::Uk => "Список доступних команд:\n",
        Locale::En => "Available commands:\n",
    });

    for row in Command::ALL.chunks(MENU_COLUMNS) {
        for cmd in row {
            menu.push_str(&format!(
                "{:<MENU_COLUMN_WIDTH$}\t{:<MENU_COLUMN_WIDTH$}",
                cmd.alias(),
                cmd.description(locale)
            ));
        }
        menu.push('\n');
    }
    menu
}
