//! Prompts and notices in the two supported languages.

use crate::book::TableLabels;
use crate::domain::{FieldKind, ValidationError};
use std::fmt;
use std::str::FromStr;

/// Language of the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Ukrainian
    #[default]
    Uk,
    /// English
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uk" | "ua" => Ok(Self::Uk),
            "en" => Ok(Self::En),
            other => Err(format!("unknown locale: {}", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uk => write!(f, "uk"),
            Self::En => write!(f, "en"),
        }
    }
}

/// Message catalog for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
}

/// Picks the text for the catalog's locale.
macro_rules! text {
    ($self:ident, uk: $uk:expr, en: $en:expr $(,)?) => {
        match $self.locale {
            Locale::Uk => $uk,
            Locale::En => $en,
        }
    };
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn table_labels(&self) -> TableLabels {
        text!(self,
            uk: TableLabels {
                name: "Ім'я",
                phone: "Телефон",
                birthday: "День народження",
                empty: "Адресна книга порожня",
            },
            en: TableLabels::ENGLISH,
        )
    }

    pub fn command_prompt(&self) -> &'static str {
        "Waiting for command..."
    }

    pub fn unknown_command(&self) -> &'static str {
        text!(self,
            uk: "ТАКОЇ КОМАНДИ НЕ МАЄ. СПРОБУЙ ЩЕ РАЗ!",
            en: "NO SUCH COMMAND. TRY AGAIN!",
        )
    }

    pub fn goodbye(&self) -> &'static str {
        "Goodbye!"
    }

    pub fn page(&self, number: usize, total: usize) -> String {
        text!(self,
            uk: format!("Сторінка {} з {}", number, total),
            en: format!("Page {} of {}", number, total),
        )
    }

    pub fn ask_name(&self) -> &'static str {
        text!(self,
            uk: "Введіть ім'я контакту: ",
            en: "Enter the contact name: ",
        )
    }

    pub fn ask_contact_phone(&self) -> &'static str {
        text!(self,
            uk: "Введіть номер телефону контакту (+380________): ",
            en: "Enter the contact phone (+380________): ",
        )
    }

    pub fn ask_contact_birthday(&self) -> &'static str {
        text!(self,
            uk: "Введіть день народження контакту (дд.мм.рррр): ",
            en: "Enter the contact birthday (dd.mm.yyyy): ",
        )
    }

    pub fn contact_added(&self) -> &'static str {
        text!(self,
            uk: "Контакт успішно додано до адресної книги.",
            en: "Contact added to the address book.",
        )
    }

    pub fn contact_invalid(&self) -> &'static str {
        text!(self,
            uk: "Не вдалося додати контакт. Дані не валідні.",
            en: "Could not add the contact. The data is not valid.",
        )
    }

    pub fn field_invalid(&self, reason: &ValidationError) -> String {
        let value = reason.value();
        match (self.locale, reason.kind()) {
            (Locale::Uk, FieldKind::Name) => "Ім'я не валідне.".to_string(),
            (Locale::Uk, FieldKind::Phone) => format!("Номер телефону {} не валідний.", value),
            (Locale::Uk, FieldKind::Birthday) => {
                format!("Дата народження {} не валідна.", value)
            }
            (Locale::En, FieldKind::Name) => "The name is not valid.".to_string(),
            (Locale::En, FieldKind::Phone) => format!("The phone number {} is not valid.", value),
            (Locale::En, FieldKind::Birthday) => format!("The birthday {} is not valid.", value),
        }
    }

    pub fn ask_name_to_remove(&self) -> &'static str {
        text!(self,
            uk: "Введіть ім'я контакту для видалення: ",
            en: "Enter the name of the contact to remove: ",
        )
    }

    pub fn contact_removed(&self, name: &str) -> String {
        text!(self,
            uk: format!("Контакт {} успішно видалено з адресної книги.", name),
            en: format!("Contact {} removed from the address book.", name),
        )
    }

    pub fn contact_not_removed(&self, name: &str) -> String {
        text!(self,
            uk: format!(
                "Контакт {} не знайдено в адресній книзі або ще не додано жодного контакту",
                name
            ),
            en: format!(
                "Contact {} is not in the address book or no contacts were added yet",
                name
            ),
        )
    }

    pub fn contact_not_found(&self, name: &str) -> String {
        text!(self,
            uk: format!("Контакт з ім'ям {} не знайдений в адресній книзі.", name),
            en: format!("No contact named {} in the address book.", name),
        )
    }

    pub fn find_options(&self) -> &'static str {
        text!(self,
            uk: "За якими критеріями ви хочете здійснити пошук? \n 1. Шукати за ім'ям \n 2. Шукати за номером телефону",
            en: "Which criterion do you want to search by? \n 1. Search by name \n 2. Search by phone number",
        )
    }

    pub fn ask_find_option(&self) -> &'static str {
        text!(self,
            uk: "Виберіть опцію (1 або 2): ",
            en: "Choose an option (1 or 2): ",
        )
    }

    pub fn ask_search_name(&self) -> &'static str {
        text!(self,
            uk: "Введіть ім'я для пошуку (мінімум 2 символи): ",
            en: "Enter a name to search for (at least 2 characters): ",
        )
    }

    pub fn ask_search_phone(&self) -> &'static str {
        text!(self,
            uk: "Введіть частину номеру телефону для пошуку (мінімум 5 символів): ",
            en: "Enter part of a phone number to search for (at least 5 characters): ",
        )
    }

    pub fn search_name_too_short(&self) -> &'static str {
        text!(self,
            uk: "Ви ввели замало символів для імені. Пошук за іменем скасовано.",
            en: "Too few characters for a name. Name search cancelled.",
        )
    }

    pub fn search_phone_too_short(&self) -> &'static str {
        text!(self,
            uk: "Ви ввели замало символів для телефону. Пошук за номером телефону скасовано.",
            en: "Too few characters for a phone. Phone search cancelled.",
        )
    }

    pub fn invalid_find_option(&self) -> &'static str {
        text!(self,
            uk: "Невірний вибір опції. Введіть 1 або 2.",
            en: "Invalid option. Enter 1 or 2.",
        )
    }

    pub fn found_one(&self) -> &'static str {
        text!(self,
            uk: "Знайдений контакт:",
            en: "Contact found:",
        )
    }

    pub fn found_many(&self) -> &'static str {
        text!(self,
            uk: "Контакти знайдені:",
            en: "Contacts found:",
        )
    }

    pub fn nothing_found(&self) -> &'static str {
        text!(self,
            uk: "Немає контакту, що відповідає заданим критеріям пошуку",
            en: "No contact matches the search criteria",
        )
    }

    pub fn ask_new_phone(&self) -> &'static str {
        text!(self,
            uk: "Введіть новий номер телефону: ",
            en: "Enter the new phone number: ",
        )
    }

    pub fn phone_added(&self) -> &'static str {
        text!(self,
            uk: "Номер телефону успішно додано.",
            en: "Phone number added.",
        )
    }

    pub fn phone_invalid(&self) -> &'static str {
        text!(self,
            uk: "Не вдалося додати номер телефону. Номер не валідний.",
            en: "Could not add the phone number. The number is not valid.",
        )
    }

    pub fn ask_phone_to_remove(&self) -> &'static str {
        text!(self,
            uk: "Введіть номер телефону для видалення: ",
            en: "Enter the phone number to remove: ",
        )
    }

    pub fn phone_removed(&self) -> &'static str {
        text!(self,
            uk: "Номер телефону успішно видалено.",
            en: "Phone number removed.",
        )
    }

    pub fn phone_not_found(&self) -> &'static str {
        text!(self,
            uk: "Не вдалося видалити номер телефону. Номер не знайдений.",
            en: "Could not remove the phone number. The number was not found.",
        )
    }

    pub fn ask_old_phone(&self) -> &'static str {
        text!(self,
            uk: "Введіть старий номер телефону: ",
            en: "Enter the old phone number: ",
        )
    }

    pub fn phone_changed(&self) -> &'static str {
        text!(self,
            uk: "Номер телефону успішно змінено.",
            en: "Phone number changed.",
        )
    }

    pub fn old_phone_missing(&self) -> &'static str {
        text!(self,
            uk: "Не вдалося змінити номер телефону. Старий номер не знайдений.",
            en: "Could not change the phone number. The old number was not found.",
        )
    }

    pub fn new_phone_invalid(&self) -> &'static str {
        text!(self,
            uk: "Не вдалося змінити номер телефону. Новий номер не валідний.",
            en: "Could not change the phone number. The new number is not valid.",
        )
    }

    pub fn days_to_birthday(&self, days: i64) -> String {
        text!(self,
            uk: format!("До дня народження залишилося {} днів.", days),
            en: format!("{} days left until the birthday.", days),
        )
    }

    pub fn no_birthday(&self) -> &'static str {
        text!(self,
            uk: "Дату народження для цього контакту не вказано.",
            en: "This contact has no birthday set.",
        )
    }

    pub fn saved(&self) -> &'static str {
        text!(self,
            uk: "Адресну книгу збережено у файл.",
            en: "Address book saved to file.",
        )
    }

    pub fn save_failed(&self, reason: &str) -> String {
        text!(self,
            uk: format!("Не вдалося зберегти адресну книгу: {}", reason),
            en: format!("Could not save the address book: {}", reason),
        )
    }

    pub fn loaded(&self) -> &'static str {
        text!(self,
            uk: "Адресну книгу завантажено з файлу.",
            en: "Address book loaded from file.",
        )
    }

    pub fn load_failed(&self, reason: &str) -> String {
        text!(self,
            uk: format!("Не вдалося завантажити адресну книгу з файлу: {}", reason),
            en: format!("Could not load the address book from file: {}", reason),
        )
    }
}
