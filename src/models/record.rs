//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Field, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use tracing::{debug, warn};

/// One contact: a name, an ordered list of phones and an optional birthday.
///
/// Phones may repeat; there is no implicit uniqueness. Every stored phone
/// and birthday already passed its own validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
    /// Values dropped while building the record from raw input.
    rejected: Vec<ValidationError>,
}

impl Record {
    /// Create a record with just a name.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
            rejected: Vec::new(),
        }
    }

    /// Reassemble a record from already validated parts.
    pub(crate) fn from_parts(name: Name, phones: Vec<Phone>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones,
            birthday,
            rejected: Vec::new(),
        }
    }

    /// Build a record from raw input.
    ///
    /// The name is required. A phone or birthday that fails validation is
    /// dropped with a warning and remembered in [`Record::rejected`], which
    /// makes the address book refuse the record.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is blank.
    pub fn with_fields(
        name: &str,
        phone: Option<&str>,
        birthday: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let mut record = Self::new(Name::parse(name)?);

        if let Some(raw) = phone {
            match Phone::parse(raw) {
                Ok(phone) => record.phones.push(phone),
                Err(e) => record.reject(e),
            }
        }

        if let Some(raw) = birthday {
            match Birthday::parse(raw) {
                Ok(birthday) => record.birthday = Some(birthday),
                Err(e) => record.reject(e),
            }
        }

        Ok(record)
    }

    fn reject(&mut self, error: ValidationError) {
        warn!(
            field = %error.kind(),
            contact = %self.name,
            error = %error,
            "Value rejected, field left unset"
        );
        self.rejected.push(error);
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The birthday, if one is set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Values that were dropped by [`Record::with_fields`].
    pub fn rejected(&self) -> &[ValidationError] {
        &self.rejected
    }

    /// Check whether the record may enter an address book.
    ///
    /// # Errors
    ///
    /// Returns every value that was dropped while building the record.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        if self.rejected.is_empty() {
            Ok(())
        } else {
            Err(self.rejected.clone())
        }
    }

    /// Append a phone if the number is valid.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` and leaves the record untouched.
    pub fn add_phone_number(&mut self, number: &str) -> Result<(), ValidationError> {
        let phone = Phone::parse(number)?;
        debug!(contact = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `number`.
    ///
    /// Returns `false` if no phone matched.
    pub fn remove_phone_number(&mut self, number: &str) -> bool {
        let before = self.phones.len();
        self.phones.retain(|phone| phone.as_str() != number);
        let removed = before - self.phones.len();
        if removed > 0 {
            debug!(contact = %self.name, phone = %number, removed, "Phone removed");
        }
        removed > 0
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// An invalid replacement is a no-op, not a blank phone.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if `old` is not among the phones
    /// - `BookError::Validation` if `new` is not a valid phone
    pub fn change_phone_number(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;

        self.phones[index] = Phone::parse(new)?;
        debug!(contact = %self.name, old = %old, new = %new, "Phone changed");
        Ok(())
    }

    /// Replace the birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` and keeps the previous value.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Days from today until the next birthday, or `None` without a birthday.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday.
    ///
    /// The birthday is placed in the current year. If that date is today or
    /// already passed, the distance is shifted forward by the length of the
    /// *next* calendar year (366 when it is a leap year, 365 otherwise), so a
    /// birthday today yields a full year rather than zero.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;
        let this_year = birthday.in_year(today.year());
        let days = (this_year - today).num_days();

        if this_year <= today {
            Some(days + days_in_year(today.year() + 1))
        } else {
            Some(days)
        }
    }
}

fn days_in_year(year: i32) -> i64 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            "None".to_string()
        } else {
            self.phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let birthday = self.birthday.as_ref().map_or("None", Birthday::as_str);

        write!(
            f,
            "Name: {}, Phones: {}, Birthday: {}",
            self.name, phones, birthday
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn with_birthday(raw: &str) -> Record {
        Record::with_fields("oleg", None, Some(raw)).unwrap()
    }

    #[test]
    fn test_with_fields_all_valid() {
        let record =
            Record::with_fields("oleg", Some("+380501234567"), Some("05.06.1990")).unwrap();
        assert_eq!(record.name().as_str(), "oleg");
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.birthday().unwrap().as_str(), "05.06.1990");
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_with_fields_requires_name() {
        assert_eq!(
            Record::with_fields("", Some("+380501234567"), None),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_with_fields_drops_invalid_values() {
        let record = Record::with_fields("oleg", Some("12345"), Some("31.02.1990")).unwrap();
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
        assert_eq!(
            record.validate(),
            Err(vec![
                ValidationError::InvalidPhone("12345".to_string()),
                ValidationError::InvalidBirthday("31.02.1990".to_string()),
            ])
        );
    }

    #[test]
    fn test_add_phone_number() {
        let mut record = Record::with_fields("oleg", None, None).unwrap();
        assert!(record.add_phone_number("+380501234567").is_ok());
        assert!(record.add_phone_number("+380501234567").is_ok());
        assert!(record.add_phone_number("bogus").is_err());
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_remove_phone_number_removes_all_equal() {
        let mut record = Record::with_fields("oleg", Some("+380501234567"), None).unwrap();
        record.add_phone_number("+380671112233").unwrap();
        record.add_phone_number("+380501234567").unwrap();

        assert!(record.remove_phone_number("+380501234567"));
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "+380671112233");
        assert!(!record.remove_phone_number("+380501234567"));
    }

    #[test]
    fn test_change_phone_number() {
        let mut record = Record::with_fields("oleg", Some("+380501234567"), None).unwrap();
        record.add_phone_number("+380671112233").unwrap();

        record
            .change_phone_number("+380501234567", "+380931234567")
            .unwrap();
        assert_eq!(record.phones()[0].as_str(), "+380931234567");
        assert_eq!(record.phones()[1].as_str(), "+380671112233");
    }

    #[test]
    fn test_change_phone_number_missing_old() {
        let mut record = Record::with_fields("oleg", Some("+380501234567"), None).unwrap();
        assert_eq!(
            record.change_phone_number("+380000000000", "+380931234567"),
            Err(BookError::PhoneNotFound("+380000000000".to_string()))
        );
    }

    #[test]
    fn test_change_phone_number_invalid_new_is_noop() {
        let mut record = Record::with_fields("oleg", Some("+380501234567"), None).unwrap();
        let result = record.change_phone_number("+380501234567", "oops");
        assert!(matches!(result, Err(BookError::Validation(_))));
        assert_eq!(record.phones()[0].as_str(), "+380501234567");
    }

    #[test]
    fn test_days_to_birthday_without_birthday() {
        let record = Record::with_fields("oleg", None, None).unwrap();
        assert_eq!(record.days_to_birthday_from(date(1, 1, 2024)), None);
        assert_eq!(record.days_to_birthday(), None);
    }

    #[test]
    fn test_days_to_birthday_later_this_year() {
        let record = with_birthday("05.06.1990");
        assert_eq!(record.days_to_birthday_from(date(1, 6, 2023)), Some(4));
    }

    #[test]
    fn test_days_to_birthday_adds_next_year_length() {
        // 2024 is a leap year, so the wrap adds 366
        let record = with_birthday("01.01.1990");
        assert_eq!(record.days_to_birthday_from(date(31, 12, 2023)), Some(2));

        // 2023 is not, so the wrap adds 365
        assert_eq!(record.days_to_birthday_from(date(31, 12, 2022)), Some(1));
    }

    #[test]
    fn test_days_to_birthday_today_is_a_full_year() {
        let record = with_birthday("05.06.1990");
        assert_eq!(record.days_to_birthday_from(date(5, 6, 2023)), Some(366));
        assert_eq!(record.days_to_birthday_from(date(5, 6, 2021)), Some(365));
    }

    #[test]
    fn test_days_to_birthday_leap_day() {
        let record = with_birthday("29.02.2000");
        assert_eq!(record.days_to_birthday_from(date(1, 2, 2023)), Some(27));
        assert_eq!(record.days_to_birthday_from(date(1, 2, 2024)), Some(28));
    }

    #[test]
    fn test_display() {
        let record =
            Record::with_fields("oleg", Some("+380501234567"), Some("05.06.1990")).unwrap();
        assert_eq!(
            record.to_string(),
            "Name: oleg, Phones: +380501234567, Birthday: 05.06.1990"
        );

        let mut record = Record::with_fields("anna", None, None).unwrap();
        assert_eq!(record.to_string(), "Name: anna, Phones: None, Birthday: None");

        record.add_phone_number("+380501234567").unwrap();
        record.add_phone_number("+380671112233").unwrap();
        assert_eq!(
            record.to_string(),
            "Name: anna, Phones: +380501234567, +380671112233, Birthday: None"
        );
    }

    #[test]
    fn test_set_birthday_keeps_previous_on_error() {
        let mut record = with_birthday("05.06.1990");
        assert_eq!(
            record.set_birthday("31.02.1990"),
            Err(ValidationError::InvalidBirthday("31.02.1990".to_string()))
        );
        assert_eq!(record.birthday().unwrap().as_str(), "05.06.1990");

        record.set_birthday("01.01.2000").unwrap();
        assert_eq!(record.birthday().unwrap().as_str(), "01.01.2000");
    }
}
