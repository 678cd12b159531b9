//! Record model representing one contact in the address book.

use crate::domain::{Field, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a fixed name and an ordered list of phone numbers.
///
/// Phones keep insertion order and may repeat. The name is set once at
/// construction and has no setter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a new record with no phones.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `phone` and append it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` and leaves the list untouched
    /// if the value is not a valid phone.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Absent values are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.value() != phone);
    }

    /// Replace the first phone equal to `old_phone` with `new_phone`.
    ///
    /// When `old_phone` is not on the record nothing changes and no error is
    /// returned; `new_phone` is only validated once a match is found.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if a match exists but
    /// `new_phone` is invalid. The list is left untouched.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> Result<(), ValidationError> {
        if let Some(slot) = self.phones.iter_mut().find(|p| p.value() == old_phone) {
            *slot = Phone::new(new_phone)?;
        }
        Ok(())
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.value() == phone)
    }

    /// Phones joined with `"; "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::value)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )
    }
}
