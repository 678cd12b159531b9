//! The `Field` shape shared by contact values, and the `Name` value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A labeled string value attached to a contact.
///
/// Every field renders as its raw value, so `Display` is a supertrait.
pub trait Field: fmt::Display {
    /// Get the field value as a string slice.
    fn value(&self) -> &str;
}

/// The name a contact is stored and looked up under.
///
/// # Example
///
/// ```
/// use address_book_bot::domain::{Field, Name};
///
/// let name = Name::new("alice").unwrap();
/// assert_eq!(name.value(), "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, rejecting blank values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the value is empty or only whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl Field for Name {
    fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}
