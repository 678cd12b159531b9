//! In-memory address book keyed by contact name.

use crate::domain::Field;
use crate::models::Record;
use indexmap::IndexMap;

/// The collection of records for one session.
///
/// Records are keyed by their name and iterate in insertion order. The map
/// itself is never handed out, so a record is always stored under its own
/// name.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    contacts: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, replacing any record already there.
    ///
    /// A replaced record keeps its original position.
    pub fn add_record(&mut self, record: Record) {
        self.contacts
            .insert(record.name().value().to_string(), record);
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.contacts.get(name)
    }

    /// Look up a record by exact name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.contacts.get_mut(name)
    }

    /// Return the first record, in insertion order, holding `phone`.
    pub fn find_by_phone(&self, phone: &str) -> Option<&Record> {
        self.contacts
            .values()
            .find(|record| record.find_phone(phone).is_some())
    }

    /// Remove the record for `name`. Missing names are ignored.
    pub fn delete(&mut self, name: &str) {
        self.contacts.shift_remove(name);
    }

    /// All records in insertion order.
    pub fn all_records(&self) -> impl Iterator<Item = &Record> {
        self.contacts.values()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Name;

    fn sample_record(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(Name::new(name).unwrap());
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    fn names(book: &AddressBook) -> Vec<String> {
        book.all_records()
            .map(|r| r.name().value().to_string())
            .collect()
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(sample_record("alice", &["1234567890"]));

        let found = book.find("alice").unwrap();
        assert_eq!(found.to_string(), "Contact name: alice, phones: 1234567890");
        assert!(book.find("Alice").is_none());
    }

    #[test]
    fn test_add_record_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add_record(sample_record("alice", &["1111111111"]));
        book.add_record(sample_record("bob", &["2222222222"]));
        book.add_record(sample_record("alice", &["3333333333"]));

        assert_eq!(book.len(), 2);
        assert_eq!(names(&book), vec!["alice", "bob"]);
        assert_eq!(book.find("alice").unwrap().phones_display(), "3333333333");
    }

    #[test]
    fn test_find_by_phone_returns_first_match() {
        let mut book = AddressBook::new();
        book.add_record(sample_record("alice", &["1111111111", "2222222222"]));
        book.add_record(sample_record("bob", &["2222222222"]));

        let found = book.find_by_phone("2222222222").unwrap();
        assert_eq!(found.name().value(), "alice");

        let found = book.find_by_phone("1111111111").unwrap();
        assert_eq!(found, book.find("alice").unwrap());

        assert!(book.find_by_phone("9999999999").is_none());
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(sample_record("alice", &[]));
        book.add_record(sample_record("bob", &[]));
        book.add_record(sample_record("carol", &[]));

        book.delete("bob");
        assert_eq!(names(&book), vec!["alice", "carol"]);

        // Deleting a missing name is silent
        book.delete("nobody");
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(sample_record("alice", &["1111111111"]));

        book.find_mut("alice")
            .unwrap()
            .edit_phone("1111111111", "2222222222")
            .unwrap();

        assert!(book.find_by_phone("1111111111").is_none());
        assert_eq!(book.find_by_phone("2222222222").unwrap().name().value(), "alice");
    }

    #[test]
    fn test_empty_book() {
        let book = AddressBook::new();
        assert!(book.is_empty());
        assert_eq!(book.all_records().count(), 0);
    }
}
