//! In-memory contact store.

use super::ContactRepository;
use crate::domain::ContactKey;
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;

/// An insertion-ordered list of unique contacts, re-sorted by name after
/// every successful mutation.
///
/// The sort is stable: contacts that share a name keep the relative order
/// they had before the mutation.
#[derive(Debug, Clone, Default)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    /// Create an empty contact book.
    pub fn new() -> Self {
        Self::default()
    }

    fn sort(&mut self) {
        self.contacts.sort_by(|a, b| a.name().cmp(b.name()));
    }

    fn check_index(&self, index: usize) -> StoreResult<()> {
        if index >= self.contacts.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.contacts.len(),
            });
        }
        Ok(())
    }
}

impl ContactRepository for ContactBook {
    fn insert(&mut self, contact: Contact) -> StoreResult<()> {
        if self.contains_key(contact.key()) {
            return Err(StoreError::DuplicateContact(contact.key().to_string()));
        }
        self.contacts.push(contact);
        self.sort();
        Ok(())
    }

    fn replace_at(&mut self, index: usize, contact: Contact) -> StoreResult<()> {
        self.check_index(index)?;
        self.contacts[index] = contact;
        self.sort();
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> StoreResult<Contact> {
        self.check_index(index)?;
        // Removal keeps the remaining contacts sorted.
        Ok(self.contacts.remove(index))
    }

    fn get(&self, index: usize) -> StoreResult<&Contact> {
        self.contacts.get(index).ok_or(StoreError::IndexOutOfRange {
            index,
            len: self.contacts.len(),
        })
    }

    fn contains_key(&self, key: ContactKey<'_>) -> bool {
        self.contacts.iter().any(|c| c.key() == key)
    }

    fn sorted_view(&self) -> &[Contact] {
        &self.contacts
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}
