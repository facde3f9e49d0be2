//! Contact service layer.
//!
//! Business logic for adding, viewing, editing and deleting contacts: form
//! input is trimmed and validated before it reaches the store, and every
//! outcome is logged and counted.

use crate::error::{ContactBookError, ContactBookResult, StoreError};
use crate::metrics::Metrics;
use crate::models::{Contact, ContactForm};
use crate::repositories::{ContactBook, ContactRepository};
use crate::validation::validate;
use serde::Serialize;

/// One row of the contact listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRow {
    /// Position to pass to view, edit and delete
    pub index: usize,
    pub contact: Contact,
}

/// A page of the name-ordered listing.
#[derive(Debug, Clone, Serialize)]
pub struct ContactListing {
    pub total: usize,
    pub offset: usize,
    pub rows: Vec<ContactRow>,
}

/// Orchestrates validation and storage for the contact book.
pub struct ContactService {
    repository: Box<dyn ContactRepository>,
    metrics: Metrics,
}

impl Default for ContactService {
    fn default() -> Self {
        Self::new(Box::new(ContactBook::new()), Metrics::new())
    }
}

impl ContactService {
    /// Create a new contact service.
    pub fn new(repository: Box<dyn ContactRepository>, metrics: Metrics) -> Self {
        Self {
            repository,
            metrics,
        }
    }

    /// Validate the form and add the resulting contact.
    pub fn add(&mut self, form: &ContactForm) -> ContactBookResult<Contact> {
        let result = self.try_add(form);
        match &result {
            Ok(contact) => {
                self.metrics.record_added();
                tracing::info!(name = %contact.name(), total = self.repository.len(), "Contact added");
            }
            Err(e) => self.reject("add", e),
        }
        result
    }

    fn try_add(&mut self, form: &ContactForm) -> ContactBookResult<Contact> {
        let contact = validate(&form.trimmed())?;
        self.repository.insert(contact.clone())?;
        Ok(contact)
    }

    /// Return the contact at `index`.
    pub fn view(&self, index: usize) -> ContactBookResult<Contact> {
        let result = self
            .repository
            .get(index)
            .cloned()
            .map_err(ContactBookError::from);
        if let Err(e) = &result {
            self.reject("view", e);
        }
        result
    }

    /// Replace the contact at `index` with the validated form.
    ///
    /// The position is checked before the form, so an edit without a valid
    /// selection reports `IndexOutOfRange` whatever the fields hold. The
    /// new contact is not checked for duplicates against the rest of the book.
    pub fn edit(&mut self, index: usize, form: &ContactForm) -> ContactBookResult<Contact> {
        let result = self.try_edit(index, form);
        match &result {
            Ok(contact) => {
                self.metrics.record_updated();
                tracing::info!(index, name = %contact.name(), "Contact updated");
            }
            Err(e) => self.reject("edit", e),
        }
        result
    }

    fn try_edit(&mut self, index: usize, form: &ContactForm) -> ContactBookResult<Contact> {
        self.repository.get(index)?;
        let contact = validate(&form.trimmed())?;
        let key = contact.key();
        let duplicates_other_row = self
            .repository
            .sorted_view()
            .iter()
            .enumerate()
            .any(|(i, c)| i != index && c.key() == key);
        if duplicates_other_row {
            tracing::warn!(key = %contact.key(), "Edit introduces a duplicate name and number");
        }
        self.repository.replace_at(index, contact.clone())?;
        Ok(contact)
    }

    /// Delete the contact at `index`, returning it.
    pub fn delete(&mut self, index: usize) -> ContactBookResult<Contact> {
        let result = self.repository.remove_at(index).map_err(ContactBookError::from);
        match &result {
            Ok(contact) => {
                self.metrics.record_removed();
                tracing::info!(index, name = %contact.name(), "Contact deleted");
            }
            Err(e) => self.reject("delete", e),
        }
        result
    }

    /// A page of the listing, ascending by name.
    pub fn list(&self, limit: usize, offset: usize) -> ContactListing {
        let rows: Vec<ContactRow> = self
            .repository
            .sorted_view()
            .iter()
            .enumerate()
            .skip(offset)
            .take(limit)
            .map(|(index, contact)| ContactRow {
                index,
                contact: contact.clone(),
            })
            .collect();

        tracing::debug!(limit, offset, returned = rows.len(), "Listed contacts");

        ContactListing {
            total: self.repository.len(),
            offset,
            rows,
        }
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.repository.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn reject(&self, operation: &str, error: &ContactBookError) {
        self.metrics.record_error(error);
        match error {
            ContactBookError::Store(StoreError::IndexOutOfRange { .. }) => {
                tracing::debug!(operation, kind = error.kind(), "{}", error)
            }
            _ => tracing::warn!(operation, kind = error.kind(), "{}", error),
        }
    }
}
