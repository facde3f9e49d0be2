use crate::domain::ContactKey;
use crate::error::StoreResult;
use crate::models::Contact;

/// Repository for managing contacts.
///
/// Implementations keep their contacts unique by [`Contact::key`] and
/// ordered by name. Positions passed to the index-based operations refer
/// to that name order, so row `i` of [`sorted_view`](Self::sorted_view) is
/// position `i`.
pub trait ContactRepository: Send {
    /// Add a new contact.
    ///
    /// Fails with `StoreError::DuplicateContact` if a contact with the same
    /// name and number is already stored; the store is left unchanged.
    fn insert(&mut self, contact: Contact) -> StoreResult<()>;

    /// Overwrite the contact at `index`.
    ///
    /// The replacement is not checked against the other stored contacts.
    fn replace_at(&mut self, index: usize, contact: Contact) -> StoreResult<()>;

    /// Remove and return the contact at `index`.
    fn remove_at(&mut self, index: usize) -> StoreResult<Contact>;

    /// Retrieve the contact at `index`.
    fn get(&self, index: usize) -> StoreResult<&Contact>;

    /// Whether a contact with this key is stored.
    fn contains_key(&self, key: ContactKey<'_>) -> bool;

    /// All contacts, ascending by name.
    fn sorted_view(&self) -> &[Contact];

    /// Number of stored contacts.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
