use contact_book_server::domain::ContactKey;
use contact_book_server::error::StoreResult;
use contact_book_server::models::Contact;
use contact_book_server::repositories::{ContactBook, ContactRepository};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Shared record of which repository methods were called.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct CallLog {
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl CallLog {
    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

/// Mock contact repository for testing.
///
/// Delegates storage to a real `ContactBook` and records every call in a
/// `CallLog` that the test keeps after handing the repository to a service.
#[allow(dead_code)]
pub struct MockContactRepository {
    book: ContactBook,
    calls: CallLog,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create an empty mock and the log it reports to.
    pub fn new() -> (Self, CallLog) {
        let calls = CallLog::default();
        let repo = Self {
            book: ContactBook::new(),
            calls: calls.clone(),
        };
        (repo, calls)
    }

    /// Seed the mock with contacts without recording calls.
    pub fn with_contacts(contacts: Vec<Contact>) -> (Self, CallLog) {
        let (mut repo, calls) = Self::new();
        for contact in contacts {
            repo.book.insert(contact).unwrap();
        }
        (repo, calls)
    }
}

impl ContactRepository for MockContactRepository {
    fn insert(&mut self, contact: Contact) -> StoreResult<()> {
        self.calls.track_call("insert");
        self.book.insert(contact)
    }

    fn replace_at(&mut self, index: usize, contact: Contact) -> StoreResult<()> {
        self.calls.track_call("replace_at");
        self.book.replace_at(index, contact)
    }

    fn remove_at(&mut self, index: usize) -> StoreResult<Contact> {
        self.calls.track_call("remove_at");
        self.book.remove_at(index)
    }

    fn get(&self, index: usize) -> StoreResult<&Contact> {
        self.calls.track_call("get");
        self.book.get(index)
    }

    fn contains_key(&self, key: ContactKey<'_>) -> bool {
        self.calls.track_call("contains_key");
        self.book.contains_key(key)
    }

    fn sorted_view(&self) -> &[Contact] {
        self.calls.track_call("sorted_view");
        self.book.sorted_view()
    }

    fn len(&self) -> usize {
        self.book.len()
    }
}
