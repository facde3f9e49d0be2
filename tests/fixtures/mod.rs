//! Shared test fixtures for contact book tests.

#![allow(dead_code)]

use contact_book_server::models::{Contact, ContactForm};
use contact_book_server::validation::validate;

/// A form that passes every validation rule.
pub fn valid_form() -> ContactForm {
    ContactForm {
        name: "Alice".to_string(),
        number: "12345".to_string(),
        email: "a@b.co".to_string(),
        zipcode: "10001".to_string(),
        city: "Pune".to_string(),
        state: Some("Maharashtra".to_string()),
    }
}

/// A valid form with the given name and number.
pub fn form(name: &str, number: &str) -> ContactForm {
    ContactForm {
        name: name.to_string(),
        number: number.to_string(),
        ..valid_form()
    }
}

/// A validated contact with the given name and number.
pub fn contact(name: &str, number: &str) -> Contact {
    validate(&form(name, number)).expect("fixture form should be valid")
}

/// Names in listing order.
pub fn names(contacts: &[Contact]) -> Vec<String> {
    contacts.iter().map(|c| c.name().to_string()).collect()
}
