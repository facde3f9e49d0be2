//! Contact model representing one person in the contact book.

use crate::domain::{
    CityName, ContactKey, EmailAddress, PersonName, PhoneNumber, State, Zipcode,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated contact.
///
/// Every field is a value object that checked its own format, so a
/// `Contact` cannot exist in an invalid state. Contacts are immutable;
/// editing one means building a new value and replacing the old one.
///
/// Equality is structural over all six fields. De-duplication uses
/// [`Contact::key`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    name: PersonName,
    number: PhoneNumber,
    email: EmailAddress,
    zipcode: Zipcode,
    city: CityName,
    state: State,
}

impl Contact {
    /// Assemble a contact from already-validated parts.
    pub fn new(
        name: PersonName,
        number: PhoneNumber,
        email: EmailAddress,
        zipcode: Zipcode,
        city: CityName,
        state: State,
    ) -> Self {
        Self {
            name,
            number,
            email,
            zipcode,
            city,
            state,
        }
    }

    /// The `(name, number)` identity used by the store's duplicate check.
    pub fn key(&self) -> ContactKey<'_> {
        ContactKey::new(self.name.as_str(), self.number.as_str())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn number(&self) -> &str {
        self.number.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn zipcode(&self) -> &str {
        self.zipcode.as_str()
    }

    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    pub fn state(&self) -> &str {
        self.state.as_str()
    }
}

/// A contact is listed by its name.
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
