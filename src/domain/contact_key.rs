//! Identity key used for contact de-duplication.

use std::fmt;

/// The `(name, number)` pair that identifies a contact.
///
/// Two contacts with the same key are the same person for the purposes of
/// the contact book, even if their email, zipcode, city or state differ.
/// The key is extracted explicitly rather than baked into `Contact`'s
/// equality, so comparing two `Contact` values stays structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactKey<'a> {
    pub name: &'a str,
    pub number: &'a str,
}

impl<'a> ContactKey<'a> {
    pub fn new(name: &'a str, number: &'a str) -> Self {
        Self { name, number }
    }
}

impl fmt::Display for ContactKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.number)
    }
}
