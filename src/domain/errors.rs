//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating contact fields.
///
/// Variants are listed in the order the validator checks them; the first
/// failing rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty, or no state was selected.
    MissingField(&'static str),

    /// The name contains something other than letters and whitespace.
    InvalidName(String),

    /// The city contains something other than letters and whitespace.
    InvalidCity(String),

    /// The state is not one of the known states.
    InvalidState(String),

    /// The email address is malformed.
    InvalidEmail(String),

    /// The phone number is not made of digits only.
    InvalidPhone(String),

    /// The zipcode is not made of digits only.
    InvalidZip(String),
}

impl ValidationError {
    /// Stable machine-readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MissingField",
            Self::InvalidName(_) => "InvalidName",
            Self::InvalidCity(_) => "InvalidCity",
            Self::InvalidState(_) => "InvalidState",
            Self::InvalidEmail(_) => "InvalidEmail",
            Self::InvalidPhone(_) => "InvalidPhone",
            Self::InvalidZip(_) => "InvalidZip",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => {
                write!(f, "All fields must be filled out (missing: {})", field)
            }
            Self::InvalidName(name) => {
                write!(f, "Name can only contain letters and spaces: {}", name)
            }
            Self::InvalidCity(city) => {
                write!(f, "City can only contain letters and spaces: {}", city)
            }
            Self::InvalidState(state) => write!(f, "Invalid state selected: {}", state),
            Self::InvalidEmail(email) => write!(f, "Invalid email format: {}", email),
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number must contain only digits: {}", phone)
            }
            Self::InvalidZip(zip) => write!(f, "Zipcode must contain only digits: {}", zip),
        }
    }
}

impl std::error::Error for ValidationError {}
