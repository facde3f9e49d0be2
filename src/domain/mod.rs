//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact.
//! Each value object validates its input at construction time, so a
//! `Contact` built from them can never hold malformed data.

pub mod contact_key;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;
pub mod state;
pub mod zipcode;

pub use contact_key::ContactKey;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use name::{CityName, PersonName};
pub use phone::PhoneNumber;
pub use state::{State, VALID_STATES};
pub use zipcode::Zipcode;
