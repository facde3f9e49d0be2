//! Contact validation.
//!
//! Checks a [`ContactForm`] against the field rules and builds a [`Contact`]
//! on success. Rules run in a fixed order and the first failure wins:
//!
//! 1. every field is filled in and a state is selected
//! 2. name is letters and whitespace
//! 3. city is letters and whitespace
//! 4. state is one of [`VALID_STATES`](crate::domain::VALID_STATES)
//! 5. email is well formed
//! 6. phone number is digits only
//! 7. zipcode is digits only

use crate::domain::{
    CityName, EmailAddress, PersonName, PhoneNumber, State, ValidationError, Zipcode,
};
use crate::models::{Contact, ContactForm};

/// Validate an already-trimmed form.
///
/// Values are taken exactly as given; callers that accept user input should
/// pass `form.trimmed()`.
///
/// # Example
///
/// ```
/// use contact_book_server::models::ContactForm;
/// use contact_book_server::validation::validate;
///
/// let form = ContactForm {
///     name: "Alice".into(),
///     number: "12345".into(),
///     email: "a@b.co".into(),
///     zipcode: "10001".into(),
///     city: "Pune".into(),
///     state: Some("Maharashtra".into()),
/// };
/// let contact = validate(&form).unwrap();
/// assert_eq!(contact.name(), "Alice");
/// ```
pub fn validate(form: &ContactForm) -> Result<Contact, ValidationError> {
    if let Some(field) = form.first_missing_field() {
        return Err(ValidationError::MissingField(field));
    }

    let name = PersonName::new(form.name.as_str())?;
    let city = CityName::new(form.city.as_str())?;
    let state = State::new(form.state.as_deref().unwrap_or_default())?;
    let email = EmailAddress::new(form.email.as_str())?;
    let number = PhoneNumber::new(form.number.as_str())?;
    let zipcode = Zipcode::new(form.zipcode.as_str())?;

    Ok(Contact::new(name, number, email, zipcode, city, state))
}
