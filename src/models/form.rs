//! Raw, unvalidated contact input as collected from the user.

use crate::models::Contact;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The six input fields of the contact form.
///
/// `Default` is the cleared form. Converting from a `&Contact` fills the
/// form with a stored contact's values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContactForm {
    /// Full name (letters and spaces only)
    #[serde(default)]
    pub name: String,

    /// Phone number (digits only)
    #[serde(default)]
    pub number: String,

    /// Email address
    #[serde(default)]
    pub email: String,

    /// Zipcode (digits only)
    #[serde(default)]
    pub zipcode: String,

    /// City (letters and spaces only)
    #[serde(default)]
    pub city: String,

    /// State, one of the names returned by `list_states`
    #[serde(default)]
    pub state: Option<String>,
}

impl ContactForm {
    /// Copy of the form with leading and trailing blanks removed from every field.
    ///
    /// A blank is any char up to and including U+0020 (space and the ASCII
    /// control characters). Other whitespace such as U+00A0 is kept, and the
    /// field rules then reject it. A state that is empty after trimming
    /// counts as not selected.
    pub fn trimmed(&self) -> Self {
        Self {
            name: trim_blanks(&self.name).to_string(),
            number: trim_blanks(&self.number).to_string(),
            email: trim_blanks(&self.email).to_string(),
            zipcode: trim_blanks(&self.zipcode).to_string(),
            city: trim_blanks(&self.city).to_string(),
            state: self
                .state
                .as_deref()
                .map(trim_blanks)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }

    /// Returns the name of the first empty field, in form order.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("name", self.name.is_empty()),
            ("number", self.number.is_empty()),
            ("email", self.email.is_empty()),
            ("zipcode", self.zipcode.is_empty()),
            ("city", self.city.is_empty()),
            ("state", self.state.as_deref().map_or(true, str::is_empty)),
        ]
        .into_iter()
        .find_map(|(field, missing)| missing.then_some(field))
    }
}

fn trim_blanks(field: &str) -> &str {
    field.trim_matches(|c: char| c <= ' ')
}

impl From<&Contact> for ContactForm {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name().to_string(),
            number: contact.number().to_string(),
            email: contact.email().to_string(),
            zipcode: contact.zipcode().to_string(),
            city: contact.city().to_string(),
            state: Some(contact.state().to_string()),
        }
    }
}
