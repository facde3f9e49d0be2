//! State value object and the fixed set of accepted states.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Every state a contact may live in.
pub const VALID_STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

/// A state drawn from [`VALID_STATES`].
///
/// Holds the static entry itself, so the set is referenced but never copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State(&'static str);

impl State {
    /// Look up a state by exact (case-sensitive) name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidState` if the name is not in the set.
    pub fn new(state: &str) -> Result<Self, ValidationError> {
        VALID_STATES
            .iter()
            .find(|s| **s == state)
            .map(|s| Self(*s))
            .ok_or_else(|| ValidationError::InvalidState(state.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Iterate over all accepted states in display order.
    pub fn all() -> impl Iterator<Item = State> {
        VALID_STATES.iter().map(|s| State(*s))
    }
}

impl Serialize for State {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for State {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        State::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
