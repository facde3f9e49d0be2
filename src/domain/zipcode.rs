//! Zipcode value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A postal code made of one or more ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Zipcode(String);

impl Zipcode {
    /// Create a new Zipcode.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidZip` if the code is empty or contains
    /// anything other than digits.
    pub fn new(zip: impl Into<String>) -> Result<Self, ValidationError> {
        let zip = zip.into();

        if zip.is_empty() || !zip.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidZip(zip));
        }

        Ok(Self(zip))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for Zipcode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Zipcode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Zipcode::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Zipcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
