//! Free-text name value objects (person and city names).

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ASCII letters and ASCII whitespace only.
static LETTERS_AND_SPACES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u)^[A-Za-z\s]+$").expect("Failed to compile name regex")
});

/// Returns true when `text` is non-empty and made only of letters and whitespace.
pub fn is_letters_and_spaces(text: &str) -> bool {
    LETTERS_AND_SPACES.is_match(text)
}

/// A contact's name.
///
/// Ordering is plain lexicographic, case-sensitive string ordering, which is
/// how the contact book sorts its listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` unless the name is letters and
    /// whitespace only.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !is_letters_and_spaces(&name) {
            return Err(ValidationError::InvalidName(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A city name, held to the same character rules as a person's name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CityName(String);

impl CityName {
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCity` unless the city is letters and
    /// whitespace only.
    pub fn new(city: impl Into<String>) -> Result<Self, ValidationError> {
        let city = city.into();
        if !is_letters_and_spaces(&city) {
            return Err(ValidationError::InvalidCity(city));
        }
        Ok(Self(city))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_serde {
    ($ty:ident) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                self.0.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $ty::new(s).map_err(serde::de::Error::custom)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_serde!(PersonName);
string_serde!(CityName);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_spaces() {
        assert!(is_letters_and_spaces("Alice"));
        assert!(is_letters_and_spaces("Mary Jane\tWatson"));
        assert!(!is_letters_and_spaces(""));
        assert!(!is_letters_and_spaces("Bob1"));
        assert!(!is_letters_and_spaces("O'Brien"));
        assert!(!is_letters_and_spaces("Jean-Luc"));
        assert!(!is_letters_and_spaces("Ren\u{e9}e"));
    }

    #[test]
    fn test_name_and_city_report_distinct_errors() {
        assert_eq!(
            PersonName::new("R2D2"),
            Err(ValidationError::InvalidName("R2D2".to_string()))
        );
        assert_eq!(
            CityName::new("Sector 17"),
            Err(ValidationError::InvalidCity("Sector 17".to_string()))
        );
    }

    #[test]
    fn test_person_name_ordering_is_case_sensitive() {
        let upper = PersonName::new("Zed").unwrap();
        let lower = PersonName::new("alice").unwrap();
        assert!(upper < lower);
    }

    #[test]
    fn test_city_deserialization_validates() {
        let city: CityName = serde_json::from_str("\"New Delhi\"").unwrap();
        assert_eq!(city.as_str(), "New Delhi");
        assert!(serde_json::from_str::<CityName>("\"Delhi 6\"").is_err());
    }
}
