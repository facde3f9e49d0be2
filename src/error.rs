//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by the contact store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A contact with the same name and number is already stored
    #[error("Contact already exists: {0}")]
    DuplicateContact(String),

    /// The position does not address a stored contact
    #[error("No contact at position {index} (book holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Any failure a contact book operation can report.
///
/// The set is closed: seven validation kinds plus the two store kinds.
/// None of them is fatal; the caller shows the message and lets the user
/// correct the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactBookError {
    /// The submitted fields failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store rejected the operation
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ContactBookError {
    /// Stable machine-readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.kind(),
            Self::Store(StoreError::DuplicateContact(_)) => "DuplicateContact",
            Self::Store(StoreError::IndexOutOfRange { .. }) => "IndexOutOfRange",
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ContactBookError
pub type ContactBookResult<T> = Result<T, ContactBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
