//! Data models for the contact book.
//!
//! `Contact` is the validated record kept in the store; `ContactForm` is the
//! raw user input it is built from.

pub mod contact;
pub mod form;

pub use contact::Contact;
pub use form::ContactForm;
