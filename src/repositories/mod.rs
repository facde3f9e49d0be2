//! Contact storage.

mod contact_book;
mod traits;

pub use contact_book::ContactBook;
pub use traits::ContactRepository;
