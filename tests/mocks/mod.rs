mod mock_contact_repository;

pub use mock_contact_repository::{CallLog, MockContactRepository};
