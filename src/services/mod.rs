//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! validation and the repositories. They provide a clean boundary between the
//! MCP handlers and the data access layer.

mod contact_service;

pub use contact_service::{ContactListing, ContactRow, ContactService};
