//! Contact Book Server - an in-memory personal contact book exposed over the
//! Model Context Protocol.
//!
//! The contact book keeps a small list of contacts (name, phone, email,
//! zipcode, city, state). Input is validated field by field, contacts are
//! unique by name and phone number, and the list is always ordered by name.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for each contact field
//! - **models**: The `Contact` record and the raw `ContactForm` input
//! - **validation**: Ordered field rules turning a form into a contact
//! - **repositories**: The name-ordered, de-duplicated contact store
//! - **services**: Add/view/edit/delete/list orchestration
//! - **metrics**: Operation counters
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **server**: MCP protocol server

pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod validation;

pub use config::Config;
pub use error::{ConfigError, ContactBookError, StoreError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{Contact, ContactForm};
pub use repositories::{ContactBook, ContactRepository};
pub use server::ContactBookMcpServer;
pub use services::{ContactListing, ContactRow, ContactService};
pub use validation::validate;
