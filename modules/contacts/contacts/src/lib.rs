//! Contacts Module
//!
//! CRUD over a single collection of contact records, exposed as a REST
//! collection endpoint and as an in-process client.
//!
//! ## Public API
//!
//! The public API is defined in the `contacts-sdk` crate and re-exported here:
//! - `ContactsClient` - trait for in-process consumers
//! - `Contact`, `NewContact`, `ContactUpdate`, `ContactId` - data models
//! - `ContactsError` - error type
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
// === PUBLIC API (from SDK) ===
pub use contacts_sdk::{
    Contact, ContactId, ContactUpdate, ContactsClient, ContactsError, InvalidContactId, NewContact,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::Contacts;

pub mod config;
pub use config::DatabaseConfig;

// === INTERNAL MODULES ===
// Exposed for integration tests; only the SDK types are a stable API.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
