//! Domain layer - business rules for contacts.
//!
//! The domain layer depends on the SDK contract types and on the
//! `ContactsRepository` port; it never imports `api::*` or concrete storage.

pub mod error;
pub mod local_client;
pub mod repo;
pub mod service;
pub mod validation;
