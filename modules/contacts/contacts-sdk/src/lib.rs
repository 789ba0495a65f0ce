//! Contacts SDK
//!
//! This crate provides the public API for the `contacts` module:
//! - `ContactsClient` trait
//! - Model types (`Contact`, `NewContact`, `ContactUpdate`)
//! - Store identifier (`ContactId`)
//! - Error type (`ContactsError`)
//!
//! ## Usage
//!
//! ```ignore
//! use contacts_sdk::{ContactsClient, NewContact};
//!
//! let id = client
//!     .create_contact(NewContact::new("Ada", "ada@x.com", None))
//!     .await?;
//! let contacts = client.list_contacts().await?;
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod client;
pub mod errors;
pub mod id;
pub mod models;

pub use client::ContactsClient;
pub use errors::ContactsError;
pub use id::{ContactId, InvalidContactId};
pub use models::{Contact, ContactUpdate, NewContact};
