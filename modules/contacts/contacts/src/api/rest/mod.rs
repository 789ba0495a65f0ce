pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;

/// Path of the contacts collection endpoint.
pub const CONTACTS_PATH: &str = "/api/contacts";
