//! Contacts server host: configuration, logging and the HTTP listener around
//! the contacts module.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod logging;
pub mod request_id;
pub mod server;
pub mod signals;

pub use config::{AppConfig, CliOverrides};
