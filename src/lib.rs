//! User records
//!
//! Console entry of user records with:
//! - Field validation for contacts, job history and users
//! - Nested list editing driven by field descriptor tables
//! - JSON-lines persistence and a creation log

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
