//! User infrastructure module
//!
//! This module provides the JSON-lines user repository and the user service
//! used by the console front end.

mod repository;
mod service;

pub use repository::{parse_lines, to_lines, JsonLinesUserRepository};
pub use service::UserService;
