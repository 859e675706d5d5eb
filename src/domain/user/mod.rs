//! User domain
//!
//! This module provides the user record, its field validators and the
//! repository trait used to persist users.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserDraft, UserId};
pub use repository::{LoadedUsers, SkippedLine, UserRepository};
pub use validation::{format_birthday, validate_birthday, validate_email, BIRTHDAY_FORMAT};

#[cfg(test)]
pub(crate) use entity::fixtures;
#[cfg(test)]
pub use repository::mock::MockUserRepository;
