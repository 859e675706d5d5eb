//! User repository trait

use std::fmt::Debug;

use super::entity::User;
use crate::domain::DomainError;

/// A line of the record file that could not be read back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    pub message: String,
}

/// Result of loading the stored users
#[derive(Debug, Clone, Default)]
pub struct LoadedUsers {
    pub users: Vec<User>,
    pub skipped: Vec<SkippedLine>,
}

/// Repository trait for user storage
pub trait UserRepository: Debug {
    /// Load every stored user. A missing store holds zero users.
    fn load(&self) -> Result<LoadedUsers, DomainError>;

    /// Replace the stored users with `users`
    fn save_all(&self, users: &[User]) -> Result<(), DomainError>;
}
