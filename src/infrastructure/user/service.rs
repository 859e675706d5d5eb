//! User service holding the in-memory user list

use tracing::{info, warn};

use crate::domain::user::{SkippedLine, User, UserRepository};
use crate::domain::DomainError;

/// Keeps the loaded users in memory and rewrites the store on every addition
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: R,
    users: Vec<User>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a service with no users loaded
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            users: Vec::new(),
        }
    }

    /// Replace the in-memory users with the stored ones.
    ///
    /// Returns the lines that could not be read.
    pub fn load(&mut self) -> Result<Vec<SkippedLine>, DomainError> {
        let loaded = self.repository.load()?;
        self.users = loaded.users;
        Ok(loaded.skipped)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Add a user and rewrite the store.
    ///
    /// If the write fails the user stays in memory and is written with the
    /// next successful save.
    pub fn add(&mut self, user: User) -> Result<(), DomainError> {
        info!(id = %user.id(), firstname = %user.firstname(), "Adding user");

        self.users.push(user);

        if let Err(e) = self.repository.save_all(&self.users) {
            warn!(error = %e, "Failed to save users");
            return Err(e);
        }

        Ok(())
    }
}
