use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Could not read records from {path}: {message}")]
    PersistenceRead { path: String, message: String },

    #[error("Could not write records to {path}: {message}")]
    PersistenceWrite { path: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn persistence_read(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PersistenceRead {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn persistence_write(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PersistenceWrite {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
