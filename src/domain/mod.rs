//! Domain layer - Core business logic and entities

pub mod console;
pub mod contact;
pub mod date;
pub mod error;
pub mod job_history;
pub mod record;
pub mod user;

pub use console::{Console, ConsoleError};
pub use contact::{Contact, ContactType};
pub use date::Stay;
pub use error::DomainError;
pub use job_history::JobHistory;
pub use record::{
    CreationEvent, CreationSink, FieldError, FieldErrorKind, FormatError, Record, RecordBuilder,
    RecordError,
};
pub use user::{LoadedUsers, SkippedLine, User, UserDraft, UserId, UserRepository};
