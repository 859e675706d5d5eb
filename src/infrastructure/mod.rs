//! Infrastructure layer - File, console and logging implementations

pub mod console;
pub mod creation_log;
pub mod logging;
pub mod user;

pub use console::LineConsole;
pub use creation_log::CreationLog;
pub use user::{JsonLinesUserRepository, UserService};
