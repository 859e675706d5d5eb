//! JSON-lines user repository

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::user::{LoadedUsers, SkippedLine, User, UserRepository};
use crate::domain::DomainError;

/// Stores users as one JSON object per line.
///
/// Saving rewrites the whole file. The file is only open for the duration of
/// a single load or save.
#[derive(Debug, Clone)]
pub struct JsonLinesUserRepository {
    path: PathBuf,
}

impl JsonLinesUserRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse JSON lines, skipping blank lines and collecting the ones that fail.
///
/// Lines are decoded one at a time, so a line that is not UTF-8 is skipped
/// like any other malformed line.
pub fn parse_lines(content: &[u8]) -> LoadedUsers {
    let mut loaded = LoadedUsers::default();

    for (index, raw) in content.split(|byte| *byte == b'\n').enumerate() {
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                loaded.skipped.push(SkippedLine {
                    line: index + 1,
                    message: e.to_string(),
                });
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<User>(line) {
            Ok(user) => loaded.users.push(user),
            Err(e) => loaded.skipped.push(SkippedLine {
                line: index + 1,
                message: e.to_string(),
            }),
        }
    }

    loaded
}

pub fn to_lines(users: &[User]) -> Result<String, serde_json::Error> {
    let mut content = String::new();

    for user in users {
        content.push_str(&serde_json::to_string(user)?);
        content.push('\n');
    }

    Ok(content)
}

impl UserRepository for JsonLinesUserRepository {
    fn load(&self) -> Result<LoadedUsers, DomainError> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No record file yet");
                return Ok(LoadedUsers::default());
            }
            Err(e) => {
                return Err(DomainError::persistence_read(
                    self.display_path(),
                    e.to_string(),
                ));
            }
        };

        let loaded = parse_lines(&content);

        for skipped in &loaded.skipped {
            warn!(
                path = %self.path.display(),
                line = skipped.line,
                error = %skipped.message,
                "Skipping malformed user record"
            );
        }

        debug!(
            path = %self.path.display(),
            users = loaded.users.len(),
            skipped = loaded.skipped.len(),
            "Loaded users"
        );

        Ok(loaded)
    }

    fn save_all(&self, users: &[User]) -> Result<(), DomainError> {
        let content = to_lines(users)
            .map_err(|e| DomainError::persistence_write(self.display_path(), e.to_string()))?;

        fs::write(&self.path, content)
            .map_err(|e| DomainError::persistence_write(self.display_path(), e.to_string()))?;

        debug!(path = %self.path.display(), users = users.len(), "Saved users");
        Ok(())
    }
}
