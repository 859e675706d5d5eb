//! Append-only log of interactively created users

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::debug;

use crate::domain::record::{CreationEvent, CreationSink};
use crate::domain::DomainError;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Writes one `<timestamp> - <id>, <firstname> created` line per user.
///
/// The file is opened in append mode for each entry and closed right after.
#[derive(Debug, Clone)]
pub struct CreationLog {
    path: PathBuf,
}

impl CreationLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format_entry(at: DateTime<Local>, event: &CreationEvent) -> String {
        format!(
            "{} - {}, {} created",
            at.format(TIMESTAMP_FORMAT),
            event.id,
            event.firstname
        )
    }

    fn append(&self, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", entry)
    }
}

impl CreationSink for CreationLog {
    fn record_created(&self, event: &CreationEvent) -> Result<(), DomainError> {
        let entry = Self::format_entry(Local::now(), event);

        self.append(&entry).map_err(|e| {
            DomainError::persistence_write(self.path.display().to_string(), e.to_string())
        })?;

        debug!(path = %self.path.display(), id = %event.id, "Creation log entry written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(firstname: &str) -> CreationEvent {
        CreationEvent {
            id: "0f8fad5b-d9cb-469f-a165-70867728950e".to_string(),
            firstname: firstname.to_string(),
        }
    }

    #[test]
    fn test_format_entry() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();

        assert_eq!(
            CreationLog::format_entry(at, &event("Ada")),
            "2024-03-09 14:05:07,000 - 0f8fad5b-d9cb-469f-a165-70867728950e, Ada created"
        );
    }

    #[test]
    fn test_entries_are_appended() {
        let dir = tempfile::tempdir().unwrap();
        let log = CreationLog::new(dir.path().join("users.log"));

        log.record_created(&event("Ada")).unwrap();
        log.record_created(&event("Grace")).unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("0f8fad5b-d9cb-469f-a165-70867728950e, Ada created"));
        assert!(lines[1].ends_with(", Grace created"));
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let log = CreationLog::new(dir.path().join("missing").join("users.log"));

        let error = log.record_created(&event("Ada")).unwrap_err();
        assert!(matches!(error, DomainError::PersistenceWrite { .. }));
    }
}
