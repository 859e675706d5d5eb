//! Add command - interactive user entry

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::console::{self, Console, ConsoleError};
use crate::domain::record::{CreationSink, RecordBuilder};
use crate::domain::user::{User, UserRepository};
use crate::infrastructure::{CreationLog, JsonLinesUserRepository, LineConsole, UserService};

/// Run the interactive session on stdin/stdout
pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    let repository = JsonLinesUserRepository::new(&config.storage.records_file);
    let mut service = UserService::new(repository);
    let log = CreationLog::new(&config.storage.creation_log);
    let mut console = LineConsole::stdio();

    match session(&mut console, &mut service, &log, &config.storage.records_file) {
        Ok(added) => {
            info!(added, "Session finished");
            Ok(())
        }
        Err(ConsoleError::Closed) => {
            info!("Console input closed, ending session");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Show the stored users, then add users until the user declines.
///
/// Returns the number of users added and saved.
pub fn session<R: UserRepository>(
    console: &mut dyn Console,
    service: &mut UserService<R>,
    sink: &dyn CreationSink,
    source: &str,
) -> Result<usize, ConsoleError> {
    match service.load() {
        Ok(skipped) => {
            for line in skipped {
                console.print(&format!(
                    "Skipped line {} of {}: {}",
                    line.line, source, line.message
                ))?;
            }
        }
        Err(e) => {
            warn!(error = %e, "Could not load users");
            console.print(&format!("Problem reading users from file: {}", e))?;
        }
    }

    console.print(&format!(
        "{} users read from file({})",
        service.users().len(),
        source
    ))?;
    for user in service.users() {
        console.print(&user.to_string())?;
    }

    let mut added = 0;

    while console::yes_no(console, "Add another user? (Y/N)")? {
        let Some(user) = RecordBuilder::new(console)
            .with_sink(sink)
            .build::<User>(None)?
        else {
            continue;
        };

        let id = *user.id();
        let firstname = user.firstname().to_string();

        match service.add(user) {
            Ok(()) => {
                added += 1;
                console.print(&format!("User {} ({}) created", firstname, id))?;
            }
            Err(e) => console.print(&format!("Could not save users: {}", e))?,
        }
    }

    Ok(added)
}
