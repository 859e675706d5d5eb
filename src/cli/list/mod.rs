//! List command - print the stored users

use clap::Args;
use tracing::debug;

use crate::config::AppConfig;
use crate::domain::user::{LoadedUsers, UserRepository};
use crate::infrastructure::user::to_lines;
use crate::infrastructure::JsonLinesUserRepository;

/// Arguments for the list command
#[derive(Args, Clone, Debug, Default)]
pub struct ListArgs {
    /// Print the raw JSON lines instead of the summary
    #[arg(long)]
    pub json: bool,
}

pub fn run(config: &AppConfig, args: &ListArgs) -> anyhow::Result<()> {
    let repository = JsonLinesUserRepository::new(&config.storage.records_file);
    let loaded = repository.load()?;

    print!("{}", render(&loaded, &config.storage.records_file, args.json)?);
    debug!(users = loaded.users.len(), json = args.json, "Listed users");
    Ok(())
}

/// Render the loaded users either as JSON lines or as one summary per user
pub fn render(loaded: &LoadedUsers, source: &str, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(to_lines(&loaded.users)?);
    }

    let mut out = format!("{} users read from file({})\n", loaded.users.len(), source);
    for user in &loaded.users {
        out.push_str(&user.to_string());
        out.push('\n');
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::fixtures::user;
    use crate::infrastructure::user::parse_lines;

    fn loaded(names: &[&str]) -> LoadedUsers {
        LoadedUsers {
            users: names.iter().map(|name| user(name)).collect(),
            skipped: Vec::new(),
        }
    }

    #[test]
    fn test_render_summary() {
        let out = render(&loaded(&["Ada", "Grace"]), "users.json", false).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "2 users read from file(users.json)");
        assert!(lines[1].contains("Ada <ada@example.com>"));
        assert!(lines[2].contains("Grace"));
    }

    #[test]
    fn test_render_empty() {
        let out = render(&LoadedUsers::default(), "users.json", false).unwrap();
        assert_eq!(out, "0 users read from file(users.json)\n");
    }

    #[test]
    fn test_render_json_lines_reload() {
        let original = loaded(&["Ada", "Grace"]);
        let out = render(&original, "users.json", true).unwrap();

        assert_eq!(out.lines().count(), 2);
        let reloaded = parse_lines(out.as_bytes());
        assert!(reloaded.skipped.is_empty());
        assert_eq!(reloaded.users, original.users);
    }
}
