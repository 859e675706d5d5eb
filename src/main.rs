use clap::Parser;
use user_records::cli::{self, Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli::prepare(&cli);

    match cli.command.unwrap_or_default() {
        Command::Add => cli::add::run(&config),
        Command::List(args) => cli::list::run(&config, &args),
    }
}
