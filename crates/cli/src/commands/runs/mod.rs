pub mod inspect;
pub mod list;

use clap::Subcommand;
use xshell::Shell;

#[derive(Subcommand, Debug)]
pub enum RunsCommands {
    /// List persisted runner sessions, newest first
    List(list::RunsListArgs),
    /// Show the runs recorded in the latest session
    Inspect(inspect::RunsInspectArgs),
}

pub async fn run(shell: &Shell, args: RunsCommands) -> anyhow::Result<()> {
    match args {
        RunsCommands::List(args) => list::run(args, shell).await,
        RunsCommands::Inspect(args) => inspect::run(args, shell).await,
    }
}
