pub mod adapter;
pub mod bera;
pub mod wrapped;

use clap::Subcommand;
use xshell::Shell;

#[derive(Subcommand, Debug)]
pub enum PeerCommands {
    /// Point an ethereum WrappedNFT at its berachain peer
    Wrapped(wrapped::WrappedPeerArgs),
    /// Point an ethereum ONFT adapter at its berachain peer
    Adapter(adapter::AdapterPeerArgs),
    /// Point a berachain BeraNft at its ethereum peer
    Bera(bera::BeraPeerArgs),
}

pub async fn run(shell: &Shell, args: PeerCommands) -> anyhow::Result<()> {
    match args {
        PeerCommands::Wrapped(args) => wrapped::run(args, shell).await,
        PeerCommands::Adapter(args) => adapter::run(args, shell).await,
        PeerCommands::Bera(args) => bera::run(args, shell).await,
    }
}
