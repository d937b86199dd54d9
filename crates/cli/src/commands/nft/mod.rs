pub mod adapter;
pub mod bera;
pub mod mock_token;
pub mod wrapped;

use clap::Subcommand;
use xshell::Shell;

#[derive(Subcommand, Debug)]
pub enum NftCommands {
    /// Deploy a MockToken on ethereum
    MockToken(mock_token::MockTokenArgs),
    /// Deploy a WrappedNFT pair on ethereum and berachain
    Wrapped(wrapped::WrappedArgs),
    /// Deploy a BeraNft on berachain
    Bera(bera::BeraArgs),
    /// Deploy an ONFT adapter for an origin collection on ethereum
    Adapter(adapter::AdapterArgs),
}

pub async fn run(shell: &Shell, args: NftCommands) -> anyhow::Result<()> {
    match args {
        NftCommands::MockToken(args) => mock_token::run(args, shell).await,
        NftCommands::Wrapped(args) => wrapped::run(args, shell).await,
        NftCommands::Bera(args) => bera::run(args, shell).await,
        NftCommands::Adapter(args) => adapter::run(args, shell).await,
    }
}
