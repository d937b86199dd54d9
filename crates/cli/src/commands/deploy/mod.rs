pub mod all;
pub mod batch_processor;
pub mod distributor;
pub mod streaming_nft;

use clap::Subcommand;
use xshell::Shell;

#[derive(Subcommand, Debug)]
pub enum DeployCommands {
    /// Deploy the Distributor on berachain
    Distributor(distributor::DistributorArgs),
    /// Deploy the ClaimBatchProcessor for an existing distributor
    BatchProcessor(batch_processor::BatchProcessorArgs),
    /// Deploy one StreamingNFT per configured credential NFT
    StreamingNft(streaming_nft::StreamingNftArgs),
    /// Run the full deployment sequence
    All(all::DeployAllArgs),
}

pub async fn run(shell: &Shell, args: DeployCommands) -> anyhow::Result<()> {
    match args {
        DeployCommands::Distributor(args) => distributor::run(args, shell).await,
        DeployCommands::BatchProcessor(args) => batch_processor::run(args, shell).await,
        DeployCommands::StreamingNft(args) => streaming_nft::run(args, shell).await,
        DeployCommands::All(args) => all::run(args, shell).await,
    }
}
