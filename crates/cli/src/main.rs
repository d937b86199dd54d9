use clap::{command, Parser, Subcommand};
use onft_deploy_common::{
    config::{init_global_config, GlobalConfig},
    error::log_error,
    logger,
};
use xshell::Shell;

use crate::commands::{
    deploy::DeployCommands, nft::NftCommands, peer::PeerCommands, runs::RunsCommands,
};

mod commands;
mod forge_ctx;
mod utils;

#[derive(Parser, Debug)]
#[command(name = "onft-deploy", about)]
struct OnftDeploy {
    #[command(subcommand)]
    command: OnftDeploySubcommands,
    #[clap(flatten)]
    global: OnftDeployGlobalArgs,
}

#[derive(Subcommand, Debug)]
pub enum OnftDeploySubcommands {
    /// Distributor suite deployments
    #[command(subcommand)]
    Deploy(Box<DeployCommands>),
    /// Omnichain NFT deployments
    #[command(subcommand)]
    Nft(Box<NftCommands>),
    /// LayerZero peer wiring between chains
    #[command(subcommand)]
    Peer(Box<PeerCommands>),
    /// Inspect persisted runner sessions
    #[command(subcommand)]
    Runs(Box<RunsCommands>),
}

#[derive(Parser, Debug)]
#[clap(next_help_heading = "Global options")]
struct OnftDeployGlobalArgs {
    /// Verbose mode
    #[clap(short, long, global = true)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    human_panic::setup_panic!();
    let cli_args = OnftDeploy::parse();
    match run_subcommand(cli_args).await {
        Ok(_) => {}
        Err(error) => {
            log_error(error);
            std::process::exit(1);
        }
    }
    Ok(())
}

async fn run_subcommand(cli_args: OnftDeploy) -> anyhow::Result<()> {
    logger::new_empty_line();
    logger::intro();

    init_global_config(GlobalConfig {
        verbose: cli_args.global.verbose,
    });
    let shell = Shell::new()?;

    match cli_args.command {
        OnftDeploySubcommands::Deploy(args) => commands::deploy::run(&shell, *args).await?,
        OnftDeploySubcommands::Nft(args) => commands::nft::run(&shell, *args).await?,
        OnftDeploySubcommands::Peer(args) => commands::peer::run(&shell, *args).await?,
        OnftDeploySubcommands::Runs(args) => commands::runs::run(&shell, *args).await?,
    }
    Ok(())
}
