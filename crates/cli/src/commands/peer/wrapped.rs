use clap::Parser;
use ethers::types::Address;
use onft_deploy_common::{forge::ScriptRunner, logger};
use onft_deploy_config::WRAPPED_NFT_EID_SETUP_SCRIPT;
use serde::{Deserialize, Serialize};
use xshell::Shell;

use crate::forge_ctx::{ScriptArgs, ScriptContext};
use crate::utils::runlog;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
pub struct WrappedPeerArgs {
    /// WrappedNFT on ethereum
    #[clap(long)]
    pub wrapped: Address,
    /// Peer WrappedNFT on berachain
    #[clap(long)]
    pub peer: Address,

    #[clap(flatten)]
    #[serde(flatten)]
    pub script: ScriptArgs,
}

pub async fn run(args: WrappedPeerArgs, shell: &Shell) -> anyhow::Result<()> {
    let (config, key, deployer) = args.script.load(shell)?;
    logger::info(format!("Deployer: {deployer:#x}"));

    let mut runner = ScriptRunner::new();
    let mut ctx = ScriptContext::new(&mut runner, &config, key, args.script.broadcast);

    logger::info("Wiring WrappedNFT to its berachain peer...");
    ctx.run(
        "wrapped-nft-eid",
        WRAPPED_NFT_EID_SETUP_SCRIPT,
        &config.ethereum.rpc_url,
        [
            ("ADDRESS_WRAPPED_NFT", format!("{:#x}", args.wrapped)),
            ("ADDRESS_PEER", format!("{:#x}", args.peer)),
            ("EID", config.berachain.lz_eid.to_string()),
        ],
    )?;

    logger::outro("WrappedNFT peer set");
    runlog::report_session(&runner, "peer.wrapped");
    Ok(())
}
