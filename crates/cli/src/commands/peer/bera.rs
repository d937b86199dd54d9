use clap::Parser;
use ethers::types::Address;
use onft_deploy_common::{forge::ScriptRunner, logger};
use onft_deploy_config::BERA_NFT_EID_SETUP_SCRIPT;
use serde::{Deserialize, Serialize};
use xshell::Shell;

use crate::forge_ctx::{ScriptArgs, ScriptContext};
use crate::utils::runlog;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
pub struct BeraPeerArgs {
    /// BeraNft on berachain
    #[clap(long)]
    pub nft: Address,
    /// Peer adapter or WrappedNFT on ethereum
    #[clap(long)]
    pub peer: Address,

    #[clap(flatten)]
    #[serde(flatten)]
    pub script: ScriptArgs,
}

pub async fn run(args: BeraPeerArgs, shell: &Shell) -> anyhow::Result<()> {
    let (config, key, deployer) = args.script.load(shell)?;
    logger::info(format!("Deployer: {deployer:#x}"));

    let mut runner = ScriptRunner::new();
    let mut ctx = ScriptContext::new(&mut runner, &config, key, args.script.broadcast);

    logger::info("Wiring BeraNft to its ethereum peer...");
    ctx.run(
        "bera-nft-eid",
        BERA_NFT_EID_SETUP_SCRIPT,
        &config.berachain.rpc_url,
        [
            ("ADDRESS_BERA_NFT", format!("{:#x}", args.nft)),
            ("ADDRESS_PEER", format!("{:#x}", args.peer)),
            ("EID", config.ethereum.lz_eid.to_string()),
        ],
    )?;

    logger::outro("BeraNft peer set");
    runlog::report_session(&runner, "peer.bera");
    Ok(())
}
