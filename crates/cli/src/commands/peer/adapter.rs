use clap::Parser;
use ethers::types::Address;
use onft_deploy_common::{forge::ScriptRunner, logger};
use onft_deploy_config::ONFT_ADAPTER_EID_SETUP_SCRIPT;
use serde::{Deserialize, Serialize};
use xshell::Shell;

use crate::forge_ctx::{ScriptArgs, ScriptContext};
use crate::utils::runlog;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
pub struct AdapterPeerArgs {
    /// ONFT adapter on ethereum
    #[clap(long)]
    pub adapter: Address,
    /// Peer BeraNft on berachain
    #[clap(long)]
    pub peer: Address,

    #[clap(flatten)]
    #[serde(flatten)]
    pub script: ScriptArgs,
}

pub async fn run(args: AdapterPeerArgs, shell: &Shell) -> anyhow::Result<()> {
    let (config, key, deployer) = args.script.load(shell)?;
    logger::info(format!("Deployer: {deployer:#x}"));

    let mut runner = ScriptRunner::new();
    let mut ctx = ScriptContext::new(&mut runner, &config, key, args.script.broadcast);

    logger::info("Wiring ONFT adapter to its berachain peer...");
    ctx.run(
        "onft-adapter-eid",
        ONFT_ADAPTER_EID_SETUP_SCRIPT,
        &config.ethereum.rpc_url,
        [
            // The setup script reuses the BeraNft env slot for the adapter.
            ("ADDRESS_BERA_NFT", format!("{:#x}", args.adapter)),
            ("ADDRESS_PEER", format!("{:#x}", args.peer)),
            ("EID", config.berachain.lz_eid.to_string()),
        ],
    )?;

    logger::outro("ONFT adapter peer set");
    runlog::report_session(&runner, "peer.adapter");
    Ok(())
}
