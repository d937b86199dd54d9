use clap::Parser;
use ethers::types::Address;
use onft_deploy_common::{forge::ScriptRunner, logger};
use onft_deploy_config::ONFT_ADAPTER_SCRIPT;
use serde::{Deserialize, Serialize};
use xshell::Shell;

use crate::forge_ctx::{require_value, ScriptArgs, ScriptContext};
use crate::utils::runlog;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
pub struct AdapterArgs {
    /// Origin collection the adapter wraps
    #[clap(long)]
    pub origin: Address,

    #[clap(flatten)]
    #[serde(flatten)]
    pub script: ScriptArgs,
}

pub async fn run(args: AdapterArgs, shell: &Shell) -> anyhow::Result<()> {
    let (config, key, deployer) = args.script.load(shell)?;
    logger::info(format!("Deployer: {deployer:#x}"));

    let mut runner = ScriptRunner::new();
    let mut ctx = ScriptContext::new(&mut runner, &config, key, args.script.broadcast);

    logger::info(format!("Deploying ONFT adapter for {:#x}...", args.origin));
    let values = ctx.run(
        "onft-adapter",
        ONFT_ADAPTER_SCRIPT,
        &config.ethereum.rpc_url,
        [
            ("ADDRESS_ORIGIN", format!("{:#x}", args.origin)),
            (
                "ADDRESS_LZ_ENDPOINT",
                format!("{:#x}", config.ethereum.lz_endpoint),
            ),
        ],
    )?;
    let address = require_value(&values, "address.onftAdapter")?;

    logger::outro("ONFT adapter deployed");
    println!("ONFT adapter address: {address}");
    runlog::report_session(&runner, "nft.adapter");
    Ok(())
}
