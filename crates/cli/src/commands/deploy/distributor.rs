use clap::Parser;
use onft_deploy_common::{forge::ScriptRunner, logger, values::ScriptValues};
use onft_deploy_config::DISTRIBUTOR_SCRIPT;
use serde::{Deserialize, Serialize};
use xshell::Shell;

use crate::forge_ctx::{require_value, ScriptArgs, ScriptContext};
use crate::utils::runlog;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
pub struct DistributorArgs {
    #[clap(flatten)]
    #[serde(flatten)]
    pub script: ScriptArgs,
}

pub async fn run(args: DistributorArgs, shell: &Shell) -> anyhow::Result<()> {
    let (config, key, deployer) = args.script.load(shell)?;
    logger::info(format!("Deployer: {deployer:#x}"));

    let mut runner = ScriptRunner::new();
    let mut ctx = ScriptContext::new(&mut runner, &config, key, args.script.broadcast);

    logger::info("Deploying Distributor...");
    let values = deploy(&mut ctx)?;
    let address = require_value(&values, "address.distributor")?;

    logger::outro("Distributor deployed");
    println!("Distributor address: {address}");
    runlog::report_session(&runner, "deploy.distributor");
    Ok(())
}

pub fn deploy(ctx: &mut ScriptContext<'_>) -> anyhow::Result<ScriptValues> {
    let config = ctx.config;
    ctx.run(
        "distributor",
        DISTRIBUTOR_SCRIPT,
        &config.berachain.rpc_url,
        [("ADDRESS_SIGNER", format!("{:#x}", config.signer_addr))],
    )
}
