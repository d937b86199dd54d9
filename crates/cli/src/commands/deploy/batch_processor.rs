use clap::Parser;
use ethers::types::Address;
use onft_deploy_common::{forge::ScriptRunner, logger, values::ScriptValues};
use onft_deploy_config::CLAIM_BATCH_PROCESSOR_SCRIPT;
use serde::{Deserialize, Serialize};
use xshell::Shell;

use crate::forge_ctx::{require_value, ScriptArgs, ScriptContext};
use crate::utils::runlog;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
pub struct BatchProcessorArgs {
    /// Address of the deployed Distributor
    #[clap(long)]
    pub distributor: Address,

    #[clap(flatten)]
    #[serde(flatten)]
    pub script: ScriptArgs,
}

pub async fn run(args: BatchProcessorArgs, shell: &Shell) -> anyhow::Result<()> {
    let (config, key, deployer) = args.script.load(shell)?;
    logger::info(format!("Deployer: {deployer:#x}"));

    let mut runner = ScriptRunner::new();
    let mut ctx = ScriptContext::new(&mut runner, &config, key, args.script.broadcast);

    logger::info("Deploying ClaimBatchProcessor...");
    let values = deploy(&mut ctx, &format!("{:#x}", args.distributor))?;
    let address = require_value(&values, "address.claimBatchProcessor")?;

    logger::outro("ClaimBatchProcessor deployed");
    println!("ClaimBatchProcessor address: {address}");
    runlog::report_session(&runner, "deploy.batch-processor");
    Ok(())
}

pub fn deploy(ctx: &mut ScriptContext<'_>, distributor: &str) -> anyhow::Result<ScriptValues> {
    let config = ctx.config;
    ctx.run(
        "claim-batch-processor",
        CLAIM_BATCH_PROCESSOR_SCRIPT,
        &config.berachain.rpc_url,
        [("ADDRESS_DISTRIBUTOR", distributor.to_string())],
    )
}
