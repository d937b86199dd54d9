use clap::Parser;
use onft_deploy_common::{forge::ScriptRunner, logger};
use onft_deploy_config::MOCK_TOKEN_SCRIPT;
use serde::{Deserialize, Serialize};
use xshell::Shell;

use crate::forge_ctx::{ScriptArgs, ScriptContext};
use crate::utils::runlog;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
pub struct MockTokenArgs {
    #[clap(flatten)]
    #[serde(flatten)]
    pub script: ScriptArgs,
}

pub async fn run(args: MockTokenArgs, shell: &Shell) -> anyhow::Result<()> {
    let (config, key, deployer) = args.script.load(shell)?;
    logger::info(format!("Deployer: {deployer:#x}"));

    let mut runner = ScriptRunner::new();
    let mut ctx = ScriptContext::new(&mut runner, &config, key, args.script.broadcast);

    logger::info("Deploying MockToken...");
    let rpc_url = config.ethereum.rpc_url.clone();
    let values = ctx.run("mock-token", MOCK_TOKEN_SCRIPT, &rpc_url, [])?;

    logger::outro("MockToken deployed");
    if let Some(address) = values.get("address.mockToken") {
        println!("MockToken address: {address}");
    }
    runlog::report_session(&runner, "nft.mock-token");
    Ok(())
}
