use clap::Parser;
use onft_deploy_common::{forge::ScriptRunner, logger};
use onft_deploy_config::BERA_NFT_SCRIPT;
use serde::{Deserialize, Serialize};
use xshell::Shell;

use crate::forge_ctx::{require_value, ScriptArgs, ScriptContext};
use crate::utils::runlog;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
pub struct BeraArgs {
    /// Collection name
    #[clap(long)]
    pub name: String,
    /// Collection symbol
    #[clap(long)]
    pub symbol: String,

    #[clap(flatten)]
    #[serde(flatten)]
    pub script: ScriptArgs,
}

pub async fn run(args: BeraArgs, shell: &Shell) -> anyhow::Result<()> {
    let (config, key, deployer) = args.script.load(shell)?;
    logger::info(format!("Deployer: {deployer:#x}"));

    let mut runner = ScriptRunner::new();
    let mut ctx = ScriptContext::new(&mut runner, &config, key, args.script.broadcast);

    logger::info(format!("Deploying BeraNft {} ({})...", args.name, args.symbol));
    let values = ctx.run(
        "bera-nft",
        BERA_NFT_SCRIPT,
        &config.berachain.rpc_url,
        [
            ("TOKEN_NAME", args.name.clone()),
            ("TOKEN_SYMBOL", args.symbol.clone()),
            ("LZ_ENDPOINT", format!("{:#x}", config.berachain.lz_endpoint)),
        ],
    )?;
    let address = require_value(&values, "address.beraNft")?;

    logger::outro("BeraNft deployed");
    println!("BeraNft address: {address}");
    runlog::report_session(&runner, "nft.bera");
    Ok(())
}
