use clap::Parser;
use onft_deploy_common::{forge::ScriptRunner, logger, values::ScriptValues};
use onft_deploy_config::{StreamingNftParams, STREAMING_NFT_SCRIPT};
use serde::{Deserialize, Serialize};
use xshell::Shell;

use crate::forge_ctx::{require_value, ScriptArgs, ScriptContext};
use crate::utils::runlog;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
pub struct StreamingNftArgs {
    #[clap(flatten)]
    #[serde(flatten)]
    pub script: ScriptArgs,
}

pub async fn run(args: StreamingNftArgs, shell: &Shell) -> anyhow::Result<()> {
    let (config, key, deployer) = args.script.load(shell)?;
    if config.streaming_nfts.is_empty() {
        anyhow::bail!("no streaming_nfts entries in the config");
    }
    logger::info(format!("Deployer: {deployer:#x}"));

    let mut runner = ScriptRunner::new();
    let mut ctx = ScriptContext::new(&mut runner, &config, key, args.script.broadcast);

    let mut deployed = Vec::new();
    for params in &config.streaming_nfts {
        logger::info(format!(
            "Deploying StreamingNFT for {:#x}...",
            params.credential_nft
        ));
        let values = deploy(&mut ctx, params)?;
        deployed.push((params.credential_nft, require_value(&values, "address.streamingNFT")?));
    }

    logger::outro("StreamingNFT deployment complete");
    for (credential_nft, address) in &deployed {
        println!("StreamingNFT[{credential_nft:#x}]: {address}");
    }
    runlog::report_session(&runner, "deploy.streaming-nft");
    Ok(())
}

pub fn deploy(
    ctx: &mut ScriptContext<'_>,
    params: &StreamingNftParams,
) -> anyhow::Result<ScriptValues> {
    let config = ctx.config;
    let blacklist = params
        .blacklisted_token_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    ctx.run(
        "streaming-nft",
        STREAMING_NFT_SCRIPT,
        &config.berachain.rpc_url,
        [
            (
                "ADDRESS_CREDENTIAL_NFT",
                format!("{:#x}", params.credential_nft),
            ),
            ("BLACKLISTED_TOKEN_IDS", blacklist),
            ("ALLOCATION_PER_NFT", params.allocation_per_nft.to_string()),
        ],
    )
}
