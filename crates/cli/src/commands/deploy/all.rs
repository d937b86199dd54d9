use clap::Parser;
use onft_deploy_common::{forge::ScriptRunner, logger};
use serde::{Deserialize, Serialize};
use xshell::Shell;

use crate::commands::deploy::{batch_processor, distributor, streaming_nft};
use crate::forge_ctx::{require_value, ScriptArgs, ScriptContext};
use crate::utils::{build, runlog};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
pub struct DeployAllArgs {
    /// Skip `forge build` before deploying
    #[clap(long, default_value_t = false)]
    pub skip_build: bool,

    #[clap(flatten)]
    #[serde(flatten)]
    pub script: ScriptArgs,
}

/// The full deployment sequence: distributor, then the batch processor fed
/// with the distributor address from the previous step's output, then one
/// StreamingNFT per configured credential NFT. The first failure aborts the
/// rest of the sequence.
pub async fn run(args: DeployAllArgs, shell: &Shell) -> anyhow::Result<()> {
    let (config, key, deployer) = args.script.load(shell)?;
    logger::info(format!("Deployer: {deployer:#x}"));

    if !args.skip_build {
        build::build_contracts(shell, &config.contracts_root())?;
    }

    let mut runner = ScriptRunner::new();
    let mut ctx = ScriptContext::new(&mut runner, &config, key, args.script.broadcast);

    logger::info("Deploying Distributor...");
    let values = distributor::deploy(&mut ctx)?;
    let distributor_addr = require_value(&values, "address.distributor")?;

    logger::info("Deploying ClaimBatchProcessor...");
    let values = batch_processor::deploy(&mut ctx, &distributor_addr)?;
    let processor_addr = require_value(&values, "address.claimBatchProcessor")?;

    let mut streaming = Vec::new();
    for params in &config.streaming_nfts {
        logger::info(format!(
            "Deploying StreamingNFT for {:#x}...",
            params.credential_nft
        ));
        let values = streaming_nft::deploy(&mut ctx, params)?;
        streaming.push((
            params.credential_nft,
            require_value(&values, "address.streamingNFT")?,
        ));
    }

    logger::outro("Deployment sequence complete");
    println!("Distributor: {distributor_addr}");
    println!("ClaimBatchProcessor: {processor_addr}");
    for (credential_nft, address) in &streaming {
        println!("StreamingNFT[{credential_nft:#x}]: {address}");
    }
    runlog::report_session(&runner, "deploy.all");
    Ok(())
}
