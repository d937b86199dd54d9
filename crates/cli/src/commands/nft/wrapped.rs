use clap::Parser;
use ethers::types::Address;
use onft_deploy_common::{forge::ScriptRunner, logger};
use onft_deploy_config::WRAPPED_NFT_SCRIPT;
use serde::{Deserialize, Serialize};
use xshell::Shell;

use crate::forge_ctx::{require_value, ScriptArgs, ScriptContext};
use crate::utils::runlog;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
pub struct WrappedArgs {
    /// Origin ERC1155 collection on ethereum
    #[clap(long)]
    pub origin: Address,

    #[clap(flatten)]
    #[serde(flatten)]
    pub script: ScriptArgs,
}

/// Deploys the WrappedNFT on both chains. On ethereum the wrapper points at
/// the origin collection; on berachain there is no origin, so the zero
/// address is passed instead.
pub async fn run(args: WrappedArgs, shell: &Shell) -> anyhow::Result<()> {
    let (config, key, deployer) = args.script.load(shell)?;
    logger::info(format!("Deployer: {deployer:#x}"));

    let mut runner = ScriptRunner::new();
    let mut ctx = ScriptContext::new(&mut runner, &config, key, args.script.broadcast);

    let chains = [
        ("ethereum", &config.ethereum, args.origin),
        ("berachain", &config.berachain, Address::zero()),
    ];
    let mut deployed = Vec::new();
    for (name, chain, origin) in chains {
        logger::info(format!("Deploying WrappedNFT on {name}..."));
        let values = ctx.run(
            &format!("wrapped-nft.{name}"),
            WRAPPED_NFT_SCRIPT,
            &chain.rpc_url,
            [
                ("ADDRESS_ORIGIN", format!("{origin:#x}")),
                ("ADDRESS_LZ_ENDPOINT", format!("{:#x}", chain.lz_endpoint)),
            ],
        )?;
        deployed.push((name, require_value(&values, "address.wrappedNFT")?));
    }

    logger::outro("WrappedNFT pair deployed");
    for (name, address) in &deployed {
        println!("WrappedNFT on {name}: {address}");
    }
    runlog::report_session(&runner, "nft.wrapped");
    Ok(())
}
