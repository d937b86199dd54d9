use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context as _;
use clap::Parser;
use ethers::{
    signers::{LocalWallet, Signer},
    types::{Address, H256},
};
use onft_deploy_common::forge::{ForgeScript, ScriptRunner};
use onft_deploy_common::values::ScriptValues;
use onft_deploy_config::{
    traits::ReadConfig, DeployConfig, CONFIG_DEPLOYER_ENV, DEPLOY_CONFIG_FILE,
};
use serde::{Deserialize, Serialize};
use xshell::Shell;

/// Anvil/Hardhat first default account private key.
/// Mnemonic: "test test test test test test test test test test test junk"
const DEV_PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Arguments shared by every script-running command.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
pub struct ScriptArgs {
    /// Path to the deployment config file
    #[clap(long, default_value = DEPLOY_CONFIG_FILE)]
    pub config: PathBuf,

    /// Private key for the deployer
    #[clap(long)]
    pub private_key: Option<H256>,
    /// Use the well-known anvil dev key
    #[clap(long, default_value_t = false)]
    pub dev: bool,

    /// Broadcast transactions instead of simulating
    #[clap(long, default_value_t = false)]
    pub broadcast: bool,
}

impl ScriptArgs {
    /// Load the config and resolve the deployer key.
    pub fn load(&self, shell: &Shell) -> anyhow::Result<(DeployConfig, H256, Address)> {
        let config = DeployConfig::read(shell, &self.config)?;
        let (key, address) = resolve_deployer(self.private_key, self.dev)?;
        Ok((config, key, address))
    }
}

/// Resolves the deployer key from CLI args.
/// Priority: --private-key > --dev > error
pub fn resolve_deployer(private_key: Option<H256>, dev: bool) -> anyhow::Result<(H256, Address)> {
    let pk = if let Some(pk) = private_key {
        pk
    } else if dev {
        H256::from_str(DEV_PRIVATE_KEY)?
    } else {
        anyhow::bail!("Either --private-key or --dev must be provided");
    };
    let wallet = LocalWallet::from_bytes(pk.as_bytes())
        .map_err(|e| anyhow::anyhow!("Invalid private key: {}", e))?;
    Ok((pk, wallet.address()))
}

/// Common context for running the deploy scripts.
pub struct ScriptContext<'a> {
    pub contracts_root: PathBuf,
    pub runner: &'a mut ScriptRunner,
    pub config: &'a DeployConfig,
    pub deployer_key: H256,
    pub broadcast: bool,
}

impl<'a> ScriptContext<'a> {
    pub fn new(
        runner: &'a mut ScriptRunner,
        config: &'a DeployConfig,
        deployer_key: H256,
        broadcast: bool,
    ) -> Self {
        Self {
            contracts_root: config.contracts_root(),
            runner,
            config,
            deployer_key,
            broadcast,
        }
    }

    /// Assemble and run one forge script, returning its parsed output.
    pub fn run(
        &mut self,
        label: &str,
        script: &str,
        rpc_url: &str,
        envs: impl IntoIterator<Item = (&'static str, String)>,
    ) -> anyhow::Result<ScriptValues> {
        let mut forge = ForgeScript::new(&self.contracts_root, script)
            .with_rpc_url(rpc_url)
            .with_env(CONFIG_DEPLOYER_ENV, format!("{:#x}", self.deployer_key));
        for (key, value) in envs {
            forge = forge.with_env(key, value);
        }
        if self.broadcast {
            forge = forge.with_broadcast();
        }
        self.runner.run(label, forge)
    }
}

/// Pull a required key out of a script's parsed output.
pub fn require_value(values: &ScriptValues, key: &str) -> anyhow::Result<String> {
    values
        .get(key)
        .map(str::to_string)
        .with_context(|| format!("script output is missing `{key}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_key_resolves_to_first_anvil_account() {
        let (_, address) = resolve_deployer(None, true).unwrap();
        let expected: Address = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
            .parse()
            .unwrap();
        assert_eq!(address, expected);
    }

    #[test]
    fn test_explicit_key_wins_over_dev() {
        let pk = H256::from_str(DEV_PRIVATE_KEY).unwrap();
        let (resolved, _) = resolve_deployer(Some(pk), false).unwrap();
        assert_eq!(resolved, pk);
    }

    #[test]
    fn test_no_key_is_an_error() {
        assert!(resolve_deployer(None, false).is_err());
    }

    #[test]
    fn test_require_value() {
        let values = ScriptValues::parse("address.distributor:0xabc").unwrap();
        assert_eq!(
            require_value(&values, "address.distributor").unwrap(),
            "0xabc"
        );
        let err = require_value(&values, "address.proxy").unwrap_err();
        assert!(format!("{err}").contains("address.proxy"));
    }
}
