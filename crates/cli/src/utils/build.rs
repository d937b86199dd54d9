use std::path::Path;

use onft_deploy_common::{cmd::Cmd, logger};
use xshell::{cmd, Shell};

/// Compile the contracts before a deployment run.
pub fn build_contracts(shell: &Shell, contracts_root: &Path) -> anyhow::Result<()> {
    logger::info("Building contracts...");
    let _dir_guard = shell.push_dir(contracts_root);
    Cmd::new(cmd!(shell, "forge build")).run()
}
