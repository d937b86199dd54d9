use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context as _;
use serde::Serialize;

use crate::cmd;
use crate::values::ScriptValues;

/// Builder for a single `forge script` invocation.
///
/// The script path may carry a `:Contract` suffix to pick a contract inside
/// the script file. The child environment is exactly the configured
/// variables plus the parent's `PATH`, so the scripts see nothing ambient.
#[derive(Debug, Clone)]
pub struct ForgeScript {
    project_root: PathBuf,
    script_path: String,
    rpc_url: Option<String>,
    broadcast: bool,
    envs: BTreeMap<String, String>,
}

impl ForgeScript {
    pub fn new(project_root: &Path, script_path: impl Into<String>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            script_path: script_path.into(),
            rpc_url: None,
            broadcast: false,
            envs: BTreeMap::new(),
        }
    }

    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = Some(rpc_url.into());
        self
    }

    /// Submit real transactions instead of simulating.
    pub fn with_broadcast(mut self) -> Self {
        self.broadcast = true;
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.insert(key.into(), value.into());
        self
    }

    pub fn script_path(&self) -> &str {
        &self.script_path
    }

    /// Command-line arguments following the `forge` program name.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["script".to_string(), self.script_path.clone()];
        if let Some(rpc_url) = &self.rpc_url {
            args.push("--rpc-url".to_string());
            args.push(rpc_url.clone());
        }
        if self.broadcast {
            args.push("--broadcast".to_string());
        }
        args
    }

    /// The child environment: configured variables with the parent's `PATH`
    /// merged in so the toolchain binaries stay resolvable.
    pub fn child_env(&self) -> BTreeMap<String, String> {
        let mut envs = self.envs.clone();
        if let Ok(path) = std::env::var("PATH") {
            envs.insert("PATH".to_string(), path);
        }
        envs
    }

    fn command(&self) -> Command {
        let mut command = Command::new("forge");
        command
            .args(self.args())
            .current_dir(&self.project_root)
            .env_clear()
            .envs(self.child_env());
        command
    }
}

/// One recorded invocation: when it ran, what it ran, and what it printed.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    pub ts_ms: i64,
    pub label: String,
    pub script: String,
    pub values: ScriptValues,
    pub stdout: String,
    pub stderr: String,
}

/// Runs forge scripts one at a time and keeps a record of each successful
/// invocation for later persistence.
#[derive(Debug, Default)]
pub struct ScriptRunner {
    runs: Vec<RunRecord>,
}

impl ScriptRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute the script, streaming its output, and parse the captured
    /// stdout into a value tree. A non-zero exit propagates immediately and
    /// records nothing.
    pub fn run(&mut self, label: &str, forge: ForgeScript) -> anyhow::Result<ScriptValues> {
        let ts_ms = chrono::Utc::now().timestamp_millis();
        let output = cmd::run_streaming(forge.command())
            .with_context(|| format!("forge script `{}` failed", forge.script_path()))?;
        let values = ScriptValues::parse(&output.stdout)
            .with_context(|| format!("parsing output of `{}`", forge.script_path()))?;
        self.runs.push(RunRecord {
            ts_ms,
            label: label.to_string(),
            script: forge.script_path().to_string(),
            values: values.clone(),
            stdout: output.stdout,
            stderr: output.stderr,
        });
        Ok(values)
    }

    pub fn runs(&self) -> &[RunRecord] {
        &self.runs
    }

    /// Dump each recorded run as a JSON file into `dir`.
    pub fn dump_to_dir(&self, dir: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        for (index, run) in self.runs.iter().enumerate() {
            let file = dir.join(format!("{:02}-{}.json", index + 1, run.label));
            let raw = serde_json::to_string_pretty(run)?;
            fs::write(&file, raw).with_context(|| format!("writing {}", file.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_minimal() {
        let forge = ForgeScript::new(Path::new("."), "script/MockToken.s.sol");
        assert_eq!(forge.args(), vec!["script", "script/MockToken.s.sol"]);
    }

    #[test]
    fn test_args_with_rpc_and_broadcast() {
        let forge = ForgeScript::new(Path::new("."), "script/Distributor.s.sol:DistributorScript")
            .with_rpc_url("http://localhost:8545")
            .with_broadcast();
        assert_eq!(
            forge.args(),
            vec![
                "script",
                "script/Distributor.s.sol:DistributorScript",
                "--rpc-url",
                "http://localhost:8545",
                "--broadcast",
            ]
        );
    }

    #[test]
    fn test_broadcast_absent_by_default() {
        let forge = ForgeScript::new(Path::new("."), "script/X.s.sol").with_rpc_url("http://x");
        assert!(!forge.args().contains(&"--broadcast".to_string()));
    }

    #[test]
    fn test_child_env_merges_parent_path() {
        let forge = ForgeScript::new(Path::new("."), "script/X.s.sol")
            .with_env("CONFIG_DEPLOYER", "0xkey")
            .with_env("EID", "30362");
        let env = forge.child_env();
        assert_eq!(env.get("CONFIG_DEPLOYER").map(String::as_str), Some("0xkey"));
        assert_eq!(env.get("EID").map(String::as_str), Some("30362"));
        // PATH comes from the parent, not the configured set.
        assert_eq!(env.get("PATH"), std::env::var("PATH").ok().as_ref());
    }

    #[test]
    fn test_configured_path_is_overridden_by_parent() {
        let forge = ForgeScript::new(Path::new("."), "script/X.s.sol").with_env("PATH", "/nowhere");
        let env = forge.child_env();
        assert_eq!(env.get("PATH"), std::env::var("PATH").ok().as_ref());
    }
}
