use std::fs;
use std::path::PathBuf;

use onft_deploy_common::{forge::ScriptRunner, logger};
use onft_deploy_config::RUNS_ROOT_ENV;

/// Default root: ~/.onft-deploy/runs
pub fn default_runs_root() -> PathBuf {
    if let Ok(path) = std::env::var(RUNS_ROOT_ENV) {
        PathBuf::from(path)
    } else {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".onft-deploy").join("runs")
    }
}

/// Create the session directory (timestamp + command label) and dump the
/// runner's records into it. Returns the created directory path.
pub fn persist_runner_session(
    runner: &ScriptRunner,
    command_label: &str,
) -> anyhow::Result<PathBuf> {
    let root = default_runs_root();
    if runner.runs().is_empty() {
        return Err(anyhow::anyhow!("No runs to persist"));
    }
    fs::create_dir_all(&root)?;
    let ts_ms = runner.runs()[0].ts_ms;
    let dir_name = format!("{}-{}", ts_ms, command_label);
    let session_dir = root.join(dir_name);
    runner.dump_to_dir(&session_dir)?;
    Ok(session_dir)
}

/// Persist the session and print where it went. A persistence failure is
/// reported as a warning; it never fails the command that already deployed.
pub fn report_session(runner: &ScriptRunner, command_label: &str) {
    match persist_runner_session(runner, command_label) {
        Ok(dir) => println!("Runs saved to: {}", dir.display()),
        Err(err) => logger::warn(format!("failed to persist runs: {err:#}")),
    }
}

/// Parse the leading unix-millisecond timestamp of a session dir name.
pub fn parse_unix_ms_prefix(name: &str) -> Option<i64> {
    let ts_part = name.splitn(2, '-').next()?;
    ts_part.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_runner_is_warned_not_persisted() {
        let runner = ScriptRunner::new();
        assert!(persist_runner_session(&runner, "label").is_err());
        // Same condition through the reporting path only warns.
        report_session(&runner, "label");
    }

    #[test]
    fn test_parse_unix_ms_prefix() {
        assert_eq!(parse_unix_ms_prefix("1735689600123-deploy.all"), Some(1735689600123));
        assert_eq!(parse_unix_ms_prefix("not-a-timestamp"), None);
        assert_eq!(parse_unix_ms_prefix(""), None);
    }
}
