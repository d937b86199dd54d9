use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use clap::Parser;
use serde::{Deserialize, Serialize};
use xshell::Shell;

use crate::utils::runlog;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
pub struct RunsListArgs {}

pub async fn run(_args: RunsListArgs, _shell: &Shell) -> anyhow::Result<()> {
    let runs_root = runlog::default_runs_root();
    print_runs_list(&runs_root)?;
    Ok(())
}

/// Print the list of sessions, newest first.
pub fn print_runs_list(runs_dir: &Path) -> Result<()> {
    let mut runs: Vec<(i64, PathBuf)> = fs::read_dir(runs_dir)
        .with_context(|| format!("reading {}", runs_dir.display()))?
        .filter_map(|entry_res| {
            let entry = entry_res.ok()?;
            if !entry.file_type().ok()?.is_dir() {
                return None;
            }
            let file_name = entry.file_name();
            let ts_ms = runlog::parse_unix_ms_prefix(file_name.to_str()?)?;
            Some((ts_ms, entry.path()))
        })
        .collect();

    runs.sort_by_key(|(ts_ms, _path)| std::cmp::Reverse(*ts_ms));

    for (ts_ms, path) in runs {
        let dt = Utc
            .timestamp_millis_opt(ts_ms)
            .single()
            .with_context(|| format!("timestamp out of range on {}", path.display()))?;
        println!("[{}] {}", dt.to_rfc3339(), path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_timestamp_is_an_error() {
        let shell = xshell::Shell::new().unwrap();
        let root = shell.create_temp_dir().unwrap();
        fs::create_dir(root.path().join("9223372036854775807-deploy.all")).unwrap();
        assert!(print_runs_list(root.path()).is_err());
    }

    #[test]
    fn test_lists_valid_sessions() {
        let shell = xshell::Shell::new().unwrap();
        let root = shell.create_temp_dir().unwrap();
        fs::create_dir(root.path().join("1735689600123-deploy.all")).unwrap();
        print_runs_list(root.path()).unwrap();
    }
}
