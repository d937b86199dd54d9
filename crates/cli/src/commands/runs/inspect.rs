use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use clap::Parser;
use onft_deploy_common::logger;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use xshell::Shell;

use crate::utils::runlog;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
pub struct RunsInspectArgs {}

pub async fn run(_args: RunsInspectArgs, _shell: &Shell) -> anyhow::Result<()> {
    let runs_root = runlog::default_runs_root();
    print_latest_run_info(&runs_root)?;
    Ok(())
}

/// Print the runs recorded in the latest session.
pub fn print_latest_run_info(runs_dir: &Path) -> Result<()> {
    let latest_dir = find_latest_run_dir(runs_dir)
        .with_context(|| format!("no runs found in {}", runs_dir.display()))?;

    let dir_name = latest_dir
        .file_name()
        .and_then(|name| name.to_str())
        .context("invalid session dir name")?;
    let ts_ms = runlog::parse_unix_ms_prefix(dir_name)
        .ok_or_else(|| anyhow::anyhow!("invalid session dir name: {dir_name}"))?;
    let dt = Utc
        .timestamp_millis_opt(ts_ms)
        .single()
        .with_context(|| format!("timestamp out of range in {dir_name}"))?;

    logger::info(format!("Latest session: {}", latest_dir.display()));
    logger::info(format!("Time (UTC): {}", dt.to_rfc3339()));

    let mut files: Vec<PathBuf> = fs::read_dir(&latest_dir)
        .with_context(|| format!("reading {}", latest_dir.display()))?
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            (path.extension().and_then(|ext| ext.to_str()) == Some("json")).then_some(path)
        })
        .collect();
    files.sort();

    for file in files {
        let raw = fs::read_to_string(&file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let record: Value = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", file.display()))?;
        let label = record["label"].as_str().unwrap_or("?");
        let script = record["script"].as_str().unwrap_or("?");
        println!("{label} ({script})");
        println!("{}", serde_json::to_string_pretty(&record["values"])?);
    }
    Ok(())
}

/// Find the session directory with the largest timestamp prefix.
pub fn find_latest_run_dir(root: &Path) -> Result<PathBuf> {
    let mut best: Option<(i64, PathBuf)> = None;

    for entry in fs::read_dir(root).with_context(|| format!("reading {}", root.display()))? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(ts_ms) = file_name.to_str().and_then(runlog::parse_unix_ms_prefix) else {
            continue;
        };
        match &mut best {
            None => best = Some((ts_ms, entry.path())),
            Some((best_ts, best_path)) => {
                if ts_ms > *best_ts {
                    *best_ts = ts_ms;
                    *best_path = entry.path();
                }
            }
        }
    }

    best.map(|(_, path)| path)
        .ok_or_else(|| anyhow::anyhow!("no session directories found in {}", root.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_timestamp_is_an_error() {
        let shell = xshell::Shell::new().unwrap();
        let root = shell.create_temp_dir().unwrap();
        fs::create_dir(root.path().join("9223372036854775807-deploy.all")).unwrap();
        assert!(print_latest_run_info(root.path()).is_err());
    }

    #[test]
    fn test_latest_dir_picks_largest_timestamp() {
        let shell = xshell::Shell::new().unwrap();
        let root = shell.create_temp_dir().unwrap();
        fs::create_dir(root.path().join("100-a")).unwrap();
        fs::create_dir(root.path().join("200-b")).unwrap();
        let latest = find_latest_run_dir(root.path()).unwrap();
        assert!(latest.ends_with("200-b"));
    }
}
