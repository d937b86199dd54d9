use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};
use std::thread;

use anyhow::Context as _;

use crate::config::global_config;
use crate::logger;

/// Captured output of a child process that exited successfully.
#[derive(Debug)]
pub struct CmdOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Child process exited with a non-zero status.
///
/// Carries everything needed to diagnose the failure without rerunning:
/// the rendered command line, the exit code (`None` when killed by a
/// signal), and both output streams as captured up to exit.
#[derive(Debug, thiserror::Error)]
#[error(
    "command `{command}` {}\n--- stdout ---\n{stdout}--- stderr ---\n{stderr}",
    status_label(.exit_code)
)]
pub struct CmdError {
    pub exit_code: Option<i32>,
    pub command: String,
    pub stdout: String,
    pub stderr: String,
}

fn status_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

/// Run a command, echoing its stdout/stderr to the console line by line as
/// they arrive while also capturing both streams in full.
///
/// Each pipe gets its own reader thread so the child can never stall on a
/// full pipe that we are not currently draining. The buffers are only read
/// back after the child has exited and both threads have been joined.
///
/// A non-zero exit returns a [`CmdError`] (retrievable via downcast); no
/// partial result is produced.
pub fn run_streaming(mut command: Command) -> anyhow::Result<CmdOutput> {
    let rendered = render_command(&command);
    if global_config().verbose {
        logger::step(format!("Running: {rendered}"));
    }

    command.stdout(Stdio::piped()).stderr(Stdio::piped());
    let mut child = command
        .spawn()
        .with_context(|| format!("failed to spawn `{rendered}`"))?;

    let stdout = child.stdout.take().context("failed to capture child stdout")?;
    let stderr = child.stderr.take().context("failed to capture child stderr")?;

    let stdout_thread = thread::spawn(move || drain(stdout, |line| println!("{line}")));
    let stderr_thread = thread::spawn(move || drain(stderr, |line| eprintln!("{line}")));

    let status = child.wait().context("waiting for child process")?;
    let stdout_buf = stdout_thread
        .join()
        .map_err(|_| anyhow::anyhow!("stdout reader thread panicked"))?
        .context("reading child stdout")?;
    let stderr_buf = stderr_thread
        .join()
        .map_err(|_| anyhow::anyhow!("stderr reader thread panicked"))?
        .context("reading child stderr")?;

    if !status.success() {
        return Err(CmdError {
            exit_code: status.code(),
            command: rendered,
            stdout: stdout_buf,
            stderr: stderr_buf,
        }
        .into());
    }

    Ok(CmdOutput {
        stdout: stdout_buf,
        stderr: stderr_buf,
    })
}

fn drain(stream: impl Read, mut echo: impl FnMut(&str)) -> std::io::Result<String> {
    let reader = BufReader::new(stream);
    let mut buf = String::new();
    for line in reader.lines() {
        let line = line?;
        echo(&line);
        buf.push_str(&line);
        buf.push('\n');
    }
    Ok(buf)
}

fn render_command(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Thin wrapper over [`xshell::Cmd`] for auxiliary invocations (e.g.
/// `forge build`) that only need inherited IO and a status check.
pub struct Cmd<'a> {
    inner: xshell::Cmd<'a>,
}

impl<'a> Cmd<'a> {
    pub fn new(cmd: xshell::Cmd<'a>) -> Self {
        Self { inner: cmd }
    }

    pub fn run(self) -> anyhow::Result<()> {
        if global_config().verbose {
            logger::step(format!("Running: {}", self.inner));
        }
        self.inner.run()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str) -> Command {
        let mut command = Command::new("sh");
        command.args(["-c", script]);
        command
    }

    #[test]
    fn test_captures_both_streams() {
        let output = run_streaming(sh("echo out.line:1; echo diagnostics >&2")).unwrap();
        assert_eq!(output.stdout, "out.line:1\n");
        assert_eq!(output.stderr, "diagnostics\n");
    }

    #[test]
    fn test_nonzero_exit_keeps_buffers() {
        let err = run_streaming(sh("echo partial; echo boom >&2; exit 3")).unwrap_err();
        let err = err.downcast::<CmdError>().expect("expected CmdError");
        assert_eq!(err.exit_code, Some(3));
        assert!(err.command.contains("sh -c"));
        assert_eq!(err.stdout, "partial\n");
        assert_eq!(err.stderr, "boom\n");
    }

    #[test]
    fn test_interleaved_large_output_does_not_deadlock() {
        // Both pipes get more than a pipe buffer's worth of data.
        let output = run_streaming(sh(
            "i=0; while [ $i -lt 20000 ]; do echo line $i; echo err $i >&2; i=$((i+1)); done",
        ))
        .unwrap();
        assert_eq!(output.stdout.lines().count(), 20000);
        assert_eq!(output.stderr.lines().count(), 20000);
    }

    #[test]
    fn test_error_message_mentions_code_and_output() {
        let err = run_streaming(sh("echo ctx; exit 1")).unwrap_err();
        let rendered = format!("{err}");
        assert!(rendered.contains("exited with code 1"));
        assert!(rendered.contains("ctx"));
    }
}
