use colored::Colorize;

/// Print an error and its cause chain. Exiting is left to the caller.
pub fn log_error(error: anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);
    for cause in error.chain().skip(1) {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
    }
}
