//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::Parser;

/// ClipClear - empty the system clipboard
#[derive(Parser, Debug)]
#[command(name = "clipclear")]
#[command(version)]
#[command(about = "Empty the system clipboard using the best mechanism available")]
#[command(long_about = None)]
pub struct Cli {
    /// Write the attempt log to this file instead of the default location
    #[arg(long, value_name = "PATH", env = "CLIPCLEAR_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_no_args() {
        let cli = Cli::parse_from(["clipclear"]);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn cli_parses_log_file() {
        let cli = Cli::parse_from(["clipclear", "--log-file", "/tmp/out.log"]);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/out.log")));
    }
}
