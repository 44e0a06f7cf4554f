use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "termfolio")]
#[command(about = "A shell-like terminal over a portfolio's content collection")]
#[command(version)]
pub struct Cli {
    /// Content directory (overrides config and TERMFOLIO_CONTENT)
    #[arg(short, long, global = true)]
    pub content: Option<PathBuf>,

    /// Config file (defaults to .termfolio/config.toml in the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Logical directory to start in
    #[arg(long, global = true, default_value = "/")]
    pub cwd: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create a config file and a starter content directory
    Init {
        /// Where to initialize (defaults to current directory)
        path: Option<PathBuf>,
    },

    /// Execute one command line and print the resulting fragment
    Run {
        /// Command line, e.g. "ls posts" (read from stdin when omitted)
        line: Option<String>,

        /// Output as JSON for machine processing
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive prompt
    Shell,

    /// List the commands the terminal understands
    Commands {
        /// Output as JSON for machine processing
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    #[cfg(feature = "completions")]
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}
