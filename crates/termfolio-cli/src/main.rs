// crates/termfolio-cli/src/main.rs - CLI Application Entry Point
//
// Drives the termfolio terminal from a real shell. Each subcommand hands the
// terminal's results to stdout: one line at a time (`run`), interactively
// (`shell`), or as metadata (`commands`).
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   User Input    │───▶│   CLI Parser     │───▶│  Command Handlers   │
// │ (clap commands) │    │ (main function)  │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                 │                        │
//                                 ▼                        ▼
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │     Context      │    │  termfolio-core     │
//                        │ (config+content) │    │ (Terminal, Session) │
//                        └──────────────────┘    └─────────────────────┘
//
// EXAMPLE USAGE:
// ```bash
// termfolio init                          # Config and starter content
// termfolio run "ls posts"                # Print one HTML fragment
// termfolio run --json "cat about.md"     # Machine-readable result
// termfolio --cwd /posts shell            # Interactive prompt
// TERMFOLIO_LOG=debug termfolio run tree  # Trace content loading
// ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod context;
mod stdin;

use cli::Cli;
use context::Context;

/// Main entry point - minimal and focused on orchestration
///
/// 1. Parse command-line arguments using clap
/// 2. Install the log subscriber (stderr, so stdout stays pipeable)
/// 3. Handle commands that need no content (init, completions)
/// 4. Load configuration and content into a Context
/// 5. Dispatch to the command handler
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        cli::Commands::Init { path } => return commands::init::handle(path.clone()),
        #[cfg(feature = "completions")]
        cli::Commands::Completions { shell } => {
            commands::completions::handle(*shell);
            return Ok(());
        }
        _ => {}
    }

    let ctx = Context::new(&cli)?;

    match cli.command {
        cli::Commands::Run { line, json } => commands::run::handle(&ctx, line, json).await,
        cli::Commands::Shell => commands::shell::handle(&ctx).await,
        cli::Commands::Commands { json } => commands::list::handle(&ctx, json),
        cli::Commands::Init { .. } => unreachable!(), // Already handled above
        #[cfg(feature = "completions")]
        cli::Commands::Completions { .. } => unreachable!(),
    }
}

/// TERMFOLIO_LOG takes precedence; otherwise -v raises the default `warn`
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("TERMFOLIO_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
