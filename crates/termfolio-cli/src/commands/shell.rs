// crates/termfolio-cli/src/commands/shell.rs - Interactive prompt
//
// Reads lines from stdin and submits them to the terminal against one
// long-lived session, so `cd` and `history` behave as they do in the browser.
// Intents are acted on locally: Clear wipes the screen, Navigate moves the
// prompt, OpenUrl prints the link.

use anyhow::Result;
use console::{Term, style};
use std::io::Write;
use termfolio_core::{Output, Session, Terminal, html};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::context::Context;

const BANNER: &str = "Welcome to termfolio. Type 'help' to list commands, 'exit' to leave.";

pub async fn handle(ctx: &Context) -> Result<()> {
    let term = Term::stdout();
    let mut session = ctx.session();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", style(BANNER).dim());
    loop {
        print!("{} ", prompt(&ctx.terminal, &session));
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        let line = line.trim();
        if matches!(line, "exit" | "quit" | "logout") {
            break;
        }

        let result = ctx.terminal.submit(&mut session, line).await;
        match &result {
            Ok(Output::Clear) => term.clear_screen()?,
            Ok(Output::Navigate { path, .. }) => debug!(path = %path, "navigated"),
            Ok(Output::OpenUrl { url, message }) => {
                println!("{}", message);
                println!("{}", style(url).underlined());
                continue;
            }
            _ => {}
        }

        let fragment = html::render(&result);
        if fragment.is_empty() {
            continue;
        }
        if result.is_err() {
            println!("{}", style(fragment).red());
        } else {
            println!("{}", fragment);
        }
    }

    Ok(())
}

/// `user@host:~/posts$` with the configured home standing in for `~`
fn prompt(terminal: &Terminal, session: &Session) -> String {
    let location = match session.cwd() {
        "/" => "~".to_string(),
        cwd => format!("~{}", cwd),
    };
    format!(
        "{}:{}$",
        style(&terminal.config().system.host).green().bold(),
        style(location).blue().bold()
    )
}
