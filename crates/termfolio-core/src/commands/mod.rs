// crates/termfolio-core/src/commands/mod.rs - Command Handler Modules
//
// Handlers are free functions of (arguments, context). The context carries every
// dependency a handler may read: the registry, the content library, the
// configuration, the caller's current path and history, and the invocation
// time. Nothing here mutates shared state; side effects (navigation, clearing
// the display, opening a URL) come back as `Output` intents.
//
// MODULE ORGANIZATION:
// - fs: commands over the virtual filesystem (ls, cd, cat, tree, pwd, whoami)
// - info: introspection and session commands (help, man, history)
// - system: fixed-output and intent commands (date, echo, uname, neofetch, ...)
// - calc: arithmetic expression evaluator

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::TerminalConfig;
use crate::document::ContentLibrary;
use crate::output::CommandResult;
use crate::registry::{CommandKind, CommandRegistry};
use crate::vfs::{VirtualNode, build_virtual_fs};

pub mod calc;
pub mod fs;
pub mod info;
pub mod system;

/// Read-only view of everything a handler may depend on
#[derive(Clone, Copy)]
pub struct CommandContext<'a> {
    pub registry: &'a CommandRegistry,
    pub library: &'a ContentLibrary,
    pub config: &'a TerminalConfig,
    /// Normalized logical path the caller is "in"
    pub cwd: &'a str,
    /// Previously submitted lines, oldest first
    pub history: &'a [String],
    pub now: DateTime<Utc>,
}

impl CommandContext<'_> {
    /// Build a fresh virtual filesystem from the current document list
    pub fn virtual_fs(&self) -> VirtualNode {
        build_virtual_fs(self.library.documents())
    }

    /// Extension shown on file leaves ("md")
    pub fn extension(&self) -> &str {
        &self.config.content.extension
    }

    /// Path as shown to the user, prefixed with the configured home
    pub fn display_path(&self, path: &str) -> String {
        let home = self.config.shell.home.trim_end_matches('/');
        if path == crate::path::ROOT {
            home.to_string()
        } else {
            format!("{}{}", home, path)
        }
    }
}

/// Run one command
pub async fn execute(kind: CommandKind, args: &[String], ctx: &CommandContext<'_>) -> CommandResult {
    debug!(command = kind.name(), ?args, cwd = ctx.cwd, "executing command");

    match kind {
        CommandKind::Help => info::help(ctx),
        CommandKind::Ls => fs::ls(args, ctx),
        CommandKind::Cat => fs::cat(args, ctx).await,
        CommandKind::Cd => fs::cd(args, ctx),
        CommandKind::Whoami => fs::whoami(ctx).await,
        CommandKind::Clear => Ok(system::clear()),
        CommandKind::Github => Ok(system::github(ctx)),
        CommandKind::Pwd => Ok(fs::pwd(ctx)),
        CommandKind::Date => Ok(system::date(ctx)),
        CommandKind::Echo => Ok(system::echo(args)),
        CommandKind::History => Ok(info::history(ctx)),
        CommandKind::Man => info::man(args, ctx),
        CommandKind::Uname => Ok(system::uname(ctx)),
        CommandKind::Neofetch => Ok(system::neofetch(ctx)),
        CommandKind::Fortune => Ok(system::fortune(ctx)),
        CommandKind::Tree => fs::tree(args, ctx),
        CommandKind::Calc => calc::handle(args),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::document::{DocumentRef, InlineDocument};
    use chrono::TimeZone;
    use std::sync::Arc;

    /// Owned pieces a `CommandContext` borrows from
    pub struct Fixture {
        pub registry: CommandRegistry,
        pub library: ContentLibrary,
        pub config: TerminalConfig,
        pub cwd: String,
        pub history: Vec<String>,
    }

    impl Fixture {
        pub fn new(paths: &[&str]) -> Self {
            let documents = paths
                .iter()
                .map(|p| Arc::new(InlineDocument::new(*p, format!("# {}", p))) as DocumentRef)
                .collect();
            Self {
                registry: CommandRegistry::builtin(),
                library: ContentLibrary::from_documents(documents),
                config: TerminalConfig::default(),
                cwd: "/".to_string(),
                history: Vec::new(),
            }
        }

        pub fn at(mut self, cwd: &str) -> Self {
            self.cwd = cwd.to_string();
            self
        }

        pub fn ctx(&self) -> CommandContext<'_> {
            CommandContext {
                registry: &self.registry,
                library: &self.library,
                config: &self.config,
                cwd: &self.cwd,
                history: &self.history,
                now: Utc.with_ymd_and_hms(2024, 3, 9, 12, 30, 0).unwrap(),
            }
        }
    }

    pub fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }
}
