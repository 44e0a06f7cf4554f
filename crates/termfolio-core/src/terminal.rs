// crates/termfolio-core/src/terminal.rs - Command dispatcher
//
// DATA FLOW:
// input line ─▶ tokenize ─▶ registry lookup ─▶ handler(args, context) ─▶ Output | CommandError
//
// The terminal owns the read-only pieces (registry, content library,
// configuration). The caller owns the `Session` and passes it in for every
// line, applying navigation intents afterwards. One line in, one result out:
// handler failures come back as `CommandError` values and never escape as
// panics.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::commands::{self, CommandContext};
use crate::config::TerminalConfig;
use crate::document::ContentLibrary;
use crate::output::{CommandResult, Output};
use crate::registry::CommandRegistry;
use crate::session::Session;

/// A command line split into name and positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub name: String,
    pub args: Vec<String>,
}

/// Split a line on whitespace into command name and arguments
///
/// No quoting or flag grammar: `curl -s file` yields the arguments `-s` and
/// `file`. Returns `None` for a blank line.
pub fn tokenize(line: &str) -> Option<CommandLine> {
    let mut tokens = line.split_whitespace().map(str::to_string);
    let name = tokens.next()?;
    Some(CommandLine {
        name,
        args: tokens.collect(),
    })
}

pub struct Terminal {
    registry: CommandRegistry,
    library: ContentLibrary,
    config: TerminalConfig,
}

impl Terminal {
    pub fn new(library: ContentLibrary, config: TerminalConfig) -> Self {
        Self::with_registry(CommandRegistry::builtin(), library, config)
    }

    pub fn with_registry(
        registry: CommandRegistry,
        library: ContentLibrary,
        config: TerminalConfig,
    ) -> Self {
        info!(
            commands = registry.len(),
            documents = library.len(),
            "terminal ready"
        );
        Self {
            registry,
            library,
            config,
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn library(&self) -> &ContentLibrary {
        &self.library
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    /// Execute one input line against the caller's session
    pub async fn execute(&self, session: &Session, line: &str) -> CommandResult {
        self.execute_at(session, line, Utc::now()).await
    }

    /// Execute with an explicit clock, for reproducible output
    pub async fn execute_at(
        &self,
        session: &Session,
        line: &str,
        now: DateTime<Utc>,
    ) -> CommandResult {
        let Some(command) = tokenize(line) else {
            return Ok(Output::text(""));
        };

        let descriptor = self.registry.lookup(&command.name)?;
        let ctx = CommandContext {
            registry: &self.registry,
            library: &self.library,
            config: &self.config,
            cwd: session.cwd(),
            history: session.history(),
            now,
        };

        let result = commands::execute(descriptor.kind, &command.args, &ctx).await;
        if let Err(err) = &result {
            debug!(command = descriptor.name, kind = err.kind(), error = %err, "command failed");
        }
        result
    }

    /// Execute a line and update the session: record history, follow navigation
    pub async fn submit(&self, session: &mut Session, line: &str) -> CommandResult {
        let result = self.execute(session, line).await;
        session.record(line);
        if let Ok(output) = &result {
            session.apply(output);
        }
        result
    }
}
