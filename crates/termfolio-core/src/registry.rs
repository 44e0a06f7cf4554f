// crates/termfolio-core/src/registry.rs - Command registry
//
// The set of commands is closed: `CommandKind` enumerates every command the
// terminal knows, and dispatch matches on it exhaustively, so adding a command
// without a handler is a compile error. The registry is the name-keyed table
// built from that enum once at startup and read-only afterwards. It is what
// `help` and `man` introspect and what the dispatcher looks names up in.

use indexmap::IndexMap;
use serde::Serialize;

use crate::output::CommandError;

/// Every command the terminal understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Help,
    Ls,
    Cat,
    Cd,
    Whoami,
    Clear,
    Github,
    Pwd,
    Date,
    Echo,
    History,
    Man,
    Uname,
    Neofetch,
    Fortune,
    Tree,
    Calc,
}

impl CommandKind {
    /// All commands, in the order `help` lists them
    pub const ALL: [CommandKind; 17] = [
        Self::Help,
        Self::Ls,
        Self::Cat,
        Self::Cd,
        Self::Whoami,
        Self::Clear,
        Self::Github,
        Self::Pwd,
        Self::Date,
        Self::Echo,
        Self::History,
        Self::Man,
        Self::Uname,
        Self::Neofetch,
        Self::Fortune,
        Self::Tree,
        Self::Calc,
    ];

    /// Name typed at the prompt
    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Ls => "ls",
            Self::Cat => "cat",
            Self::Cd => "cd",
            Self::Whoami => "whoami",
            Self::Clear => "clear",
            Self::Github => "github",
            Self::Pwd => "pwd",
            Self::Date => "date",
            Self::Echo => "echo",
            Self::History => "history",
            Self::Man => "man",
            Self::Uname => "uname",
            Self::Neofetch => "neofetch",
            Self::Fortune => "fortune",
            Self::Tree => "tree",
            Self::Calc => "calc",
        }
    }

    /// One-line description shown by `help`
    pub fn description(self) -> &'static str {
        match self {
            Self::Help => "Display available commands",
            Self::Ls => "List directory contents",
            Self::Cat => "Display file contents",
            Self::Cd => "Change directory",
            Self::Whoami => "Display user information",
            Self::Clear => "Clear the terminal",
            Self::Github => "Open GitHub profile",
            Self::Pwd => "Print working directory",
            Self::Date => "Display current date and time",
            Self::Echo => "Display a line of text",
            Self::History => "Display command history",
            Self::Man => "Display manual page for a command",
            Self::Uname => "Print system information",
            Self::Neofetch => "Display system information in a visually pleasing way",
            Self::Fortune => "Display a random fortune or quote",
            Self::Tree => "Display directory tree structure",
            Self::Calc => "Simple calculator",
        }
    }

    /// Usage line shown under SYNOPSIS
    pub fn synopsis(self) -> &'static str {
        match self {
            Self::Ls => "ls [directory]",
            Self::Cat => "cat filename",
            Self::Cd => "cd [directory]",
            Self::Echo => "echo [text]",
            Self::Man => "man command",
            Self::Tree => "tree [directory]",
            Self::Calc => "calc expression",
            other => other.name(),
        }
    }

    /// Longer text shown under DESCRIPTION
    pub fn manual(self) -> &'static str {
        match self {
            Self::Ls => {
                "List information about the files and directories in the current directory."
            }
            Self::Cat => "Concatenate and display the content of files.",
            Self::Cd => "Change the current directory. Use \"cd ..\" to go up one level.",
            Self::Whoami => "Display information about the user.",
            Self::Clear => "Clear the terminal screen.",
            Self::Github => "Open the GitHub profile in a new tab.",
            Self::Pwd => "Print the current working directory.",
            Self::Date => "Display the current date and time.",
            Self::Echo => "Display a line of text.",
            Self::History => "Display the command history.",
            Self::Man => "Display the manual page for a command.",
            Self::Uname => "Print system information.",
            Self::Neofetch => "Display system information in a visually pleasing way.",
            Self::Help => "Display a list of available commands.",
            Self::Tree => {
                "Display the content directory as a tree, starting from the given directory \
                 or the current one."
            }
            Self::Calc => {
                "Evaluate an arithmetic expression using + - * / %, parentheses and \
                 decimal numbers."
            }
            other => other.description(),
        }
    }
}

/// Static metadata for one registered command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub synopsis: &'static str,
    pub manual: &'static str,
    pub kind: CommandKind,
}

impl From<CommandKind> for CommandDescriptor {
    fn from(kind: CommandKind) -> Self {
        Self {
            name: kind.name(),
            description: kind.description(),
            synopsis: kind.synopsis(),
            manual: kind.manual(),
            kind,
        }
    }
}

/// Name -> descriptor table, in registration order
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: IndexMap<&'static str, CommandDescriptor>,
}

impl CommandRegistry {
    /// Registry with every built-in command
    pub fn builtin() -> Self {
        Self::with_commands(CommandKind::ALL)
    }

    /// Registry limited to the given commands (later duplicates are ignored)
    pub fn with_commands(kinds: impl IntoIterator<Item = CommandKind>) -> Self {
        let mut commands = IndexMap::new();
        for kind in kinds {
            commands
                .entry(kind.name())
                .or_insert_with(|| CommandDescriptor::from(kind));
        }
        Self { commands }
    }

    /// Case-sensitive lookup by command name
    pub fn lookup(&self, name: &str) -> Result<&CommandDescriptor, CommandError> {
        self.get(name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = CommandKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), CommandKind::ALL.len());
        assert_eq!(CommandRegistry::builtin().len(), CommandKind::ALL.len());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = CommandRegistry::builtin();

        assert_eq!(registry.lookup("ls").unwrap().kind, CommandKind::Ls);
        assert!(matches!(
            registry.lookup("LS"),
            Err(CommandError::UnknownCommand(name)) if name == "LS"
        ));
    }

    #[test]
    fn test_help_order_follows_registration() {
        let registry = CommandRegistry::builtin();
        let names: Vec<_> = registry.iter().map(|d| d.name).collect();
        assert_eq!(&names[..4], &["help", "ls", "cat", "cd"]);
    }

    #[test]
    fn test_manual_falls_back_to_description() {
        assert_eq!(CommandKind::Fortune.manual(), CommandKind::Fortune.description());
        assert_eq!(CommandKind::Fortune.synopsis(), "fortune");
        assert_eq!(CommandKind::Cat.synopsis(), "cat filename");
    }

    #[test]
    fn test_restricted_registry() {
        let registry =
            CommandRegistry::with_commands([CommandKind::Ls, CommandKind::Cat, CommandKind::Ls]);
        assert_eq!(registry.len(), 2);
        assert!(registry.get("help").is_none());
    }
}
