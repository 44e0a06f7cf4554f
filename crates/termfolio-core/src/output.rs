// crates/termfolio-core/src/output.rs - Command results
//
// Every command line produces exactly one terminal value: an `Output` on
// success or a `CommandError` on failure. Neither is ever thrown past the
// dispatcher; the caller decides how to style and display them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::RenderError;

/// Successful result of a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Output {
    /// Ready-to-insert HTML fragment
    Html { html: String },
    /// Plain message, rendered neutrally
    Text { text: String },
    /// The caller should move to `path` (and may show `message` meanwhile)
    Navigate { path: String, message: String },
    /// The caller should open `url` outside the terminal
    OpenUrl { url: String, message: String },
    /// The caller should clear its display
    Clear,
}

impl Output {
    pub fn html(html: impl Into<String>) -> Self {
        Self::Html { html: html.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn navigate(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::Navigate {
            message: format!("Navigating to {}...", path),
            path,
        }
    }
}

/// Errors a command can report
///
/// Messages are written for the person at the prompt, not for logs.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("command not found: {0}")]
    UnknownCommand(String),

    #[error("{message}")]
    MissingArgument {
        command: &'static str,
        message: &'static str,
    },

    #[error("{command}: cannot access '{path}': No such file or directory")]
    PathNotFound { command: &'static str, path: String },

    #[error("{command}: cannot open '{path}': Not a directory")]
    NotADirectory { command: &'static str, path: String },

    #[error("File '{0}' not found.")]
    DocumentNotFound(String),

    #[error("No manual entry for {0}")]
    UnknownManualTarget(String),

    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    #[error("Could not render '{path}': {source}")]
    Render {
        path: String,
        #[source]
        source: RenderError,
    },
}

impl CommandError {
    /// Short machine-friendly name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownCommand(_) => "unknown_command",
            Self::MissingArgument { .. } => "missing_argument",
            Self::PathNotFound { .. } => "path_not_found",
            Self::NotADirectory { .. } => "not_a_directory",
            Self::DocumentNotFound(_) => "document_not_found",
            Self::UnknownManualTarget(_) => "unknown_manual_target",
            Self::InvalidExpression(_) => "invalid_expression",
            Self::Render { .. } => "render",
        }
    }
}

/// Result type for command execution
pub type CommandResult = Result<Output, CommandError>;
