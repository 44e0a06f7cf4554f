//! # Termfolio Core
//!
//! Command dispatch engine and virtual filesystem behind a terminal-style
//! portfolio site.
//!
//! A flat collection of content documents (each addressed by a slash-delimited
//! logical path) is presented as a directory tree, and shell-like command lines
//! (`ls`, `cd`, `cat`, `tree`, `man`, ...) are dispatched against it. Every line
//! produces one [`Output`] or one [`CommandError`]; the caller renders it with
//! [`html::render`] and acts on any intent it carries (navigation, clearing the
//! display, opening a URL).
//!
//! ```no_run
//! use termfolio_core::{ContentLibrary, Session, Terminal, TerminalConfig, html};
//!
//! # async fn run() {
//! let library = ContentLibrary::scan("content".as_ref(), "md");
//! let terminal = Terminal::new(library, TerminalConfig::default());
//! let mut session = Session::new();
//!
//! let result = terminal.submit(&mut session, "ls posts").await;
//! println!("{}", html::render(&result));
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod document;
pub mod html;
pub mod output;
pub mod path;
pub mod registry;
pub mod session;
pub mod terminal;
pub mod vfs;

pub use commands::CommandContext;
pub use config::{ConfigError, ConfigManager, TerminalConfig};
pub use document::{
    ContentDocument, ContentLibrary, DocumentRef, InlineDocument, MarkdownFile, RenderError,
};
pub use output::{CommandError, CommandResult, Output};
pub use registry::{CommandDescriptor, CommandKind, CommandRegistry};
pub use session::Session;
pub use terminal::{CommandLine, Terminal, tokenize};
pub use vfs::{VirtualNode, build_virtual_fs};
