use anyhow::{Context as AnyhowContext, Result};
use std::env;
use std::path::{Path, PathBuf};
use termfolio_core::{ConfigManager, ContentLibrary, Session, Terminal};
use tracing::info;

use crate::cli::Cli;

/// Application context that gets passed to command handlers
///
/// Holds the terminal (registry, content library, configuration) built once
/// from the command-line flags, plus the directory interactive sessions start
/// in.
pub struct Context {
    pub terminal: Terminal,
    content_root: PathBuf,
    start: String,
}

impl Context {
    /// Load configuration and scan content
    ///
    /// Content root precedence: --content flag > TERMFOLIO_CONTENT > config file > "content".
    pub fn new(cli: &Cli) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine working directory")?;

        let mut config = ConfigManager::load(cli.config.as_deref(), &cwd)
            .context("Failed to load configuration")?;
        if let Some(content) = &cli.content {
            config.content.root = content.clone();
        }

        let content_root = absolutize(&cwd, &config.content.root);
        let library = ContentLibrary::scan(&content_root, &config.content.extension);
        info!(root = %content_root.display(), documents = library.len(), "loaded content");

        Ok(Self {
            terminal: Terminal::new(library, config),
            content_root,
            start: cli.cwd.clone(),
        })
    }

    /// Fresh session positioned at the starting directory
    pub fn session(&self) -> Session {
        Session::at(&self.start)
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }
}

fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
