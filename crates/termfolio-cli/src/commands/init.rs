// crates/termfolio-cli/src/commands/init.rs - Project Initialization Command
//
// init runs before any configuration exists, so it works from a bare path
// instead of a loaded Context.

use anyhow::{Context as AnyhowContext, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use termfolio_core::ConfigManager;
use tracing::info;

const STARTER_WHOAMI: &str = "# Hello\n\nThis is `whoami.md`. Edit it to introduce yourself.\n";

/// Initialize a termfolio project
///
/// CREATED STRUCTURE:
/// ```text
/// project/
/// ├── .termfolio/
/// │   └── config.toml
/// └── content/
///     └── whoami.md
/// ```
///
/// Existing files are left untouched, so running init twice is harmless.
///
/// EXAMPLES:
/// ```bash
/// termfolio init               # Initialize in current directory
/// termfolio init ~/portfolio   # Initialize in a specific location
/// ```
pub fn handle(path: Option<PathBuf>) -> Result<()> {
    let root = match path {
        Some(path) => path,
        None => env::current_dir().context("Failed to determine working directory")?,
    };

    let created = init_project(&root)?;

    println!("✅ Initialized termfolio project at: {}", root.display());
    for file in &created {
        println!("📄 Created {}", file.display());
    }
    println!();
    println!("💡 Next steps:");
    println!("   termfolio run ls");
    println!("   termfolio run whoami");
    println!("   termfolio shell");

    Ok(())
}

/// Write config and starter content, returning the files actually created
fn init_project(root: &Path) -> Result<Vec<PathBuf>> {
    let config_dir = root.join(".termfolio");
    let content_dir = root.join("content");
    fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create {}", config_dir.display()))?;
    fs::create_dir_all(&content_dir)
        .with_context(|| format!("Failed to create {}", content_dir.display()))?;

    let mut created = Vec::new();
    let files = [
        (
            config_dir.join("config.toml"),
            ConfigManager::generate_default_config(),
        ),
        (content_dir.join("whoami.md"), STARTER_WHOAMI.to_string()),
    ];
    for (path, contents) in files {
        if path.exists() {
            info!(file = %path.display(), "keeping existing file");
            continue;
        }
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        created.push(path);
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_and_preserves() {
        let dir = TempDir::new().unwrap();
        let created = init_project(dir.path()).unwrap();
        assert_eq!(created.len(), 2);

        let config = ConfigManager::load_file(&dir.path().join(".termfolio/config.toml")).unwrap();
        assert_eq!(config.content.extension, "md");

        fs::write(dir.path().join("content/whoami.md"), "# Mine\n").unwrap();
        assert!(init_project(dir.path()).unwrap().is_empty());
        assert_eq!(
            fs::read_to_string(dir.path().join("content/whoami.md")).unwrap(),
            "# Mine\n"
        );
    }
}
