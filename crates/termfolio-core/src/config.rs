// crates/termfolio-core/src/config.rs - Configuration System
//
// Everything about the terminal that varies between sites lives here: the fake
// home directory shown by `pwd`, which document `whoami` prints, where content
// is loaded from, what `neofetch` claims about the machine.
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Command-line arguments (--content, etc.)
// 2. Environment variables (TERMFOLIO_CONTENT, TERMFOLIO_HOME, TERMFOLIO_GITHUB)
// 3. Explicit config file, or .termfolio/config.toml in the working directory
// 4. Global config file (~/.config/termfolio/config.toml)
// 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid TOML syntax in {file}: {error}")]
    ParseError { file: String, error: String },

    #[error("Invalid configuration value: {0}")]
    ValidationError(String),

    #[error("I/O error reading config: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete configuration schema for the terminal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Shell behavior: home prefix, navigable pages, whoami document
    #[serde(default)]
    pub shell: ShellConfig,

    /// Links to the site owner's profiles
    #[serde(default)]
    pub profile: ProfileConfig,

    /// What `uname` and `neofetch` report
    #[serde(default)]
    pub system: SystemConfig,

    /// Where content documents come from
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Prefix shown in front of the current path by `pwd` and `cd`
    #[serde(default = "default_home")]
    pub home: String,

    /// Logical path of the document printed by `whoami`
    #[serde(default = "default_whoami")]
    pub whoami_document: String,

    /// Top-level site pages `cd` accepts even without content behind them
    #[serde(default = "default_pages")]
    pub pages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_github_url")]
    pub github_url: String,
}

/// System information shown by `uname` and `neofetch`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_uname")]
    pub uname: String,
    #[serde(default = "default_os")]
    pub os: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_kernel")]
    pub kernel: String,
    #[serde(default = "default_packages")]
    pub packages: String,
    #[serde(default = "default_wm")]
    pub wm: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_terminal")]
    pub terminal: String,
    #[serde(default = "default_cpu")]
    pub cpu: String,
    #[serde(default = "default_memory")]
    pub memory: String,
}

impl SystemConfig {
    /// Label/value pairs in neofetch display order
    pub fn fields(&self) -> [(&'static str, &str); 9] {
        [
            ("OS", &self.os),
            ("Host", &self.host),
            ("Kernel", &self.kernel),
            ("Packages", &self.packages),
            ("WM", &self.wm),
            ("Theme", &self.theme),
            ("Terminal", &self.terminal),
            ("CPU", &self.cpu),
            ("Memory", &self.memory),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Content directory; relative paths resolve against the working directory
    #[serde(default = "default_content_root")]
    pub root: PathBuf,

    /// File extension of content documents, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

/// Configuration loading and management
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from all sources
    ///
    /// `explicit` is a config file named on the command line; it must exist.
    /// Without it, `.termfolio/config.toml` under `cwd` is used if present.
    /// The chosen file is layered over the global one key by key.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> ConfigResult<TerminalConfig> {
        let mut layers = Vec::new();
        if let Some(global) = Self::global_config_path().filter(|p| p.exists()) {
            layers.push(global);
        }

        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound(path.display().to_string()));
                }
                layers.push(path.to_path_buf());
            }
            None => {
                let local = cwd.join(".termfolio").join("config.toml");
                if local.exists() {
                    layers.push(local);
                }
            }
        }

        let mut config = Self::load_layers(&layers)?;
        Self::apply_env_overrides(&mut config);
        Self::validate_config(&config)?;

        Ok(config)
    }

    /// Merge config files in order, later files overriding earlier ones per key
    ///
    /// EXAMPLES:
    /// global `[system] uname = "A"` + local `[shell] home = "/h"` keeps both;
    /// global `[system] uname = "A"` + local `[system] os = "B"` keeps both too.
    pub fn load_layers(files: &[PathBuf]) -> ConfigResult<TerminalConfig> {
        let mut merged = toml::Table::new();
        for file in files {
            debug!(file = %file.display(), "loading config layer");
            let content = std::fs::read_to_string(file)?;
            let table = Self::parse_table(&content, &file.display().to_string())?;
            merge_tables(&mut merged, table);
        }

        toml::Value::Table(merged)
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::ParseError {
                file: files
                    .iter()
                    .map(|f| f.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
                error: e.to_string(),
            })
    }

    /// Parse one TOML config file; missing sections fall back to defaults
    pub fn load_file(path: &Path) -> ConfigResult<TerminalConfig> {
        debug!(file = %path.display(), "loading config");
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(content: &str, origin: &str) -> ConfigResult<TerminalConfig> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            file: origin.to_string(),
            error: e.to_string(),
        })
    }

    fn parse_table(content: &str, origin: &str) -> ConfigResult<toml::Table> {
        content.parse::<toml::Table>().map_err(|e| ConfigError::ParseError {
            file: origin.to_string(),
            error: e.to_string(),
        })
    }

    /// Location of the per-user config file, if the platform has one
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("termfolio").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// - TERMFOLIO_CONTENT -> content.root
    /// - TERMFOLIO_HOME    -> shell.home
    /// - TERMFOLIO_GITHUB  -> profile.github_url
    fn apply_env_overrides(config: &mut TerminalConfig) {
        use std::env;

        if let Ok(root) = env::var("TERMFOLIO_CONTENT") {
            config.content.root = PathBuf::from(root);
        }

        if let Ok(home) = env::var("TERMFOLIO_HOME") {
            config.shell.home = home;
        }

        if let Ok(url) = env::var("TERMFOLIO_GITHUB") {
            config.profile.github_url = url;
        }
    }

    /// Validate the final configuration for consistency and correctness
    pub fn validate_config(config: &TerminalConfig) -> ConfigResult<()> {
        if !config.shell.home.starts_with('/') {
            return Err(ConfigError::ValidationError(format!(
                "shell.home must be an absolute path, got '{}'",
                config.shell.home
            )));
        }

        if config.shell.whoami_document.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "shell.whoami_document cannot be empty".to_string(),
            ));
        }

        if let Some(page) = config.shell.pages.iter().find(|p| p.is_empty() || p.contains('/')) {
            return Err(ConfigError::ValidationError(format!(
                "shell.pages entries must be single path segments, got '{}'",
                page
            )));
        }

        let ext = &config.content.extension;
        if ext.is_empty() || ext.starts_with('.') {
            return Err(ConfigError::ValidationError(format!(
                "content.extension must be a bare extension like \"md\", got '{}'",
                ext
            )));
        }

        if !config.profile.github_url.starts_with("http") {
            return Err(ConfigError::ValidationError(format!(
                "profile.github_url must be an http(s) URL, got '{}'",
                config.profile.github_url
            )));
        }

        Ok(())
    }

    /// Generate a default configuration file with comments
    pub fn generate_default_config() -> String {
        r#"# Termfolio Configuration File
#
# Lines starting with # are comments and are ignored.

[shell]
# Prefix shown by pwd and cd in front of the current path
home = "/home/x0"

# Document printed by `whoami` (logical path, no extension)
whoami_document = "whoami"

# Site pages `cd` accepts even when no content lives under them
pages = ["about", "contact", "posts", "projects", "articles"]

[profile]
github_url = "https://github.com/m-mdy-m"

[system]
uname = "AstroOS Terminal v1.0.0"
# os = "Void Linux x86_64"
# host = "x0 Terminal"

[content]
# Directory scanned for content documents
root = "content"
extension = "md"
"#
        .to_string()
    }
}

/// Deep-merge `overlay` into `base`; nested tables merge, other values replace
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(incoming) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, incoming);
                } else {
                    base.insert(key, toml::Value::Table(incoming));
                }
            }
            other => {
                base.insert(key, other);
            }
        }
    }
}

fn default_home() -> String {
    "/home/x0".to_string()
}
fn default_whoami() -> String {
    "whoami".to_string()
}
fn default_pages() -> Vec<String> {
    ["about", "contact", "posts", "projects", "articles"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_github_url() -> String {
    "https://github.com/m-mdy-m".to_string()
}
fn default_uname() -> String {
    "AstroOS Terminal v1.0.0".to_string()
}
fn default_os() -> String {
    "Void Linux x86_64".to_string()
}
fn default_host() -> String {
    "x0 Terminal".to_string()
}
fn default_kernel() -> String {
    "6.6.52_1".to_string()
}
fn default_packages() -> String {
    "xbps".to_string()
}
fn default_wm() -> String {
    "i3wm".to_string()
}
fn default_theme() -> String {
    "Terminal Dark".to_string()
}
fn default_terminal() -> String {
    "Web-based Terminal".to_string()
}
fn default_cpu() -> String {
    "JavaScript Engine".to_string()
}
fn default_memory() -> String {
    "Browser Memory Pool".to_string()
}
fn default_content_root() -> PathBuf {
    PathBuf::from("content")
}
fn default_extension() -> String {
    "md".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            home: default_home(),
            whoami_document: default_whoami(),
            pages: default_pages(),
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            github_url: default_github_url(),
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            uname: default_uname(),
            os: default_os(),
            host: default_host(),
            kernel: default_kernel(),
            packages: default_packages(),
            wm: default_wm(),
            theme: default_theme(),
            terminal: default_terminal(),
            cpu: default_cpu(),
            memory: default_memory(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: default_content_root(),
            extension: default_extension(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = TerminalConfig::default();
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let parsed =
            ConfigManager::parse(&ConfigManager::generate_default_config(), "generated").unwrap();
        assert_eq!(parsed, TerminalConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let parsed = ConfigManager::parse("[shell]\nhome = \"/home/guest\"\n", "inline").unwrap();
        assert_eq!(parsed.shell.home, "/home/guest");
        assert_eq!(parsed.shell.whoami_document, "whoami");
        assert_eq!(parsed.system.uname, "AstroOS Terminal v1.0.0");
    }

    #[test]
    fn test_invalid_toml_reports_origin() {
        let err = ConfigManager::parse("[shell\n", "broken.toml").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { ref file, .. } if file == "broken.toml"));
    }

    #[test]
    fn test_relative_home_rejected() {
        let mut config = TerminalConfig::default();
        config.shell.home = "home/x0".to_string();
        assert!(ConfigManager::validate_config(&config).is_err());
    }

    #[test]
    fn test_dotted_extension_rejected() {
        let mut config = TerminalConfig::default();
        config.content.extension = ".md".to_string();
        assert!(ConfigManager::validate_config(&config).is_err());
    }

    #[test]
    fn test_nested_page_rejected() {
        let mut config = TerminalConfig::default();
        config.shell.pages.push("posts/2024".to_string());
        assert!(ConfigManager::validate_config(&config).is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("site.toml");
        std::fs::write(&file, "[system]\nuname = \"TestOS\"\n").unwrap();

        let config = ConfigManager::load_file(&file).unwrap();
        assert_eq!(config.system.uname, "TestOS");
    }

    #[test]
    fn test_layers_merge_per_key() {
        let temp = TempDir::new().unwrap();
        let global = temp.path().join("global.toml");
        let local = temp.path().join("local.toml");
        std::fs::write(&global, "[system]\nuname = \"GlobalOS\"\nos = \"Plan 9\"\n").unwrap();
        std::fs::write(&local, "[shell]\nhome = \"/home/guest\"\n\n[system]\nos = \"Haiku\"\n")
            .unwrap();

        let config = ConfigManager::load_layers(&[global, local]).unwrap();
        assert_eq!(config.system.uname, "GlobalOS");
        assert_eq!(config.system.os, "Haiku");
        assert_eq!(config.shell.home, "/home/guest");
        assert_eq!(config.shell.whoami_document, "whoami");
    }

    #[test]
    fn test_no_layers_is_default() {
        assert_eq!(
            ConfigManager::load_layers(&[]).unwrap(),
            TerminalConfig::default()
        );
    }

    #[test]
    fn test_broken_layer_reports_origin() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("broken.toml");
        std::fs::write(&file, "[system\n").unwrap();

        let err = ConfigManager::load_layers(&[file]).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { ref file, .. } if file.ends_with("broken.toml")));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp = TempDir::new().unwrap();
        let err = ConfigManager::load(Some(&temp.path().join("nope.toml")), temp.path());
        assert!(matches!(err, Err(ConfigError::FileNotFound(_))));
    }
}
