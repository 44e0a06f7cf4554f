// crates/termfolio-core/src/session.rs - Caller-owned navigation state
//
// The current directory and the command history belong to whoever drives the
// terminal (a browser page, the CLI prompt), not to the handlers. Handlers get
// a read-only view through `CommandContext`; when `cd` wants to move, it returns
// a navigation intent and the owner applies it here.

use serde::{Deserialize, Serialize};

use crate::output::Output;
use crate::path::{self, ROOT};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    cwd: String,
    history: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::at(ROOT)
    }

    /// Session starting at an arbitrary logical path (normalized first)
    pub fn at(cwd: &str) -> Self {
        Self {
            cwd: path::normalize_path(ROOT, cwd),
            history: Vec::new(),
        }
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Remember a submitted command line; blank lines are not recorded
    pub fn record(&mut self, line: &str) {
        let line = line.trim();
        if !line.is_empty() {
            self.history.push(line.to_string());
        }
    }

    /// Follow a navigation intent, returning whether the path changed
    pub fn apply(&mut self, output: &Output) -> bool {
        match output {
            Output::Navigate { path, .. } if *path != self.cwd => {
                self.cwd = path::normalize_path(ROOT, path);
                true
            }
            _ => false,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_skips_blank_lines() {
        let mut session = Session::new();
        session.record("ls");
        session.record("   ");
        session.record("  cat whoami  ");
        assert_eq!(session.history(), &["ls".to_string(), "cat whoami".to_string()]);
    }

    #[test]
    fn test_apply_navigation() {
        let mut session = Session::new();
        assert!(session.apply(&Output::navigate("/posts")));
        assert_eq!(session.cwd(), "/posts");

        assert!(!session.apply(&Output::navigate("/posts")));
        assert!(!session.apply(&Output::text("hi")));
        assert_eq!(session.cwd(), "/posts");
    }

    #[test]
    fn test_starting_path_is_normalized() {
        assert_eq!(Session::at("posts//2024/").cwd(), "/posts/2024");
    }
}
