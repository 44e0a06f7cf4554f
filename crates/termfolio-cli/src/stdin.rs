// crates/termfolio-cli/src/stdin.rs - Command lines from argument or pipe
//
// `termfolio run` takes one line as an argument, or a small script on stdin:
// one command per line, blank lines and `#` comments skipped.

use anyhow::{Context as AnyhowContext, Result, bail};
use std::io::{self, BufRead, IsTerminal};

/// Command lines to run, from the argument if given, otherwise from stdin
///
/// ```bash
/// termfolio run "ls posts"                     # One line
/// printf 'cd posts\nls\n' | termfolio run      # A script, one session
/// ```
pub fn read_lines_or_stdin(arg: Option<&str>) -> Result<Vec<String>> {
    if let Some(line) = arg {
        return Ok(vec![line.to_string()]);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        bail!(
            "No command line provided. Pass one as an argument or pipe a script.\n\nExamples:\n  termfolio run \"ls posts\"\n  printf 'cd posts\\nls\\n' | termfolio run"
        );
    }

    let lines = script_lines(stdin.lock()).context("Failed to read commands from stdin")?;
    if lines.is_empty() {
        bail!("No commands found on stdin");
    }
    Ok(lines)
}

fn script_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        lines.push(line.to_string());
    }
    Ok(lines)
}
