// crates/termfolio-cli/src/commands/run.rs - Non-interactive execution
//
// Runs command lines against one session and prints each result. Lines come
// from the argument or from a piped script, so `cd` carries over between them.

use anyhow::Result;
use serde::Serialize;
use termfolio_core::{CommandError, Output, html};

use crate::context::Context;
use crate::stdin::read_lines_or_stdin;

#[derive(Serialize)]
#[serde(untagged)]
enum JsonResult<'a> {
    Ok { ok: bool, output: &'a Output },
    Err { ok: bool, error: JsonError },
}

#[derive(Serialize)]
struct JsonError {
    kind: &'static str,
    message: String,
}

impl<'a> JsonResult<'a> {
    fn from_result(result: &'a Result<Output, CommandError>) -> Self {
        match result {
            Ok(output) => JsonResult::Ok { ok: true, output },
            Err(err) => JsonResult::Err {
                ok: false,
                error: JsonError {
                    kind: err.kind(),
                    message: err.to_string(),
                },
            },
        }
    }
}

/// Execute command lines and print their results
///
/// Each HTML fragment goes to stdout. With `--json` a single line prints one
/// result object and a piped script prints an array of them. If any line
/// failed, every result is still printed and the process exits with status 1
/// so scripts can branch on it.
///
/// EXAMPLES:
/// ```bash
/// termfolio run "ls posts"
/// termfolio --cwd /posts run "cat hello.md"
/// termfolio run --json "cd nowhere" | jq .error.kind   # "path_not_found"
/// printf 'cd posts\nls\n' | termfolio run
/// ```
pub async fn handle(ctx: &Context, line: Option<String>, json: bool) -> Result<()> {
    let lines = read_lines_or_stdin(line.as_deref())?;
    let mut session = ctx.session();

    let mut results = Vec::with_capacity(lines.len());
    for line in &lines {
        results.push(ctx.terminal.submit(&mut session, line).await);
    }

    if json {
        let documents: Vec<JsonResult<'_>> = results.iter().map(JsonResult::from_result).collect();
        let rendered = match documents.as_slice() {
            [single] => serde_json::to_string_pretty(single)?,
            many => serde_json::to_string_pretty(many)?,
        };
        println!("{}", rendered);
    } else {
        for result in &results {
            println!("{}", html::render(result));
        }
    }

    if results.iter().any(|r| r.is_err()) {
        std::process::exit(1);
    }
    Ok(())
}
