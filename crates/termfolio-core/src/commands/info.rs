// crates/termfolio-core/src/commands/info.rs - Introspection commands
//
// help and man are pure presentation over the registry; history reads the
// caller's session history.

use crate::html::{self, escape};
use crate::output::{CommandError, CommandResult, Output};

use super::CommandContext;

pub fn help(ctx: &CommandContext<'_>) -> CommandResult {
    let entries: String = ctx
        .registry
        .iter()
        .map(|cmd| {
            format!(
                r#"<div class="terminal-command-help"><span class="text-terminal-text">{}</span><span class="text-terminal-muted"> - {}</span></div>"#,
                escape(cmd.name),
                escape(cmd.description)
            )
        })
        .collect();

    Ok(Output::html(format!(
        r#"{}<div class="grid grid-cols-1 md:grid-cols-2 gap-2 ml-4">{}</div>"#,
        html::heading("Available Commands:"),
        entries
    )))
}

/// Manual page for a command; the name is matched lower-cased
pub fn man(args: &[String], ctx: &CommandContext<'_>) -> CommandResult {
    let Some(arg) = args.first() else {
        return Err(CommandError::MissingArgument {
            command: "man",
            message: "What manual page do you want? Usage: man [command]",
        });
    };

    let name = arg.to_lowercase();
    let Some(cmd) = ctx.registry.get(&name) else {
        return Err(CommandError::UnknownManualTarget(name));
    };

    let section = |title: &str, body: &str| {
        format!(
            r#"<p><span class="text-terminal-text font-bold">{}</span></p><p class="ml-4">{}</p>"#,
            title, body
        )
    };

    Ok(Output::html(format!(
        r#"{}<div class="space-y-2">{}{}{}</div>"#,
        html::heading(&format!("Manual: {}", cmd.name)),
        section("NAME", &format!("{} - {}", cmd.name, escape(cmd.description))),
        section("SYNOPSIS", &escape(cmd.synopsis)),
        section("DESCRIPTION", &escape(cmd.manual)),
    )))
}

pub fn history(ctx: &CommandContext<'_>) -> Output {
    if ctx.history.is_empty() {
        return Output::text("No command history.");
    }

    let rows: String = ctx
        .history
        .iter()
        .enumerate()
        .map(|(index, line)| {
            format!(
                r#"<div><span class="text-terminal-muted">{}</span> <span class="text-terminal-text">{}</span></div>"#,
                index + 1,
                escape(line)
            )
        })
        .collect();

    Output::html(format!(
        r#"{}<div class="space-y-1">{}</div>"#,
        html::heading("Command History:"),
        rows
    ))
}
