// crates/termfolio-cli/src/commands/list.rs - Command table listing
//
// Backs `termfolio commands`: the registry as an aligned table or as JSON.

use anyhow::Result;
use termfolio_core::CommandDescriptor;

use crate::context::Context;

/// List every command the terminal understands
///
/// - Human-readable: name and description, aligned, in help order
/// - Machine-readable: JSON descriptors for scripting
pub fn handle(ctx: &Context, json: bool) -> Result<()> {
    let descriptors: Vec<&CommandDescriptor> = ctx.terminal.registry().iter().collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
        return Ok(());
    }

    let width = descriptors.iter().map(|d| d.name.len()).max().unwrap_or(0);
    for descriptor in &descriptors {
        println!(
            "{:<width$}  {}",
            descriptor.name,
            descriptor.description,
            width = width
        );
    }
    println!();
    println!(
        "{} commands, {} documents under {}",
        descriptors.len(),
        ctx.terminal.library().len(),
        ctx.content_root().display()
    );

    Ok(())
}
