// crates/termfolio-core/src/commands/fs.rs - Filesystem-aware commands
//
// ls, cd, cat, tree, pwd and whoami. Paths are normalized against the caller's
// current path first, then checked against a virtual filesystem rebuilt from
// the content library for this call. `cat` is the exception: it matches the
// logical path against the document list directly, without walking the tree.

use crate::html::{self, escape};
use crate::output::{CommandError, CommandResult, Output};
use crate::path::{self, ROOT};
use crate::vfs::{ResolveError, VirtualNode};

use std::sync::LazyLock;

use super::CommandContext;

/// What `ls` and `tree` see inside a configured page that has no content
static EMPTY_PAGE: LazyLock<VirtualNode> = LazyLock::new(VirtualNode::empty_directory);

/// List the immediate children of a directory, sorted by name
pub fn ls(args: &[String], ctx: &CommandContext<'_>) -> CommandResult {
    let (target, shown) = target_path(args, ctx);
    let fs = ctx.virtual_fs();
    let dir = resolve_directory(&fs, &target, "ls", shown, ctx)?;

    let mut entries: Vec<(&String, &VirtualNode)> = dir
        .children()
        .map(|children| children.iter().collect())
        .unwrap_or_default();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let date = ctx.now.format("%a %b %d %Y").to_string();
    let items: Vec<String> = entries
        .into_iter()
        .map(|(name, node)| {
            let href = path::join(&target, name);
            format!(
                r#"<div class="flex"><span class="w-32 text-terminal-muted">{}</span><a href="{}" class="text-terminal-accent">{}</a></div>"#,
                date,
                escape(&href),
                escape(&display_name(name, node, ctx.extension())),
            )
        })
        .collect();

    let title = if target == ROOT {
        "Directory Contents".to_string()
    } else {
        format!("Directory Contents: {}", target)
    };

    Ok(Output::html(format!(
        r#"{}<div class="grid grid-cols-1 gap-1">{}</div>"#,
        html::heading(&title),
        items.join("\n")
    )))
}

/// Change directory by emitting a navigation intent
///
/// A target is valid when it is a directory in the virtual filesystem or one
/// of the configured top-level pages.
pub fn cd(args: &[String], ctx: &CommandContext<'_>) -> CommandResult {
    let Some(arg) = args.first() else {
        return Ok(Output::text(format!(
            "Current directory: {}",
            ctx.display_path(ctx.cwd)
        )));
    };

    if ctx.cwd == ROOT && is_parent_only(arg) {
        return Ok(Output::text("Already at root directory."));
    }

    let target = path::normalize_path(ctx.cwd, arg);
    if target == ROOT {
        return Ok(Output::navigate(ROOT));
    }

    let fs = ctx.virtual_fs();
    match fs.resolve(path::segments(&target)) {
        Ok(node) if node.is_directory() => Ok(Output::navigate(target)),
        Ok(_) => Err(CommandError::NotADirectory {
            command: "cd",
            path: arg.clone(),
        }),
        Err(ResolveError::NotADirectory { .. }) => Err(CommandError::NotADirectory {
            command: "cd",
            path: arg.clone(),
        }),
        Err(ResolveError::NotFound { .. }) if is_page(&target, ctx) => {
            Ok(Output::navigate(target))
        }
        Err(ResolveError::NotFound { .. }) => Err(CommandError::PathNotFound {
            command: "cd",
            path: arg.clone(),
        }),
    }
}

/// Render a document addressed by (possibly relative) path
pub async fn cat(args: &[String], ctx: &CommandContext<'_>) -> CommandResult {
    let Some(arg) = args.first() else {
        return Err(CommandError::MissingArgument {
            command: "cat",
            message: "Missing filename. Usage: cat [filename]",
        });
    };

    let target = path::normalize_path(ctx.cwd, arg);
    let logical = path::to_logical_path(&target, ctx.extension());

    let Some(doc) = ctx.library.find(&logical) else {
        return Err(CommandError::DocumentNotFound(arg.clone()));
    };

    let html = doc.render().await.map_err(|source| CommandError::Render {
        path: logical.clone(),
        source,
    })?;
    Ok(Output::html(html))
}

/// `cat` of the configured "about me" document, from anywhere
pub async fn whoami(ctx: &CommandContext<'_>) -> CommandResult {
    let target = format!(
        "/{}.{}",
        path::relative(&ctx.config.shell.whoami_document),
        ctx.extension()
    );
    cat(&[target], ctx).await
}

pub fn pwd(ctx: &CommandContext<'_>) -> Output {
    Output::text(ctx.display_path(ctx.cwd))
}

/// Draw the directory tree below a path (default: current directory)
pub fn tree(args: &[String], ctx: &CommandContext<'_>) -> CommandResult {
    let (target, shown) = target_path(args, ctx);
    let fs = ctx.virtual_fs();
    let dir = resolve_directory(&fs, &target, "tree", shown, ctx)?;

    let mut lines = Vec::new();
    draw_tree(dir, "", ctx.extension(), &mut lines);

    let body: String = lines
        .iter()
        .map(|line| {
            format!(
                r#"{}<span class="text-terminal-accent">{}</span>"#,
                line.prefix,
                escape(&line.label)
            )
        })
        .map(|line| line + "\n")
        .collect();

    Ok(Output::html(format!(
        r#"<div class="font-mono text-sm"><h3 class="text-terminal-accent text-lg mb-3">📂 Project Structure</h3><pre class="whitespace-pre-wrap">{}</pre></div>"#,
        body
    )))
}

/// One rendered row of `tree` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    /// Indentation plus connector, e.g. "│   └── "
    pub prefix: String,
    /// Decorated entry name, e.g. "📁 posts/"
    pub label: String,
}

/// Walk a directory depth-first, in the order its children were discovered
///
/// The last child at each level gets "└── " and its subtree is indented with
/// blanks; earlier children get "├── " and keep the "│" bar running.
pub fn draw_tree(node: &VirtualNode, prefix: &str, extension: &str, out: &mut Vec<TreeLine>) {
    let Some(children) = node.children() else {
        return;
    };

    let count = children.len();
    for (index, (name, child)) in children.iter().enumerate() {
        let last = index + 1 == count;
        let connector = if last { "└── " } else { "├── " };
        let icon = if child.is_directory() { "📁" } else { "📄" };

        out.push(TreeLine {
            prefix: format!("{}{}", prefix, connector),
            label: format!("{} {}", icon, display_name(name, child, extension)),
        });

        if child.children().is_some_and(|c| !c.is_empty()) {
            let nested = format!("{}{}", prefix, if last { "    " } else { "│   " });
            draw_tree(child, &nested, extension, out);
        }
    }
}

/// Resolve the optional path argument; returns (normalized, as typed)
fn target_path<'a>(args: &'a [String], ctx: &CommandContext<'a>) -> (String, &'a str) {
    match args.first() {
        Some(arg) => (path::normalize_path(ctx.cwd, arg), arg.as_str()),
        None => (ctx.cwd.to_string(), ctx.cwd),
    }
}

fn resolve_directory<'fs>(
    fs: &'fs VirtualNode,
    target: &str,
    command: &'static str,
    shown: &str,
    ctx: &CommandContext<'_>,
) -> Result<&'fs VirtualNode, CommandError> {
    match fs.resolve_directory(path::segments(target)) {
        Ok(dir) => Ok(dir),
        Err(ResolveError::NotFound { .. }) if is_page(target, ctx) => Ok(&*EMPTY_PAGE),
        Err(ResolveError::NotFound { .. }) => Err(CommandError::PathNotFound {
            command,
            path: shown.to_string(),
        }),
        Err(ResolveError::NotADirectory { .. }) => Err(CommandError::NotADirectory {
            command,
            path: shown.to_string(),
        }),
    }
}

/// "..", "../", "./..", "../.." and the like: tokens that only climb
fn is_parent_only(arg: &str) -> bool {
    let mut segments = arg.split('/').filter(|s| !s.is_empty()).peekable();
    segments.peek().is_some()
        && segments.clone().any(|s| s == "..")
        && segments.all(|s| s == ".." || s == ".")
}

fn display_name(name: &str, node: &VirtualNode, extension: &str) -> String {
    if node.is_directory() {
        format!("{}/", name)
    } else {
        format!("{}.{}", name, extension)
    }
}

fn is_page(target: &str, ctx: &CommandContext<'_>) -> bool {
    let mut segments = path::segments(target);
    match (segments.next(), segments.next()) {
        (Some(first), None) => ctx.config.shell.pages.iter().any(|p| p == first),
        _ => false,
    }
}
