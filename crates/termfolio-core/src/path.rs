// crates/termfolio-core/src/path.rs - Logical path normalization
//
// Resolves a user-typed path token against the current navigation path. This is
// pure string manipulation: nothing here checks that the result exists, callers
// walk the virtual filesystem afterwards.
//
// RULES:
// - leading "/" makes the token absolute, "~" is an alias for the site root
// - "."  stays where we are
// - ".." drops the last segment (no-op at root)
// - anything else is appended to the current path
// - repeated slashes collapse, trailing slash is dropped except for "/"
//
// EXAMPLES (current path "/posts/x"):
//   ".."      -> "/posts"
//   "."       -> "/posts/x"
//   "/about"  -> "/about"
//   "y//z/"   -> "/posts/x/y/z"

/// The root of the virtual filesystem
pub const ROOT: &str = "/";

/// Resolve `token` against `current` and return a normalized absolute path
pub fn normalize_path(current: &str, token: &str) -> String {
    let mut stack: Vec<&str> = Vec::new();

    let relative = if token.starts_with('/') {
        token
    } else if token == "~" {
        ""
    } else if let Some(rest) = token.strip_prefix("~/") {
        rest
    } else {
        push_segments(&mut stack, current);
        token
    };

    push_segments(&mut stack, relative);

    if stack.is_empty() {
        ROOT.to_string()
    } else {
        format!("/{}", stack.join("/"))
    }
}

fn push_segments<'a>(stack: &mut Vec<&'a str>, path: &'a str) {
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            name => stack.push(name),
        }
    }
}

/// Non-empty segments of a normalized path
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Path with the leading slash removed ("/posts/x" -> "posts/x", "/" -> "")
pub fn relative(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Turn a normalized path into the logical path of a document
///
/// Strips the leading slash and a trailing ".<extension>", so `cat whoami.md`
/// and `cat whoami` address the same document.
pub fn to_logical_path(path: &str, extension: &str) -> String {
    let rel = relative(path);
    let suffix = format!(".{}", extension);
    rel.strip_suffix(&suffix).unwrap_or(rel).to_string()
}

/// Append a child name to a directory path
pub fn join(dir: &str, name: &str) -> String {
    if dir == ROOT || dir.is_empty() {
        format!("/{}", name)
    } else {
        format!("{}/{}", dir.trim_end_matches('/'), name)
    }
}

/// Parent of a normalized path (root is its own parent)
pub fn parent(path: &str) -> String {
    normalize_path(path, "..")
}
