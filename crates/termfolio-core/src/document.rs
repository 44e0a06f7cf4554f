// crates/termfolio-core/src/document.rs - Content documents and the content library
//
// A content document is one piece of authored content (a post, a project page,
// the "whoami" blurb). The terminal only needs two things from it: a stable
// logical path used as its address in the virtual filesystem, and a way to
// render it to HTML when `cat` asks for it.
//
// LOGICAL PATHS:
// content/
// ├── whoami.md            -> "whoami"
// └── posts/
//     ├── 2024/hello.md    -> "posts/2024/hello"
//     └── world.md         -> "posts/world"

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Errors that can occur while rendering a content document
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Document {0} is not valid UTF-8")]
    Encoding(String),

    #[error("No markdown renderer available for {0}")]
    Unsupported(String),
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;

/// One piece of authored content, addressable by its logical path
#[async_trait]
pub trait ContentDocument: Send + Sync {
    /// Slash-delimited, extension-stripped address (e.g. "posts/2024/hello")
    fn logical_path(&self) -> &str;

    /// Compile the document to an HTML fragment
    async fn render(&self) -> RenderResult<String>;
}

/// Shared handle to a document, as held by the library and the virtual tree
pub type DocumentRef = Arc<dyn ContentDocument>;

/// A markdown document backed by a file on disk
///
/// The file is only read when the document is rendered, so a library scan
/// stays cheap and a file that disappears after the scan surfaces as a
/// `RenderError` instead of a stale copy.
#[derive(Debug, Clone)]
pub struct MarkdownFile {
    logical_path: String,
    file: PathBuf,
}

impl MarkdownFile {
    pub fn new(logical_path: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            logical_path: logical_path.into(),
            file: file.into(),
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}

#[async_trait]
impl ContentDocument for MarkdownFile {
    fn logical_path(&self) -> &str {
        &self.logical_path
    }

    async fn render(&self) -> RenderResult<String> {
        let bytes = tokio::fs::read(&self.file)
            .await
            .map_err(|source| RenderError::Io {
                path: self.file.display().to_string(),
                source,
            })?;
        let source = String::from_utf8(bytes)
            .map_err(|_| RenderError::Encoding(self.file.display().to_string()))?;

        markdown_to_html(&self.logical_path, &source)
    }
}

/// A markdown document whose source is held in memory
#[derive(Debug, Clone)]
pub struct InlineDocument {
    logical_path: String,
    source: String,
}

impl InlineDocument {
    pub fn new(logical_path: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            logical_path: logical_path.into(),
            source: source.into(),
        }
    }
}

#[async_trait]
impl ContentDocument for InlineDocument {
    fn logical_path(&self) -> &str {
        &self.logical_path
    }

    async fn render(&self) -> RenderResult<String> {
        markdown_to_html(&self.logical_path, &self.source)
    }
}

#[cfg(feature = "markdown")]
fn markdown_to_html(_logical_path: &str, source: &str) -> RenderResult<String> {
    use pulldown_cmark::{Options, Parser, html};

    let parser = Parser::new_ext(source, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    Ok(out)
}

#[cfg(not(feature = "markdown"))]
fn markdown_to_html(logical_path: &str, _source: &str) -> RenderResult<String> {
    Err(RenderError::Unsupported(logical_path.to_string()))
}

/// Derive a document's logical path from its location under the content root
///
/// Returns `None` for files outside the root or without the given extension.
pub fn logical_path_for(root: &Path, file: &Path, extension: &str) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?;
    if relative.extension().and_then(|e| e.to_str()) != Some(extension) {
        return None;
    }

    let stem = relative.with_extension("");
    let segments: Vec<&str> = stem
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<_>>()?;

    Some(segments.join("/"))
}

/// The ordered collection of documents the terminal can see
#[derive(Clone, Default)]
pub struct ContentLibrary {
    documents: Vec<DocumentRef>,
}

impl ContentLibrary {
    pub fn from_documents(documents: Vec<DocumentRef>) -> Self {
        let library = Self { documents };
        for path in library.duplicate_paths() {
            warn!(path = %path, "duplicate logical path, only the first document is reachable");
        }
        library
    }

    /// Scan a directory tree for content files
    ///
    /// Entries are visited in file-name order so the resulting document list
    /// (and therefore `tree` output) is stable across runs. Hidden files and
    /// directories are skipped. A missing root yields an empty library.
    pub fn scan(root: &Path, extension: &str) -> Self {
        let mut documents: Vec<DocumentRef> = Vec::new();

        if !root.exists() {
            warn!(root = %root.display(), "content root does not exist");
            return Self::default();
        }

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));

        for entry in walker.filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(logical_path) = logical_path_for(root, entry.path(), extension) else {
                continue;
            };

            debug!(path = %logical_path, file = %entry.path().display(), "found content document");
            documents.push(Arc::new(MarkdownFile::new(logical_path, entry.path())));
        }

        Self::from_documents(documents)
    }

    pub fn documents(&self) -> &[DocumentRef] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Find a document by exact logical path
    pub fn find(&self, logical_path: &str) -> Option<&DocumentRef> {
        self.documents
            .iter()
            .find(|doc| doc.logical_path() == logical_path)
    }

    /// Logical paths claimed by more than one document, in discovery order
    pub fn duplicate_paths(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();

        for doc in &self.documents {
            let path = doc.logical_path();
            if !seen.insert(path) && !duplicates.iter().any(|d: &String| d == path) {
                duplicates.push(path.to_string());
            }
        }

        duplicates
    }
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}
