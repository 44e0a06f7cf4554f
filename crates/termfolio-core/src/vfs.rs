// crates/termfolio-core/src/vfs.rs - Virtual filesystem built from logical paths
//
// The content collection is flat: a list of documents, each with a slash-delimited
// logical path. Shell commands want directories. This module synthesizes a
// directory tree from those paths so `ls`, `cd` and `tree` can pretend the
// collection is a real filesystem.
//
// CONSTRUCTION:
// ["about", "posts/hello", "posts/world"]
//
//   /
//   ├── about        (file)
//   └── posts/       (directory)
//       ├── hello    (file)
//       └── world    (file)
//
// Every non-terminal segment becomes (or reuses) a directory, every terminal
// segment becomes a file leaf carrying its document. The tree is rebuilt from
// the document list on every filesystem-aware command; nothing is cached.

use indexmap::IndexMap;
use std::fmt;
use tracing::{debug, warn};

use crate::document::DocumentRef;

/// A node in the virtual filesystem
#[derive(Clone)]
pub enum VirtualNode {
    /// Directory: child name -> child node, in first-seen order
    Directory(IndexMap<String, VirtualNode>),
    /// Leaf backed by the document whose path ended here
    File(DocumentRef),
}

impl VirtualNode {
    pub fn empty_directory() -> Self {
        Self::Directory(IndexMap::new())
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// Children of a directory, `None` for a file
    pub fn children(&self) -> Option<&IndexMap<String, VirtualNode>> {
        match self {
            Self::Directory(children) => Some(children),
            Self::File(_) => None,
        }
    }

    /// Document backing a file leaf, `None` for a directory
    pub fn document(&self) -> Option<&DocumentRef> {
        match self {
            Self::Directory(_) => None,
            Self::File(doc) => Some(doc),
        }
    }

    /// Count file leaves in this subtree
    pub fn file_count(&self) -> usize {
        match self {
            Self::File(_) => 1,
            Self::Directory(children) => children.values().map(Self::file_count).sum(),
        }
    }

    /// Count directories in this subtree, excluding this node
    pub fn directory_count(&self) -> usize {
        match self {
            Self::File(_) => 0,
            Self::Directory(children) => children
                .values()
                .map(|child| match child {
                    Self::Directory(_) => 1 + child.directory_count(),
                    Self::File(_) => 0,
                })
                .sum(),
        }
    }

    /// Walk the tree one segment at a time
    ///
    /// Empty segments are skipped, so "posts//hello" and "/posts/hello/" both
    /// resolve like "posts/hello".
    pub fn resolve<'a, I>(&self, segments: I) -> Result<&VirtualNode, ResolveError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut current = self;
        let mut walked = 0;

        for segment in segments.into_iter().filter(|s| !s.is_empty()) {
            let children = match current {
                Self::Directory(children) => children,
                Self::File(_) => return Err(ResolveError::NotADirectory { depth: walked }),
            };

            current = children
                .get(segment)
                .ok_or(ResolveError::NotFound { depth: walked })?;
            walked += 1;
        }

        Ok(current)
    }

    /// Resolve a path that must name a directory
    pub fn resolve_directory<'a, I>(&self, segments: I) -> Result<&VirtualNode, ResolveError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let segments: Vec<&str> = segments.into_iter().filter(|s| !s.is_empty()).collect();
        let node = self.resolve(segments.iter().copied())?;
        if node.is_file() {
            return Err(ResolveError::NotADirectory {
                depth: segments.len(),
            });
        }
        Ok(node)
    }
}

impl fmt::Debug for VirtualNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(children) => f.debug_map().entries(children.iter()).finish(),
            Self::File(doc) => write!(f, "File({})", doc.logical_path()),
        }
    }
}

/// Why a path could not be walked
///
/// `depth` is the number of segments successfully walked before failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    NotFound { depth: usize },
    NotADirectory { depth: usize },
}

/// Build the virtual filesystem for a list of documents
///
/// First write wins: a document whose path is already taken is ignored. A
/// document whose path runs *through* an existing file leaf (e.g. "posts" and
/// then "posts/hello") is skipped as well, since a node can never be both a
/// file and a directory. An empty logical path becomes a single empty-named
/// leaf under the root.
pub fn build_virtual_fs<'a, I>(documents: I) -> VirtualNode
where
    I: IntoIterator<Item = &'a DocumentRef>,
{
    let mut root = IndexMap::new();
    let mut count = 0usize;

    for doc in documents {
        let segments: Vec<&str> = doc.logical_path().split('/').collect();
        match insert(&mut root, &segments, doc) {
            Insert::Added => count += 1,
            Insert::Duplicate => {
                debug!(path = doc.logical_path(), "ignoring duplicate logical path");
            }
            Insert::BlockedByFile => {
                warn!(
                    path = doc.logical_path(),
                    "logical path passes through a file, document skipped"
                );
            }
        }
    }

    debug!(files = count, "built virtual filesystem");
    VirtualNode::Directory(root)
}

enum Insert {
    Added,
    Duplicate,
    BlockedByFile,
}

fn insert(dir: &mut IndexMap<String, VirtualNode>, segments: &[&str], doc: &DocumentRef) -> Insert {
    let Some((&name, rest)) = segments.split_first() else {
        return Insert::Duplicate;
    };

    if rest.is_empty() {
        if dir.contains_key(name) {
            return Insert::Duplicate;
        }
        dir.insert(name.to_string(), VirtualNode::File(doc.clone()));
        return Insert::Added;
    }

    let child = dir
        .entry(name.to_string())
        .or_insert_with(VirtualNode::empty_directory);

    match child {
        VirtualNode::Directory(children) => insert(children, rest, doc),
        VirtualNode::File(_) => Insert::BlockedByFile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::InlineDocument;
    use proptest::prelude::*;
    use std::collections::BTreeSet;
    use std::sync::Arc;

    fn docs(paths: &[&str]) -> Vec<DocumentRef> {
        paths
            .iter()
            .map(|p| Arc::new(InlineDocument::new(*p, "")) as DocumentRef)
            .collect()
    }

    fn shape(node: &VirtualNode) -> String {
        match node {
            VirtualNode::File(doc) => format!("f:{}", doc.logical_path()),
            VirtualNode::Directory(children) => {
                let inner: Vec<String> = children
                    .iter()
                    .map(|(name, child)| format!("{}={}", name, shape(child)))
                    .collect();
                format!("d[{}]", inner.join(","))
            }
        }
    }

    #[test]
    fn test_builds_nested_directories() {
        let documents = docs(&["about", "posts/hello", "posts/world"]);
        let root = build_virtual_fs(&documents);

        let children = root.children().unwrap();
        assert_eq!(children.keys().collect::<Vec<_>>(), vec!["about", "posts"]);
        assert!(children["about"].is_file());
        assert!(children["posts"].is_directory());

        let posts = children["posts"].children().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(
            posts["hello"].document().unwrap().logical_path(),
            "posts/hello"
        );
    }

    #[test]
    fn test_shared_prefixes_reuse_directories() {
        let documents = docs(&["a/b/c", "a/b/d"]);
        let root = build_virtual_fs(&documents);

        assert_eq!(root.directory_count(), 2);
        assert_eq!(root.file_count(), 2);
        let b = root.resolve(["a", "b"]).unwrap();
        assert_eq!(b.children().unwrap().len(), 2);
    }

    #[test]
    fn test_first_write_wins() {
        let documents = vec![
            Arc::new(InlineDocument::new("dup", "first")) as DocumentRef,
            Arc::new(InlineDocument::new("dup", "second")) as DocumentRef,
        ];
        let root = build_virtual_fs(&documents);

        assert_eq!(root.file_count(), 1);
        let leaf = root.resolve(["dup"]).unwrap().document().unwrap();
        assert!(Arc::ptr_eq(leaf, &documents[0]));
    }

    #[test]
    fn test_path_through_file_is_skipped() {
        let documents = docs(&["posts", "posts/hello"]);
        let root = build_virtual_fs(&documents);

        assert_eq!(root.file_count(), 1);
        assert!(root.resolve(["posts"]).unwrap().is_file());
    }

    #[test]
    fn test_file_then_directory_name_collision_keeps_directory() {
        let documents = docs(&["posts/hello", "posts"]);
        let root = build_virtual_fs(&documents);

        assert_eq!(root.file_count(), 1);
        assert!(root.resolve(["posts"]).unwrap().is_directory());
    }

    #[test]
    fn test_empty_path_is_empty_named_leaf() {
        let documents = docs(&[""]);
        let root = build_virtual_fs(&documents);

        let children = root.children().unwrap();
        assert_eq!(children.len(), 1);
        assert!(children[""].is_file());
    }

    #[test]
    fn test_resolve_errors() {
        let documents = docs(&["about", "posts/hello"]);
        let root = build_virtual_fs(&documents);

        assert_eq!(
            root.resolve(["posts", "nope"]).unwrap_err(),
            ResolveError::NotFound { depth: 1 }
        );
        assert_eq!(
            root.resolve(["about", "deeper"]).unwrap_err(),
            ResolveError::NotADirectory { depth: 1 }
        );
        assert_eq!(
            root.resolve_directory(["about"]).unwrap_err(),
            ResolveError::NotADirectory { depth: 1 }
        );
        assert!(root.resolve(std::iter::empty()).unwrap().is_directory());
        assert!(root.resolve(["", "posts", ""]).unwrap().is_directory());
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let documents = docs(&["b/x", "a", "b/y/z", "c"]);
        assert_eq!(
            shape(&build_virtual_fs(&documents)),
            shape(&build_virtual_fs(&documents))
        );
    }

    fn path_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-d]{1,2}", 1..4).prop_map(|segments| segments.join("/"))
    }

    proptest! {
        #[test]
        fn prop_every_document_is_reachable(paths in prop::collection::btree_set(path_strategy(), 1..20)) {
            // Drop paths that are a strict prefix of another; those collide by construction.
            let paths: Vec<&String> = paths
                .iter()
                .filter(|p| !paths.iter().any(|q| q.starts_with(&format!("{}/", p))))
                .collect();
            let documents: Vec<DocumentRef> = paths
                .iter()
                .map(|p| Arc::new(InlineDocument::new(p.as_str(), "")) as DocumentRef)
                .collect();

            let root = build_virtual_fs(&documents);
            prop_assert_eq!(root.file_count(), documents.len());

            for path in &paths {
                let node = root.resolve(path.split('/')).unwrap();
                prop_assert_eq!(node.document().unwrap().logical_path(), path.as_str());
            }

            let prefixes: BTreeSet<String> = paths
                .iter()
                .flat_map(|p| {
                    let segments: Vec<&str> = p.split('/').collect();
                    (1..segments.len()).map(move |k| segments[..k].join("/"))
                })
                .collect();
            prop_assert_eq!(root.directory_count(), prefixes.len());
        }
    }
}
