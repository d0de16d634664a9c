use indexmap::IndexMap;

use super::{FolderRef, Node, Vault, canonical_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Folder,
    File,
}

/// An in-memory vault tree, kept in insertion order.
///
/// Adding a nested folder or file registers each missing ancestor as a
/// folder. Adding a path that already exists leaves the existing node alone.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVault {
    nodes: IndexMap<String, NodeKind>,
}

impl InMemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_folder(mut self, path: &str) -> Self {
        self.add_folder(path);
        self
    }

    pub fn with_file(mut self, path: &str) -> Self {
        self.add_file(path);
        self
    }

    pub fn add_folder(&mut self, path: &str) {
        self.insert(path, NodeKind::Folder);
    }

    pub fn add_file(&mut self, path: &str) {
        self.insert(path, NodeKind::File);
    }

    fn insert(&mut self, path: &str, kind: NodeKind) {
        let Some(key) = canonical_path(path) else {
            tracing::warn!("Ignoring vault path outside the root: {}", path);
            return;
        };
        if key == "/" {
            return;
        }

        let mut end = 0;
        for segment in key.split('/') {
            end += segment.len();
            let ancestor = &key[..end];
            if ancestor != key {
                self.nodes
                    .entry(ancestor.to_string())
                    .or_insert(NodeKind::Folder);
            }
            end += 1;
        }
        self.nodes.entry(key).or_insert(kind);
    }
}

impl Vault for InMemoryVault {
    fn lookup(&self, path: &str) -> Option<Node> {
        let key = canonical_path(path)?;
        if key == "/" {
            return Some(Node::Folder(FolderRef::root()));
        }

        match self.nodes.get(&key)? {
            NodeKind::Folder => Some(Node::Folder(FolderRef::new(key))),
            NodeKind::File => Some(Node::File(key)),
        }
    }

    fn root_folder(&self) -> FolderRef {
        FolderRef::root()
    }
}
