use anyhow::{Context, Result, bail};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

use super::{FolderRef, Node, Vault, canonical_path};

/// A vault backed by a directory on disk.
///
/// Lookups are resolved against the directory with `metadata`, so symlinks
/// are followed. Paths containing `..` never resolve.
#[derive(Debug, Clone)]
pub struct FsVault {
    root: Utf8PathBuf,
}

impl FsVault {
    /// Opens the vault rooted at `root`, which must be an existing directory.
    pub fn open<P: AsRef<Utf8Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        let metadata = fs::metadata(&root)
            .with_context(|| format!("Failed to read vault directory: {}", root))?;
        if !metadata.is_dir() {
            bail!("Vault root is not a directory: {}", root);
        }

        tracing::debug!("Opened vault at {}", root);
        Ok(Self { root })
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

impl Vault for FsVault {
    fn lookup(&self, path: &str) -> Option<Node> {
        let key = canonical_path(path)?;
        if key == "/" {
            return Some(Node::Folder(FolderRef::root()));
        }

        let metadata = fs::metadata(self.root.join(&key)).ok()?;
        if metadata.is_dir() {
            Some(Node::Folder(FolderRef::new(key)))
        } else {
            Some(Node::File(key))
        }
    }

    fn root_folder(&self) -> FolderRef {
        FolderRef::root()
    }
}
