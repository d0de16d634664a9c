//! Collaborators the placement engine consumes from its host.
//!
//! - [`Vault`]: folder lookup by root-relative path, plus the root folder
//! - [`Notifier`]: fire-and-forget user-visible warnings
//!
//! The engine never creates folders. A [`FolderRef`] only ever comes out of
//! a [`Vault`] implementation.

pub mod fs;
pub mod memory;

pub use fs::FsVault;
pub use memory::InMemoryVault;

use std::fmt;
use std::sync::{Arc, Mutex};

/// Reference to an existing folder in a vault.
///
/// The path is root-relative with no leading slash; the root itself is `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FolderRef {
    path: String,
}

impl FolderRef {
    /// For [`Vault`] implementations handing out folders they own.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn root() -> Self {
        Self::new("/")
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.path == "/"
    }
}

impl fmt::Display for FolderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// A node found in the vault tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Folder(FolderRef),
    File(String),
}

/// Folder lookup over the host's vault tree.
#[cfg_attr(test, mockall::automock)]
pub trait Vault {
    /// Looks up a root-relative path. `/` is the root.
    fn lookup(&self, path: &str) -> Option<Node>;

    /// The vault root, which always exists.
    fn root_folder(&self) -> FolderRef;
}

/// Sink for user-visible warnings.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn warn(&self, message: &str);
}

impl<T: Vault + ?Sized> Vault for &T {
    fn lookup(&self, path: &str) -> Option<Node> {
        (**self).lookup(path)
    }

    fn root_folder(&self) -> FolderRef {
        (**self).root_folder()
    }
}

impl<T: Vault + ?Sized> Vault for Arc<T> {
    fn lookup(&self, path: &str) -> Option<Node> {
        (**self).lookup(path)
    }

    fn root_folder(&self) -> FolderRef {
        (**self).root_folder()
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}

/// Emits warnings as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "note_placer::notice", "{}", message);
    }
}

/// Collects warnings for hosts that surface notices themselves.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns and clears the collected warnings.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A poisoned lock still holds valid messages
        self.messages.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for RecordingNotifier {
    fn warn(&self, message: &str) {
        self.lock().push(message.to_string());
    }
}

/// Canonical key for a vault lookup path.
///
/// Leading slashes, empty segments and `.` segments are dropped; the root is
/// `/`. Returns `None` for paths with a `..` segment, which could escape the
/// vault.
pub(crate) fn canonical_path(path: &str) -> Option<String> {
    let mut parts = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        Some("/".to_string())
    } else {
        Some(parts.join("/"))
    }
}
