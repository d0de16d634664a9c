use thiserror::Error;

use crate::metrics::Metrics;
use crate::models::{PlacementConfig, PlacementMode};
use crate::vault::{FolderRef, Node, Notifier, Vault};

use super::path_util::{dirname, normalize_leading_slash};

/// Why a placement could not be determined.
///
/// Never surfaced to callers: every issue turns into the vault-root fallback
/// plus one user notice, and is logged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementIssue {
    #[error("Folder {0} not found")]
    FolderNotFound(String),

    #[error("{0} is not a folder")]
    NotAFolder(String),

    #[error("No rule matches {0}")]
    NoMatchingRule(String),
}

/// Decides the parent folder of newly created notes.
///
/// Holds a snapshot of the settings plus the host collaborators. The single
/// entry point is [`resolve`](Self::resolve), which never fails: anything
/// that cannot be satisfied falls back to the vault root and warns once
/// through the [`Notifier`].
///
/// # Example
/// ```
/// use note_placer::models::{PlacementConfig, PlacementMode};
/// use note_placer::services::PlacementPolicy;
/// use note_placer::vault::{InMemoryVault, RecordingNotifier};
///
/// let vault = InMemoryVault::new().with_folder("projects");
/// let notifier = RecordingNotifier::new();
/// let config = PlacementConfig::new(PlacementMode::SameAsCurrent);
///
/// let policy = PlacementPolicy::new(config, &vault, &notifier);
/// assert_eq!(policy.resolve("projects/note.md").path(), "projects");
/// assert!(notifier.is_empty());
/// ```
pub struct PlacementPolicy<V, N> {
    config: PlacementConfig,
    vault: V,
    notifier: N,
    metrics: Metrics,
}

impl<V: Vault, N: Notifier> PlacementPolicy<V, N> {
    pub fn new(config: PlacementConfig, vault: V, notifier: N) -> Self {
        Self {
            config,
            vault,
            notifier,
            metrics: Metrics::new(),
        }
    }

    /// Returns the folder a new note at `doc_path` should be created in.
    pub fn resolve(&self, doc_path: &str) -> FolderRef {
        self.metrics.record_resolution(self.config.mode);

        match self.try_resolve(doc_path) {
            Ok(folder) => {
                tracing::debug!(doc_path, mode = %self.config.mode, folder = %folder, "Resolved note folder");
                folder
            }
            Err(issue) => {
                tracing::warn!(doc_path, mode = %self.config.mode, "Falling back to vault root: {}", issue);
                self.metrics.record_fallback();
                self.notifier.warn(self.config.locale.fallback_warning());
                self.vault.root_folder()
            }
        }
    }

    fn try_resolve(&self, doc_path: &str) -> Result<FolderRef, PlacementIssue> {
        let target = match self.config.mode {
            PlacementMode::RootOnly => return Ok(self.vault.root_folder()),
            PlacementMode::SameAsCurrent => dirname(doc_path).to_string(),
            PlacementMode::FixedFolder => self.config.fixed_folder.expand(doc_path),
            PlacementMode::RuleBased => {
                let normalized = normalize_leading_slash(doc_path);
                let rule = self
                    .config
                    .rules
                    .find(&normalized)
                    .ok_or_else(|| PlacementIssue::NoMatchingRule(normalized.clone()))?;
                tracing::trace!(pattern = %rule.pattern, target = %rule.target, "Applying rule");
                rule.target.expand(&normalized)
            }
        };

        self.lookup_folder(&target)
    }

    fn lookup_folder(&self, path: &str) -> Result<FolderRef, PlacementIssue> {
        match self.vault.lookup(path) {
            Some(Node::Folder(folder)) => Ok(folder),
            Some(Node::File(_)) => Err(PlacementIssue::NotAFolder(path.to_string())),
            None => Err(PlacementIssue::FolderNotFound(path.to_string())),
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
