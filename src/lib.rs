// note-placer - Rule-based placement of newly created notes
//
// This is the library crate containing the placement engine and its settings.
// The binary crate (main.rs) provides a command-line host over a directory vault.

pub mod config;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod state;
pub mod vault;

// Re-export commonly used types for convenience
pub use config::{ConfigManager, SettingsStore};
pub use models::{Locale, PlacementConfig, PlacementMode, Rule, RuleSet, TargetExpression};
pub use services::PlacementPolicy;
pub use state::{SettingsChange, SettingsManager};
pub use vault::{FolderRef, FsVault, InMemoryVault, Node, Notifier, Vault};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
