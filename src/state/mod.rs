// Settings state module
//
// This module provides the SettingsManager which owns the live placement
// settings behind Arc<RwLock<T>>, persists every mutation through a
// SettingsStore and emits change events for listeners.

use crate::config::SettingsStore;
use crate::models::{Locale, PlacementConfig, PlacementMode, Rule, RuleSet, TargetExpression};
use crate::services::{PlacementPolicy, RuleTextParser};
use crate::vault::{Notifier, Vault};
use anyhow::Result;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::broadcast;

/// Change events emitted when settings are modified
#[derive(Clone, Debug, PartialEq)]
pub enum SettingsChange {
    /// Placement mode switched
    ModeChanged { mode: PlacementMode },

    /// Fixed-folder expression edited
    FixedFolderChanged { expression: String },

    /// Rule list replaced
    RulesChanged { count: usize },

    /// Notice language switched
    LocaleChanged { locale: Locale },

    /// Settings reloaded from the store
    Reloaded,
}

/// Thread-safe owner of the placement settings
///
/// - Guards [`PlacementConfig`] with a single `RwLock`: resolutions read,
///   settings edits write
/// - Saves through the [`SettingsStore`] after every mutation that changed
///   something
/// - Broadcasts [`SettingsChange`] events via a tokio broadcast channel
///
/// Every rule-editing path goes through [`RuleSet::new`], so the stored
/// rules always contain a `/` rule.
pub struct SettingsManager {
    config: Arc<RwLock<PlacementConfig>>,
    store: Arc<dyn SettingsStore>,
    settings_tx: broadcast::Sender<SettingsChange>,
    rule_parser: Arc<RuleTextParser>,
}

impl SettingsManager {
    /// Create a manager holding the defaults; call [`load`](Self::load) to
    /// read the store.
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        let (settings_tx, _) = broadcast::channel(100);
        Self {
            config: Arc::new(RwLock::new(PlacementConfig::default())),
            store,
            settings_tx,
            rule_parser: Arc::new(RuleTextParser::new()),
        }
    }

    /// Create a manager and load the persisted settings.
    pub fn load_from(store: Arc<dyn SettingsStore>) -> Result<Self> {
        let manager = Self::new(store);
        manager.load()?;
        Ok(manager)
    }

    /// Replace the live settings with the store's copy.
    pub fn load(&self) -> Result<()> {
        let loaded = self.store.load()?;
        *self.write_lock() = loaded;

        let _ = self.settings_tx.send(SettingsChange::Reloaded);
        Ok(())
    }

    /// Clone of the current settings, safe to use without holding locks.
    pub fn snapshot(&self) -> PlacementConfig {
        self.read_lock().clone()
    }

    /// Execute a function with read access to the settings
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&PlacementConfig) -> R,
    {
        let config = self.read_lock();
        f(&config)
    }

    /// Subscribe to settings change events
    pub fn subscribe(&self) -> broadcast::Receiver<SettingsChange> {
        self.settings_tx.subscribe()
    }

    /// Build a placement policy over the current settings.
    pub fn policy<V: Vault, N: Notifier>(&self, vault: V, notifier: N) -> PlacementPolicy<V, N> {
        PlacementPolicy::new(self.snapshot(), vault, notifier)
    }

    pub fn set_mode(&self, mode: PlacementMode) -> Result<Option<SettingsChange>> {
        self.update(|config| {
            if config.mode == mode {
                return None;
            }
            config.mode = mode;
            Some(SettingsChange::ModeChanged { mode })
        })
    }

    /// Set the fixed-folder expression from user input.
    ///
    /// All leading slashes are stripped before parsing.
    pub fn set_fixed_folder(&self, text: &str) -> Result<Option<SettingsChange>> {
        let expression = TargetExpression::parse(text.trim_start_matches('/'));

        self.update(|config| {
            if config.fixed_folder == expression {
                return None;
            }
            config.fixed_folder = expression;
            Some(SettingsChange::FixedFolderChanged {
                expression: config.fixed_folder.to_string(),
            })
        })
    }

    /// Replace the rules with those parsed from the `pattern: target` text.
    pub fn set_rules_text(&self, text: &str) -> Result<Option<SettingsChange>> {
        let rules = self.rule_parser.parse(text);
        self.replace_rules(rules)
    }

    /// Replace the rules, injecting the `/` rule if missing.
    pub fn set_rules(&self, rules: Vec<Rule>) -> Result<Option<SettingsChange>> {
        self.replace_rules(RuleSet::new(rules))
    }

    pub fn set_locale(&self, locale: Locale) -> Result<Option<SettingsChange>> {
        self.update(|config| {
            if config.locale == locale {
                return None;
            }
            config.locale = locale;
            Some(SettingsChange::LocaleChanged { locale })
        })
    }

    fn replace_rules(&self, rules: RuleSet) -> Result<Option<SettingsChange>> {
        self.update(|config| {
            if config.rules == rules {
                return None;
            }
            let count = rules.len();
            config.rules = rules;
            Some(SettingsChange::RulesChanged { count })
        })
    }

    /// Apply a mutation, then persist and broadcast if it reported a change.
    ///
    /// The write guard is held until the save returns, so saves reach the
    /// store in the same order as the edits. A failed save leaves the new
    /// value in memory and returns the error.
    fn update<F>(&self, update_fn: F) -> Result<Option<SettingsChange>>
    where
        F: FnOnce(&mut PlacementConfig) -> Option<SettingsChange>,
    {
        let change = {
            let mut config = self.write_lock();
            let Some(change) = update_fn(&mut config) else {
                return Ok(None);
            };

            tracing::info!("Settings changed: {:?}", change);
            self.store.save(&config)?;
            change
        };

        // Ignore send errors - it's OK if no one is listening
        let _ = self.settings_tx.send(change.clone());
        Ok(Some(change))
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, PlacementConfig> {
        // Mutations never leave the config half-written, so a poisoned lock is still usable
        self.config.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, PlacementConfig> {
        self.config.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// Make SettingsManager cloneable for sharing across threads
impl Clone for SettingsManager {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            store: Arc::clone(&self.store),
            settings_tx: self.settings_tx.clone(),
            rule_parser: Arc::clone(&self.rule_parser),
        }
    }
}
