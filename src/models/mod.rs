//! Data models for note placement.
//!
//! - [`PlacementConfig`]: the persisted settings (mode, fixed folder, rules, locale)
//! - [`Rule`] / [`RuleSet`]: pattern-to-target rules, later rules taking precedence
//! - [`PathPattern`]: a `/`-delimited pattern with `${*}` wildcard segments
//! - [`TargetExpression`]: a folder expression with an optional `${current}` or `${root}` prefix
//!
//! All config structs derive `Serialize`/`Deserialize` for YAML persistence
//! through [`ConfigManager`](crate::config::ConfigManager). The live copy is
//! owned by [`SettingsManager`](crate::state::SettingsManager).

pub mod config;
pub mod rule;

pub use config::{Locale, PlacementConfig, PlacementMode};
pub use rule::{
    CURRENT_PLACEHOLDER, PathPattern, PatternSegment, ROOT_PLACEHOLDER, Rule, RuleSet,
    TargetExpression, WILDCARD,
};
