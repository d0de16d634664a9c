use serde::{Deserialize, Serialize};
use std::fmt;

use super::rule::{RuleSet, TargetExpression};

/// How a new note's parent folder is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum PlacementMode {
    /// Always the vault root
    #[default]
    #[serde(rename = "vault")]
    #[value(name = "vault")]
    RootOnly,

    /// The folder of the document the note was created from
    #[serde(rename = "current")]
    #[value(name = "current")]
    SameAsCurrent,

    /// The folder named by the fixed-folder expression
    #[serde(rename = "folder")]
    #[value(name = "folder")]
    FixedFolder,

    /// The target of the highest-precedence matching rule
    #[serde(rename = "rules")]
    #[value(name = "rules")]
    RuleBased,
}

impl PlacementMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RootOnly => "vault",
            Self::SameAsCurrent => "current",
            Self::FixedFolder => "folder",
            Self::RuleBased => "rules",
        }
    }
}

impl fmt::Display for PlacementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language of user-visible notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    #[value(name = "en")]
    En,

    #[serde(rename = "zh-cn")]
    #[value(name = "zh-cn")]
    ZhCn,
}

impl Locale {
    /// Notice shown when a note has to fall back to the vault root.
    pub fn fallback_warning(&self) -> &'static str {
        match self {
            Self::En => {
                "Note location setting is invalid; the new note will be created in the vault root."
            }
            Self::ZhCn => "插件目录配置错误，新笔记将存放在仓库的根目录",
        }
    }
}

/// Persisted placement settings.
///
/// Field names on disk (`type`, `custom`) match the settings files written
/// by earlier releases. Missing fields take their defaults, and a rule list
/// without a `/` rule gets one on load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    #[serde(rename = "type")]
    pub mode: PlacementMode,

    #[serde(rename = "custom")]
    pub fixed_folder: TargetExpression,

    pub rules: RuleSet,

    pub locale: Locale,
}

impl PlacementConfig {
    pub fn new(mode: PlacementMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_fixed_folder(mut self, expression: &str) -> Self {
        self.fixed_folder = TargetExpression::parse(expression);
        self
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rule;

    #[test]
    fn test_placement_config_defaults() {
        let config = PlacementConfig::default();
        assert_eq!(config.mode, PlacementMode::RootOnly);
        assert_eq!(config.fixed_folder.to_string(), "");
        assert_eq!(config.rules.rules(), &[Rule::root()]);
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn test_partial_yaml_merges_over_defaults() {
        let config: PlacementConfig = serde_yaml_ng::from_str("type: current\n").unwrap();
        assert_eq!(config.mode, PlacementMode::SameAsCurrent);
        assert!(config.rules.has_root_rule());
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn test_legacy_field_names() {
        let yaml = "type: folder\ncustom: \"${current}/attachments\"\n";
        let config: PlacementConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.mode, PlacementMode::FixedFolder);
        assert_eq!(
            config.fixed_folder,
            TargetExpression::Current("/attachments".to_string())
        );
    }

    #[test]
    fn test_locale_names() {
        let config: PlacementConfig = serde_yaml_ng::from_str("locale: zh-cn\n").unwrap();
        assert_eq!(config.locale, Locale::ZhCn);
        assert!(Locale::ZhCn.fallback_warning().contains("根目录"));
    }

    #[test]
    fn test_mode_display_matches_serialized_name() {
        for mode in [
            PlacementMode::RootOnly,
            PlacementMode::SameAsCurrent,
            PlacementMode::FixedFolder,
            PlacementMode::RuleBased,
        ] {
            let yaml = serde_yaml_ng::to_string(&mode).unwrap();
            assert_eq!(yaml.trim(), mode.as_str());
        }
    }
}
