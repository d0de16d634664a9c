use serde::{Deserialize, Serialize};
use std::fmt;

use crate::services::{path_util, rule_resolver, target_expander};

/// Segment token that matches any single path segment.
pub const WILDCARD: &str = "${*}";

/// Placeholder replaced by the directory of the new document.
pub const CURRENT_PLACEHOLDER: &str = "${current}";

/// Placeholder replaced by the vault root.
pub const ROOT_PLACEHOLDER: &str = "${root}";

/// One segment of a [`PathPattern`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternSegment {
    Literal(String),
    Wildcard,
}

/// A `/`-delimited path pattern, e.g. `/projects/${*}`.
///
/// Parsing normalizes the pattern to a single leading `/` and drops
/// trailing slashes, so `projects/` and `/projects` are the same pattern.
/// The root pattern is `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PathPattern {
    source: String,
    segments: Vec<PatternSegment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        let normalized = path_util::normalize_leading_slash(pattern.trim_end_matches('/'));

        let segments = normalized
            .split('/')
            .map(|segment| {
                if segment == WILDCARD {
                    PatternSegment::Wildcard
                } else {
                    PatternSegment::Literal(segment.to_string())
                }
            })
            .collect();

        Self {
            source: normalized,
            segments,
        }
    }

    /// The pattern matching only the vault root.
    pub fn root() -> Self {
        Self::parse("/")
    }

    pub fn is_root(&self) -> bool {
        self.source == "/"
    }

    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<String> for PathPattern {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for PathPattern {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<PathPattern> for String {
    fn from(value: PathPattern) -> Self {
        value.source
    }
}

/// Where a rule (or the fixed-folder setting) sends new notes.
///
/// The placeholder prefix is recognized once, when the expression is
/// parsed; the payload is the remainder kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TargetExpression {
    /// `${current}<rest>`
    Current(String),
    /// `${root}<rest>`
    Root(String),
    Literal(String),
}

impl TargetExpression {
    pub fn parse(expression: &str) -> Self {
        if let Some(rest) = expression.strip_prefix(CURRENT_PLACEHOLDER) {
            Self::Current(rest.to_string())
        } else if let Some(rest) = expression.strip_prefix(ROOT_PLACEHOLDER) {
            Self::Root(rest.to_string())
        } else {
            Self::Literal(expression.to_string())
        }
    }

    /// Expands the expression into a root-relative folder path for a
    /// document at `doc_path`. See [`target_expander::expand`].
    pub fn expand(&self, doc_path: &str) -> String {
        target_expander::expand(self, doc_path)
    }
}

impl Default for TargetExpression {
    fn default() -> Self {
        Self::Literal(String::new())
    }
}

impl fmt::Display for TargetExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current(rest) => write!(f, "{CURRENT_PLACEHOLDER}{rest}"),
            Self::Root(rest) => write!(f, "{ROOT_PLACEHOLDER}{rest}"),
            Self::Literal(path) => f.write_str(path),
        }
    }
}

impl From<String> for TargetExpression {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for TargetExpression {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<TargetExpression> for String {
    fn from(value: TargetExpression) -> Self {
        value.to_string()
    }
}

/// A placement rule: documents whose path matches `pattern` go to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    pub pattern: PathPattern,
    pub target: TargetExpression,
}

impl Rule {
    pub fn new(pattern: &str, target: &str) -> Self {
        Self {
            pattern: PathPattern::parse(pattern),
            target: TargetExpression::parse(target),
        }
    }

    /// The default `/ -> /` rule that keeps every search terminating.
    pub fn root() -> Self {
        Self::new("/", "/")
    }
}

/// Insertion-ordered rules; later rules take precedence over earlier ones.
///
/// Every constructor except [`RuleSet::from_vec_unchecked`] guarantees a
/// rule with the `/` pattern is present, so [`RuleSet::find`] always
/// produces a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Rule>", into = "Vec<Rule>")]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Builds a rule set, prepending the root rule when it is missing.
    ///
    /// The injected rule is placed first so it has the lowest precedence.
    pub fn new(mut rules: Vec<Rule>) -> Self {
        if !rules.iter().any(|rule| rule.pattern.is_root()) {
            tracing::debug!("Rule set has no root rule, injecting '/: /'");
            rules.insert(0, Rule::root());
        }
        Self { rules }
    }

    /// Builds a rule set exactly as given, without injecting the root rule.
    pub fn from_vec_unchecked(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn has_root_rule(&self) -> bool {
        self.rules.iter().any(|rule| rule.pattern.is_root())
    }

    /// Highest-precedence rule for `doc_path`. See [`rule_resolver::find`].
    pub fn find(&self, doc_path: &str) -> Option<&Rule> {
        rule_resolver::find(doc_path, &self.rules)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}

impl From<RuleSet> for Vec<Rule> {
    fn from(set: RuleSet) -> Self {
        set.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_parse_normalizes_slashes() {
        assert_eq!(PathPattern::parse("projects/").as_str(), "/projects");
        assert_eq!(PathPattern::parse("//projects").as_str(), "/projects");
        assert_eq!(PathPattern::parse("").as_str(), "/");
        assert!(PathPattern::parse("///").is_root());
    }

    #[test]
    fn test_pattern_segments() {
        let pattern = PathPattern::parse("/projects/${*}");
        assert_eq!(
            pattern.segments(),
            &[
                PatternSegment::Literal(String::new()),
                PatternSegment::Literal("projects".to_string()),
                PatternSegment::Wildcard,
            ]
        );
    }

    #[test]
    fn test_target_parse_placeholders() {
        assert_eq!(
            TargetExpression::parse("${current}/drafts"),
            TargetExpression::Current("/drafts".to_string())
        );
        assert_eq!(
            TargetExpression::parse("${root}/inbox"),
            TargetExpression::Root("/inbox".to_string())
        );
        assert_eq!(
            TargetExpression::parse("archive/${current}"),
            TargetExpression::Literal("archive/${current}".to_string())
        );
    }

    #[test]
    fn test_target_display_restores_text() {
        for text in ["${current}/drafts", "${root}", "/archive", ""] {
            assert_eq!(TargetExpression::parse(text).to_string(), text);
        }
    }

    #[test]
    fn test_rule_set_injects_root_rule_first() {
        let set = RuleSet::new(vec![Rule::new("/projects/${*}", "/archive")]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.rules()[0], Rule::root());
        assert!(set.has_root_rule());
    }

    #[test]
    fn test_rule_set_keeps_existing_root_rule() {
        let set = RuleSet::new(vec![Rule::new("/", "/inbox"), Rule::new("/a", "/b")]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.rules()[0].target.to_string(), "/inbox");
    }

    #[test]
    fn test_unchecked_rule_set_can_lack_root_rule() {
        let set = RuleSet::from_vec_unchecked(vec![Rule::new("/a", "/b")]);
        assert!(!set.has_root_rule());
        assert!(set.find("/c").is_none());
    }

    #[test]
    fn test_default_rule_set_is_root_only() {
        let set = RuleSet::default();
        assert_eq!(set.rules(), &[Rule::root()]);
        assert_eq!(set.find("/any/deep/path.md"), Some(&Rule::root()));
    }

    #[test]
    fn test_rule_yaml_shape() {
        let set = RuleSet::new(vec![Rule::new("/projects/${*}", "${current}/drafts")]);
        let yaml = serde_yaml_ng::to_string(&set).unwrap();
        let reloaded: RuleSet = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(reloaded, set);

        let loaded: RuleSet =
            serde_yaml_ng::from_str("- pattern: projects\n  target: \"${root}/p\"\n").unwrap();
        assert!(loaded.has_root_rule());
        assert_eq!(loaded.rules()[1].pattern.as_str(), "/projects");
        assert_eq!(loaded.rules()[1].target, TargetExpression::Root("/p".to_string()));
    }
}
