//! The textual rule editing format: one `pattern: target` rule per line.

use regex::Regex;

use crate::models::{Rule, RuleSet};

/// Parser for the rule editing format.
///
/// Each line must split on `:` into exactly two parts that are non-empty
/// once trimmed. Anything else is dropped, including patterns that contain
/// a literal colon. The `/: /` rule is injected when the text has none.
pub struct RuleTextParser {
    /// `pattern: target` with exactly one colon
    line_pattern: Regex,
}

impl RuleTextParser {
    pub fn new() -> Self {
        Self {
            line_pattern: Regex::new(r"^([^:]*):([^:]*)$").expect("Invalid rule line regex"),
        }
    }

    /// Parses `text` into a rule set, in line order.
    pub fn parse(&self, text: &str) -> RuleSet {
        let mut rules = Vec::new();

        for (index, line) in text.lines().enumerate() {
            match self.parse_line(line) {
                Some(rule) => rules.push(rule),
                None if line.trim().is_empty() => {}
                None => tracing::debug!("Dropping malformed rule on line {}: {:?}", index + 1, line),
            }
        }

        RuleSet::new(rules)
    }

    /// Parses a single line, or `None` if it is not a valid rule.
    pub fn parse_line(&self, line: &str) -> Option<Rule> {
        let captures = self.line_pattern.captures(line)?;
        let pattern = captures.get(1)?.as_str().trim();
        let target = captures.get(2)?.as_str().trim();

        if pattern.is_empty() || target.is_empty() {
            return None;
        }

        Some(Rule::new(pattern, target))
    }
}

impl Default for RuleTextParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders rules back into the editing format, one per line.
pub fn format_rules(rules: &RuleSet) -> String {
    rules
        .rules()
        .iter()
        .map(|rule| format!("{}: {}\n", rule.pattern, rule.target))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_both_halves() {
        let parser = RuleTextParser::new();
        let rule = parser.parse_line("  /projects/${*}  :   ${current}/drafts ").unwrap();
        assert_eq!(rule, Rule::new("/projects/${*}", "${current}/drafts"));
    }

    #[test]
    fn test_parse_keeps_line_order_and_injects_root() {
        let parser = RuleTextParser::new();
        let set = parser.parse("/projects/${*}: /archive\n/journal: ${root}/daily\n");

        assert_eq!(set.len(), 3);
        assert_eq!(set.rules()[0], Rule::root());
        assert_eq!(set.rules()[1].pattern.as_str(), "/projects/${*}");
        assert_eq!(set.rules()[2].pattern.as_str(), "/journal");
    }

    #[test]
    fn test_parse_does_not_duplicate_root_rule() {
        let parser = RuleTextParser::new();
        let set = parser.parse("/: /inbox\n/projects: /p\n");
        assert_eq!(set.len(), 2);
        assert_eq!(set.rules()[0].target.to_string(), "/inbox");
    }

    #[test]
    fn test_malformed_lines_are_dropped() {
        let parser = RuleTextParser::new();
        let set = parser.parse(
            "no colon here\n: /missing-pattern\n/missing-target:   \nC:/windows: /x\n\n/ok: /fine\n",
        );

        assert_eq!(set.len(), 2);
        assert_eq!(set.rules()[1], Rule::new("/ok", "/fine"));
    }

    #[test]
    fn test_empty_text_yields_root_rule_only() {
        let parser = RuleTextParser::new();
        assert_eq!(parser.parse("").rules(), &[Rule::root()]);
    }

    #[test]
    fn test_format_rules() {
        let parser = RuleTextParser::new();
        let set = parser.parse("/projects/${*}: /archive\n");
        assert_eq!(format_rules(&set), "/: /\n/projects/${*}: /archive\n");
        assert_eq!(parser.parse(&format_rules(&set)), set);
    }
}
