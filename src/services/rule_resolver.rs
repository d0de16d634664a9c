//! Finding the rule that governs a document path.

use crate::models::Rule;

use super::path_util::{dirname, is_irreducible, normalize_leading_slash};
use super::rule_matcher;

/// Finds the highest-precedence rule for `doc_path`.
///
/// Rules are scanned from the most recently inserted to the oldest, so a
/// later rule beats an earlier one matching at the same level. When nothing
/// matches at the current level the search moves to the parent directory,
/// until a rule matches or the path cannot be reduced any further.
///
/// `doc_path` gets a leading `/` first, so the walk always ends at `/` and a
/// `/` rule in `rules` guarantees `Some`.
pub fn find<'a>(doc_path: &str, rules: &'a [Rule]) -> Option<&'a Rule> {
    let normalized = normalize_leading_slash(doc_path);
    let mut current = normalized.as_str();

    loop {
        if let Some(rule) = rules
            .iter()
            .rev()
            .find(|rule| rule_matcher::matches(current, &rule.pattern))
        {
            tracing::trace!(path = current, pattern = %rule.pattern, "Rule matched");
            return Some(rule);
        }

        if is_irreducible(current) {
            tracing::debug!(doc_path, "No rule matched up to the root");
            return None;
        }
        current = dirname(current);
    }
}
