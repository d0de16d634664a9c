//! Segment-wise matching of a concrete vault path against a rule pattern.

use crate::models::{PathPattern, PatternSegment};

use super::path_util::normalize_leading_slash;

/// Returns true if `candidate` matches `pattern` segment for segment.
///
/// Patterns are not prefixes: the candidate must have exactly as many
/// segments as the pattern. A `${*}` segment matches any single candidate
/// segment, every other segment must be byte-equal. Trailing slashes on
/// the candidate are dropped, as they are when a pattern is parsed.
pub fn matches(candidate: &str, pattern: &PathPattern) -> bool {
    let candidate = normalize_leading_slash(candidate.trim_end_matches('/'));
    let segments = pattern.segments();

    if candidate.split('/').count() != segments.len() {
        return false;
    }

    candidate
        .split('/')
        .zip(segments)
        .all(|(part, segment)| match segment {
            PatternSegment::Wildcard => true,
            PatternSegment::Literal(literal) => literal == part,
        })
}

/// Convenience wrapper that parses `pattern` before matching.
pub fn matches_str(candidate: &str, pattern: &str) -> bool {
    matches(candidate, &PathPattern::parse(pattern))
}
