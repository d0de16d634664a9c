//! Expansion of target expressions into root-relative folder paths.

use crate::models::TargetExpression;

use super::path_util::dirname;

/// Expands `target` for a document at `doc_path`.
///
/// `${current}` becomes the document's directory and `${root}` is dropped;
/// the remainder is appended verbatim. A document directly under `/` has
/// the empty string as its directory, so `${current}/x` never doubles the
/// slash. One leading `/` is then stripped,
/// because vault lookups take root-relative paths, and an empty result
/// becomes `/`, the vault root.
pub fn expand(target: &TargetExpression, doc_path: &str) -> String {
    let joined = match target {
        TargetExpression::Current(rest) => match dirname(doc_path) {
            "/" => rest.clone(),
            dir => format!("{}{}", dir, rest),
        },
        TargetExpression::Root(rest) => rest.clone(),
        TargetExpression::Literal(path) => path.clone(),
    };

    root_relative(&joined)
}

fn root_relative(path: &str) -> String {
    let stripped = path.strip_prefix('/').unwrap_or(path);
    if stripped.is_empty() {
        "/".to_string()
    } else {
        stripped.to_string()
    }
}
