//! Path segment helpers shared by the matcher, resolver and expander.
//!
//! Vault paths are always `/`-delimited strings regardless of the host
//! platform, so these helpers work on `&str` rather than `Utf8Path`.

/// Returns `path` with its last `/`-delimited segment removed.
///
/// Follows POSIX `dirname` semantics:
///
/// ```
/// use note_placer::services::path_util::dirname;
///
/// assert_eq!(dirname("projects/note.md"), "projects");
/// assert_eq!(dirname("/projects"), "/");
/// assert_eq!(dirname("/"), "/");
/// assert_eq!(dirname("note.md"), ".");
/// ```
pub fn dirname(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        // Nothing but slashes
        return "/";
    }

    match trimmed.rfind('/') {
        None => ".",
        Some(idx) => {
            let parent = trimmed[..idx].trim_end_matches('/');
            if parent.is_empty() { "/" } else { parent }
        }
    }
}

/// Ensures `path` starts with exactly one `/`.
pub fn normalize_leading_slash(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// Whether `dirname` can reduce `path` any further.
pub fn is_irreducible(path: &str) -> bool {
    dirname(path) == path
}
