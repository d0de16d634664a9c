//! Services module - the placement engine.
//!
//! Pure logic with no I/O of its own; vault access goes through the
//! [`Vault`](crate::vault::Vault) collaborator.
//!
//! # Components
//!
//! - [`path_util`]: `dirname` and leading-slash normalization on `/`-delimited vault paths
//! - [`rule_matcher`]: segment-wise matching of a path against a [`PathPattern`](crate::models::PathPattern)
//! - [`rule_resolver`]: highest-precedence rule for a path, walking up the directory tree
//! - [`target_expander`]: `${current}` / `${root}` expansion into root-relative folder paths
//! - [`rule_text`]: the `pattern: target` line format used to edit rules
//! - [`PlacementPolicy`]: the mode state machine with vault-root fallback
//!
//! # Flow
//!
//! ```text
//! PlacementPolicy::resolve(doc_path)
//!   -> [rules mode] rule_resolver::find(doc_path, rules)
//!   -> target_expander::expand(rule.target, doc_path)
//!   -> Vault::lookup(folder)
//!   -> folder, or vault root + one Notifier::warn
//! ```

pub mod path_util;
pub mod placement;
pub mod rule_matcher;
pub mod rule_resolver;
pub mod rule_text;
pub mod target_expander;

pub use placement::{PlacementIssue, PlacementPolicy};
pub use rule_text::{RuleTextParser, format_rules};
