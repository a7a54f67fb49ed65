//! Detect top-level keys defined more than once.
//!
//! JSON parsers keep only the last definition, so every earlier one is
//! silently dead data. This rule works on the raw key scan rather than the
//! parsed table, because parsing already collapsed the duplicates.

use std::collections::HashMap;

use crate::dictionary::{DictContext, DictLocation, parser::ScannedKey};
use crate::issues::DuplicateKeyIssue;

/// Report every redefinition of an already seen key.
///
/// The issue points at the redefinition site and notes the line of the
/// first definition.
pub fn check_duplicate_keys(file_path: &str, scanned: &[ScannedKey]) -> Vec<DuplicateKeyIssue> {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut issues = Vec::new();

    for key in scanned {
        match first_seen.get(key.key.as_str()) {
            Some(&first_line) => {
                issues.push(DuplicateKeyIssue {
                    context: DictContext::new(
                        DictLocation::new(file_path, key.line, key.col),
                        key.key.clone(),
                        "",
                        key.source_line.clone(),
                    ),
                    first_line,
                });
            }
            None => {
                first_seen.insert(key.key.as_str(), key.line);
            }
        }
    }

    issues.sort_by(|a, b| {
        a.context
            .location
            .line
            .cmp(&b.context.location.line)
            .then_with(|| a.context.key.cmp(&b.context.key))
    });
    issues
}
