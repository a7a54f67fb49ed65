//! Detect entries carrying an empty string for a language code.
//!
//! Empty values are legal and render as a blank, so this is a warning,
//! not an error. They almost always mean a translation was skipped.

use crate::dictionary::Dictionary;
use crate::issues::EmptyValueIssue;

/// Report every (key, locale) pair whose stored value is the empty string.
pub fn check_empty_values(dict: &Dictionary) -> Vec<EmptyValueIssue> {
    let mut issues = Vec::new();

    for entry in dict.entries() {
        for lang in entry.langs() {
            if entry.get(lang) == Some("") {
                issues.push(EmptyValueIssue {
                    context: entry.context_with(""),
                    locale: lang.to_string(),
                });
            }
        }
    }

    issues.sort_by(|a, b| {
        a.context
            .location
            .line
            .cmp(&b.context.location.line)
            .then_with(|| a.context.key.cmp(&b.context.key))
            .then_with(|| a.locale.cmp(&b.locale))
    });
    issues
}
